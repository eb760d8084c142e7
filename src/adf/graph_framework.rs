use super::{
    node_index::{LinkState, NodeIndex},
    AbstractDialecticalFramework, AcceptanceCondition, AdfError, Builder, LinkSet,
};
use crate::{
    link::{Link, LinkType},
    utils::LabelType,
};
use anyhow::Result;

/// An Abstract Dialectical Framework represented as a graph.
///
/// Each argument maintains its parents and its children, allowing efficient queries at the cost of some memory.
/// Frameworks are built by [`Builder`] objects.
pub struct GraphFramework<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    index: NodeIndex<T, C, L>,
}

impl<T, C, L> GraphFramework<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    pub(crate) fn new(index: NodeIndex<T, C, L>) -> Self {
        Self { index }
    }

    /// Returns a new builder, in provided mode.
    pub fn builder() -> Builder<T, C, L> {
        Builder::new()
    }

    fn node(&self, argument: &T) -> Result<usize> {
        self.index
            .owned_id(argument)
            .ok_or_else(|| AdfError::NoSuchArgument(argument.to_string()).into())
    }

    fn slot(&self, parent: &T, child: &T) -> Result<usize> {
        let child_id = self.node(child)?;
        let parent_id = self.node(parent)?;
        self.index
            .slot_between(parent_id, child_id)
            .ok_or_else(|| {
                AdfError::NoSuchLink {
                    parent: parent.to_string(),
                    child: child.to_string(),
                }
                .into()
            })
    }

    /// Returns the resolution state of the link from `parent` to `child`, without computing it.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustadf::adf::{AbstractDialecticalFramework, Builder, LinkState};
    /// # use crustadf::link::{ConstantLinkStrategy, LinkKind};
    /// let mut builder = Builder::new();
    /// builder
    ///     .add_argument("a", vec![])
    ///     .add_argument("b", vec!["a"])
    ///     .lazy(ConstantLinkStrategy::new(LinkKind::Attacking));
    /// let adf = builder.build().unwrap();
    /// assert_eq!(LinkState::Unresolved, adf.link_state(&"a", &"b").unwrap());
    /// adf.link(&"a", &"b").unwrap();
    /// assert_eq!(LinkState::Resolved(LinkKind::Attacking), adf.link_state(&"a", &"b").unwrap());
    /// ```
    pub fn link_state(&self, parent: &T, child: &T) -> Result<LinkState<L>> {
        Ok(self.index.state(self.slot(parent, child)?))
    }

    /// Returns the number of links whose type is known.
    pub fn resolved_link_count(&self) -> usize {
        self.index.n_resolved()
    }
}

impl<T, C, L> AbstractDialecticalFramework<T, C, L> for GraphFramework<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    fn iter_arguments(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.index.iter_owned())
    }

    fn size(&self) -> usize {
        self.index.n_owned()
    }

    fn contains(&self, argument: &T) -> bool {
        self.index.owned_id(argument).is_some()
    }

    fn acceptance_condition(&self, argument: &T) -> Result<&C> {
        let id = self.node(argument)?;
        self.index
            .acceptance_condition(id)
            .ok_or_else(|| AdfError::NoSuchArgument(argument.to_string()).into())
    }

    fn iter_links(&self) -> Box<dyn Iterator<Item = Link<T, L>> + '_> {
        Box::new(self.index.iter_links())
    }

    fn link(&self, parent: &T, child: &T) -> Result<Link<T, L>> {
        Ok(self.index.link(self.slot(parent, child)?))
    }

    fn links_to(&self, child: &T) -> Result<LinkSet<'_, T, C, L>> {
        Ok(LinkSet::incoming(&self.index, self.node(child)?))
    }

    fn links_from(&self, parent: &T) -> Result<LinkSet<'_, T, C, L>> {
        Ok(LinkSet::outgoing(&self.index, self.node(parent)?))
    }

    fn k_bipolar(&self) -> usize {
        self.index.k_bipolar()
    }
}
