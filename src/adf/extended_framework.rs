use super::{
    node_index::NodeIndex, AbstractDialecticalFramework, AcceptanceCondition, AdfError, LinkSet,
    SharedFramework,
};
use crate::{
    link::{Link, LinkType},
    utils::LabelType,
};
use anyhow::Result;

/// A framework made of another framework and some new arguments.
///
/// The extended framework (the base) is shared, not copied: the memory used by an extended framework
/// is proportional to the new arguments and their links.
/// The new arguments may depend on the arguments of the base, but not the other way round.
/// Queries about the arguments of the base are delegated to it,
/// except that the children of a base argument include the new arguments depending on it.
///
/// Extended frameworks are built by [`Builder::build_extension`](super::Builder::build_extension).
/// Since they can be shared themselves, extensions can be stacked.
///
/// # Example
///
/// ```
/// # use crustadf::adf::{AbstractDialecticalFramework, Builder, SharedFramework};
/// # use crustadf::link::{ConstantLinkStrategy, LinkKind};
/// # use std::sync::Arc;
/// let mut builder: Builder<&str, Vec<&str>, LinkKind> = Builder::new();
/// builder
///     .add_argument("a", vec![])
///     .eager(ConstantLinkStrategy::new(LinkKind::Attacking));
/// let base: SharedFramework<&str, Vec<&str>, LinkKind> = Arc::new(builder.build().unwrap());
/// let mut delta = Builder::new();
/// delta
///     .add_argument("b", vec!["a"])
///     .eager(ConstantLinkStrategy::new(LinkKind::Supporting));
/// let adf = delta.build_extension(Arc::clone(&base)).unwrap();
/// assert_eq!(2, adf.size());
/// assert_eq!(LinkKind::Supporting, adf.link(&"a", &"b").unwrap().link_type());
/// assert!(adf.children(&"a").unwrap().contains(&"b"));
/// assert!(base.children(&"a").unwrap().is_empty());
/// ```
pub struct ExtendedFramework<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    base: SharedFramework<T, C, L>,
    delta: NodeIndex<T, C, L>,
}

impl<T, C, L> ExtendedFramework<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    pub(crate) fn new(base: SharedFramework<T, C, L>, delta: NodeIndex<T, C, L>) -> Self {
        Self { base, delta }
    }

    /// Returns the extended framework.
    pub fn base(&self) -> &SharedFramework<T, C, L> {
        &self.base
    }

    /// Returns the number of arguments that are not part of the base.
    pub fn delta_size(&self) -> usize {
        self.delta.n_owned()
    }

    /// Returns the number of links that are not part of the base.
    pub fn delta_link_count(&self) -> usize {
        self.delta.n_slots()
    }

    fn no_such_argument(argument: &T) -> anyhow::Error {
        AdfError::NoSuchArgument(argument.to_string()).into()
    }
}

impl<T, C, L> AbstractDialecticalFramework<T, C, L> for ExtendedFramework<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    fn iter_arguments(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.base.iter_arguments().chain(self.delta.iter_owned()))
    }

    fn size(&self) -> usize {
        self.base.size() + self.delta.n_owned()
    }

    fn contains(&self, argument: &T) -> bool {
        self.delta.owned_id(argument).is_some() || self.base.contains(argument)
    }

    fn acceptance_condition(&self, argument: &T) -> Result<&C> {
        match self.delta.owned_id(argument) {
            Some(id) => self
                .delta
                .acceptance_condition(id)
                .ok_or_else(|| Self::no_such_argument(argument)),
            None => self.base.acceptance_condition(argument),
        }
    }

    fn iter_links(&self) -> Box<dyn Iterator<Item = Link<T, L>> + '_> {
        Box::new(self.base.iter_links().chain(self.delta.iter_links()))
    }

    fn link(&self, parent: &T, child: &T) -> Result<Link<T, L>> {
        if !self.contains(parent) {
            return Err(Self::no_such_argument(parent));
        }
        let child_id = match self.delta.owned_id(child) {
            Some(id) => id,
            None if self.delta.owned_id(parent).is_some() => {
                if !self.base.contains(child) {
                    return Err(Self::no_such_argument(child));
                }
                return Err(AdfError::NoSuchLink {
                    parent: parent.to_string(),
                    child: child.to_string(),
                }
                .into());
            }
            None => return self.base.link(parent, child),
        };
        self.delta
            .id_of(parent)
            .and_then(|parent_id| self.delta.slot_between(parent_id, child_id))
            .map(|slot| self.delta.link(slot))
            .ok_or_else(|| {
                AdfError::NoSuchLink {
                    parent: parent.to_string(),
                    child: child.to_string(),
                }
                .into()
            })
    }

    fn links_to(&self, child: &T) -> Result<LinkSet<'_, T, C, L>> {
        match self.delta.owned_id(child) {
            Some(id) => Ok(LinkSet::incoming(&self.delta, id)),
            None => self.base.links_to(child),
        }
    }

    fn links_from(&self, parent: &T) -> Result<LinkSet<'_, T, C, L>> {
        if let Some(id) = self.delta.owned_id(parent) {
            return Ok(LinkSet::outgoing(&self.delta, id));
        }
        let from_base = self.base.links_from(parent)?;
        Ok(match self.delta.id_of(parent) {
            Some(foreign_id) => from_base.with_segment(&self.delta, foreign_id),
            None => from_base,
        })
    }

    fn k_bipolar(&self) -> usize {
        self.base.k_bipolar() + self.delta.k_bipolar()
    }
}
