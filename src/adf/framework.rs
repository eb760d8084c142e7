use super::{
    node_index::{Direction, NodeIndex},
    AcceptanceCondition,
};
use crate::{
    link::{Link, LinkType},
    utils::LabelType,
};
use anyhow::Result;
use std::{collections::HashSet, sync::Arc};

/// The read interface of Abstract Dialectical Frameworks.
///
/// Frameworks are immutable: all the operations of this trait are reads.
/// However, the links of lazy frameworks are computed on their first query,
/// so some operations may call the link strategy; they are documented as such.
///
/// Frameworks are safe to query from several threads at the same time,
/// including when a link is queried for the first time by concurrent readers.
///
/// Operations taking an argument return an error if the argument is not part of the framework.
pub trait AbstractDialecticalFramework<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    /// Iterates over the arguments of the framework.
    fn iter_arguments(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Returns the set of the arguments of the framework.
    fn arguments(&self) -> HashSet<&T> {
        self.iter_arguments().collect()
    }

    /// Returns the number of arguments.
    fn size(&self) -> usize;

    /// Returns `true` if and only if the argument belongs to the framework.
    fn contains(&self, argument: &T) -> bool;

    /// Returns the acceptance condition of an argument.
    fn acceptance_condition(&self, argument: &T) -> Result<&C>;

    /// Iterates over all the links of the framework.
    ///
    /// Each link is resolved when it is reached by the iterator.
    /// Consuming the whole iterator thus computes all the links that were not computed yet.
    fn iter_links(&self) -> Box<dyn Iterator<Item = Link<T, L>> + '_>;

    /// Returns the set of all the links.
    ///
    /// This computes all the links that were not computed yet.
    fn links(&self) -> HashSet<Link<T, L>> {
        self.iter_links().collect()
    }

    /// Returns the link from `parent` to `child`, computing it if needed.
    ///
    /// An error is returned if one of the arguments is undefined, or if `child` does not depend on `parent`.
    fn link(&self, parent: &T, child: &T) -> Result<Link<T, L>>;

    /// Returns a view over the links targeting `child`.
    fn links_to(&self, child: &T) -> Result<LinkSet<'_, T, C, L>>;

    /// Returns a view over the links coming from `parent`.
    fn links_from(&self, parent: &T) -> Result<LinkSet<'_, T, C, L>>;

    /// Returns the parents of `child`, i.e. the dependencies of its acceptance condition.
    ///
    /// Links are not computed by this function.
    fn parents<'s>(&'s self, child: &T) -> Result<HashSet<&'s T>>
    where
        C: 's,
        L: 's,
    {
        Ok(self.links_to(child)?.iter_arguments().collect())
    }

    /// Returns the children of `parent`, i.e. the arguments whose acceptance conditions depend on it.
    ///
    /// Links are not computed by this function.
    fn children<'s>(&'s self, parent: &T) -> Result<HashSet<&'s T>>
    where
        C: 's,
        L: 's,
    {
        Ok(self.links_from(parent)?.iter_arguments().collect())
    }

    /// Returns the number of parents of an argument.
    fn incoming_degree(&self, argument: &T) -> Result<usize> {
        Ok(self.links_to(argument)?.len())
    }

    /// Returns the number of children of an argument.
    fn outgoing_degree(&self, argument: &T) -> Result<usize> {
        Ok(self.links_from(argument)?.len())
    }

    /// Returns the number of non-bipolar links.
    ///
    /// The first call computes all the links that were not computed yet; the result is cached.
    fn k_bipolar(&self) -> usize;

    /// Returns `true` if and only if all the links are bipolar.
    ///
    /// See [`k_bipolar`](AbstractDialecticalFramework::k_bipolar).
    fn bipolar(&self) -> bool {
        self.k_bipolar() == 0
    }
}

/// A framework shared between threads and extended frameworks.
pub type SharedFramework<T, C, L> = Arc<dyn AbstractDialecticalFramework<T, C, L> + Send + Sync>;

/// A read-only view over the links targeting or coming from an argument.
///
/// The view does not copy the links: it reads them from the framework, computing them if needed.
/// Membership tests look for the link in the framework and compare its type,
/// so they may compute the link under test.
pub struct LinkSet<'a, T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    direction: Direction,
    // (index, node) pairs; they must be disjoint since a link belongs to a single index
    segments: Vec<(&'a NodeIndex<T, C, L>, usize)>,
}

impl<'a, T, C, L> LinkSet<'a, T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    pub(crate) fn empty_incoming() -> Self {
        Self {
            direction: Direction::Incoming,
            segments: Vec::new(),
        }
    }

    pub(crate) fn empty_outgoing() -> Self {
        Self {
            direction: Direction::Outgoing,
            segments: Vec::new(),
        }
    }

    pub(crate) fn incoming(index: &'a NodeIndex<T, C, L>, node: usize) -> Self {
        Self::empty_incoming().with_segment(index, node)
    }

    pub(crate) fn outgoing(index: &'a NodeIndex<T, C, L>, node: usize) -> Self {
        Self::empty_outgoing().with_segment(index, node)
    }

    pub(crate) fn with_segment(mut self, index: &'a NodeIndex<T, C, L>, node: usize) -> Self {
        self.segments.push((index, node));
        self
    }

    /// Returns the number of links in this view.
    pub fn len(&self) -> usize {
        self.segments
            .iter()
            .map(|(index, node)| index.adjacency(*node, self.direction).len())
            .sum()
    }

    /// Returns `true` if and only if this view has no link.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the links, computing them if needed.
    pub fn iter(&self) -> impl Iterator<Item = Link<T, L>> + 'a {
        let direction = self.direction;
        self.segments
            .clone()
            .into_iter()
            .flat_map(move |(index, node)| {
                index
                    .adjacency(node, direction)
                    .values()
                    .map(move |slot| index.link(*slot))
            })
    }

    /// Iterates over the other ends of the links (the parents for incoming links, the children for outgoing ones).
    ///
    /// Links are not computed by this function.
    pub fn iter_arguments(&self) -> impl Iterator<Item = &'a T> + 'a {
        let direction = self.direction;
        self.segments
            .clone()
            .into_iter()
            .flat_map(move |(index, node)| {
                index
                    .adjacency(node, direction)
                    .keys()
                    .map(move |id| index.label(*id))
            })
    }

    /// Returns `true` if and only if the link belongs to this view, with the same type.
    ///
    /// The link is looked up in the framework; if it was not computed yet, it is computed by this call.
    pub fn contains(&self, link: &Link<T, L>) -> bool {
        let (anchor, other) = match self.direction {
            Direction::Incoming => (link.child(), link.parent()),
            Direction::Outgoing => (link.parent(), link.child()),
        };
        self.segments.iter().any(|(index, node)| {
            if index.label(*node) != anchor {
                return false;
            }
            index
                .id_of(other)
                .and_then(|other_id| index.adjacency(*node, self.direction).get(&other_id))
                .map(|slot| index.resolve(*slot) == link.link_type())
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adf::Builder,
        link::{ConstantLinkStrategy, LinkKind},
    };

    type Labels<'a> = Vec<&'a &'static str>;

    fn sorted_parents_and_children<'a, F>(
        adf: &'a F,
        argument: &&'static str,
    ) -> (Labels<'a>, Labels<'a>)
    where
        F: AbstractDialecticalFramework<&'static str, Vec<&'static str>, LinkKind> + ?Sized,
    {
        let mut parents = adf.parents(argument).unwrap().into_iter().collect::<Vec<_>>();
        parents.sort_unstable();
        let mut children = adf.children(argument).unwrap().into_iter().collect::<Vec<_>>();
        children.sort_unstable();
        (parents, children)
    }

    #[test]
    fn test_parents_and_children_through_generic_and_dyn_frameworks() {
        let mut builder = Builder::new();
        builder
            .add_argument("a", vec!["a"])
            .add_argument("b", vec!["a"])
            .add_argument("c", vec!["a", "b"])
            .lazy(ConstantLinkStrategy::new(LinkKind::Attacking));
        let adf = builder.build().unwrap();
        assert_eq!(
            (vec![&"a"], vec![&"a", &"b", &"c"]),
            sorted_parents_and_children(&adf, &"a")
        );
        let shared: SharedFramework<&'static str, Vec<&'static str>, LinkKind> = Arc::new(adf);
        assert_eq!(
            (vec![&"a", &"b"], vec![]),
            sorted_parents_and_children(shared.as_ref(), &"c")
        );
        assert!(shared.parents(&"d").is_err());
        assert!(shared.children(&"d").is_err());
    }
}
