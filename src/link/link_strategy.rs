use super::LinkType;

/// The trait for link type computers.
///
/// A strategy computes the type of the link between a parent and a child, given the acceptance condition of the child.
/// Strategies must be pure: computing twice the type of the same link must give the same result.
/// They may be called concurrently, and possibly more than once for the same link.
///
/// Any closure taking a parent, a child and an acceptance condition and returning a link type is a strategy.
pub trait LinkStrategy<T, C, L>: Send + Sync
where
    L: LinkType,
{
    /// Computes the type of the link from `parent` to `child`.
    fn compute(&self, parent: &T, child: &T, child_acceptance_condition: &C) -> L;
}

impl<T, C, L, F> LinkStrategy<T, C, L> for F
where
    L: LinkType,
    F: Fn(&T, &T, &C) -> L + Send + Sync,
{
    fn compute(&self, parent: &T, child: &T, child_acceptance_condition: &C) -> L {
        self(parent, child, child_acceptance_condition)
    }
}

/// A strategy giving the same type to all the links.
///
/// # Example
///
/// ```
/// # use crustadf::link::{ConstantLinkStrategy, LinkKind, LinkStrategy};
/// let strategy = ConstantLinkStrategy::new(LinkKind::Supporting);
/// assert_eq!(LinkKind::Supporting, strategy.compute(&"a", &"b", &vec!["a"]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstantLinkStrategy<L>
where
    L: LinkType,
{
    link_type: L,
}

impl<L> ConstantLinkStrategy<L>
where
    L: LinkType,
{
    /// Builds a strategy always returning the given type.
    pub fn new(link_type: L) -> Self {
        Self { link_type }
    }
}

impl<T, C, L> LinkStrategy<T, C, L> for ConstantLinkStrategy<L>
where
    L: LinkType,
{
    fn compute(&self, _parent: &T, _child: &T, _child_acceptance_condition: &C) -> L {
        self.link_type
    }
}
