use super::LinkType;
use crate::utils::LabelType;
use std::fmt::Display;

/// A link between two arguments, annotated with its type.
///
/// Links are immutable values; two links are equal if and only if their parents, children and types are.
///
/// # Example
///
/// ```
/// # use crustadf::link::{Link, LinkKind};
/// let link = Link::new("a", "b", LinkKind::Supporting);
/// assert_eq!(&"a", link.parent());
/// assert_eq!(&"b", link.child());
/// assert_eq!("a -[supporting]-> b", link.to_string());
/// assert_ne!(link, Link::new("a", "b", LinkKind::Attacking));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link<T, L>
where
    T: LabelType,
    L: LinkType,
{
    parent: T,
    child: T,
    link_type: L,
}

impl<T, L> Link<T, L>
where
    T: LabelType,
    L: LinkType,
{
    /// Builds a new link.
    pub fn new(parent: T, child: T, link_type: L) -> Self {
        Self {
            parent,
            child,
            link_type,
        }
    }

    /// Returns the parent (source) of the link.
    pub fn parent(&self) -> &T {
        &self.parent
    }

    /// Returns the child (destination) of the link.
    pub fn child(&self) -> &T {
        &self.child
    }

    /// Returns the type of the link.
    pub fn link_type(&self) -> L {
        self.link_type
    }
}

impl<T, L> Display for Link<T, L>
where
    T: LabelType,
    L: LinkType + Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -[{}]-> {}", self.parent, self.link_type, self.child)
    }
}
