use std::{fmt::Debug, hash::Hash};
use strum_macros::{Display, EnumIter, EnumString};

/// The trait for link classifications.
///
/// A link type describes how the acceptance condition of the child of a link treats its parent.
/// The only requirement of the framework is to know if a link is bipolar (i.e. the child is monotone or antimonotone in the parent) or not.
pub trait LinkType: Copy + Debug + Eq + Hash + Send + Sync {
    /// Returns `true` if and only if the link is neither simply supporting nor simply attacking.
    fn is_non_bipolar(&self) -> bool;

    /// Returns `true` if and only if the link is bipolar.
    fn is_bipolar(&self) -> bool {
        !self.is_non_bipolar()
    }
}

/// The usual classification of ADF links.
///
/// A link is attacking if the child acceptance condition is antimonotone in the parent,
/// supporting if it is monotone, redundant if it is both, and dependent if it is neither.
/// Only dependent links are non-bipolar.
///
/// # Example
///
/// ```
/// # use crustadf::link::{LinkKind, LinkType};
/// assert!(LinkKind::Dependent.is_non_bipolar());
/// assert!(LinkKind::Redundant.is_attacking() && LinkKind::Redundant.is_supporting());
/// assert_eq!("supporting", LinkKind::Supporting.to_string());
/// assert_eq!(LinkKind::Attacking, "attacking".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum LinkKind {
    /// The child is antimonotone in the parent.
    Attacking,
    /// The child is monotone in the parent.
    Supporting,
    /// The child is neither monotone nor antimonotone in the parent.
    Dependent,
    /// The child is both monotone and antimonotone in the parent.
    Redundant,
}

impl LinkKind {
    /// Returns `true` for attacking and redundant links.
    pub fn is_attacking(&self) -> bool {
        matches!(self, LinkKind::Attacking | LinkKind::Redundant)
    }

    /// Returns `true` for supporting and redundant links.
    pub fn is_supporting(&self) -> bool {
        matches!(self, LinkKind::Supporting | LinkKind::Redundant)
    }

    /// Returns `true` for dependent links.
    pub fn is_dependent(&self) -> bool {
        matches!(self, LinkKind::Dependent)
    }

    /// Returns `true` for redundant links.
    pub fn is_redundant(&self) -> bool {
        matches!(self, LinkKind::Redundant)
    }
}

impl LinkType for LinkKind {
    fn is_non_bipolar(&self) -> bool {
        !self.is_attacking() && !self.is_supporting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_dependent_is_non_bipolar() {
        let non_bipolar = LinkKind::iter()
            .filter(|k| k.is_non_bipolar())
            .collect::<Vec<LinkKind>>();
        assert_eq!(vec![LinkKind::Dependent], non_bipolar);
    }

    #[test]
    fn test_names() {
        for kind in LinkKind::iter() {
            assert_eq!(kind, kind.to_string().parse::<LinkKind>().unwrap());
        }
        assert!("unknown".parse::<LinkKind>().is_err());
    }
}
