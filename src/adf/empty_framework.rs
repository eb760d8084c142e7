use super::{AbstractDialecticalFramework, AcceptanceCondition, AdfError, LinkSet};
use crate::{
    link::{Link, LinkType},
    utils::LabelType,
};
use anyhow::Result;
use std::{iter, marker::PhantomData};

/// The framework with no argument and no link.
///
/// Empty frameworks carry no data, so building one is free.
///
/// # Example
///
/// ```
/// # use crustadf::adf::{self, AbstractDialecticalFramework, EmptyFramework};
/// # use crustadf::link::LinkKind;
/// let framework: EmptyFramework<&str, Vec<&str>, LinkKind> = adf::empty();
/// assert_eq!(0, framework.size());
/// assert!(framework.bipolar());
/// assert!(framework.acceptance_condition(&"a").is_err());
/// ```
pub struct EmptyFramework<T, C, L> {
    _phantom: PhantomData<fn() -> (T, C, L)>,
}

impl<T, C, L> EmptyFramework<T, C, L> {
    /// Returns the empty framework.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T, C, L> Default for EmptyFramework<T, C, L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the empty framework.
pub fn empty<T, C, L>() -> EmptyFramework<T, C, L> {
    EmptyFramework::new()
}

impl<T, C, L> AbstractDialecticalFramework<T, C, L> for EmptyFramework<T, C, L>
where
    T: LabelType,
    C: AcceptanceCondition<T>,
    L: LinkType,
{
    fn iter_arguments(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(iter::empty())
    }

    fn size(&self) -> usize {
        0
    }

    fn contains(&self, _argument: &T) -> bool {
        false
    }

    fn acceptance_condition(&self, argument: &T) -> Result<&C> {
        Err(AdfError::NoSuchArgument(argument.to_string()).into())
    }

    fn iter_links(&self) -> Box<dyn Iterator<Item = Link<T, L>> + '_> {
        Box::new(iter::empty())
    }

    fn link(&self, parent: &T, _child: &T) -> Result<Link<T, L>> {
        Err(AdfError::NoSuchArgument(parent.to_string()).into())
    }

    fn links_to(&self, child: &T) -> Result<LinkSet<'_, T, C, L>> {
        Err(AdfError::NoSuchArgument(child.to_string()).into())
    }

    fn links_from(&self, parent: &T) -> Result<LinkSet<'_, T, C, L>> {
        Err(AdfError::NoSuchArgument(parent.to_string()).into())
    }

    fn k_bipolar(&self) -> usize {
        0
    }
}
