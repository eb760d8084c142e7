use crate::utils::LabelType;
use std::{collections::HashSet, sync::Arc};

/// The trait for acceptance conditions.
///
/// The concrete syntax and semantics of acceptance conditions are out of the scope of this crate.
/// The only information a framework needs is the set of arguments a condition syntactically depends on;
/// these arguments are the parents of the argument owning the condition.
/// An acceptance condition may depend on the argument it belongs to.
///
/// Sets and vectors of labels are acceptance conditions depending on their elements.
pub trait AcceptanceCondition<T>
where
    T: LabelType,
{
    /// Returns the arguments this condition depends on.
    fn dependencies(&self) -> HashSet<T>;
}

impl<T> AcceptanceCondition<T> for HashSet<T>
where
    T: LabelType,
{
    fn dependencies(&self) -> HashSet<T> {
        self.clone()
    }
}

impl<T> AcceptanceCondition<T> for Vec<T>
where
    T: LabelType,
{
    fn dependencies(&self) -> HashSet<T> {
        self.iter().cloned().collect()
    }
}

impl<T, C> AcceptanceCondition<T> for Arc<C>
where
    T: LabelType,
    C: AcceptanceCondition<T> + ?Sized,
{
    fn dependencies(&self) -> HashSet<T> {
        self.as_ref().dependencies()
    }
}
