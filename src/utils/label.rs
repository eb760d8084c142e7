use std::{
    collections::HashMap,
    fmt::{Debug, Display},
    hash::Hash,
};

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits allowing their use in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize], [String] and `&'static str` implements [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// A dense index of labels.
///
/// Each label is given a unique identifier, which is its insertion rank.
/// Identifiers are used to address fixed-size tables instead of hash maps of labels.
/// Labels cannot be removed from an index: frameworks using it are immutable.
///
/// # Example
///
/// ```
/// # use crustadf::utils::LabelIndex;
/// let mut index = LabelIndex::default();
/// assert_eq!(0, index.insert("a"));
/// assert_eq!(1, index.insert("b"));
/// assert_eq!(0, index.insert("a"));
/// assert_eq!(2, index.len());
/// assert_eq!(Some(1), index.id_of(&"b"));
/// assert_eq!(&"a", index.label(0));
/// ```
#[derive(Debug, Clone)]
pub struct LabelIndex<T>
where
    T: LabelType,
{
    labels: Vec<T>,
    label_to_id: HashMap<T, usize>,
}

impl<T> Default for LabelIndex<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            label_to_id: HashMap::new(),
        }
    }
}

impl<T> LabelIndex<T>
where
    T: LabelType,
{
    /// Builds an empty index able to store the given number of labels without reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            label_to_id: HashMap::with_capacity(capacity),
        }
    }

    /// Adds a label to this index and returns its identifier.
    ///
    /// If the label is already present, its current identifier is returned and nothing is added.
    pub fn insert(&mut self, label: T) -> usize {
        let next_id = self.labels.len();
        let id = *self.label_to_id.entry(label.clone()).or_insert(next_id);
        if id == next_id {
            self.labels.push(label);
        }
        id
    }

    /// Returns the identifier of a label, or `None` if the label is not indexed.
    pub fn id_of(&self, label: &T) -> Option<usize> {
        self.label_to_id.get(label).copied()
    }

    /// Returns `true` if and only if the label is indexed.
    pub fn contains(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns the label with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no label has such id.
    pub fn label(&self, id: usize) -> &T {
        &self.labels[id]
    }

    /// Returns the number of labels in the index.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if and only if the index has no label.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns an iterator to the labels, in the order of their identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.labels.iter()
    }
}
