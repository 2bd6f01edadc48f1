//! Operation variables: single-value wrappers in an ordered set.
//!
//! The element payload is external to this crate and appears as the generic
//! parameter `E`; the codec only requires it to be serde-serializable.
//! Absence of a whole set ("no set" as opposed to "empty set") is carried by
//! `Option<OperationVariableSet<E>>` at the embedding site.

/// One input/output slot of an operation, wrapping exactly one element value.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationVariable<E> {
    /// The wrapped element
    pub value: E,
}

impl<E> OperationVariable<E> {
    pub fn new(value: E) -> Self {
        OperationVariable { value }
    }
}

/// Ordered collection of operation variables for one operation call.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationVariableSet<E> {
    entries: Vec<OperationVariable<E>>,
}

impl<E> OperationVariableSet<E> {
    /// Empty set
    pub fn new() -> Self {
        OperationVariableSet {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a variable, keeping insertion order
    pub fn push(&mut self, variable: OperationVariable<E>) {
        self.entries.push(variable);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OperationVariable<E>> {
        self.entries.iter()
    }

    /// Iterate over the wrapped element values
    pub fn values(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(|variable| &variable.value)
    }
}

impl<E> Default for OperationVariableSet<E> {
    fn default() -> Self {
        OperationVariableSet::new()
    }
}

impl<E> From<Vec<OperationVariable<E>>> for OperationVariableSet<E> {
    fn from(entries: Vec<OperationVariable<E>>) -> Self {
        OperationVariableSet { entries }
    }
}

impl<E> FromIterator<OperationVariable<E>> for OperationVariableSet<E> {
    fn from_iter<I: IntoIterator<Item = OperationVariable<E>>>(iter: I) -> Self {
        OperationVariableSet {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<E> IntoIterator for OperationVariableSet<E> {
    type Item = OperationVariable<E>;
    type IntoIter = std::vec::IntoIter<OperationVariable<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a OperationVariableSet<E> {
    type Item = &'a OperationVariable<E>;
    type IntoIter = std::slice::Iter<'a, OperationVariable<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
