//! References and their keys.
//!
//! # Type Parameter
//!
//! `Reference<T>` names the referable kind it targets; the plain, untyped
//! reference shape is the default parameter:
//!
//! ```rust,ignore
//! let plain: Reference = Reference::new(ReferenceType::ExternalReference);
//! let typed: Reference<referable::Submodel> =
//!     Reference::with_keys(ReferenceType::ModelReference, vec![key]);
//! ```

use std::marker::PhantomData;

use super::enums::{KeyType, ReferenceType};
use super::referable::{AnyReferable, Referable};

/// One segment of a reference's key chain, tagged with a kind and carrying a
/// string identifier.
///
/// A key only ever exists with a non-empty value; wire entries without one
/// are dropped during decode instead of being materialized as placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    /// Kind of model element this segment identifies
    pub kind: KeyType,
    /// String identifier of the segment
    pub value: String,
}

impl Key {
    pub fn new(kind: KeyType, value: impl Into<String>) -> Self {
        Key {
            kind,
            value: value.into(),
        }
    }
}

/// A typed, ordered chain of keys identifying a model element, optionally
/// annotated with the semantic reference it is an instance of.
///
/// # Type Parameters
/// - `T`: The referable kind this reference targets.
///   Defaults to [`AnyReferable`] (the plain reference shape).
///
/// `kind` is never left uninitialized: decoding resolves unresolvable or
/// missing wire tokens to [`ReferenceType::Undefined`]. The nested
/// `referred_semantic_id` is owned exclusively by its parent and allocated
/// fresh per decode, so cycles cannot occur by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<T: Referable = AnyReferable> {
    /// Kind of the reference
    pub kind: ReferenceType,
    /// Ordered key chain, possibly empty
    pub keys: Vec<Key>,
    /// Semantic reference this reference is an instance of, if any
    pub referred_semantic_id: Option<Box<Reference>>,
    marker: PhantomData<T>,
}

impl<T: Referable> Reference<T> {
    /// Empty reference of the given kind
    pub fn new(kind: ReferenceType) -> Self {
        Reference {
            kind,
            keys: Vec::new(),
            referred_semantic_id: None,
            marker: PhantomData,
        }
    }

    /// Reference with an initial key chain
    pub fn with_keys(kind: ReferenceType, keys: Vec<Key>) -> Self {
        Reference {
            kind,
            keys,
            referred_semantic_id: None,
            marker: PhantomData,
        }
    }

    /// Attach a semantic reference, builder style
    pub fn with_referred_semantic_id(mut self, semantic_id: Reference) -> Self {
        self.referred_semantic_id = Some(Box::new(semantic_id));
        self
    }

    /// First key of the chain, if any
    pub fn first_key(&self) -> Option<&Key> {
        self.keys.first()
    }

    /// Last key of the chain, if any; for model references this is the key
    /// identifying the target element itself.
    pub fn last_key(&self) -> Option<&Key> {
        self.keys.last()
    }

    /// Key kind of the referable kind this reference is parameterized over
    pub fn target_key_type(&self) -> KeyType {
        T::KEY_TYPE
    }

    /// Drop the type tag, keeping kind, keys and semantic reference.
    pub fn erased(self) -> Reference {
        Reference {
            kind: self.kind,
            keys: self.keys,
            referred_semantic_id: self.referred_semantic_id,
            marker: PhantomData,
        }
    }
}

impl<T: Referable> Default for Reference<T> {
    fn default() -> Self {
        Reference::new(ReferenceType::Undefined)
    }
}
