//! AAS metamodel definitions and wire codecs.
//!
//! This crate translates between the wire JSON representation and an
//! in-memory model for two constructs of the Asset Administration Shell
//! metamodel:
//!
//! - [`Reference`](model::Reference): a typed, ordered chain of
//!   [`Key`](model::Key)s pointing at a model element, optionally pointing
//!   transitively at another reference via `referredSemanticId`.
//! - [`OperationVariableSet`](model::OperationVariableSet): an ordered
//!   collection of single-value wrappers around polymorphic element payloads.
//!
//! # Tolerant reads
//!
//! Decoding is deliberately lossy-tolerant by default: a wrong container
//! shape (a non-object where a reference is expected, a non-array where an
//! operation variable set is expected) fails the whole decode, while
//! malformed or incomplete *entries* inside a well-formed container are
//! silently dropped and unresolvable enum tokens fall back to `Undefined`.
//! Callers that want every dropped entry to be an error instead can use
//! [`DecodePolicy::Strict`](codec::DecodePolicy) through the explicit codec
//! entry points; the serde impls always use the lenient policy.
//!
//! # Typed references
//!
//! `Reference<T>` is parameterized over the [referable
//! kind](model::Referable) it targets. The codec for any `T` is resolved at
//! compile time from the type parameter, so downstream crates get a working
//! codec for their own referable markers by implementing a single trait.

pub mod codec;
pub mod error;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::codec::{DecodePolicy, ReferenceCodec, WireEnum};
    pub use crate::error::{Error, Result};
    pub use crate::model::*;
}
