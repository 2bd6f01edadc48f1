//! Domain model for references and operation variables.
//!
//! All model types are plain values: created fresh per decode, no pooling,
//! no identity. Serde impls live in [`crate::codec`].

pub mod enums;
pub mod operation;
pub mod referable;
pub mod reference;

pub use enums::{KeyType, ReferenceType};
pub use operation::{OperationVariable, OperationVariableSet};
pub use referable::{AnyReferable, Referable};
pub use reference::{Key, Reference};
