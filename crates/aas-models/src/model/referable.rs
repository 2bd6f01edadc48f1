//! Referable kind markers for typed references.
//!
//! A [`Reference<T>`](super::Reference) is tagged at the type level with the
//! kind of model element it targets. The markers here cover the kinds the
//! metamodel names directly; downstream crates can add their own by
//! implementing [`Referable`] for a new marker type, which is all it takes
//! for the reference codec to work for that kind.

use super::enums::KeyType;

/// Marker trait for the kind of model element a reference points to.
pub trait Referable {
    /// Key kind identifying this referable on the wire.
    const KEY_TYPE: KeyType;
}

/// The untyped case: a reference that may point at any referable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnyReferable;

impl Referable for AnyReferable {
    const KEY_TYPE: KeyType = KeyType::Referable;
}

/// Marker: the reference targets an asset administration shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AssetAdministrationShell;

impl Referable for AssetAdministrationShell {
    const KEY_TYPE: KeyType = KeyType::AssetAdministrationShell;
}

/// Marker: the reference targets a submodel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Submodel;

impl Referable for Submodel {
    const KEY_TYPE: KeyType = KeyType::Submodel;
}

/// Marker: the reference targets a submodel element of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SubmodelElement;

impl Referable for SubmodelElement {
    const KEY_TYPE: KeyType = KeyType::SubmodelElement;
}

/// Marker: the reference targets a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Property;

impl Referable for Property {
    const KEY_TYPE: KeyType = KeyType::Property;
}

/// Marker: the reference targets an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Operation;

impl Referable for Operation {
    const KEY_TYPE: KeyType = KeyType::Operation;
}

/// Marker: the reference targets a concept description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConceptDescription;

impl Referable for ConceptDescription {
    const KEY_TYPE: KeyType = KeyType::ConceptDescription;
}
