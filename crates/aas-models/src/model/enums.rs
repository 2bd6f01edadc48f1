//! Wire enumerations for reference and key kinds.
//!
//! Both enumerations carry an `Undefined` member that every unresolvable or
//! absent wire token falls back to; see
//! [`WireEnum`](crate::codec::WireEnum) for the resolution rules. Ordinals
//! are the position in the member table, with `Undefined` at 0.

use std::fmt;

/// Kind of a [`Reference`](super::Reference): whether the key chain points
/// into the model or at an external global identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReferenceType {
    #[default]
    Undefined,
    ExternalReference,
    ModelReference,
}

impl ReferenceType {
    /// All members, in ordinal order.
    pub const ALL: &'static [ReferenceType] = &[
        ReferenceType::Undefined,
        ReferenceType::ExternalReference,
        ReferenceType::ModelReference,
    ];

    /// Canonical wire name
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceType::Undefined => "Undefined",
            ReferenceType::ExternalReference => "ExternalReference",
            ReferenceType::ModelReference => "ModelReference",
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a [`Key`](super::Key): what sort of model element the key segment
/// identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyType {
    #[default]
    Undefined,
    AnnotatedRelationshipElement,
    AssetAdministrationShell,
    BasicEventElement,
    Blob,
    Capability,
    ConceptDescription,
    DataElement,
    Entity,
    EventElement,
    File,
    FragmentReference,
    GlobalReference,
    Identifiable,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    Referable,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelElementList,
}

impl KeyType {
    /// All members, in ordinal order.
    pub const ALL: &'static [KeyType] = &[
        KeyType::Undefined,
        KeyType::AnnotatedRelationshipElement,
        KeyType::AssetAdministrationShell,
        KeyType::BasicEventElement,
        KeyType::Blob,
        KeyType::Capability,
        KeyType::ConceptDescription,
        KeyType::DataElement,
        KeyType::Entity,
        KeyType::EventElement,
        KeyType::File,
        KeyType::FragmentReference,
        KeyType::GlobalReference,
        KeyType::Identifiable,
        KeyType::MultiLanguageProperty,
        KeyType::Operation,
        KeyType::Property,
        KeyType::Range,
        KeyType::Referable,
        KeyType::ReferenceElement,
        KeyType::RelationshipElement,
        KeyType::Submodel,
        KeyType::SubmodelElement,
        KeyType::SubmodelElementCollection,
        KeyType::SubmodelElementList,
    ];

    /// Canonical wire name
    pub fn as_str(self) -> &'static str {
        match self {
            KeyType::Undefined => "Undefined",
            KeyType::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            KeyType::AssetAdministrationShell => "AssetAdministrationShell",
            KeyType::BasicEventElement => "BasicEventElement",
            KeyType::Blob => "Blob",
            KeyType::Capability => "Capability",
            KeyType::ConceptDescription => "ConceptDescription",
            KeyType::DataElement => "DataElement",
            KeyType::Entity => "Entity",
            KeyType::EventElement => "EventElement",
            KeyType::File => "File",
            KeyType::FragmentReference => "FragmentReference",
            KeyType::GlobalReference => "GlobalReference",
            KeyType::Identifiable => "Identifiable",
            KeyType::MultiLanguageProperty => "MultiLanguageProperty",
            KeyType::Operation => "Operation",
            KeyType::Property => "Property",
            KeyType::Range => "Range",
            KeyType::Referable => "Referable",
            KeyType::ReferenceElement => "ReferenceElement",
            KeyType::RelationshipElement => "RelationshipElement",
            KeyType::Submodel => "Submodel",
            KeyType::SubmodelElement => "SubmodelElement",
            KeyType::SubmodelElementCollection => "SubmodelElementCollection",
            KeyType::SubmodelElementList => "SubmodelElementList",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
