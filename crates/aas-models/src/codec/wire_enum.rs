//! Loose enum resolution shared by reference and key kinds.

use serde_json::Value;

use crate::model::{KeyType, ReferenceType};

/// A closed wire enumeration with canonical names, stable ordinals and an
/// `Undefined` fallback member.
///
/// Resolution is pure and identical for every implementor: string tokens
/// match canonical names case-insensitively, integer tokens match ordinals
/// exactly, and anything else (absent field, wrong token kind, unknown name,
/// unmapped ordinal) yields [`UNDEFINED`](Self::UNDEFINED) instead of an
/// error.
pub trait WireEnum: Copy + PartialEq + 'static {
    /// Fallback member
    const UNDEFINED: Self;

    /// All members, in ordinal order
    const MEMBERS: &'static [Self];

    /// Canonical wire name
    fn name(self) -> &'static str;

    /// Stable wire ordinal (position in the member table)
    fn ordinal(self) -> u32 {
        Self::MEMBERS
            .iter()
            .position(|member| *member == self)
            .unwrap_or(0) as u32
    }

    /// Case-insensitive name lookup
    fn from_name(name: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.name().eq_ignore_ascii_case(name))
    }

    /// Exact ordinal lookup
    fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::MEMBERS.get(ordinal as usize).copied()
    }

    /// Resolve a present token; `None` when the token kind is wrong or the
    /// name/ordinal is unknown.
    fn lookup(token: &Value) -> Option<Self> {
        match token {
            Value::String(name) => Self::from_name(name),
            Value::Number(number) => number
                .as_u64()
                .and_then(|ordinal| u32::try_from(ordinal).ok())
                .and_then(Self::from_ordinal),
            _ => None,
        }
    }

    /// Tolerant resolution: fall back to `UNDEFINED` on absence or failure.
    fn resolve(token: Option<&Value>) -> Self {
        token.and_then(Self::lookup).unwrap_or(Self::UNDEFINED)
    }
}

impl WireEnum for ReferenceType {
    const UNDEFINED: Self = ReferenceType::Undefined;
    const MEMBERS: &'static [Self] = ReferenceType::ALL;

    fn name(self) -> &'static str {
        self.as_str()
    }
}

impl WireEnum for KeyType {
    const UNDEFINED: Self = KeyType::Undefined;
    const MEMBERS: &'static [Self] = KeyType::ALL;

    fn name(self) -> &'static str {
        self.as_str()
    }
}
