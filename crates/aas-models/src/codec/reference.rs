//! Reference and key codecs.
//!
//! Wire shape:
//!
//! ```json
//! {
//!   "type": "ModelReference",
//!   "keys": [ { "type": "Submodel", "value": "urn:sm:1" } ],
//!   "referredSemanticId": { "type": "ExternalReference", "keys": [...] }
//! }
//! ```
//!
//! or JSON `null` for an absent reference. Encoding always writes fields in
//! the order `type`, `keys`, `referredSemanticId`; the format does not
//! require this, but downstream golden files depend on it.

use std::marker::PhantomData;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{resolve_enum, skip_entry, value_kind, DecodePolicy, WireEnum};
use crate::error::{Error, Result};
use crate::model::{AnyReferable, Key, KeyType, Referable, Reference, ReferenceType};

/// Decode a single key entry.
///
/// Under the lenient policy this returns `Ok(None)` for entries that are not
/// objects or carry no usable `value` (missing, empty, or not a string);
/// strict mode rejects them instead. The `type` field resolves to
/// [`KeyType::Undefined`] when absent or unresolvable.
pub fn decode_key(token: &Value, policy: DecodePolicy) -> Result<Option<Key>> {
    let Some(entry) = token.as_object() else {
        skip_entry(
            policy,
            "key",
            format!("expected object, found {}", value_kind(token)),
        )?;
        return Ok(None);
    };

    let kind: KeyType = resolve_enum(entry.get("type"), policy, "key")?;

    match entry.get("value").and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(Some(Key::new(kind, value))),
        _ => {
            skip_entry(policy, "key", "missing or empty value".to_string())?;
            Ok(None)
        }
    }
}

/// Encode a key to its wire object: `type` always (canonical name, Undefined
/// included), `value` only when non-empty.
pub fn encode_key(key: &Key) -> Value {
    let mut entry = Map::new();
    entry.insert("type".into(), Value::String(key.kind.name().into()));
    if !key.value.is_empty() {
        entry.insert("value".into(), Value::String(key.value.clone()));
    }
    Value::Object(entry)
}

/// Decode a reference from its wire value.
///
/// JSON `null` decodes to an absent reference (`Ok(None)`); any other
/// non-object token is an [`Error::UnexpectedToken`]. The `keys` field is
/// read only when present and an array, each entry going through
/// [`decode_key`] with dropped entries skipped in place. A present, non-null
/// `referredSemanticId` is decoded recursively.
///
/// Recursion depth equals the `referredSemanticId` nesting depth of the
/// input; callers decoding untrusted documents should bound it externally.
pub fn decode_reference<T: Referable>(
    token: &Value,
    policy: DecodePolicy,
) -> Result<Option<Reference<T>>> {
    if token.is_null() {
        return Ok(None);
    }
    let Some(root) = token.as_object() else {
        return Err(Error::UnexpectedToken {
            expected: "object",
            found: value_kind(token),
        });
    };

    let kind: ReferenceType = resolve_enum(root.get("type"), policy, "reference")?;

    let mut keys = Vec::new();
    if let Some(Value::Array(entries)) = root.get("keys") {
        for entry in entries {
            if let Some(key) = decode_key(entry, policy)? {
                keys.push(key);
            }
        }
    }

    let mut reference = Reference::with_keys(kind, keys);
    if let Some(nested) = root.get("referredSemanticId") {
        reference.referred_semantic_id =
            decode_reference::<AnyReferable>(nested, policy)?.map(Box::new);
    }

    Ok(Some(reference))
}

/// Encode a reference (or its absence) to a wire value.
///
/// `None` encodes to JSON `null`. The `keys` array is always written,
/// possibly empty; `referredSemanticId` only when present.
pub fn encode_reference<T: Referable>(reference: Option<&Reference<T>>) -> Value {
    let Some(reference) = reference else {
        return Value::Null;
    };

    let mut root = Map::new();
    root.insert("type".into(), Value::String(reference.kind.name().into()));
    root.insert(
        "keys".into(),
        Value::Array(reference.keys.iter().map(encode_key).collect()),
    );
    if let Some(nested) = &reference.referred_semantic_id {
        root.insert(
            "referredSemanticId".into(),
            encode_reference(Some(nested.as_ref())),
        );
    }
    Value::Object(root)
}

/// Codec object binding a decode policy to a referable kind.
///
/// The codec for any `T: Referable` is derived at compile time from the type
/// parameter; there is no registry to populate and nothing shared to cache.
/// Values are `Copy`, stateless and safe to construct concurrently, one per
/// kind or one per call as callers prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCodec<T: Referable = AnyReferable> {
    policy: DecodePolicy,
    marker: PhantomData<T>,
}

impl<T: Referable> ReferenceCodec<T> {
    pub fn new(policy: DecodePolicy) -> Self {
        ReferenceCodec {
            policy,
            marker: PhantomData,
        }
    }

    /// Codec with the wire contract's tolerant policy
    pub fn lenient() -> Self {
        ReferenceCodec::new(DecodePolicy::Lenient)
    }

    /// Codec rejecting everything the lenient policy drops
    pub fn strict() -> Self {
        ReferenceCodec::new(DecodePolicy::Strict)
    }

    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    pub fn decode(&self, token: &Value) -> Result<Option<Reference<T>>> {
        decode_reference(token, self.policy)
    }

    /// Parse and decode in one step
    pub fn decode_str(&self, json: &str) -> Result<Option<Reference<T>>> {
        let token: Value = serde_json::from_str(json)?;
        self.decode(&token)
    }

    pub fn encode(&self, reference: Option<&Reference<T>>) -> Value {
        encode_reference(reference)
    }
}

impl<T: Referable> Default for ReferenceCodec<T> {
    fn default() -> Self {
        ReferenceCodec::lenient()
    }
}

impl<T: Referable> Serialize for Reference<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        encode_reference(Some(self)).serialize(serializer)
    }
}

impl<'de, T: Referable> Deserialize<'de> for Reference<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = Value::deserialize(deserializer)?;
        decode_reference(&token, DecodePolicy::Lenient)
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("expected a reference object, found null"))
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        encode_key(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = Value::deserialize(deserializer)?;
        decode_key(&token, DecodePolicy::Lenient)
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("key entry without a usable value"))
    }
}
