//! Operation variable set codec.
//!
//! Wire shape: `[ { "value": <element-json> }, ... ]` or JSON `null`. The
//! element payload is decoded and encoded by the external polymorphic
//! element codec, reached here through the `E` parameter's serde impls.
//!
//! Unlike key entries, a non-object array element is fatal under both
//! policies: the array is a homogeneous sequence of wrapper objects by
//! contract. Entries whose `value` is absent or JSON `null` are dropped
//! (lenient) or rejected (strict).

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{skip_entry, value_kind, DecodePolicy};
use crate::error::{Error, Result};
use crate::model::{OperationVariable, OperationVariableSet};

/// Decode an operation variable set from its wire value.
///
/// JSON `null` decodes to `Ok(None)` (an absent set, distinct from the empty
/// set `[]` decodes to); any other non-array token is an
/// [`Error::UnexpectedToken`], as is any array element that is not an
/// object. Element payload errors surface as [`Error::Json`].
pub fn decode_operation_variables<E: DeserializeOwned>(
    token: &Value,
    policy: DecodePolicy,
) -> Result<Option<OperationVariableSet<E>>> {
    if token.is_null() {
        return Ok(None);
    }
    let Some(entries) = token.as_array() else {
        return Err(Error::UnexpectedToken {
            expected: "array",
            found: value_kind(token),
        });
    };

    let mut set = OperationVariableSet::new();
    for entry in entries {
        let Some(wrapper) = entry.as_object() else {
            return Err(Error::UnexpectedToken {
                expected: "object",
                found: value_kind(entry),
            });
        };
        match wrapper.get("value") {
            Some(value) if !value.is_null() => {
                let element: E = serde_json::from_value(value.clone())?;
                set.push(OperationVariable::new(element));
            }
            _ => skip_entry(
                policy,
                "operation variable",
                "missing or null value".to_string(),
            )?,
        }
    }
    Ok(Some(set))
}

/// Encode an operation variable set (or its absence) to a wire value.
pub fn encode_operation_variables<E: Serialize>(
    set: Option<&OperationVariableSet<E>>,
) -> Result<Value> {
    match set {
        None => Ok(Value::Null),
        Some(set) => Ok(serde_json::to_value(set)?),
    }
}

#[derive(Serialize)]
struct VariableWire<'a, E: Serialize> {
    value: &'a E,
}

impl<E: Serialize> Serialize for OperationVariableSet<E> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for variable in self {
            seq.serialize_element(&VariableWire {
                value: &variable.value,
            })?;
        }
        seq.end()
    }
}

impl<'de, E: DeserializeOwned> Deserialize<'de> for OperationVariableSet<E> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = Value::deserialize(deserializer)?;
        decode_operation_variables(&token, DecodePolicy::Lenient)
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("expected an operation variable array, found null"))
    }
}
