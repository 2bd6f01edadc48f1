//! Wire codecs for the model types.
//!
//! Every decode entry point interprets an already-parsed
//! [`serde_json::Value`]; the serde `Serialize`/`Deserialize` impls for the
//! model types delegate to the same functions, so the two surfaces cannot
//! drift apart.
//!
//! # Error asymmetry
//!
//! A wrong container shape fails the whole decode with
//! [`Error::UnexpectedToken`](crate::error::Error::UnexpectedToken). Inside
//! a well-formed container, malformed entries and unresolvable enum tokens
//! are handled per [`DecodePolicy`]: the lenient default drops them silently
//! (a `trace!` event is emitted for each drop), strict mode turns them into
//! [`Error::MalformedEntry`](crate::error::Error::MalformedEntry). Callers
//! feeding sparse but well-formed documents therefore get silently trimmed
//! results with no diagnostic under the default policy.

pub mod operation;
pub mod reference;
pub mod wire_enum;

pub use operation::{decode_operation_variables, encode_operation_variables};
pub use reference::{decode_key, decode_reference, encode_key, encode_reference, ReferenceCodec};
pub use wire_enum::WireEnum;

use serde_json::Value;
use tracing::trace;

use crate::error::{Error, Result};

/// How decoding treats entries the tolerant wire contract allows dropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Drop malformed key entries, value-less operation variables and
    /// unresolvable enum tokens, keeping everything else. This is the wire
    /// contract's behavior and the policy every serde impl uses.
    #[default]
    Lenient,
    /// Reject everything `Lenient` would drop. Shape mismatches are fatal
    /// under both policies.
    Strict,
}

/// Name of a JSON token kind, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Drop an entry under the lenient policy, reject it under the strict one.
pub(crate) fn skip_entry(policy: DecodePolicy, context: &'static str, detail: String) -> Result<()> {
    match policy {
        DecodePolicy::Lenient => {
            trace!(context, %detail, "dropping malformed entry");
            Ok(())
        }
        DecodePolicy::Strict => Err(Error::MalformedEntry { context, detail }),
    }
}

/// Resolve an optional enum token per policy. Absence always resolves to the
/// `Undefined` member; a present token that resolves to nothing is an error
/// only under the strict policy.
pub(crate) fn resolve_enum<E: WireEnum>(
    token: Option<&Value>,
    policy: DecodePolicy,
    context: &'static str,
) -> Result<E> {
    match (policy, token) {
        (DecodePolicy::Strict, Some(token)) if !token.is_null() => {
            E::lookup(token).ok_or_else(|| Error::MalformedEntry {
                context,
                detail: format!("unresolvable type token: {token}"),
            })
        }
        _ => Ok(E::resolve(token)),
    }
}
