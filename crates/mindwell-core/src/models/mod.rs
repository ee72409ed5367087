pub mod assessment;
pub mod contact;
pub mod mood;
pub mod resource;
pub mod team;

use serde_json::Value;

use crate::error::CoreError;

/// Read a string field from a stored document, substituting `default` when the
/// field is absent. A present field of any other type is an error.
pub(crate) fn string_field(
    doc: &Value,
    field: &'static str,
    default: &str,
) -> Result<String, CoreError> {
    match doc.get(field) {
        None => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CoreError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

/// Read an optional string field; absent and `null` both map to `None`.
pub(crate) fn optional_string_field(
    doc: &Value,
    field: &'static str,
) -> Result<Option<String>, CoreError> {
    match doc.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(CoreError::InvalidField {
            field,
            expected: "a string or null",
        }),
    }
}
