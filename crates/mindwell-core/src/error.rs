use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("value is not a valid email address: {0}")]
    InvalidEmail(String),

    #[error("value is not a valid date-time: {0}")]
    InvalidTimestamp(String),

    #[error("field '{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
