use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentError {
    #[error("Unknown assessment key")]
    UnknownInstrument(String),

    #[error("Expected {expected} answers")]
    AnswerCount { expected: usize, actual: usize },

    #[error("Answer {item} is {value}; answers must be between 0 and {max}")]
    AnswerOutOfRange { item: usize, value: i64, max: u8 },
}
