use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollatzError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Input: '{0}' is not an integer")]
    InvalidInput(String),

    #[error("Invalid Input: no number entered")]
    EmptyInput,

    #[error("Invalid Input: starting value must be greater than zero")]
    ZeroStart,

    #[error("Invalid Input: negative starting values are not supported ({0})")]
    NegativeStart(i64),

    #[error("Overflow: 3({value}) + 1 exceeds u64 at step {step}")]
    Overflow { value: u64, step: usize },

    #[error("Step Limit: start {start} did not terminate within {limit} steps")]
    StepLimit { start: u64, limit: usize },

    #[error("Verification Failed: {0} starts did not reach 1")]
    VerificationFailed(usize),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type CzResult<T> = Result<T, CollatzError>;
