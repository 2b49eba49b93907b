use thiserror::Error;

/// Errors raised by the parsing constructors of the engine.
///
/// The computational entry points never surface these: they log and fall
/// back to a documented default instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid tee time: {0}")]
    InvalidTime(String),

    #[error("Invalid event date: {0}")]
    InvalidDate(String),

    #[error("Invalid handicap allowance: {0}")]
    InvalidAllowance(f64),
}

/// Maximum length of raw input echoed back in error messages
const MAX_ERROR_INPUT_LENGTH: usize = 40;

impl EngineError {
    /// Truncate raw input so a garbage field can't flood the logs
    fn truncate_input(input: &str) -> String {
        if input.chars().count() <= MAX_ERROR_INPUT_LENGTH {
            input.to_string()
        } else {
            let head: String = input.chars().take(MAX_ERROR_INPUT_LENGTH).collect();
            format!("{}... (truncated)", head)
        }
    }

    pub fn invalid_time(input: &str) -> Self {
        EngineError::InvalidTime(Self::truncate_input(input))
    }

    pub fn invalid_date(input: &str) -> Self {
        EngineError::InvalidDate(Self::truncate_input(input))
    }
}
