//! Error taxonomy shared by all three endpoints.
//!
//! Client input errors carry the human-readable message that goes on the
//! wire as-is. Oracle failures are wrapped by the gateway and never leak
//! their internal text to callers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("The \"text\" field is required and cannot be empty")]
    EmptyText,

    #[error("Unsupported language: {code}. Supported languages are {supported:?}")]
    UnsupportedLanguage {
        code: String,
        supported: Vec<&'static str>,
    },

    #[error("The \"confidence_threshold\" must be a number between 0 and 1")]
    ThresholdOutOfRange(f64),
}

impl CoreError {
    /// True for errors caused by the caller's input (4xx-class).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::EmptyText
                | CoreError::UnsupportedLanguage { .. }
                | CoreError::ThresholdOutOfRange(_)
        )
    }
}
