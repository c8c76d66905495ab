use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DetectError {
    /// The input cannot be analyzed. Retrying with the same input fails the same way.
    #[error("invalid input: {0}")]
    Validation(String),
    /// Scoring faulted. The message is safe to show callers; details go to the log.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DetectError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DetectError::Validation(_))
    }
}
