use crate::application::forms::FormErrors;
use thiserror::Error;

/// Failure modes shared by the use cases; the HTTP layer maps these onto
/// status codes (validation/rejection 400, not-found 404, storage 500).
#[derive(Debug, Error)]
pub enum OpError {
    #[error("{0}")]
    Validation(FormErrors),
    /// The request was well-formed but the operation is not allowed in the
    /// current state (used/expired link, duplicate self-assessment, ...).
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Storage(String),
}

impl From<FormErrors> for OpError {
    fn from(errors: FormErrors) -> Self {
        OpError::Validation(errors)
    }
}
