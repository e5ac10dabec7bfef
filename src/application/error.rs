// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Caller-visible failure categories. Token decode details and storage
/// internals are folded into these before they leave the application layer.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not authenticated")]
    Unauthenticated,

    #[error("incorrect username or password")]
    InvalidCredentials,

    #[error("username taken: {0}")]
    DuplicateUsername(String),

    #[error("idea {0} not found")]
    IdeaNotFound(i64),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Stable machine-readable category.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Unauthenticated => "unauthenticated",
            Self::InvalidCredentials => "invalid_credentials",
            Self::DuplicateUsername(_) => "duplicate_username",
            Self::IdeaNotFound(_) => "idea_not_found",
            Self::Unavailable(_) => "unavailable",
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::DuplicateUsername(username) => Self::DuplicateUsername(username),
            DomainError::IdeaNotFound(id) => Self::IdeaNotFound(id),
            DomainError::Persistence(msg) => Self::Unavailable(msg),
        }
    }
}
