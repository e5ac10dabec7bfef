// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),
    #[error("idea {0} not found")]
    IdeaNotFound(i64),
    #[error("persistence error: {0}")]
    Persistence(String),
}
