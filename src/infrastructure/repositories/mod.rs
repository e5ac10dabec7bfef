// src/infrastructure/repositories/mod.rs
mod sqlite_idea;
mod sqlite_user;

pub use sqlite_idea::SqliteIdeaRepository;
pub use sqlite_user::SqliteUserRepository;

use crate::domain::errors::DomainError;

pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
