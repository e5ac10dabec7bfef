// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, DecodedToken},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` on a mismatch or an unparsable hash. An `Err` only signals
    /// that the hashing worker itself failed.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

/// Why a bearer token was rejected. Only used for logging; callers of the
/// authorization gate see a single unauthenticated outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    InvalidSignature,
}

pub trait TokenManager: Send + Sync {
    /// Sign a token for `subject` valid from `now` for the configured TTL.
    fn issue(&self, subject: &str, now: DateTime<Utc>) -> ApplicationResult<AuthTokenDto>;

    /// Verify signature and expiry as of `now` and return the embedded claims.
    fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<DecodedToken, TokenError>;
}
