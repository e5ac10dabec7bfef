use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

pub const TOKEN_TYPE_BEARER: &str = "bearer";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub access_token: String,
    pub token_type: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Claims recovered from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    pub subject: String,
    pub expires_at: DateTime<Utc>,
}

/// Identity resolved by the authorization gate: the stored user the token's
/// subject points to.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub token_expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn from_parts(user: User, token: &DecodedToken) -> Self {
        Self {
            id: user.id,
            username: user.username.into(),
            created_at: user.created_at,
            token_expires_at: token.expires_at,
        }
    }
}
