use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{auth::AuthenticatedUser, serde_time};

/// Public view of a user. The password hash never leaves the domain layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            created_at: user.created_at,
        }
    }
}

impl From<&AuthenticatedUser> for UserDto {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}
