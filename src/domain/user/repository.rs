use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::Username,
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    /// Insert a user. The username uniqueness is enforced by the store, a
    /// clash yields `DomainError::DuplicateUsername`.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    /// All users in insertion order.
    async fn list(&self) -> DomainResult<Vec<User>>;
}
