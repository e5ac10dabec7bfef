// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use ideahub::application::ApplicationResult;
use ideahub::application::ports::{security::PasswordHasher, time::Clock};
use ideahub::domain::errors::{DomainError, DomainResult};
use ideahub::domain::idea::{IdeaRepository, IdeaWithLikes, LikeOutcome, NewIdea, NewLike};
use ideahub::domain::user::{NewUser, User, UserRepository, Username};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

/// Deterministic start time for every test.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Clock that only moves when a test tells it to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(fixed_now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Reversible "hash" so tests do not pay for Argon2.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash.strip_prefix("plain$") == Some(password))
    }
}

fn storage_down() -> DomainError {
    DomainError::Persistence("database is locked".into())
}

/// Every call fails as if the database were unreachable.
pub struct UnavailableUserRepo;

#[async_trait]
impl UserRepository for UnavailableUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Err(storage_down())
    }

    async fn insert(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(storage_down())
    }

    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        Err(storage_down())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        Err(storage_down())
    }
}

pub struct UnavailableIdeaRepo;

#[async_trait]
impl IdeaRepository for UnavailableIdeaRepo {
    async fn insert(&self, _new_idea: NewIdea) -> DomainResult<IdeaWithLikes> {
        Err(storage_down())
    }

    async fn list(&self) -> DomainResult<Vec<IdeaWithLikes>> {
        Err(storage_down())
    }

    async fn like(&self, _like: NewLike) -> DomainResult<LikeOutcome> {
        Err(storage_down())
    }
}
