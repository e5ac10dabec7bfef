// tests/support/builders.rs
use std::sync::Arc;
use std::time::Duration;

use ideahub::application::ports::{ClockPort, PasswordHasherPort, TokenManagerPort};
use ideahub::application::services::ApplicationServices;
use ideahub::config::SigningAlgorithm;
use ideahub::domain::idea::IdeaRepository;
use ideahub::domain::user::UserRepository;
use ideahub::infrastructure::database;
use ideahub::infrastructure::repositories::{SqliteIdeaRepository, SqliteUserRepository};
use ideahub::infrastructure::security::token::JwtTokenManager;
use ideahub::presentation::http::{routes::build_router, state::HttpState};

use super::helpers::{TEST_SECRET, TestApp};
use super::mocks::{ManualClock, PlainPasswordHasher};

/// Assembles the full application over SQLite, in memory unless
/// [`TestAppBuilder::file_backed`] is set. Any repository can be swapped for
/// a mock.
pub struct TestAppBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    idea_repo: Option<Arc<dyn IdeaRepository>>,
    ttl: Duration,
    file_backed: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            idea_repo: None,
            ttl: Duration::from_secs(30 * 60),
            file_backed: false,
        }
    }

    /// Use a database file in a fresh temporary directory instead of
    /// `sqlite::memory:`, so the pool holds several connections.
    pub fn file_backed(mut self) -> Self {
        self.file_backed = true;
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn idea_repo(mut self, repo: Arc<dyn IdeaRepository>) -> Self {
        self.idea_repo = Some(repo);
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub async fn build(self) -> TestApp {
        let data_dir = self
            .file_backed
            .then(|| tempfile::tempdir().expect("create temp dir"));
        let database_url = match &data_dir {
            Some(dir) => format!("sqlite://{}?mode=rwc", dir.path().join("ideahub.db").display()),
            None => "sqlite::memory:".to_string(),
        };

        let pool = database::init_pool(&database_url)
            .await
            .expect("open test database");
        database::run_migrations(&pool)
            .await
            .expect("run migrations");

        let user_repo: Arc<dyn UserRepository> = match self.user_repo {
            Some(repo) => repo,
            None => Arc::new(SqliteUserRepository::new(pool.clone())),
        };
        let idea_repo: Arc<dyn IdeaRepository> = match self.idea_repo {
            Some(repo) => repo,
            None => Arc::new(SqliteIdeaRepository::new(pool.clone())),
        };

        let clock = Arc::new(ManualClock::default());
        let tokens = Arc::new(
            JwtTokenManager::new(TEST_SECRET, SigningAlgorithm::Hs256, self.ttl)
                .expect("token manager"),
        );
        let password_hasher: Arc<PasswordHasherPort> = Arc::new(PlainPasswordHasher);
        let token_manager: Arc<TokenManagerPort> = tokens.clone();
        let clock_port: Arc<ClockPort> = clock.clone();

        let services = Arc::new(ApplicationServices::new(
            user_repo,
            idea_repo,
            password_hasher,
            token_manager,
            clock_port,
        ));

        let state = HttpState {
            services: Arc::clone(&services),
            db_pool: pool.clone(),
            database_scheme: Some("sqlite".into()),
        };
        let router = build_router(state, &["http://localhost:5173".to_string()]);

        TestApp {
            router,
            services,
            clock,
            tokens,
            pool,
            _data_dir: data_dir,
        }
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
