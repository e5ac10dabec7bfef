// src/config.rs
use std::{env, fmt, str::FromStr, time::Duration};
use thiserror::Error;

pub const MIN_SECRET_LENGTH: usize = 16;
/// Upper bound for `ACCESS_TOKEN_EXPIRE_MINUTES`: one year.
pub const MAX_TOKEN_TTL_MINUTES: u64 = 60 * 24 * 365;

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    jwt_secret: String,
    jwt_algorithm: SigningAlgorithm,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    seed_demo_data: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// HMAC algorithms usable with a shared signing secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningAlgorithm {
    #[default]
    Hs256,
    Hs384,
    Hs512,
}

impl SigningAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::Hs256 => "HS256",
            SigningAlgorithm::Hs384 => "HS384",
            SigningAlgorithm::Hs512 => "HS512",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HS256" => Ok(SigningAlgorithm::Hs256),
            "HS384" => Ok(SigningAlgorithm::Hs384),
            "HS512" => Ok(SigningAlgorithm::Hs512),
            other => Err(ConfigError::Invalid(format!(
                "unsupported JWT_ALGORITHM '{other}' (expected HS256, HS384 or HS512)"
            ))),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://ideahub.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8000".into()
}

fn default_token_ttl_minutes() -> u64 {
    60 * 24
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".into()]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_token_ttl(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|minutes| (1..=MAX_TOKEN_TTL_MINUTES).contains(minutes))
        .and_then(|minutes| minutes.checked_mul(60))
        .map(Duration::from_secs)
        .ok_or_else(|| {
            ConfigError::Invalid(format!(
                "ACCESS_TOKEN_EXPIRE_MINUTES must be between 1 and {MAX_TOKEN_TTL_MINUTES}, got '{raw}'"
            ))
        })
}

fn parse_flag(raw: &str) -> bool {
    let value = raw.trim().to_ascii_lowercase();
    value == "1" || value == "true" || value == "yes"
}

impl AppConfig {
    /// Build configuration from environment variables. A `.env` file is
    /// honoured when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Optional values fall
    /// back to defaults; values that are present must be valid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "JWT_SECRET must be at least {MIN_SECRET_LENGTH} bytes"
            )));
        }

        let jwt_algorithm = lookup("JWT_ALGORITHM")
            .map(|raw| raw.parse::<SigningAlgorithm>())
            .transpose()?
            .unwrap_or_default();

        let token_ttl = match lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Some(raw) => parse_token_ttl(&raw)?,
            None => Duration::from_secs(default_token_ttl_minutes() * 60),
        };

        let allowed_origins = lookup("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(default_allowed_origins);

        let seed_demo_data = lookup("SEED_DEMO_DATA").is_none_or(|raw| parse_flag(&raw));

        Ok(Self {
            database_url,
            listen_addr,
            jwt_secret,
            jwt_algorithm,
            token_ttl,
            allowed_origins,
            seed_demo_data,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn jwt_algorithm(&self) -> SigningAlgorithm {
        self.jwt_algorithm
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("listen_addr", &self.listen_addr)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("token_ttl", &self.token_ttl)
            .field("allowed_origins", &self.allowed_origins)
            .field("seed_demo_data", &self.seed_demo_data)
            .finish()
    }
}
