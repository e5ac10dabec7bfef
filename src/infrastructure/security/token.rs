// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, DecodedToken, auth::TOKEN_TYPE_BEARER},
    error::{ApplicationError, ApplicationResult},
    ports::security::{TokenError, TokenManager},
};
use crate::config::SigningAlgorithm;
use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// HMAC-signed JWT bearer tokens. Stateless: nothing is recorded on issue.
///
/// Timestamps carry whole seconds. A token issued at `t` is accepted for
/// check times in `[t, t + ttl)`; expiry is evaluated against the clock value
/// handed to [`TokenManager::decode`] rather than the system clock.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    ttl_secs: i64,
}

impl JwtTokenManager {
    pub fn new(secret: &str, algorithm: SigningAlgorithm, ttl: Duration) -> ApplicationResult<Self> {
        let ttl_secs = i64::try_from(ttl.as_secs())
            .map_err(|_| ApplicationError::unavailable("token ttl out of range"))?;
        let algorithm = to_jwt_algorithm(algorithm);

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            validation,
            ttl_secs,
        })
    }
}

fn to_jwt_algorithm(algorithm: SigningAlgorithm) -> Algorithm {
    match algorithm {
        SigningAlgorithm::Hs256 => Algorithm::HS256,
        SigningAlgorithm::Hs384 => Algorithm::HS384,
        SigningAlgorithm::Hs512 => Algorithm::HS512,
    }
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}

fn timestamp_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
}

impl TokenManager for JwtTokenManager {
    fn issue(&self, subject: &str, now: DateTime<Utc>) -> ApplicationResult<AuthTokenDto> {
        let iat = now.timestamp();
        let exp = iat
            .checked_add(self.ttl_secs)
            .ok_or_else(|| ApplicationError::unavailable("token expiration overflow"))?;

        let issued_at = timestamp_to_datetime(iat)
            .ok_or_else(|| ApplicationError::unavailable("token issue time out of range"))?;
        let expires_at = timestamp_to_datetime(exp)
            .ok_or_else(|| ApplicationError::unavailable("token expiration out of range"))?;

        let claims = Claims {
            sub: subject.to_owned(),
            iat,
            exp,
        };
        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|err| ApplicationError::unavailable(err.to_string()))?;

        Ok(AuthTokenDto {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.into(),
            issued_at,
            expires_at,
            expires_in: self.ttl_secs,
        })
    }

    fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<DecodedToken, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| classify(err.kind()))?;
        let Claims { sub, exp, .. } = data.claims;

        if now.timestamp() >= exp {
            return Err(TokenError::Expired);
        }

        Ok(DecodedToken {
            subject: sub,
            expires_at: timestamp_to_datetime(exp).ok_or(TokenError::Malformed)?,
        })
    }
}
