use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::{ClockPort, TokenManagerPort},
    },
    domain::user::{UserRepository, Username},
};

/// Resolves a bearer token into a stored user.
///
/// Every rejection (missing token, bad signature, expiry, garbage, a subject
/// that no longer maps to a user) surfaces as
/// [`ApplicationError::Unauthenticated`]. The precise reason is only logged.
/// A storage failure during the lookup is not a rejection and surfaces as
/// [`ApplicationError::Unavailable`].
pub struct AuthorizationGate {
    token_manager: Arc<TokenManagerPort>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<ClockPort>,
}

impl AuthorizationGate {
    pub fn new(
        token_manager: Arc<TokenManagerPort>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            token_manager,
            user_repo,
            clock,
        }
    }

    pub async fn authenticate(&self, token: Option<&str>) -> ApplicationResult<AuthenticatedUser> {
        let Some(token) = token else {
            tracing::debug!("request rejected: no bearer token");
            return Err(ApplicationError::Unauthenticated);
        };

        let decoded = self
            .token_manager
            .decode(token, self.clock.now())
            .map_err(|reason| {
                tracing::debug!(%reason, "request rejected: token failed verification");
                ApplicationError::Unauthenticated
            })?;

        // A subject that is not even a valid username cannot match a user.
        let Ok(username) = Username::new(decoded.subject.as_str()) else {
            tracing::debug!("request rejected: token subject is not a username");
            return Err(ApplicationError::Unauthenticated);
        };

        let Some(user) = self.user_repo.find_by_username(&username).await? else {
            tracing::debug!(%username, "request rejected: token subject has no user");
            return Err(ApplicationError::Unauthenticated);
        };

        Ok(AuthenticatedUser::from_parts(user, &decoded))
    }
}
