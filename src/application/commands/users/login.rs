use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(command.username, &command.password)
            .await?;

        let token = self
            .token_manager
            .issue(user.username.as_str(), self.clock.now())?;

        tracing::debug!(user_id = %user.id, "login succeeded");
        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    /// Unknown users and wrong passwords produce the same error.
    async fn find_and_authenticate_user(
        &self,
        username: String,
        password: &str,
    ) -> ApplicationResult<User> {
        let Ok(username) = Username::new(username) else {
            return Err(ApplicationError::InvalidCredentials);
        };

        let Some(user) = self.user_repo.find_by_username(&username).await? else {
            tracing::debug!(%username, "login rejected: unknown user");
            return Err(ApplicationError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await?
        {
            tracing::debug!(%username, "login rejected: password mismatch");
            return Err(ApplicationError::InvalidCredentials);
        }

        Ok(user)
    }
}
