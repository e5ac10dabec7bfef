use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, User, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        self.ensure_username_available(&username).await?;

        let user = self
            .create_and_insert_user(username, &command.password)
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user.into())
    }

    // Saves a hash on the common path; the unique constraint still decides races.
    async fn ensure_username_available(&self, username: &Username) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::DuplicateUsername(username.to_string()));
        }

        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(username, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
