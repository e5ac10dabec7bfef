use super::UserQueryService;
use crate::application::dto::{AuthenticatedUser, UserDto};

impl UserQueryService {
    /// The gate already loaded the user, so no second lookup is made.
    pub fn current_user(&self, actor: &AuthenticatedUser) -> UserDto {
        UserDto::from(actor)
    }
}
