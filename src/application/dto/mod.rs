pub mod auth;
pub mod ideas;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, DecodedToken};
pub use ideas::IdeaDto;
pub use users::UserDto;
