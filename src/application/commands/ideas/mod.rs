mod create;
mod like;
mod service;

pub use create::CreateIdeaCommand;
pub use like::LikeIdeaCommand;
pub use service::IdeaCommandService;
