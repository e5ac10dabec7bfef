pub mod ideas;
pub mod users;
