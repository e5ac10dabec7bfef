pub mod errors;
pub mod idea;
pub mod user;
