// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod ideas;
pub mod system;
pub mod users;
