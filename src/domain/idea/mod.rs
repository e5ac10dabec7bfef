// src/domain/idea/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Idea, IdeaWithLikes, LikeOutcome, NewIdea, NewLike};
pub use repository::IdeaRepository;
pub use value_objects::{IdeaDescription, IdeaId, IdeaTitle};
