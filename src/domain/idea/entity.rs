// src/domain/idea/entity.rs
use crate::domain::idea::value_objects::{IdeaDescription, IdeaId, IdeaTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Idea {
    pub id: IdeaId,
    pub title: IdeaTitle,
    pub description: Option<IdeaDescription>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewIdea {
    pub title: IdeaTitle,
    pub description: Option<IdeaDescription>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Read model pairing a persisted idea with its like count. The count is
/// derived from the likes table on every read and never stored.
#[derive(Debug, Clone)]
pub struct IdeaWithLikes {
    pub idea: Idea,
    pub likes: u64,
}

impl IdeaWithLikes {
    pub fn new(idea: Idea, likes: u64) -> Self {
        Self { idea, likes }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NewLike {
    pub idea_id: IdeaId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Result of a like request. A like moves only from "not liked" to "liked";
/// repeating the request lands in `AlreadyLiked` and leaves the count as is.
#[derive(Debug, Clone)]
pub enum LikeOutcome {
    Created(IdeaWithLikes),
    AlreadyLiked(IdeaWithLikes),
}

impl LikeOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, LikeOutcome::Created(_))
    }

    pub fn idea(&self) -> &IdeaWithLikes {
        match self {
            LikeOutcome::Created(idea) | LikeOutcome::AlreadyLiked(idea) => idea,
        }
    }

    pub fn into_idea(self) -> IdeaWithLikes {
        match self {
            LikeOutcome::Created(idea) | LikeOutcome::AlreadyLiked(idea) => idea,
        }
    }
}
