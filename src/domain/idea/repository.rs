use crate::domain::errors::DomainResult;
use crate::domain::idea::entity::{IdeaWithLikes, LikeOutcome, NewIdea, NewLike};
use async_trait::async_trait;

#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// Persist a new idea; the returned view always carries zero likes.
    async fn insert(&self, new_idea: NewIdea) -> DomainResult<IdeaWithLikes>;

    /// All ideas in insertion order with their current like counts.
    async fn list(&self) -> DomainResult<Vec<IdeaWithLikes>>;

    /// Record that a user likes an idea.
    ///
    /// Fails with `DomainError::IdeaNotFound` when the idea does not exist and
    /// writes nothing in that case. A second like for the same (user, idea)
    /// pair is a no-op reported as `LikeOutcome::AlreadyLiked`, including when
    /// two requests race and the store's unique constraint rejects the loser.
    async fn like(&self, like: NewLike) -> DomainResult<LikeOutcome>;
}
