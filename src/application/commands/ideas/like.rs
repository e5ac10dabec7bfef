use super::IdeaCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, IdeaDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::idea::{IdeaId, NewLike},
};

pub struct LikeIdeaCommand {
    pub idea_id: i64,
}

impl IdeaCommandService {
    /// Idempotent: liking an idea twice returns the unchanged count.
    pub async fn like_idea(
        &self,
        actor: &AuthenticatedUser,
        command: LikeIdeaCommand,
    ) -> ApplicationResult<IdeaDto> {
        // No idea can carry a non-positive id.
        let idea_id = IdeaId::new(command.idea_id)
            .map_err(|_| ApplicationError::IdeaNotFound(command.idea_id))?;

        let outcome = self
            .idea_repo
            .like(NewLike {
                idea_id,
                user_id: actor.id,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::debug!(
            %idea_id,
            user_id = %actor.id,
            created = outcome.is_created(),
            likes = outcome.idea().likes,
            "like processed"
        );
        Ok(outcome.into_idea().into())
    }
}
