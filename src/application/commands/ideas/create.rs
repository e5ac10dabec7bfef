use super::IdeaCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, IdeaDto},
        error::ApplicationResult,
    },
    domain::idea::{IdeaDescription, IdeaTitle, NewIdea},
};

pub struct CreateIdeaCommand {
    pub title: String,
    pub description: Option<String>,
}

impl IdeaCommandService {
    /// The owner is always the authenticated caller.
    pub async fn create_idea(
        &self,
        actor: &AuthenticatedUser,
        command: CreateIdeaCommand,
    ) -> ApplicationResult<IdeaDto> {
        let title = IdeaTitle::new(command.title)?;
        let description = command.description.map(IdeaDescription::new).transpose()?;

        let new_idea = NewIdea {
            title,
            description,
            owner_id: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.idea_repo.insert(new_idea).await?;
        tracing::info!(idea_id = %created.idea.id, owner_id = %actor.id, "idea created");
        Ok(created.into())
    }
}
