use super::IdeaQueryService;
use crate::application::{dto::IdeaDto, error::ApplicationResult};

impl IdeaQueryService {
    pub async fn list_ideas(&self) -> ApplicationResult<Vec<IdeaDto>> {
        let ideas = self.idea_repo.list().await?;
        Ok(ideas.into_iter().map(Into::into).collect())
    }
}
