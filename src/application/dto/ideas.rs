use crate::domain::idea::IdeaWithLikes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IdeaDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i64,
    pub likes: u64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<IdeaWithLikes> for IdeaDto {
    fn from(view: IdeaWithLikes) -> Self {
        let IdeaWithLikes { idea, likes } = view;
        Self {
            id: idea.id.into(),
            title: idea.title.into(),
            description: idea.description.map(String::from),
            owner_id: idea.owner_id.into(),
            likes,
            created_at: idea.created_at,
        }
    }
}
