use std::sync::Arc;

use crate::domain::idea::IdeaRepository;

pub struct IdeaQueryService {
    pub(super) idea_repo: Arc<dyn IdeaRepository>,
}

impl IdeaQueryService {
    pub fn new(idea_repo: Arc<dyn IdeaRepository>) -> Self {
        Self { idea_repo }
    }
}
