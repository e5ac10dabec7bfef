use std::sync::Arc;

use crate::application::ports::ClockPort;
use crate::domain::idea::IdeaRepository;

pub struct IdeaCommandService {
    pub(super) idea_repo: Arc<dyn IdeaRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl IdeaCommandService {
    pub fn new(idea_repo: Arc<dyn IdeaRepository>, clock: Arc<ClockPort>) -> Self {
        Self { idea_repo, clock }
    }
}
