// src/application/services/mod.rs
mod gate;

use std::sync::Arc;

pub use gate::AuthorizationGate;

use crate::{
    application::{
        commands::{ideas::IdeaCommandService, users::UserCommandService},
        ports::{ClockPort, PasswordHasherPort, TokenManagerPort},
        queries::{ideas::IdeaQueryService, users::UserQueryService},
    },
    domain::{idea::IdeaRepository, user::UserRepository},
};

/// Wires repositories and ports into the workflow services. Built once at
/// startup and shared read-only across requests.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub idea_commands: Arc<IdeaCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub idea_queries: Arc<IdeaQueryService>,
    gate: Arc<AuthorizationGate>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        idea_repo: Arc<dyn IdeaRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let idea_commands = Arc::new(IdeaCommandService::new(
            Arc::clone(&idea_repo),
            Arc::clone(&clock),
        ));

        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let idea_queries = Arc::new(IdeaQueryService::new(Arc::clone(&idea_repo)));

        let gate = Arc::new(AuthorizationGate::new(token_manager, user_repo, clock));

        Self {
            user_commands,
            idea_commands,
            user_queries,
            idea_queries,
            gate,
        }
    }

    pub fn gate(&self) -> Arc<AuthorizationGate> {
        Arc::clone(&self.gate)
    }
}
