use ideahub::application::{
    ports::{ClockPort, PasswordHasherPort, TokenManagerPort},
    services::ApplicationServices,
};
use ideahub::config::AppConfig;
use ideahub::domain::{idea::IdeaRepository, user::UserRepository};
use ideahub::infrastructure::{
    database,
    repositories::{SqliteIdeaRepository, SqliteUserRepository},
    security::{password::Argon2PasswordHasher, token::JwtTokenManager},
    seed,
    time::SystemClock,
};
use ideahub::presentation::http::{routes::build_router, state::HttpState};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = bootstrap().await {
        tracing::error!(error = %format!("{err:#}"), "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool = database::init_pool(config.database_url())
        .await
        .context("opening database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let idea_repo: Arc<dyn IdeaRepository> = Arc::new(SqliteIdeaRepository::new(pool.clone()));

    if config.seed_demo_data() {
        if let Err(err) = seed::seed_demo_data(
            &pool,
            user_repo.as_ref(),
            password_hasher.as_ref(),
            clock.as_ref(),
        )
        .await
        {
            tracing::warn!(error = %format!("{err:#}"), "demo data seeding failed");
        }
    }

    let token_manager: Arc<TokenManagerPort> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        config.jwt_algorithm(),
        config.token_ttl(),
    )?);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        idea_repo,
        password_hasher,
        token_manager,
        clock,
    ));

    let state = HttpState {
        services,
        db_pool: pool,
        database_scheme: database::url_scheme(config.database_url()).map(str::to_string),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
