use std::sync::Arc;
use anyhow::Context;
use galaxy_api::{app, admin::AdminSessions, routes::{MatchMode, RouteMatcher}, AppState};
use galaxy_core::clock::SystemClock;
use galaxy_core::repository::{SessionStore, StaticAdminCredential};
use galaxy_store::app_config::{Config, SessionBackend};
use galaxy_store::{DbClient, MemorySessionStore, PgBookingRepository, PgContactRepository, RedisSessionStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "galaxy_api=debug,galaxy_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Galaxy API on port {}", config.server.port);

    let db = DbClient::new(&config.database)
        .await
        .context("Failed to connect to Postgres")?;
    if config.database.run_migrations {
        db.migrate().await?;
    }

    let clock = Arc::new(SystemClock);

    let session_store: Arc<dyn SessionStore> = match config.sessions.backend {
        SessionBackend::Memory => Arc::new(MemorySessionStore::new()),
        SessionBackend::Redis => {
            let url = config
                .sessions
                .redis_url
                .as_deref()
                .context("sessions.redis_url is required for the redis backend")?;
            Arc::new(RedisSessionStore::new(url, clock.clone()).await.context("Failed to open Redis client")?)
        }
    };
    tracing::info!("Admin sessions backed by {:?} store", config.sessions.backend);

    let sessions = AdminSessions::new(
        session_store,
        Arc::new(StaticAdminCredential::new(config.admin.password.clone())),
        clock,
        config.admin.session_ttl().context("Invalid admin session TTL")?,
    );

    let mode = if config.server.strict_routes { MatchMode::Segments } else { MatchMode::Substring };

    let app_state = AppState {
        bookings: Arc::new(PgBookingRepository::new(db.pool.clone())),
        contacts: Arc::new(PgContactRepository::new(db.pool.clone())),
        sessions: Arc::new(sessions),
        routes: RouteMatcher::new(mode),
    };

    let app = app(app_state);

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
