//! Gensourei Server: allow-list gated registration and login
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use gensourei_api::AppState;
use gensourei_auth::{
    AllowListCache, IdentitySource, PasswordHasher, RegistrationGate, SessionAuthenticator,
};
use gensourei_cache::{MemoryCredentialStore, MemorySessionStore};
use gensourei_core::config::{AppConfig, SessionStoreKind};
use gensourei_core::error::AppError;
use gensourei_core::traits::{CredentialStore, SessionStore};
use gensourei_database::{DatabasePool, SessionRepository, UserRepository};
use gensourei_upstream::{HttpEventLogFetcher, HttpIdentityDirectory};
use gensourei_worker::CronScheduler;
use gensourei_worker::jobs::{AllowListRefreshJob, SessionPurgeJob};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("GENSOUREI_ENV").unwrap_or_else(|_| "development".to_string());
    let mut config = AppConfig::load(&env)?;

    // Hosting platforms hand the listen port over in PORT.
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| AppError::configuration(format!("Invalid PORT value '{}'", port)))?;
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Gensourei v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Persistence ──────────────────────────────────────
    let db_pool = if config.database.enabled {
        let pool = DatabasePool::connect(&config.database).await?;
        if config.database.run_migrations {
            gensourei_database::run_migrations(pool.pool()).await?;
        }
        Some(pool)
    } else {
        tracing::warn!("Database disabled, accounts are kept in memory only");
        None
    };

    let credentials: Arc<dyn CredentialStore> = match &db_pool {
        Some(pool) => Arc::new(UserRepository::new(pool.pool().clone())),
        None => Arc::new(MemoryCredentialStore::new()),
    };

    let sessions: Arc<dyn SessionStore> = match (&config.session.store, &db_pool) {
        (SessionStoreKind::Database, Some(pool)) => {
            Arc::new(SessionRepository::new(pool.pool().clone()))
        }
        (SessionStoreKind::Database, None) => {
            tracing::warn!("Session store 'database' requested without a database, using memory");
            Arc::new(MemorySessionStore::new(&config.session))
        }
        (SessionStoreKind::Memory, _) => Arc::new(MemorySessionStore::new(&config.session)),
    };
    tracing::info!(store = %config.session.store, "Session store initialized");

    // ── Step 2: Upstream clients ─────────────────────────────────
    let http = gensourei_upstream::build_client(&config.upstream)?;
    let event_log = Arc::new(HttpEventLogFetcher::new(
        http.clone(),
        config.upstream.log_base_url.clone(),
    ));
    let directory = Arc::new(HttpIdentityDirectory::new(
        http,
        config.upstream.directory_base_url.clone(),
    ));

    // ── Step 3: Allow-list ───────────────────────────────────────
    if config.allowlist.source_id.is_empty() {
        tracing::warn!("allowlist.source_id is empty, every registration will be refused");
    }
    let allowlist = Arc::new(AllowListCache::new(event_log, &config.allowlist));
    if config.allowlist.refresh_on_startup {
        let outcome = allowlist.force_refresh().await;
        tracing::info!(?outcome, "Initial allow-list load");
    }

    // ── Step 4: Auth system ──────────────────────────────────────
    tracing::info!("Initializing authentication system...");
    let hasher = PasswordHasher::new(&config.auth)?;
    let registration = Arc::new(RegistrationGate::new(
        Arc::clone(&allowlist),
        IdentitySource::new(directory),
        Arc::clone(&credentials),
        hasher.clone(),
        &config.auth,
    ));
    let authenticator = Arc::new(SessionAuthenticator::new(
        credentials,
        sessions,
        hasher,
        config.session.ttl(),
        config.auth.max_secret_length,
    ));

    // ── Step 5: Background scheduler ─────────────────────────────
    let mut scheduler = if config.worker.enabled {
        let scheduler = CronScheduler::new().await?;
        scheduler
            .register_allowlist_refresh(
                AllowListRefreshJob::new(Arc::clone(&allowlist)),
                allowlist.ttl(),
            )
            .await?;
        scheduler
            .register_session_purge(
                SessionPurgeJob::new(Arc::clone(&authenticator)),
                &config.worker.session_purge_cron,
            )
            .await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Background worker disabled");
        None
    };

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        allowlist,
        registration,
        authenticator,
    };

    let app = gensourei_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Gensourei server listening on {}", addr);

    // ── Step 7: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(scheduler) = scheduler.as_mut() {
        let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
        match tokio::time::timeout(grace, scheduler.shutdown()).await {
            Ok(result) => result?,
            Err(_) => tracing::warn!("Scheduler did not stop within the grace period"),
        }
    }

    if let Some(pool) = db_pool {
        pool.close().await;
    }

    tracing::info!("Gensourei server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
