mod config;
mod db;
mod routes;
mod services;
mod state;

use config::{DbConfig, LISTEN_PORT, MIGRATION_PATH};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    let pool = match db::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "unable to connect to database");
            std::process::exit(1);
        }
    };

    let schema = match db::load_schema(MIGRATION_PATH) {
        Ok(schema) => schema,
        Err(e) => {
            tracing::error!(error = %e, path = MIGRATION_PATH, "unable to read migration script");
            std::process::exit(1);
        }
    };

    let state = state::AppState::new(pool);

    // Best-effort: a failed migration leaves the service running but not ready.
    match db::apply_schema(&state.pool, &schema).await {
        Ok(()) => {
            state.mark_ready();
            tracing::info!("migration applied");
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to run migration, serving in not-ready state");
        }
    }

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{LISTEN_PORT}"))
        .await
        .expect("failed to bind");

    tracing::info!(port = %LISTEN_PORT, "notesvc listening");
    axum::serve(listener, app).await.expect("server failed");
}
