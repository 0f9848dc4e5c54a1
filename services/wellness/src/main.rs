use sea_orm::Database;
use tracing::info;

use vitala_core::config::Config as _;
use vitala_wellness::config::WellnessConfig;
use vitala_wellness::router::build_router;
use vitala_wellness::state::AppState;

#[tokio::main]
async fn main() {
    vitala_core::tracing::init_tracing("wellness");

    let config = WellnessConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.wellness_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("wellness service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
