mod analytics;
mod app;
mod auth;
mod certificates;
mod config;
mod contact;
mod db;
mod error;
mod experience;
mod mailer;
mod profile;
mod projects;
mod services;
mod skills;
mod state;
mod testimonials;
mod uploads;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "portfolio_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;

    db::ensure_schema(&state.db).await?;
    tokio::fs::create_dir_all(&state.config.upload_dir).await?;

    let app = app::build_app(state);
    app::serve(app).await
}
