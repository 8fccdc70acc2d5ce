// src/main.rs

use std::sync::Arc;

use dotenvy::dotenv;
use festival_quiz::config::Config;
use festival_quiz::models::question::QuestionBank;
use festival_quiz::routes;
use festival_quiz::state::AppState;
use festival_quiz::store::SeededRankingStore;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let bank = match &config.questions_path {
        Some(path) => {
            tracing::info!("Loading question bank from {}", path.display());
            QuestionBank::from_json_file(path)?
        }
        None => QuestionBank::builtin(),
    };
    tracing::info!("Question bank ready: {} question(s)", bank.len());

    let state = AppState::new(config.clone(), bank, Arc::new(SeededRankingStore::new()))?;

    // Drop sessions nobody has touched for a while
    let _sweeper = state.sessions.spawn_sweeper(config.session_sweep_interval);

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Quiz listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
