//! Trivia server: loads settings from env (and `.env`), prepares storage, serves the API.

use tokio::net::TcpListener;
use trivia_api::telemetry::init_tracing;
use trivia_api::{app, build_repository, AppState, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("trivia_api=info,trivia_server=info,tower_http=info");

    let settings = Settings::from_env()?;
    let repo = build_repository(&settings).await?;
    let state = AppState::new(repo, settings.questions_per_page);
    let router = app(state, &settings);

    let listener = TcpListener::bind(settings.socket_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
