use tracing_subscriber::{EnvFilter, fmt};

use veterinarians::shell::config::AppConfig;
use veterinarians::shell::http::router;
use veterinarians::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let app = router(AppState::in_memory());

    tracing::info!("Veterinarian registration form: http://{}/form", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
