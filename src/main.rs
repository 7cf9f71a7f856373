use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitdeck::config::Config;
use fitdeck::guidance::OpenAiProvider;
use fitdeck::handlers::guidance::GuidanceState;
use fitdeck::routes;
use fitdeck::version::VERSION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitdeck=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!("fitdeck {}", VERSION);
    tracing::info!(
        "Content project {} / dataset {} (api v{}, cdn: {})",
        config.content.project_id,
        config.content.dataset,
        config.content.api_version,
        config.content.use_cdn
    );

    if config.llm.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; guidance requests will fail");
    }

    let provider = OpenAiProvider::new(config.llm.clone())?;
    let guidance_state = GuidanceState {
        provider: Arc::new(provider),
    };

    let app = routes::create_router(guidance_state);

    let addr = config.server_addr();
    tracing::info!("Starting guidance proxy at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
