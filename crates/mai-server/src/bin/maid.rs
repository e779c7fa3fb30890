use mai_server::{serve, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let pipeline = config.build_pipeline()?;

    tracing::info!(
        model = %config.llm.model,
        forecast_days = config.weather.forecast_days,
        "starting mai-server"
    );
    serve(&config.bind_addr(), AppState::new(pipeline)).await?;
    Ok(())
}
