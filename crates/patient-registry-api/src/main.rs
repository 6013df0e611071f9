use anyhow::Context;
use patient_registry_api::{app, Config};
use patient_registry_core::{JsonStore, Registry};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    let store = JsonStore::new(config.data_file.clone());
    store
        .create_if_missing()
        .with_context(|| format!("initializing {}", config.data_file.display()))?;
    let registry = Registry::new(store);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, data_file = %config.data_file.display(), "patient registry listening");
    axum::serve(listener, app(registry)).await?;
    Ok(())
}
