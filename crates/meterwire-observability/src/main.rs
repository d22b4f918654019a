//! meterwire demo host
//!
//! - Loads the `observability` block from `METERWIRE_CONFIG` (default
//!   `meterwire.yaml`, defaults when absent)
//! - Drives the provider through register -> boot -> shutdown
//! - Serves the scrape endpoint on `METERWIRE_LISTEN` until ctrl-c

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use meterwire_core::foundation::{Container, ServiceProvider};
use meterwire_observability::{config, router, ObservabilityConfig, ObservabilityServiceProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("METERWIRE_CONFIG").unwrap_or_else(|_| "meterwire.yaml".into());
    let cfg = if Path::new(&path).exists() {
        config::load_from_file(&path)?
    } else {
        tracing::info!(%path, "config file not found, using defaults");
        ObservabilityConfig::default()
    };

    let listen: SocketAddr = std::env::var("METERWIRE_LISTEN")
        .unwrap_or_else(|_| "0.0.0.0:9464".into())
        .parse()?;

    let app = Container::new();
    let provider = Arc::new(ObservabilityServiceProvider::new(cfg));
    Arc::clone(&provider).register(&app)?;
    provider.boot(&app)?;

    tracing::info!(%listen, "meterwire metrics endpoint starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;
    let signal = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    router::serve(listener, provider, &app, signal).await?;
    Ok(())
}
