//! Axum router wiring for the scrape endpoint.
//!
//! The provider never listens on its own; hosts mount this router (or call
//! `render_metrics` themselves).

use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use meterwire_core::error::{MeterwireError, Result};
use meterwire_core::foundation::{Application, ServiceProvider};

use crate::provider::ObservabilityServiceProvider;

pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4";

pub fn build_router(provider: Arc<ObservabilityServiceProvider>) -> Router {
    Router::new()
        .route("/metrics", get(scrape))
        .with_state(provider)
}

/// Serve `/metrics` until `signal` resolves, then shut the provider down.
/// Shutdown runs even when the server fails; the server error wins.
pub async fn serve<F>(
    listener: TcpListener,
    provider: Arc<ObservabilityServiceProvider>,
    app: &dyn Application,
    signal: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let served = axum::serve(listener, build_router(Arc::clone(&provider)))
        .with_graceful_shutdown(signal)
        .await;

    let closed = provider.shutdown(app);
    if let Err(e) = served {
        if let Err(close_err) = &closed {
            tracing::warn!(error=%close_err, "observability shutdown failed after server error");
        }
        return Err(MeterwireError::Serve(e));
    }
    closed
}

async fn scrape(State(provider): State<Arc<ObservabilityServiceProvider>>) -> impl IntoResponse {
    match provider.render_metrics() {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body),
        Err(MeterwireError::NotBooted) => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            "metrics disabled\n".to_string(),
        ),
        Err(e) => {
            tracing::warn!(error=%e, "metrics render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain")],
                format!("{e}\n"),
            )
        }
    }
}
