//! meterwire observability plugin.
//!
//! Builds an OpenTelemetry metrics pipeline with a Prometheus exporter at boot,
//! installs it as the process-wide meter provider, and invites observable
//! subsystems in the host container to register their own instruments.

pub mod config;
pub mod discovery;
pub mod pipeline;
pub mod provider;
pub mod router;

pub use config::ObservabilityConfig;
pub use provider::{ObservabilityServiceProvider, BINDING, VERSION};
