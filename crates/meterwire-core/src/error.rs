//! Shared error type across meterwire crates.

use std::fmt;

use thiserror::Error;

/// Boot phase in which pipeline construction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStage {
    Exporter,
    Resource,
    MeterProvider,
}

impl BootStage {
    pub fn as_str(self) -> &'static str {
        match self {
            BootStage::Exporter => "exporter",
            BootStage::Resource => "resource",
            BootStage::MeterProvider => "meter provider",
        }
    }
}

impl fmt::Display for BootStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MeterwireError>;

/// Unified error type used by core and observability.
#[derive(Debug, Error)]
pub enum MeterwireError {
    #[error("config: {0}")]
    Config(String),
    #[error("failed to create {stage}: {reason}")]
    Boot { stage: BootStage, reason: String },
    #[error("unsupported metrics exporter: {0}")]
    UnsupportedExporter(String),
    #[error("metrics export failed: {0}")]
    Export(String),
    /// SDK shutdown failure, kept as the source error.
    #[error("metrics shutdown failed: {0}")]
    Shutdown(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("metrics endpoint failed: {0}")]
    Serve(#[source] std::io::Error),
    #[error("invalid binding: {0}")]
    InvalidBinding(String),
    #[error("binding not found: {0}")]
    NotBound(String),
    #[error("failed to resolve {key}: {reason}")]
    Resolve { key: String, reason: String },
    #[error("metrics pipeline is not booted")]
    NotBooted,
}

impl MeterwireError {
    pub fn boot(stage: BootStage, reason: impl fmt::Display) -> Self {
        MeterwireError::Boot {
            stage,
            reason: reason.to_string(),
        }
    }

    /// Stage that failed, when this is a boot error.
    pub fn boot_stage(&self) -> Option<BootStage> {
        match self {
            MeterwireError::Boot { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
