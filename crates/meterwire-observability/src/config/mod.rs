//! Observability config loader (strict parsing of the `observability` block).

pub mod schema;

use std::fs;

use meterwire_core::error::{MeterwireError, Result};

pub use schema::{ConfigFile, ObservabilityConfig};

pub fn load_from_file(path: &str) -> Result<ObservabilityConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MeterwireError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ObservabilityConfig> {
    if s.trim().is_empty() {
        return Ok(ObservabilityConfig::default());
    }
    let file: ConfigFile = serde_yaml::from_str(s)
        .map_err(|e| MeterwireError::Config(format!("invalid yaml: {e}")))?;
    Ok(file.observability)
}
