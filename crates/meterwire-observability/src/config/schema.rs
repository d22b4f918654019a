use serde::Deserialize;

/// Top-level document. Only the `observability` namespace is read; other
/// plugins own the rest of the file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservabilityConfig {
    /// Master switch. When false, boot installs nothing.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Reported as `service.name` on every metric.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Exporter kind, e.g. "prometheus".
    #[serde(default = "default_exporter")]
    pub exporter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            service_name: default_service_name(),
            exporter: default_exporter(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
fn default_service_name() -> String {
    "meterwire".into()
}
fn default_exporter() -> String {
    "prometheus".into()
}
