//! Metrics pipeline construction (exporter -> resource -> meter provider).
//!
//! Aggregation and exposition encoding belong to the OpenTelemetry SDK and the
//! `prometheus` registry; this module only assembles them. The builder is a
//! trait so hosts and tests can swap in their own pipeline.

use std::str::FromStr;

use opentelemetry::KeyValue;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::resource::SERVICE_NAME;
use prometheus::{Encoder, Registry, TextEncoder};

use meterwire_core::error::{BootStage, MeterwireError, Result};

use crate::config::ObservabilityConfig;

/// Exporter kinds that can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExporterKind {
    /// Pull-based text exposition scraped over HTTP.
    Prometheus,
}

impl FromStr for ExporterKind {
    type Err = MeterwireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prometheus" => Ok(ExporterKind::Prometheus),
            _ => Err(MeterwireError::UnsupportedExporter(s.to_string())),
        }
    }
}

/// A constructed pipeline owned by the provider between boot and shutdown.
pub trait MetricsPipeline: Send + Sync {
    /// Handle to install as the process-wide default.
    fn meter_provider(&self) -> SdkMeterProvider;

    /// Current metric values in text exposition format.
    fn render(&self) -> Result<String>;

    /// Flush and close. Called at most once per pipeline.
    fn shutdown(&self) -> Result<()>;
}

pub trait PipelineBuilder: Send + Sync {
    fn build(&self, cfg: &ObservabilityConfig) -> Result<Box<dyn MetricsPipeline>>;
}

/// Builds the SDK pipeline backed by a private Prometheus registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct SdkPipelineBuilder;

impl PipelineBuilder for SdkPipelineBuilder {
    fn build(&self, cfg: &ObservabilityConfig) -> Result<Box<dyn MetricsPipeline>> {
        let kind: ExporterKind = cfg.exporter.parse()?;

        // 1) Exporter
        let registry = Registry::new();
        let exporter = match kind {
            ExporterKind::Prometheus => opentelemetry_prometheus::exporter()
                .with_registry(registry.clone())
                .build()
                .map_err(|e| MeterwireError::boot(BootStage::Exporter, e))?,
        };

        // 2) Resource
        let resource = service_resource(&cfg.service_name)?;

        // 3) Meter provider
        let provider = SdkMeterProvider::builder()
            .with_reader(exporter)
            .with_resource(resource)
            .build();

        Ok(Box::new(PrometheusPipeline { registry, provider }))
    }
}

fn service_resource(service_name: &str) -> Result<Resource> {
    let name = service_name.trim();
    if name.is_empty() {
        return Err(MeterwireError::boot(BootStage::Resource, "service_name must not be empty"));
    }
    Ok(Resource::new(vec![KeyValue::new(SERVICE_NAME, name.to_string())]))
}

pub struct PrometheusPipeline {
    registry: Registry,
    provider: SdkMeterProvider,
}

impl MetricsPipeline for PrometheusPipeline {
    fn meter_provider(&self) -> SdkMeterProvider {
        self.provider.clone()
    }

    fn render(&self) -> Result<String> {
        let families = self.registry.gather();
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&families, &mut buf)
            .map_err(|e| MeterwireError::Export(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| MeterwireError::Export(e.to_string()))
    }

    fn shutdown(&self) -> Result<()> {
        self.provider
            .shutdown()
            .map_err(|e| MeterwireError::Shutdown(Box::new(e)))
    }
}
