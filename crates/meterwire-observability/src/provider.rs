//! Observability plugin: owns the metrics pipeline for the host's lifetime.

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use parking_lot::Mutex;

use meterwire_core::error::{MeterwireError, Result};
use meterwire_core::foundation::{Application, Binding, Instance, ServiceProvider};

use crate::config::ObservabilityConfig;
use crate::discovery;
use crate::pipeline::{MetricsPipeline, PipelineBuilder, SdkPipelineBuilder};

/// Binding key the provider registers itself under.
pub const BINDING: &str = "observability";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct ObservabilityServiceProvider {
    config: ObservabilityConfig,
    builder: Box<dyn PipelineBuilder>,
    pipeline: Mutex<Option<Box<dyn MetricsPipeline>>>,
}

impl ObservabilityServiceProvider {
    pub fn new(config: ObservabilityConfig) -> Self {
        Self::with_builder(config, SdkPipelineBuilder)
    }

    pub fn with_builder(
        config: ObservabilityConfig,
        builder: impl PipelineBuilder + 'static,
    ) -> Self {
        Self {
            config,
            builder: Box::new(builder),
            pipeline: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &ObservabilityConfig {
        &self.config
    }

    pub fn is_booted(&self) -> bool {
        self.pipeline.lock().is_some()
    }

    /// Same handle that boot installed globally; `None` before boot or
    /// after shutdown.
    pub fn meter_provider(&self) -> Option<SdkMeterProvider> {
        self.pipeline.lock().as_ref().map(|p| p.meter_provider())
    }

    /// Text exposition of the active pipeline, for a host's `/metrics` route.
    pub fn render_metrics(&self) -> Result<String> {
        match self.pipeline.lock().as_ref() {
            Some(p) => p.render(),
            None => Err(MeterwireError::NotBooted),
        }
    }
}

impl Default for ObservabilityServiceProvider {
    fn default() -> Self {
        Self::new(ObservabilityConfig::default())
    }
}

impl Binding for ObservabilityServiceProvider {}

impl ServiceProvider for ObservabilityServiceProvider {
    fn name(&self) -> &'static str {
        BINDING
    }

    fn version(&self) -> &'static str {
        VERSION
    }

    fn dependencies(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn register(self: Arc<Self>, app: &dyn Application) -> Result<()> {
        app.singleton(BINDING, Box::new(move || Ok(Arc::clone(&self) as Instance)))
    }

    fn boot(&self, app: &dyn Application) -> Result<()> {
        if !self.config.enabled {
            tracing::info!("observability disabled");
            return Ok(());
        }

        {
            let mut slot = self.pipeline.lock();
            if slot.is_some() {
                tracing::warn!("observability already booted; keeping existing pipeline");
                return Ok(());
            }

            // Everything is built before the global is touched, so a failed
            // boot leaves no partial state behind.
            let pipeline = self.builder.build(&self.config).map_err(|e| {
                tracing::warn!(error=%e, "observability boot failed");
                e
            })?;
            global::set_meter_provider(pipeline.meter_provider());
            *slot = Some(pipeline);
        }

        let observables = discovery::instrument_active_plugins(app);
        tracing::info!(
            service=%self.config.service_name,
            exporter=%self.config.exporter,
            observables,
            "observability booted"
        );
        Ok(())
    }

    fn shutdown(&self, _app: &dyn Application) -> Result<()> {
        let Some(pipeline) = self.pipeline.lock().take() else {
            return Ok(());
        };
        pipeline.shutdown()?;
        tracing::info!("observability shut down");
        Ok(())
    }
}
