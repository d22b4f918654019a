//! Shared fakes for provider tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use opentelemetry_sdk::metrics::SdkMeterProvider;

use meterwire_core::error::{BootStage, MeterwireError, Result};
use meterwire_core::foundation::{Application, Binding, Container, Instance, Observable};
use meterwire_observability::config::ObservabilityConfig;
use meterwire_observability::pipeline::{MetricsPipeline, PipelineBuilder};

#[derive(Default, Clone)]
pub struct Counters {
    pub builds: Arc<AtomicUsize>,
    pub shutdowns: Arc<AtomicUsize>,
}

impl Counters {
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
    pub fn shutdowns(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }
}

pub struct FakePipeline {
    counters: Counters,
    shutdown_error: Option<String>,
    render_error: Option<String>,
    provider: SdkMeterProvider,
}

impl MetricsPipeline for FakePipeline {
    fn meter_provider(&self) -> SdkMeterProvider {
        self.provider.clone()
    }

    fn render(&self) -> Result<String> {
        match &self.render_error {
            Some(msg) => Err(MeterwireError::Export(msg.clone())),
            None => Ok("# fake\n".into()),
        }
    }

    fn shutdown(&self) -> Result<()> {
        self.counters.shutdowns.fetch_add(1, Ordering::SeqCst);
        match &self.shutdown_error {
            Some(msg) => Err(MeterwireError::Shutdown(msg.clone().into())),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct FakeBuilder {
    pub counters: Counters,
    pub fail_at: Option<BootStage>,
    pub shutdown_error: Option<String>,
    pub render_error: Option<String>,
}

impl PipelineBuilder for FakeBuilder {
    fn build(&self, _cfg: &ObservabilityConfig) -> Result<Box<dyn MetricsPipeline>> {
        self.counters.builds.fetch_add(1, Ordering::SeqCst);
        if let Some(stage) = self.fail_at {
            return Err(MeterwireError::boot(stage, "injected"));
        }
        Ok(Box::new(FakePipeline {
            counters: self.counters.clone(),
            shutdown_error: self.shutdown_error.clone(),
            render_error: self.render_error.clone(),
            provider: SdkMeterProvider::builder().build(),
        }))
    }
}

/// Subsystem that opts into metrics and counts hook invocations.
#[derive(Default)]
pub struct ObservableSubsystem {
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl ObservableSubsystem {
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Binding for ObservableSubsystem {
    fn as_observable(&self) -> Option<&dyn Observable> {
        Some(self)
    }
}

impl Observable for ObservableSubsystem {
    fn register_metrics(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(MeterwireError::Export("instrument rejected".into()));
        }
        Ok(())
    }
}

/// Subsystem without the capability.
pub struct PlainSubsystem;

impl Binding for PlainSubsystem {}

pub fn enabled_config() -> ObservabilityConfig {
    ObservabilityConfig {
        service_name: "checkout".into(),
        ..ObservabilityConfig::default()
    }
}

pub fn bind<B: Binding + 'static>(app: &Container, key: &str, inst: Arc<B>) {
    app.singleton(key, Box::new(move || Ok(Arc::clone(&inst) as Instance)))
        .unwrap();
}

pub fn bind_failing(app: &Container, key: &str) {
    app.singleton(
        key,
        Box::new(|| Err(MeterwireError::Config("backend unreachable".into()))),
    )
    .unwrap();
}
