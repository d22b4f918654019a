use std::sync::Arc;

use crate::error::Result;

use super::application::Application;

/// Plugin lifecycle driven by the host: `register` for every plugin first,
/// then `boot`, then `shutdown` on exit. Each phase runs once.
pub trait ServiceProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn version(&self) -> &'static str;

    /// Names of plugins that must boot before this one.
    fn dependencies(&self) -> Vec<&'static str>;

    fn register(self: Arc<Self>, app: &dyn Application) -> Result<()>;
    fn boot(&self, app: &dyn Application) -> Result<()>;
    fn shutdown(&self, app: &dyn Application) -> Result<()>;
}
