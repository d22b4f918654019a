use std::sync::Arc;

use crate::error::Result;

use super::binding::Binding;

/// Resolved binding.
pub type Instance = Arc<dyn Binding>;

/// Lazily invoked constructor for a singleton binding.
pub type Factory = Box<dyn Fn() -> Result<Instance> + Send + Sync>;

/// Host services a plugin may consume.
pub trait Application: Send + Sync {
    /// Register a process-wide singleton built on first `make`.
    fn singleton(&self, key: &str, factory: Factory) -> Result<()>;

    /// Whether `key` has a binding.
    fn bound(&self, key: &str) -> bool;

    /// Resolve `key`, constructing the singleton if needed.
    fn make(&self, key: &str) -> Result<Instance>;

    /// Attach `key` to a named group. Tagging the same key twice is a no-op.
    fn tag(&self, tag: &str, key: &str);

    /// Keys attached to `tag`, in tagging order.
    fn tagged(&self, tag: &str) -> Vec<String>;
}
