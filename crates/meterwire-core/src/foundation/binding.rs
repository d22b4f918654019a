use crate::error::Result;

/// An instance stored in the host's binding table.
///
/// Capabilities are opt-in: an implementor overrides the matching accessor and
/// returns `Some(self)`. Everything else inherits `None`.
pub trait Binding: Send + Sync {
    /// "I can register my own metrics."
    fn as_observable(&self) -> Option<&dyn Observable> {
        None
    }
}

/// Subsystems that register their own instruments against the global meter
/// provider once observability has booted.
pub trait Observable {
    fn register_metrics(&self) -> Result<()>;
}
