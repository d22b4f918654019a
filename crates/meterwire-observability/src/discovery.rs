//! Best-effort capability discovery over host bindings.
//!
//! Subsystems opt into metrics by exposing `Observable` from their binding.
//! Nothing here may fail boot: lookup, resolution, and hook errors are
//! swallowed.

use meterwire_core::foundation::Application;

/// Bindings checked on every boot, in order.
pub const WELL_KNOWN_BINDINGS: [&str; 4] = ["database", "cache", "queue", "filesystem"];

/// Tag other plugins attach to their binding during `register` to be instrumented
/// in addition to the well-known names.
pub const OBSERVABLE_TAG: &str = "observability.observable";

/// Well-known names followed by tagged opt-ins, first occurrence wins.
pub fn candidates(app: &dyn Application) -> Vec<String> {
    let mut out: Vec<String> = WELL_KNOWN_BINDINGS.iter().map(|s| s.to_string()).collect();
    for key in app.tagged(OBSERVABLE_TAG) {
        if !out.contains(&key) {
            out.push(key);
        }
    }
    out
}

/// Invoke `register_metrics` on every observable candidate.
/// Returns how many hooks were invoked, regardless of their outcome.
pub fn instrument_active_plugins(app: &dyn Application) -> usize {
    let mut invoked = 0;

    for key in candidates(app) {
        if !app.bound(&key) {
            continue;
        }

        let inst = match app.make(&key) {
            Ok(inst) => inst,
            Err(e) => {
                tracing::debug!(binding=%key, error=%e, "discovery: resolve failed");
                continue;
            }
        };

        let Some(observable) = inst.as_observable() else {
            continue;
        };

        invoked += 1;
        if let Err(e) = observable.register_metrics() {
            tracing::debug!(binding=%key, error=%e, "discovery: register_metrics failed");
        }
    }

    invoked
}
