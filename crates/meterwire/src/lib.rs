//! Top-level facade crate for meterwire.
//!
//! Re-exports the host contracts and the observability plugin so users can
//! depend on a single crate.

pub mod core {
    pub use meterwire_core::*;
}

pub mod observability {
    pub use meterwire_observability::*;
}
