//! meterwire core: host contracts, capability traits, and the shared error
//! surface.
//!
//! Plugins depend on this crate to talk to a host without knowing its concrete
//! container type. A minimal `Container` is included for hosts that do not
//! bring their own.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here; every fallible path
//! surfaces as `MeterwireError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod foundation;

/// Shared result type.
pub use error::{BootStage, MeterwireError, Result};
