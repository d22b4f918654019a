//! Host contracts shared by plugins.
//!
//! A host owns a binding table (`Application`), drives each plugin through the
//! `ServiceProvider` lifecycle, and lets resolved instances advertise optional
//! capabilities through `Binding`.

pub mod application;
pub mod binding;
pub mod container;
pub mod provider;

pub use application::{Application, Factory, Instance};
pub use binding::{Binding, Observable};
pub use container::Container;
pub use provider::ServiceProvider;
