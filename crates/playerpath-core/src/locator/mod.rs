//! Application bundle resolution.
//!
//! Resolves a bundle identifier (like `org.videolan.vlc`) to the install
//! location of the first matching application, via the OS application
//! registry.
//!
//! ## Architecture
//!
//! The locator is split into small, focused modules:
//! - `types`: `BundleId` and the internal `RegistryFault` taxonomy
//! - `registry`: the `AppRegistry` trait modelling the OS service as four
//!   stages with RAII handles (injectable for testing)
//! - `launch_services`: the real registry, backed by CoreFoundation and
//!   Launch Services (macOS only)
//! - `resolve`: orchestration - capability guard, the staged query chain,
//!   and the panic barrier around the native boundary
//!
//! Every failure mode collapses to `None`; callers cannot observe *why* a
//! lookup came back empty, only that it did.

mod registry;
mod resolve;
mod types;

#[cfg(target_os = "macos")]
mod launch_services;

pub use registry::AppRegistry;
pub use resolve::{locate_app_bundle, locate_with_registry};
pub use types::{BundleId, RegistryFault};

#[cfg(test)]
pub(crate) use registry::{MockRegistry, Stage};
