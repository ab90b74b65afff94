//! Discovery of installed media player applications.
//!
//! The crate has two layers:
//! - [`locator`]: resolve a reverse-DNS bundle identifier to the filesystem
//!   path of the first matching installed application, using the operating
//!   system's application registry (Launch Services on macOS).
//! - [`players`]: fixed lookups for the well-known external players (IINA,
//!   VLC) that append the executable location inside the resolved bundle.
//!
//! Resolution never fails loudly: on unsupported platforms, on lookup
//! misses, and on any fault inside the native query chain the answer is
//! simply `None`. Callers treat an absent result as "feature unavailable".

pub mod locator;
pub mod players;

pub use locator::{BundleId, locate_app_bundle};
pub use players::{PlayerApp, find_iina_player, find_vlc_player};
