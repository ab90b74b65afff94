//! Application registry trait for testable bundle resolution.

use super::types::{BundleId, RegistryFault};
use std::path::PathBuf;

/// The OS application-registration service, modelled as the four stages of
/// one lookup (injectable for testing).
///
/// Stage handles (`Ident`, `Matches`) own whatever transient native
/// resources the stage acquired. Dropping a handle releases its resource
/// exactly once, so the orchestration in `resolve` gets release-in-reverse
/// acquisition order on every exit path for free, including early returns
/// on a failed stage.
pub trait AppRegistry {
    /// Native string handle for the identifier, scoped to one lookup.
    type Ident;
    /// Collection of matching application locations.
    type Matches;

    /// Stage 1: turn the bundle identifier into a native string handle.
    fn create_identifier(&self, id: &BundleId) -> Result<Self::Ident, RegistryFault>;

    /// Stage 2: query the registry for applications matching the identifier.
    fn copy_application_urls(&self, ident: &Self::Ident) -> Result<Self::Matches, RegistryFault>;

    /// Stage 3: number of matches in the collection.
    fn match_count(&self, matches: &Self::Matches) -> Result<usize, RegistryFault>;

    /// Stage 4: filesystem path of the first match, in whatever order the
    /// service returned them.
    fn first_match_path(&self, matches: &Self::Matches) -> Result<PathBuf, RegistryFault>;
}

/// Test registry with per-stage fault and panic injection plus handle
/// accounting.
#[cfg(test)]
pub(crate) use mock::{MockRegistry, Stage};
