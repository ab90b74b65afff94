//! Main bundle resolution logic.

use super::registry::AppRegistry;
use super::types::{BundleId, RegistryFault};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use tracing::{debug, error, trace};

/// Resolve a bundle identifier to the install location of the first
/// matching application.
///
/// Returns `None` on unsupported platforms, for empty identifiers, when no
/// matching application is installed, and on any fault inside the native
/// query chain. Resolution failure is never observable as an error.
pub fn locate_app_bundle(bundle_id: &str) -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        locate_with_registry(&super::launch_services::LaunchServices, true, bundle_id)
    }
    #[cfg(not(target_os = "macos"))]
    {
        locate_with_registry(&UnsupportedRegistry, false, bundle_id)
    }
}

/// Resolve with an injected registry (for testing).
///
/// `available` is the platform capability: when false the registry is never
/// touched and the answer is `None` for any input.
pub fn locate_with_registry<R: AppRegistry>(
    registry: &R,
    available: bool,
    bundle_id: &str,
) -> Option<PathBuf> {
    if !available {
        trace!(bundle_id, "application registry unavailable on this platform");
        return None;
    }

    let Some(id) = BundleId::new(bundle_id) else {
        debug!("refusing to resolve an empty bundle identifier");
        return None;
    };

    // The native boundary must never take the caller down with it: any
    // panic out of a registry stage is caught here, logged, and collapsed
    // into the ordinary "not found" answer.
    match panic::catch_unwind(AssertUnwindSafe(|| query_chain(registry, &id))) {
        Ok(Ok(path)) => {
            debug!(bundle_id = %id, path = %path.display(), "resolved application bundle");
            Some(path)
        }
        Ok(Err(fault)) => {
            debug!(bundle_id = %id, %fault, "bundle resolution came back empty");
            None
        }
        Err(_) => {
            error!(bundle_id = %id, "panic while querying the application registry");
            None
        }
    }
}

/// The four-stage query. Stage handles drop at the end of this scope in
/// reverse acquisition order, on success and on every `?` early return.
fn query_chain<R: AppRegistry>(registry: &R, id: &BundleId) -> Result<PathBuf, RegistryFault> {
    let ident = registry.create_identifier(id)?;
    let matches = registry.copy_application_urls(&ident)?;
    if registry.match_count(&matches)? == 0 {
        return Err(RegistryFault::NoMatches);
    }
    // First match in service order; the registry makes no ordering promise
    // and neither do we.
    registry.first_match_path(&matches)
}

/// Stand-in registry for platforms without an application registry. The
/// capability flag is always false there, so no method is ever reached.
#[cfg(not(target_os = "macos"))]
struct UnsupportedRegistry;

#[cfg(not(target_os = "macos"))]
impl AppRegistry for UnsupportedRegistry {
    type Ident = ();
    type Matches = ();

    fn create_identifier(&self, _id: &BundleId) -> Result<(), RegistryFault> {
        Err(RegistryFault::NoIdentifier)
    }

    fn copy_application_urls(&self, _ident: &()) -> Result<(), RegistryFault> {
        Err(RegistryFault::QueryFailed)
    }

    fn match_count(&self, _matches: &()) -> Result<usize, RegistryFault> {
        Err(RegistryFault::MissingEntry)
    }

    fn first_match_path(&self, _matches: &()) -> Result<PathBuf, RegistryFault> {
        Err(RegistryFault::PathConversion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{MockRegistry, Stage};
    use std::path::PathBuf;

    #[test]
    fn empty_identifier_resolves_to_none() {
        let registry = MockRegistry::new().with_bundle("org.videolan.vlc", "/Applications/VLC.app");

        assert_eq!(locate_with_registry(&registry, true, ""), None);
        // Rejected before the query chain starts.
        assert_eq!(registry.stage_calls(), 0);
    }

    #[test]
    fn unknown_identifier_resolves_to_none() {
        let registry = MockRegistry::new();

        assert_eq!(locate_with_registry(&registry, true, "com.example.absent"), None);
        assert_eq!(registry.live_handles(), 0);
    }

    #[test]
    fn known_identifier_resolves_to_bundle_path() {
        let registry = MockRegistry::new().with_bundle("org.videolan.vlc", "/Applications/VLC.app");

        let path = locate_with_registry(&registry, true, "org.videolan.vlc");

        assert_eq!(path, Some(PathBuf::from("/Applications/VLC.app")));
        assert_eq!(registry.live_handles(), 0);
    }

    #[test]
    fn multiple_matches_take_the_first_in_service_order() {
        let registry = MockRegistry::new()
            .with_bundle("org.videolan.vlc", "/Applications/VLC.app")
            .with_bundle("org.videolan.vlc", "/Users/me/Applications/VLC.app");

        let path = locate_with_registry(&registry, true, "org.videolan.vlc");

        assert_eq!(path, Some(PathBuf::from("/Applications/VLC.app")));
    }

    #[test]
    fn unavailable_platform_never_touches_the_registry() {
        let registry = MockRegistry::new().with_bundle("org.videolan.vlc", "/Applications/VLC.app");

        assert_eq!(locate_with_registry(&registry, false, "org.videolan.vlc"), None);
        assert_eq!(registry.stage_calls(), 0);
    }

    #[test]
    fn fault_at_any_stage_collapses_to_none() {
        for stage in Stage::ALL {
            let registry = MockRegistry::new()
                .with_bundle("org.videolan.vlc", "/Applications/VLC.app")
                .failing_at(stage);

            assert_eq!(
                locate_with_registry(&registry, true, "org.videolan.vlc"),
                None,
                "fault at {stage:?} must resolve to None"
            );
            assert_eq!(registry.live_handles(), 0, "leak after fault at {stage:?}");
        }
    }

    #[test]
    fn panic_at_any_stage_collapses_to_none() {
        for stage in Stage::ALL {
            let registry = MockRegistry::new()
                .with_bundle("org.videolan.vlc", "/Applications/VLC.app")
                .panicking_at(stage);

            assert_eq!(
                locate_with_registry(&registry, true, "org.videolan.vlc"),
                None,
                "panic at {stage:?} must resolve to None"
            );
            assert_eq!(registry.live_handles(), 0, "leak after panic at {stage:?}");
        }
    }

    #[test]
    fn repeated_misses_do_not_leak_handles() {
        let registry = MockRegistry::new();

        for _ in 0..1000 {
            assert_eq!(locate_with_registry(&registry, true, "com.example.absent"), None);
        }

        assert_eq!(registry.live_handles(), 0);
    }
}
