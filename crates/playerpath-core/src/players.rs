//! Lookups for the well-known external media players.
//!
//! Each player is described by its bundle identifier plus the fixed
//! executable location inside the application bundle. Resolution goes
//! through [`crate::locator`]; an uninstalled player is `None` end to end.

use crate::locator::{self, AppRegistry};
use std::path::PathBuf;

/// A well-known player application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerApp {
    /// Reverse-DNS bundle identifier the OS registry knows the app by.
    pub bundle_id: &'static str,
    /// Relative path from the bundle root to the launchable binary.
    pub executable: &'static str,
}

/// IINA (<https://iina.io>).
pub const IINA: PlayerApp = PlayerApp {
    bundle_id: "com.colliderli.iina",
    executable: "Contents/MacOS/iina",
};

/// VLC media player.
pub const VLC: PlayerApp = PlayerApp {
    bundle_id: "org.videolan.vlc",
    executable: "Contents/MacOS/VLC",
};

/// Path to the IINA binary, if IINA is installed.
pub fn find_iina_player() -> Option<PathBuf> {
    find_player(&IINA)
}

/// Path to the VLC binary, if VLC is installed.
pub fn find_vlc_player() -> Option<PathBuf> {
    find_player(&VLC)
}

/// Locate the player's bundle and point inside it at the executable.
pub fn find_player(app: &PlayerApp) -> Option<PathBuf> {
    locator::locate_app_bundle(app.bundle_id).map(|root| root.join(app.executable))
}

/// [`find_player`] with an injected registry (for testing).
pub fn find_player_with<R: AppRegistry>(
    registry: &R,
    available: bool,
    app: &PlayerApp,
) -> Option<PathBuf> {
    locator::locate_with_registry(registry, available, app.bundle_id)
        .map(|root| root.join(app.executable))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::MockRegistry;
    use std::path::PathBuf;

    #[test]
    fn installed_player_gets_the_executable_sub_path() {
        let registry =
            MockRegistry::new().with_bundle("org.videolan.vlc", "/Applications/VLC.app");

        let path = find_player_with(&registry, true, &VLC);

        assert_eq!(
            path,
            Some(PathBuf::from("/Applications/VLC.app/Contents/MacOS/VLC"))
        );
    }

    #[test]
    fn iina_uses_its_own_bundle_and_binary_name() {
        let registry =
            MockRegistry::new().with_bundle("com.colliderli.iina", "/Applications/IINA.app");

        let path = find_player_with(&registry, true, &IINA);

        assert_eq!(
            path,
            Some(PathBuf::from("/Applications/IINA.app/Contents/MacOS/iina"))
        );
    }

    #[test]
    fn missing_player_is_none_end_to_end() {
        let registry = MockRegistry::new();

        assert_eq!(find_player_with(&registry, true, &VLC), None);
        assert_eq!(registry.live_handles(), 0);
    }

    #[test]
    fn unsupported_platform_is_none_without_registry_calls() {
        let registry =
            MockRegistry::new().with_bundle("org.videolan.vlc", "/Applications/VLC.app");

        assert_eq!(find_player_with(&registry, false, &VLC), None);
        assert_eq!(registry.stage_calls(), 0);
    }
}
