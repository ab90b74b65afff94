//! Launch Services backed application registry (macOS only).

use super::registry::AppRegistry;
use super::types::{BundleId, RegistryFault};
use core_foundation::array::{CFArray, CFArrayRef};
use core_foundation::base::TCFType;
use core_foundation::error::{CFError, CFErrorRef};
use core_foundation::string::{CFString, CFStringRef};
use core_foundation::url::CFURL;
use std::path::PathBuf;
use std::ptr;
use tracing::debug;

#[link(name = "CoreServices", kind = "framework")]
unsafe extern "C" {
    /// Returns a retained CFArray of CFURLs for every installed application
    /// registered under the bundle identifier, or NULL.
    fn LSCopyApplicationURLsForBundleIdentifier(
        in_bundle_identifier: CFStringRef,
        out_error: *mut CFErrorRef,
    ) -> CFArrayRef;
}

/// The real application registry. Each stage handle owns its CoreFoundation
/// object under the create rule, so `Drop` releases every transient native
/// resource exactly once, whichever way the lookup exits.
pub(super) struct LaunchServices;

impl AppRegistry for LaunchServices {
    type Ident = CFString;
    type Matches = CFArray<CFURL>;

    fn create_identifier(&self, id: &BundleId) -> Result<CFString, RegistryFault> {
        Ok(CFString::new(id.as_str()))
    }

    fn copy_application_urls(&self, ident: &CFString) -> Result<CFArray<CFURL>, RegistryFault> {
        let mut out_error: CFErrorRef = ptr::null_mut();
        // SAFETY: `ident` outlives the call and `out_error` is a valid
        // out-pointer for the duration of the call.
        let raw = unsafe {
            LSCopyApplicationURLsForBundleIdentifier(ident.as_concrete_TypeRef(), &mut out_error)
        };

        if !out_error.is_null() {
            // SAFETY: the service hands back a retained CFError; wrapping
            // under the create rule releases it on drop.
            let err = unsafe { CFError::wrap_under_create_rule(out_error) };
            debug!(domain = %err.domain(), code = err.code(), "launch services reported an error");
        }

        if raw.is_null() {
            return Err(RegistryFault::QueryFailed);
        }
        // SAFETY: non-null array returned by a Copy-rule function; ownership
        // transfers to the wrapper.
        Ok(unsafe { CFArray::wrap_under_create_rule(raw) })
    }

    fn match_count(&self, matches: &CFArray<CFURL>) -> Result<usize, RegistryFault> {
        usize::try_from(matches.len()).map_err(|_| RegistryFault::MissingEntry)
    }

    fn first_match_path(&self, matches: &CFArray<CFURL>) -> Result<PathBuf, RegistryFault> {
        let url = matches.get(0).ok_or(RegistryFault::MissingEntry)?;
        url.to_path().ok_or(RegistryFault::PathConversion)
    }
}
