//! Types for application bundle resolution.

use std::fmt;

/// A reverse-DNS application bundle identifier (e.g. `org.videolan.vlc`).
///
/// Case-sensitive, and validated no further than "non-empty" - a malformed
/// identifier simply fails to resolve later instead of erroring here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BundleId(String);

impl BundleId {
    /// Create an identifier, rejecting only the empty string.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Internal fault taxonomy for the staged registry query.
///
/// Never part of the public resolution contract: every variant collapses to
/// `None` at the component boundary. It exists so logs and tests can tell
/// the stages apart.
#[derive(Debug, thiserror::Error)]
pub enum RegistryFault {
    /// The identifier could not be turned into a native string handle.
    #[error("identifier not representable as a native string")]
    NoIdentifier,

    /// The registry query produced no result object at all.
    #[error("application registry query produced no result")]
    QueryFailed,

    /// The query succeeded but matched zero installed applications.
    #[error("no installed application matches the identifier")]
    NoMatches,

    /// The match collection reported entries but the first was unusable.
    #[error("first match entry was missing or invalid")]
    MissingEntry,

    /// The matched location could not be converted to a filesystem path.
    #[error("matched location is not representable as a filesystem path")]
    PathConversion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_id_rejects_empty() {
        assert!(BundleId::new("").is_none());
    }

    #[test]
    fn bundle_id_passes_through_unvalidated() {
        // Anything non-empty is accepted; resolution decides the rest.
        let id = BundleId::new("not a reverse dns name").unwrap();
        assert_eq!(id.as_str(), "not a reverse dns name");
    }

    #[test]
    fn bundle_id_displays_verbatim() {
        let id = BundleId::new("org.videolan.vlc").unwrap();
        assert_eq!(id.to_string(), "org.videolan.vlc");
    }
}
