use crate::ports::outbound::ExecutableLocator;
use crate::sbom_generation::domain::SearchPath;
use std::path::PathBuf;

/// Shim names a `dotnet tool install --global CycloneDX` may produce.
/// The casing differs between hosts and file systems.
pub const SHIM_CANDIDATES: &[&str] = &["dotnet-CycloneDX", "dotnet-cyclonedx"];

/// Name used when no candidate resolves; the spawn then does its own lookup
pub const CANONICAL_SHIM: &str = "dotnet-CycloneDX";

/// BinaryResolver - finds a runnable CycloneDX shim
///
/// This is a fallback chain, not a validation step: it never fails. If no
/// candidate resolves, the canonical name is returned unresolved and a missing
/// tool surfaces later as a spawn failure.
pub struct BinaryResolver<'a, L> {
    locator: &'a L,
}

impl<'a, L: ExecutableLocator> BinaryResolver<'a, L> {
    pub fn new(locator: &'a L) -> Self {
        Self { locator }
    }

    pub fn resolve(&self, search_path: &SearchPath) -> PathBuf {
        for candidate in SHIM_CANDIDATES {
            if let Some(found) = self.locator.locate(candidate, search_path) {
                log::debug!("Found CycloneDX shim: {}", found.display());
                return found;
            }
        }
        log::debug!(
            "No CycloneDX shim found on search path; falling back to '{}'",
            CANONICAL_SHIM
        );
        PathBuf::from(CANONICAL_SHIM)
    }
}
