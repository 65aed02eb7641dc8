// ─── Bundle Resolver ───
// Derives the platform/architecture-specific native bundle name.

use tracing::debug;

use crate::core::config::LauncherConfig;
use crate::core::error::{LaunchError, LaunchResult};
use crate::core::platform;

/// Resolve the native bundle name for the current host.
pub fn resolve_bundle_name(cfg: &LauncherConfig) -> LaunchResult<String> {
    bundle_name_for(&platform::host_os(), &platform::host_arch(), &cfg.swt_version)
}

/// Pure naming rule over raw host identifiers.
///
/// The single hard validation gate in the pipeline: an OS outside the known
/// set fails here, while an unrecognized architecture flows into the name
/// and simply fails to resolve downstream.
pub fn bundle_name_for(os: &str, arch: &str, version: &str) -> LaunchResult<String> {
    let os = platform::canonical_os(os);
    if !platform::is_known_os(&os) {
        return Err(LaunchError::UnknownOs(os));
    }

    let arch = platform::canonical_arch(arch);
    let name = format!("swt-{}{}-{}.jar", os, arch, version);
    debug!("Resolved native bundle: {}", name);
    Ok(name)
}
