// ─── Configuration Loader ───
// Reads the launcher's own packaging metadata from the archive carried by
// the running executable.

use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;
use zip::ZipArchive;

use crate::core::error::{LaunchError, LaunchResult};

/// Archive entry holding the launcher descriptor.
pub const MANIFEST_ENTRY: &str = "META-INF/swtboot.json";

/// Launcher configuration embedded by the packaging step.
///
/// Loaded exactly once per process; both attributes are guaranteed
/// non-empty after a successful load and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Identifier of the application entry point to dispatch to.
    pub target_entry_point: String,
    /// Native library version the packaged bundles were built for.
    pub swt_version: String,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    target_entry_point: Option<String>,
    #[serde(default)]
    swt_version: Option<String>,
}

static CONFIG: OnceLock<LauncherConfig> = OnceLock::new();

/// Load the configuration from the running executable's archive, caching
/// the result for the remainder of the process.
pub fn load() -> LaunchResult<&'static LauncherConfig> {
    if let Some(cfg) = CONFIG.get() {
        return Ok(cfg);
    }

    let exe = std::env::current_exe().map_err(|e| LaunchError::ConfigUnreadable(e.to_string()))?;
    let cfg = LauncherConfig::from_archive(&exe)?;

    let _ = CONFIG.set(cfg);
    Ok(CONFIG.get().expect("launcher config set"))
}

impl LauncherConfig {
    /// Read and validate the descriptor from an explicit archive file.
    ///
    /// A file that is not a readable archive means the launcher is not
    /// running from its package, which is unsupported.
    pub fn from_archive(path: &Path) -> LaunchResult<Self> {
        let file = std::fs::File::open(path).map_err(|_| LaunchError::ManifestMissing)?;
        let mut archive = ZipArchive::new(file).map_err(|_| LaunchError::ManifestMissing)?;

        let mut raw = String::new();
        archive
            .by_name(MANIFEST_ENTRY)
            .map_err(|e| LaunchError::ConfigUnreadable(e.to_string()))?
            .read_to_string(&mut raw)
            .map_err(|e| LaunchError::ConfigUnreadable(e.to_string()))?;

        let manifest: RawManifest =
            serde_json::from_str(&raw).map_err(|e| LaunchError::ConfigUnreadable(e.to_string()))?;

        manifest.validate()
    }
}

impl RawManifest {
    // Each attribute is checked on its own so the diagnostic names the one
    // the packaging step left out.
    fn validate(self) -> LaunchResult<LauncherConfig> {
        let target_entry_point = non_empty(self.target_entry_point)
            .ok_or(LaunchError::ConfigIncomplete("target_entry_point"))?;
        let swt_version =
            non_empty(self.swt_version).ok_or(LaunchError::ConfigIncomplete("swt_version"))?;

        debug!(
            "Launcher config: entry point {}, native version {}",
            target_entry_point, swt_version
        );

        Ok(LauncherConfig {
            target_entry_point,
            swt_version,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn archive_with_manifest(label: &str, manifest: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("swtboot-config-{}-{}", label, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("app.jar");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        if let Some(manifest) = manifest {
            writer.start_file(MANIFEST_ENTRY, options).unwrap();
            writer.write_all(manifest.as_bytes()).unwrap();
        } else {
            writer.start_file("placeholder.txt", options).unwrap();
            writer.write_all(b"placeholder").unwrap();
        }

        writer.finish().unwrap();
        path
    }

    #[test]
    fn loads_complete_manifest() {
        let path = archive_with_manifest(
            "complete",
            Some(r#"{"target_entry_point": "demo.Main", "swt_version": "3.100"}"#),
        );

        let cfg = LauncherConfig::from_archive(&path).unwrap();
        assert_eq!(cfg.target_entry_point, "demo.Main");
        assert_eq!(cfg.swt_version, "3.100");
    }

    #[test]
    fn repeated_loads_are_stable() {
        let path = archive_with_manifest(
            "stable",
            Some(r#"{"target_entry_point": "demo.Main", "swt_version": "3.100"}"#),
        );

        let first = LauncherConfig::from_archive(&path).unwrap();
        let second = LauncherConfig::from_archive(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_version_attribute_is_a_config_error() {
        let path = archive_with_manifest("no-version", Some(r#"{"target_entry_point": "demo.Main"}"#));

        let err = LauncherConfig::from_archive(&path).unwrap_err();
        assert!(matches!(err, LaunchError::ConfigIncomplete("swt_version")));
    }

    #[test]
    fn empty_entry_point_attribute_is_a_config_error() {
        let path = archive_with_manifest(
            "empty-entry",
            Some(r#"{"target_entry_point": "  ", "swt_version": "3.100"}"#),
        );

        let err = LauncherConfig::from_archive(&path).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::ConfigIncomplete("target_entry_point")
        ));
    }

    #[test]
    fn archive_without_descriptor_entry_is_unreadable() {
        let path = archive_with_manifest("no-descriptor", None);

        let err = LauncherConfig::from_archive(&path).unwrap_err();
        assert!(matches!(err, LaunchError::ConfigUnreadable(_)));
    }

    #[test]
    fn plain_file_means_no_manifest() {
        let dir = std::env::temp_dir().join(format!("swtboot-config-plain-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("not-an-archive");
        std::fs::write(&path, b"just bytes").unwrap();

        let err = LauncherConfig::from_archive(&path).unwrap_err();
        assert!(matches!(err, LaunchError::ManifestMissing));
    }
}
