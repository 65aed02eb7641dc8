// ─── Resource Protocol ───
// `rsrc:` locators address resources nested inside the running archive.

use std::io::Read;
use std::path::PathBuf;

use zip::ZipArchive;

use crate::core::error::{LaunchError, LaunchResult};

/// Scheme used for logical resource locators.
pub const SCHEME: &str = "rsrc";

/// A parsed `rsrc:<name>` locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    name: String,
}

impl ResourceLocator {
    /// Parse a locator of the form `rsrc:<name>`.
    pub fn parse(url: &str) -> LaunchResult<Self> {
        let name = url
            .strip_prefix(SCHEME)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| LaunchError::MalformedLocator(url.to_string()))?;

        if name.is_empty() {
            return Err(LaunchError::MalformedLocator(url.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Logical resource name addressed by this locator.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Capability for opening logical resources by name.
///
/// Implementations own the byte-level extraction; callers only ever see the
/// resource bytes or a not-found failure.
pub trait ResourceProtocol {
    fn open(&self, name: &str) -> LaunchResult<Vec<u8>>;
}

/// Protocol backed by a zip archive on disk — in production the archive
/// carried by the launcher executable itself (archives are located from
/// their end, so a trailing archive on the executable reads fine).
#[derive(Debug, Clone)]
pub struct ArchiveProtocol {
    path: PathBuf,
}

impl ArchiveProtocol {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Protocol over the running executable's archive.
    pub fn for_current_exe() -> LaunchResult<Self> {
        let exe = std::env::current_exe().map_err(|source| LaunchError::Io {
            path: PathBuf::new(),
            source,
        })?;
        Ok(Self::new(exe))
    }
}

impl ResourceProtocol for ArchiveProtocol {
    fn open(&self, name: &str) -> LaunchResult<Vec<u8>> {
        let file = std::fs::File::open(&self.path).map_err(|source| LaunchError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut archive = ZipArchive::new(file)?;

        let mut entry = match archive.by_name(name) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(LaunchError::ResourceNotFound(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes).map_err(|source| LaunchError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(bytes)
    }
}
