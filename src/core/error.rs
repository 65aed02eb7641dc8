use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the bootstrap pipeline.
/// Every module returns `Result<T, LaunchError>`.
#[derive(Debug, Error)]
pub enum LaunchError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Archive ─────────────────────────────────────────
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ── Configuration ───────────────────────────────────
    #[error("no launcher manifest found (not running from a packaged archive)")]
    ManifestMissing,

    #[error("failed to read launcher config: {0}")]
    ConfigUnreadable(String),

    #[error("launcher config is missing attribute {0:?}")]
    ConfigIncomplete(&'static str),

    #[error("unknown OS name: {0}")]
    UnknownOs(String),

    // ── Resource injection ──────────────────────────────
    #[error("malformed resource locator: {0}")]
    MalformedLocator(String),

    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("{0}")]
    Inject(String),

    #[error("native bundle already injected")]
    BundleAlreadyInjected,

    // ── Dispatch ────────────────────────────────────────
    #[error("failed to find main class: {0}")]
    MainClassNotFound(String),

    #[error("failed to find main method")]
    MainMethodNotFound,

    #[error("{0}")]
    NativeLink(String),

    #[error("{0}")]
    ThreadAccess(String),

    // ── Unclassified application failure ────────────────
    // Forwarded raw by the top-level handler; wrapping it would destroy
    // the original diagnostic.
    #[error("{0}")]
    Application(Box<dyn std::error::Error + Send + Sync>),
}

/// Convenience alias used throughout the crate.
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Failure contract between a registered entry point and the dispatcher.
///
/// A failed native-library bind must be reported as `NativeLink` so the
/// dispatcher can attach remediation advice; everything else travels as an
/// opaque application error.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("native link failure: {message}")]
    NativeLink { message: String },

    #[error("{0}")]
    Application(Box<dyn std::error::Error + Send + Sync>),
}

impl EntryError {
    /// Wrap an arbitrary application error.
    pub fn application<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Application(err.into())
    }
}
