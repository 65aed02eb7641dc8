//! Bootstrap launcher for applications that ship platform-specific native
//! library bundles inside their own package.
//!
//! The launcher reads its configuration from the archive carried by the
//! running executable, resolves the native bundle matching the host OS and
//! architecture, injects it into the process's resource-lookup path, and
//! hands control to the configured application entry point. Known
//! native-linkage failures are turned into actionable diagnostics; anything
//! else propagates untouched.
//!
//! The embedding application registers its entry points on a [`Launcher`]
//! and forwards the raw process arguments:
//!
//! ```no_run
//! use std::process::ExitCode;
//! use swtboot::{EntryError, ExecutionContext, Launcher};
//!
//! fn demo_main(_ctx: &ExecutionContext, _args: &[String]) -> Result<(), EntryError> {
//!     Ok(())
//! }
//!
//! fn main() -> ExitCode {
//!     swtboot::init_logging();
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!
//!     match Launcher::new().entry_point("demo.Main", demo_main).boot(&args) {
//!         Ok(code) => code,
//!         Err(err) => {
//!             eprintln!("{err}");
//!             ExitCode::FAILURE
//!         }
//!     }
//! }
//! ```

pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::config::{LauncherConfig, MANIFEST_ENTRY};
pub use crate::core::error::{EntryError, LaunchError, LaunchResult};
pub use crate::core::launch::{EntryPoint, EntryPointRegistry, MainFn};
pub use crate::core::launcher::Launcher;
pub use crate::core::report::{ConsoleReporter, FailureReporter};
pub use crate::core::resource::{ArchiveProtocol, ExecutionContext, ResourceLocator, ResourceProtocol};

/// Initialize structured logging for the embedding process.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,swtboot=debug")),
        )
        .init();
}
