// ─── Launcher ───
// Sequential bootstrap pipeline: load config, resolve the native bundle,
// inject it into the execution context, dispatch to the entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::debug;

use crate::core::bundle;
use crate::core::config::{self, LauncherConfig};
use crate::core::error::{EntryError, LaunchError, LaunchResult};
use crate::core::launch::{dispatch, EntryPoint, EntryPointRegistry};
use crate::core::report::{ConsoleReporter, FailureReporter};
use crate::core::resource::{ArchiveProtocol, ExecutionContext};

const FAILURE_TITLE: &str = "Launching UI Failed";

/// Bootstrap harness the embedding application drives from its `main`.
///
/// Entry points are registered up front; which one runs is decided by the
/// packaged configuration, not by the caller.
pub struct Launcher {
    registry: EntryPointRegistry,
    reporter: Box<dyn FailureReporter>,
    archive: Option<PathBuf>,
}

impl Launcher {
    pub fn new() -> Self {
        Self {
            registry: EntryPointRegistry::new(),
            reporter: Box::new(ConsoleReporter),
            archive: None,
        }
    }

    /// Register an application entry point under its identifier.
    pub fn entry_point<F>(mut self, name: impl Into<String>, main: F) -> Self
    where
        F: Fn(&ExecutionContext, &[String]) -> Result<(), EntryError> + Send + Sync + 'static,
    {
        self.registry.register(name, EntryPoint::new(main));
        self
    }

    /// Register a pre-built entry point (including ones without a main
    /// routine).
    pub fn register(mut self, name: impl Into<String>, entry: EntryPoint) -> Self {
        self.registry.register(name, entry);
        self
    }

    /// Replace the default console reporter.
    pub fn with_reporter(mut self, reporter: Box<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Load configuration and resources from an explicit archive instead of
    /// the running executable. Intended for packaging tools and tests.
    pub fn with_archive(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive = Some(path.into());
        self
    }

    /// Run the bootstrap pipeline, returning any terminal failure.
    pub fn run(self, args: &[String]) -> LaunchResult<()> {
        run_pipeline(self.registry, self.archive, args)
    }

    /// Top-level handler: report launch failures through the configured
    /// reporter and fold them into the process exit status; anything
    /// unclassified travels to the caller untouched.
    pub fn boot(self, args: &[String]) -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
        let Launcher {
            registry,
            reporter,
            archive,
        } = self;

        match run_pipeline(registry, archive, args) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(LaunchError::Application(err)) => Err(err),
            Err(failure) => {
                reporter.report(FAILURE_TITLE, &failure.to_string());
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

fn run_pipeline(
    registry: EntryPointRegistry,
    archive: Option<PathBuf>,
    args: &[String],
) -> LaunchResult<()> {
    let (cfg, protocol) = match archive {
        Some(path) => (
            LauncherConfig::from_archive(&path)?,
            ArchiveProtocol::new(path),
        ),
        None => (config::load()?.clone(), ArchiveProtocol::for_current_exe()?),
    };
    debug!("Configured entry point: {}", cfg.target_entry_point);

    let bundle_name = bundle::resolve_bundle_name(&cfg)?;

    let mut ctx = ExecutionContext::new(registry);
    ctx.add_source(Box::new(protocol.clone()));
    ctx.inject(&bundle_name, &protocol)?;

    dispatch(&cfg, &ctx, args)
}
