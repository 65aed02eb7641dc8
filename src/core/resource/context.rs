// ─── Execution Context ───
// Resolution scope for the rest of the run: base resource sources, the
// entry-point registry, and at most one injected native bundle.

use std::io::{Cursor, Read};

use tracing::info;
use zip::ZipArchive;

use crate::core::error::{LaunchError, LaunchResult};
use crate::core::launch::{EntryPoint, EntryPointRegistry};
use crate::core::resource::protocol::{ResourceLocator, ResourceProtocol, SCHEME};

pub struct ExecutionContext {
    entry_points: EntryPointRegistry,
    sources: Vec<Box<dyn ResourceProtocol>>,
    bundle: Option<InjectedBundle>,
}

struct InjectedBundle {
    name: String,
    data: Vec<u8>,
}

impl ExecutionContext {
    pub fn new(entry_points: EntryPointRegistry) -> Self {
        Self {
            entry_points,
            sources: Vec::new(),
            bundle: None,
        }
    }

    /// Add a base resource source. Base sources are searched in insertion
    /// order, before the injected bundle.
    pub fn add_source(&mut self, source: Box<dyn ResourceProtocol>) {
        self.sources.push(source);
    }

    /// Register the resolved native bundle as the fall-through resource
    /// source for the rest of the run.
    ///
    /// Succeeds at most once per context. The bundle entry must exist in
    /// the backing archive; its contents are only opened on lookup.
    pub fn inject(
        &mut self,
        bundle_name: &str,
        protocol: &dyn ResourceProtocol,
    ) -> LaunchResult<()> {
        if self.bundle.is_some() {
            return Err(LaunchError::BundleAlreadyInjected);
        }

        let url = format!("{}:{}", SCHEME, bundle_name);
        let locator = ResourceLocator::parse(&url).map_err(inject_failure)?;
        let data = protocol.open(locator.name()).map_err(inject_failure)?;

        info!("Using native bundle: {}", bundle_name);
        self.bundle = Some(InjectedBundle {
            name: bundle_name.to_string(),
            data,
        });
        Ok(())
    }

    /// Resolve a resource by name: base sources first, then entries inside
    /// the injected bundle.
    pub fn lookup(&self, name: &str) -> Option<Vec<u8>> {
        for source in &self.sources {
            if let Ok(bytes) = source.open(name) {
                return Some(bytes);
            }
        }
        self.bundle.as_ref().and_then(|bundle| bundle.entry(name))
    }

    /// Entry point registered under `name`, if any.
    pub fn entry_point(&self, name: &str) -> Option<&EntryPoint> {
        self.entry_points.resolve(name)
    }

    /// Name of the injected bundle, once injection has happened.
    pub fn bundle_name(&self) -> Option<&str> {
        self.bundle.as_ref().map(|b| b.name.as_str())
    }
}

impl InjectedBundle {
    // The bundle is itself an archive; a lookup that cannot parse it simply
    // misses, matching the presence-only contract at inject time.
    fn entry(&self, name: &str) -> Option<Vec<u8>> {
        let mut archive = ZipArchive::new(Cursor::new(self.data.as_slice())).ok()?;
        let mut entry = archive.by_name(name).ok()?;
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes).ok()?;
        Some(bytes)
    }
}

fn inject_failure(cause: LaunchError) -> LaunchError {
    LaunchError::Inject(format!("{}: {}", cause_label(&cause), cause))
}

fn cause_label(err: &LaunchError) -> &'static str {
    match err {
        LaunchError::Io { .. } => "IoError",
        LaunchError::Zip(_) => "ArchiveError",
        LaunchError::ResourceNotFound(_) => "ResourceNotFound",
        LaunchError::MalformedLocator(_) => "MalformedLocator",
        _ => "LaunchError",
    }
}
