// ─── Entry-Point Registry ───
// Explicit lookup table from entry-point identifiers to loadable units.

use std::collections::HashMap;

use crate::core::error::EntryError;
use crate::core::resource::ExecutionContext;

/// Invocation signature shared by all registered entry points: the
/// resolution context for the run plus the original process arguments.
pub type MainFn =
    Box<dyn Fn(&ExecutionContext, &[String]) -> Result<(), EntryError> + Send + Sync>;

/// A loadable unit an application exposes to the launcher.
pub struct EntryPoint {
    main: Option<MainFn>,
}

impl EntryPoint {
    /// Entry point with a runnable main routine.
    pub fn new<F>(main: F) -> Self
    where
        F: Fn(&ExecutionContext, &[String]) -> Result<(), EntryError> + Send + Sync + 'static,
    {
        Self {
            main: Some(Box::new(main)),
        }
    }

    /// Entry point declared without a runnable main routine.
    pub fn without_main() -> Self {
        Self { main: None }
    }

    pub fn main(&self) -> Option<&MainFn> {
        self.main.as_ref()
    }
}

#[derive(Default)]
pub struct EntryPointRegistry {
    entries: HashMap<String, EntryPoint>,
}

impl EntryPointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entry` under `name`. A later registration under the same
    /// name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, entry: EntryPoint) {
        self.entries.insert(name.into(), entry);
    }

    pub fn resolve(&self, name: &str) -> Option<&EntryPoint> {
        self.entries.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_entries_by_identifier() {
        let mut registry = EntryPointRegistry::new();
        registry.register("demo.Main", EntryPoint::new(|_, _| Ok(())));

        assert!(registry.resolve("demo.Main").is_some());
        assert!(registry.resolve("demo.Other").is_none());
    }

    #[test]
    fn later_registration_replaces_earlier_one() {
        let mut registry = EntryPointRegistry::new();
        registry.register("demo.Main", EntryPoint::without_main());
        registry.register("demo.Main", EntryPoint::new(|_, _| Ok(())));

        assert!(registry.resolve("demo.Main").unwrap().main().is_some());
    }
}
