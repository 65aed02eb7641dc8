// ─── Entry-Point Dispatcher ───
// Final pipeline stage: find the configured entry point in the execution
// context, invoke it with the original process arguments, and turn known
// native-linkage failures into actionable diagnostics.

use tracing::{debug, info};

use crate::core::config::LauncherConfig;
use crate::core::error::{EntryError, LaunchError, LaunchResult};
use crate::core::platform;
use crate::core::resource::ExecutionContext;

const THREAD_ACCESS_MARKER: &str = "invalid thread access";

/// Hand control to the configured entry point.
///
/// On success the application owns the rest of the run and this function
/// returns only after it finishes. Failures short-circuit; nothing is
/// retried or rolled back.
pub fn dispatch(cfg: &LauncherConfig, ctx: &ExecutionContext, args: &[String]) -> LaunchResult<()> {
    let entry = ctx
        .entry_point(&cfg.target_entry_point)
        .ok_or_else(|| LaunchError::MainClassNotFound(cfg.target_entry_point.clone()))?;

    let main = entry.main().ok_or(LaunchError::MainMethodNotFound)?;

    info!("Dispatching to {}", cfg.target_entry_point);
    match main(ctx, args) {
        Ok(()) => {
            debug!("Entry point finished");
            Ok(())
        }
        Err(err) => Err(classify_entry_error(
            err,
            &platform::canonical_arch(&platform::host_arch()),
        )),
    }
}

/// Map an entry-point failure onto the launcher's diagnostic vocabulary.
///
/// Native-linkage failures get architecture-specific remediation advice.
/// Thread-access failures are recognized by message text; the toolkit
/// reports them as a plain error, so there is no structured signal to
/// match on.
fn classify_entry_error(err: EntryError, arch: &str) -> LaunchError {
    match err {
        EntryError::NativeLink { message } => {
            let advice = match arch {
                "amd64" | "ppc64" | "x86_64" => "-d32",
                _ => "-d64",
            };
            LaunchError::NativeLink(format!(
                "(native link failure: {})\nTry adding '{}' to your command line arguments",
                message, advice
            ))
        }
        EntryError::Application(err) => {
            if err.to_string().to_lowercase().contains(THREAD_ACCESS_MARKER) {
                LaunchError::ThreadAccess(
                    "(invalid thread access)\nTry adding '-XstartOnFirstThread' to your command line arguments"
                        .to_string(),
                )
            } else {
                LaunchError::Application(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::launch::{EntryPoint, EntryPointRegistry};
    use std::sync::{Arc, Mutex};

    fn test_config(entry_point: &str) -> LauncherConfig {
        LauncherConfig {
            target_entry_point: entry_point.to_string(),
            swt_version: "3.100".to_string(),
        }
    }

    fn context_with(name: &str, entry: EntryPoint) -> ExecutionContext {
        let mut registry = EntryPointRegistry::new();
        registry.register(name, entry);
        ExecutionContext::new(registry)
    }

    #[test]
    fn unregistered_identifier_names_the_missing_class() {
        let ctx = ExecutionContext::new(EntryPointRegistry::new());
        let err = dispatch(&test_config("demo.Main"), &ctx, &[]).unwrap_err();

        assert_eq!(err.to_string(), "failed to find main class: demo.Main");
    }

    #[test]
    fn entry_without_main_routine_is_reported() {
        let ctx = context_with("demo.Main", EntryPoint::without_main());
        let err = dispatch(&test_config("demo.Main"), &ctx, &[]).unwrap_err();

        assert_eq!(err.to_string(), "failed to find main method");
    }

    #[test]
    fn arguments_pass_through_unchanged() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let ctx = context_with(
            "demo.Main",
            EntryPoint::new(move |_, args| {
                *sink.lock().unwrap() = args.to_vec();
                Ok(())
            }),
        );

        let args = vec!["--flag".to_string(), "value with spaces".to_string()];
        dispatch(&test_config("demo.Main"), &ctx, &args).unwrap();

        assert_eq!(*seen.lock().unwrap(), args);
    }

    #[test]
    fn native_link_failure_on_64_bit_arch_suggests_d32() {
        let err = classify_entry_error(
            EntryError::NativeLink {
                message: "no swt-pi in library path".to_string(),
            },
            "x86_64",
        );

        let message = err.to_string();
        assert!(message.contains("no swt-pi in library path"));
        assert!(message.contains("-d32"));
    }

    #[test]
    fn native_link_failure_on_other_arch_suggests_d64() {
        for arch in ["arm64", "x86", "sparc"] {
            let err = classify_entry_error(
                EntryError::NativeLink {
                    message: "bind failed".to_string(),
                },
                arch,
            );
            assert!(err.to_string().contains("-d64"), "arch {arch}");
        }
    }

    #[test]
    fn thread_access_failure_is_recognized_case_insensitively() {
        let err = classify_entry_error(
            EntryError::application("Invalid Thread Access: foo"),
            "x86_64",
        );

        let message = err.to_string();
        assert!(message.contains("invalid thread access"));
        assert!(message.contains("-XstartOnFirstThread"));
    }

    #[test]
    fn unrelated_application_errors_propagate_unchanged() {
        let err = classify_entry_error(EntryError::application("unrelated failure"), "x86_64");

        match err {
            LaunchError::Application(inner) => assert_eq!(inner.to_string(), "unrelated failure"),
            other => panic!("expected Application, got {other:?}"),
        }
    }
}
