// ─── Failure Reporter ───

use tracing::error;

/// Presentation seam for fatal launch diagnostics.
///
/// The actual dialog machinery belongs to the embedding application; the
/// launcher only produces the title and message, and calls this at most
/// once per run.
pub trait FailureReporter {
    fn report(&self, title: &str, message: &str);
}

/// Default reporter: one line on stderr plus the structured log.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl FailureReporter for ConsoleReporter {
    fn report(&self, title: &str, message: &str) {
        error!("{}: {}", title, message);
        eprintln!("Launch failed: {}", message);
    }
}
