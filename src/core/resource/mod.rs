pub mod context;
pub mod protocol;

pub use context::ExecutionContext;
pub use protocol::{ArchiveProtocol, ResourceLocator, ResourceProtocol};
