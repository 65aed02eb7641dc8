pub mod dispatch;
pub mod registry;

pub use dispatch::dispatch;
pub use registry::{EntryPoint, EntryPointRegistry, MainFn};
