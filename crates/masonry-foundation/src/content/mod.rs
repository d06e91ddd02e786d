mod error;
mod loader;
mod phase;
mod registry;

pub use error::{LoadError, LoadErrorKind};
pub use loader::{loader_fn, ContentLoader, FnLoader};
pub use phase::ContentPhase;
pub use registry::ContentRegistry;
