pub mod error;
pub mod fs;
pub mod memory;
pub mod source;

// Re-export key types for convenience.
pub use error::{ContentError, Result};
pub use fs::DirSource;
pub use memory::MemorySource;
pub use source::ContentSource;
