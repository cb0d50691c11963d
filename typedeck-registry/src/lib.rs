pub mod descriptor;
pub mod discover;
pub mod error;
pub mod provider;
pub mod registry;
pub mod suggest;
pub mod validate;
pub mod warning;

// Re-export key types for convenience.
pub use descriptor::DescriptorEntry;
pub use discover::{discover_dts_paths, Discovery};
pub use error::{ProviderError, RegistryError};
pub use provider::{DescriptorProvider, JsonProvider, StaticProvider};
pub use registry::{ExtensionRegistry, StaticRegistry, API_MODULES};
pub use suggest::{collect_require_suggestions, RequireSuggestion, Suggestions};
pub use warning::Warning;
