pub mod aggregate;
pub mod pipeline;

// Re-export key types for convenience.
pub use aggregate::{aggregate_declarations, Aggregation};
pub use pipeline::{aggregated_api_declarations, ApiDeclarations};
