use serde::Serialize;
use tracing::debug;
use typedeck_content::ContentSource;
use typedeck_registry::{discover_dts_paths, ExtensionRegistry, RegistryError, Warning};

use crate::aggregate::aggregate_declarations;

/// The aggregated declaration document for one extension point, with every
/// non-fatal diagnostic gathered along the way (discovery first, then fetch).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiDeclarations {
    pub text: String,
    pub warnings: Vec<Warning>,
}

/// Discovers the declaration paths registered at `point` and aggregates their
/// texts into one document.
///
/// This is the single operation the editor tooling surface calls. Best-effort:
/// broken modules degrade to warnings; only a failing registry lookup is an
/// error, since without a provider list there is no meaningful partial result.
pub fn aggregated_api_declarations(
    registry: &dyn ExtensionRegistry,
    source: &dyn ContentSource,
    point: &str,
) -> Result<ApiDeclarations, RegistryError> {
    let discovery = discover_dts_paths(registry, point)?;
    let aggregation = aggregate_declarations(source, &discovery.dts_paths);

    let mut warnings = discovery.warnings;
    warnings.extend(aggregation.warnings);
    debug!(
        point,
        bytes = aggregation.text.len(),
        warnings = warnings.len(),
        "api declarations assembled"
    );
    Ok(ApiDeclarations {
        text: aggregation.text,
        warnings,
    })
}
