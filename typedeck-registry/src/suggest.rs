use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::discover::describe_failure;
use crate::error::RegistryError;
use crate::registry::ExtensionRegistry;
use crate::warning::Warning;

/// One require-path completion suggestion, drawn from a module's individual
/// API entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequireSuggestion {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Suggestions in provider order, plus non-fatal diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub suggestions: Vec<RequireSuggestion>,
    pub warnings: Vec<Warning>,
}

/// Gathers require-path suggestions from the non-package entries of every
/// provider at `point`.
///
/// Package-description entries carry module metadata, not require paths, and
/// are skipped; so are entries with neither a `require_suggestion` nor a
/// `pathDefault`. Same partial-failure tolerance as declaration discovery.
pub fn collect_require_suggestions(
    registry: &dyn ExtensionRegistry,
    point: &str,
) -> Result<Suggestions, RegistryError> {
    let providers = registry.extensions(point)?;

    let mut out = Suggestions::default();
    for provider in providers {
        let module = provider.module();
        let entries = match provider.describe() {
            Ok(entries) => entries,
            Err(e) => {
                let warning = describe_failure(module, e);
                warn!(module, %warning, "provider skipped");
                out.warnings.push(warning);
                continue;
            }
        };
        for entry in entries {
            if entry.is_package_description {
                continue;
            }
            let Some(path) = entry.require_suggestion.or(entry.path_default) else {
                continue;
            };
            out.suggestions.push(RequireSuggestion {
                path,
                api: entry.api,
                description: entry.description,
            });
        }
    }
    Ok(out)
}
