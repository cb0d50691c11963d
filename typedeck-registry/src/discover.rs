use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ProviderError, RegistryError};
use crate::registry::ExtensionRegistry;
use crate::validate::select_package_description;
use crate::warning::Warning;

/// Outcome of a discovery pass: declaration paths in provider-enumeration
/// order, plus non-fatal diagnostics for the caller to surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Discovery {
    pub dts_paths: Vec<String>,
    pub warnings: Vec<Warning>,
}

/// Enumerates the providers registered at `point` and resolves each module's
/// package description to its declaration path.
///
/// A provider whose describe call fails, or whose package description is
/// unusable, is skipped with a warning; discovery continues with the rest.
/// Only the registry lookup itself is fatal.
pub fn discover_dts_paths(
    registry: &dyn ExtensionRegistry,
    point: &str,
) -> Result<Discovery, RegistryError> {
    let providers = registry.extensions(point)?;
    debug!(point, providers = providers.len(), "discovering declaration paths");

    let mut discovery = Discovery::default();
    for provider in providers {
        let module = provider.module();
        match provider.describe() {
            Ok(entries) => {
                let (dts_path, warnings) = select_package_description(module, &entries);
                for warning in &warnings {
                    warn!(module, %warning, "descriptor validation");
                }
                discovery.warnings.extend(warnings);
                if let Some(path) = dts_path {
                    discovery.dts_paths.push(path);
                }
            }
            Err(e) => {
                let warning = describe_failure(module, e);
                warn!(module, %warning, "provider skipped");
                discovery.warnings.push(warning);
            }
        }
    }

    debug!(
        point,
        paths = discovery.dts_paths.len(),
        warnings = discovery.warnings.len(),
        "discovery finished"
    );
    Ok(discovery)
}

/// Maps a describe failure onto the warning taxonomy: structural problems are
/// malformed descriptors, everything else means the provider is unavailable.
pub(crate) fn describe_failure(module: &str, error: ProviderError) -> Warning {
    match error {
        ProviderError::Malformed(_) | ProviderError::Json(_) => Warning::DescriptorMalformed {
            module: module.to_string(),
            detail: error.to_string(),
        },
        ProviderError::Content(_) | ProviderError::Unavailable(_) => {
            Warning::ProviderUnavailable {
                module: module.to_string(),
                detail: error.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DescriptorEntry;
    use crate::provider::{DescriptorProvider, StaticProvider};
    use crate::registry::{StaticRegistry, API_MODULES};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    struct BrokenProvider;

    impl DescriptorProvider for BrokenProvider {
        fn module(&self) -> &str {
            "broken/module"
        }

        fn describe(&self) -> Result<Vec<DescriptorEntry>, ProviderError> {
            Err(ProviderError::Unavailable("engine offline".into()))
        }
    }

    struct BrokenRegistry;

    impl ExtensionRegistry for BrokenRegistry {
        fn extensions(
            &self,
            _point: &str,
        ) -> Result<Vec<Arc<dyn DescriptorProvider>>, RegistryError> {
            Err(RegistryError::Unavailable("registry offline".into()))
        }
    }

    fn package_provider(module: &str, dts_path: &str) -> Arc<dyn DescriptorProvider> {
        Arc::new(StaticProvider::new(
            module,
            vec![
                DescriptorEntry::package(module, dts_path),
                DescriptorEntry::api("uuid", "utils/v4/uuid"),
            ],
        ))
    }

    #[test]
    fn test_empty_registry_yields_empty_discovery() {
        let discovery = discover_dts_paths(&StaticRegistry::new(), API_MODULES).unwrap();
        assert_eq!(discovery, Discovery::default());
    }

    #[test]
    fn test_paths_follow_provider_order() {
        let registry = StaticRegistry::new()
            .with(API_MODULES, package_provider("utils", "utils.d.ts"))
            .with(
                API_MODULES,
                Arc::new(StaticProvider::new("bare", vec![])),
            )
            .with(API_MODULES, package_provider("io", "io.d.ts"));

        let discovery = discover_dts_paths(&registry, API_MODULES).unwrap();
        assert_eq!(discovery.dts_paths, vec!["utils.d.ts", "io.d.ts"]);
        assert!(discovery.warnings.is_empty());
    }

    #[test]
    fn test_provider_without_marker_contributes_nothing() {
        let registry = StaticRegistry::new().with(
            API_MODULES,
            Arc::new(StaticProvider::new(
                "apis-only",
                vec![DescriptorEntry::api("hex", "utils/v4/hex")],
            )),
        );

        let discovery = discover_dts_paths(&registry, API_MODULES).unwrap();
        assert!(discovery.dts_paths.is_empty());
        assert!(discovery.warnings.is_empty());
    }

    #[test]
    fn test_broken_provider_is_skipped_with_warning() {
        let registry = StaticRegistry::new()
            .with(API_MODULES, Arc::new(BrokenProvider))
            .with(API_MODULES, package_provider("utils", "utils.d.ts"));

        let discovery = discover_dts_paths(&registry, API_MODULES).unwrap();
        assert_eq!(discovery.dts_paths, vec!["utils.d.ts"]);
        assert_eq!(
            discovery.warnings,
            vec![Warning::ProviderUnavailable {
                module: "broken/module".into(),
                detail: "provider unavailable: engine offline".into(),
            }]
        );
    }

    #[test]
    fn test_duplicate_marker_keeps_first_path() {
        let registry = StaticRegistry::new().with(
            API_MODULES,
            Arc::new(StaticProvider::new(
                "dup",
                vec![
                    DescriptorEntry::package("dup", "first.d.ts"),
                    DescriptorEntry::package("dup", "second.d.ts"),
                ],
            )),
        );

        let discovery = discover_dts_paths(&registry, API_MODULES).unwrap();
        assert_eq!(discovery.dts_paths, vec!["first.d.ts"]);
        assert_eq!(
            discovery.warnings,
            vec![Warning::DuplicatePackageDescription { module: "dup".into() }]
        );
    }

    #[test]
    fn test_registry_failure_is_fatal() {
        let err = discover_dts_paths(&BrokenRegistry, API_MODULES).unwrap_err();
        assert!(matches!(err, RegistryError::Unavailable(_)));
    }

    #[test]
    fn test_describe_failure_mapping() {
        let w = describe_failure("m", ProviderError::Malformed("scalar".into()));
        assert!(matches!(w, Warning::DescriptorMalformed { .. }));

        let w = describe_failure("m", ProviderError::Unavailable("gone".into()));
        assert!(matches!(w, Warning::ProviderUnavailable { .. }));
    }
}
