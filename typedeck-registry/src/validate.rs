use crate::descriptor::DescriptorEntry;
use crate::warning::Warning;

/// Picks the package-description declaration path out of one provider's
/// entries.
///
/// The first marked entry claims the slot; every marked entry after it is a
/// duplicate and is reported, never silently preferred. A claimed slot with an
/// absent, non-string, or empty path yields no path for the provider.
pub fn select_package_description(
    module: &str,
    entries: &[DescriptorEntry],
) -> (Option<String>, Vec<Warning>) {
    let mut dts_path = None;
    let mut warnings = Vec::new();
    let mut seen_marker = false;

    for entry in entries {
        if !entry.is_package_description {
            continue;
        }
        if seen_marker {
            warnings.push(Warning::DuplicatePackageDescription {
                module: module.to_string(),
            });
            continue;
        }
        seen_marker = true;
        match entry.dts_path.as_deref() {
            Some(path) if !path.is_empty() => dts_path = Some(path.to_string()),
            Some(_) => warnings.push(Warning::DescriptorMalformed {
                module: module.to_string(),
                detail: "package description has an empty dtsPath".into(),
            }),
            None => warnings.push(Warning::DescriptorMalformed {
                module: module.to_string(),
                detail: "package description has no usable dtsPath".into(),
            }),
        }
    }

    (dts_path, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_entries_no_path_no_warnings() {
        let (path, warnings) = select_package_description("m", &[]);
        assert_eq!(path, None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_only_api_entries_contribute_nothing() {
        let entries = vec![
            DescriptorEntry::api("uuid", "utils/v4/uuid"),
            DescriptorEntry::api("hex", "utils/v4/hex"),
        ];
        let (path, warnings) = select_package_description("m", &entries);
        assert_eq!(path, None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_first_marked_entry_wins() {
        let entries = vec![
            DescriptorEntry::api("uuid", "utils/v4/uuid"),
            DescriptorEntry::package("@platform/utils", "utils/utils.d.ts"),
        ];
        let (path, warnings) = select_package_description("m", &entries);
        assert_eq!(path.as_deref(), Some("utils/utils.d.ts"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_duplicate_marker_reported_once_per_extra() {
        let entries = vec![
            DescriptorEntry::package("@platform/utils", "utils/a.d.ts"),
            DescriptorEntry::package("@platform/utils", "utils/b.d.ts"),
            DescriptorEntry::package("@platform/utils", "utils/c.d.ts"),
        ];
        let (path, warnings) = select_package_description("m", &entries);
        assert_eq!(path.as_deref(), Some("utils/a.d.ts"));
        assert_eq!(
            warnings,
            vec![
                Warning::DuplicatePackageDescription { module: "m".into() },
                Warning::DuplicatePackageDescription { module: "m".into() },
            ]
        );
    }

    #[test]
    fn test_missing_path_is_malformed() {
        let mut entry = DescriptorEntry::package("@platform/utils", "x");
        entry.dts_path = None;
        let (path, warnings) = select_package_description("m", &[entry]);
        assert_eq!(path, None);
        assert!(matches!(warnings[0], Warning::DescriptorMalformed { .. }));
    }

    #[test]
    fn test_empty_path_is_malformed() {
        let entry = DescriptorEntry::package("@platform/utils", "");
        let (path, warnings) = select_package_description("m", &[entry]);
        assert_eq!(path, None);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], Warning::DescriptorMalformed { .. }));
    }

    #[test]
    fn test_malformed_first_marker_is_not_replaced_by_later_one() {
        let broken = DescriptorEntry {
            name: Some("@platform/utils".into()),
            is_package_description: true,
            ..DescriptorEntry::default()
        };
        let entries = vec![
            broken,
            DescriptorEntry::package("@platform/utils", "utils/late.d.ts"),
        ];
        let (path, warnings) = select_package_description("m", &entries);
        assert_eq!(path, None);
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], Warning::DescriptorMalformed { .. }));
        assert!(matches!(
            warnings[1],
            Warning::DuplicatePackageDescription { .. }
        ));
    }
}
