use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One record of a provider's descriptor content.
///
/// Serde names match the on-disk descriptor shape (`modules.json`): a module's
/// content is a sequence of these, with at most one entry carrying the
/// `isPackageDescription` marker and that module's declaration-text path. The
/// remaining fields describe individual APIs and are opaque to discovery; the
/// require-path suggestion collector consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Marks the module's package header record. Only the boolean `true`
    /// counts; truthy junk in a hand-written descriptor does not.
    #[serde(
        rename = "isPackageDescription",
        default,
        deserialize_with = "strict_flag",
        skip_serializing_if = "is_false"
    )]
    pub is_package_description: bool,

    /// Logical path of the module's declaration text. Present only on the
    /// package-description entry; a non-string value deserializes as absent
    /// and is reported by validation.
    #[serde(
        rename = "dtsPath",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub dts_path: Option<String>,

    #[serde(
        rename = "require_suggestion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub require_suggestion: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,

    #[serde(rename = "versionedPaths", default, skip_serializing_if = "Vec::is_empty")]
    pub versioned_paths: Vec<String>,

    #[serde(rename = "pathDefault", default, skip_serializing_if = "Option::is_none")]
    pub path_default: Option<String>,
}

impl DescriptorEntry {
    /// Package header record pointing at the module's declaration text.
    pub fn package(name: &str, dts_path: &str) -> Self {
        Self {
            name: Some(name.into()),
            is_package_description: true,
            dts_path: Some(dts_path.into()),
            ..Self::default()
        }
    }

    /// Individual API record with a require-path suggestion.
    pub fn api(api: &str, require_suggestion: &str) -> Self {
        Self {
            api: Some(api.into()),
            require_suggestion: Some(require_suggestion.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Strict boolean check: anything but JSON `true` is not a marker.
fn strict_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

/// Non-string values deserialize as absent; validation reports them.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
