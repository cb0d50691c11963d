use serde_json::Value;
use typedeck_content::ContentSource;

use crate::descriptor::DescriptorEntry;
use crate::error::ProviderError;

/// One registered module's descriptor-producing unit.
///
/// Opaque to the aggregator beyond this contract: a module path for
/// diagnostics and a single describe operation yielding descriptor entries.
pub trait DescriptorProvider: Send + Sync {
    /// Module path that registered this provider, used in diagnostics.
    fn module(&self) -> &str;

    fn describe(&self) -> Result<Vec<DescriptorEntry>, ProviderError>;
}

/// Provider with a fixed entry list, for modules compiled into the host.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    module: String,
    entries: Vec<DescriptorEntry>,
}

impl StaticProvider {
    pub fn new(module: &str, entries: Vec<DescriptorEntry>) -> Self {
        Self {
            module: module.into(),
            entries,
        }
    }
}

impl DescriptorProvider for StaticProvider {
    fn module(&self) -> &str {
        &self.module
    }

    fn describe(&self) -> Result<Vec<DescriptorEntry>, ProviderError> {
        Ok(self.entries.clone())
    }
}

/// Provider backed by a JSON descriptor document fetched by logical path.
///
/// Accepts an array of entries or a map whose values are entries; map
/// iteration follows key-insertion order. Anything else is malformed. The
/// fetched text is parsed exactly once.
pub struct JsonProvider<S> {
    module: String,
    path: String,
    source: S,
}

impl<S: ContentSource> JsonProvider<S> {
    pub fn new(module: &str, path: &str, source: S) -> Self {
        Self {
            module: module.into(),
            path: path.into(),
            source,
        }
    }
}

impl<S: ContentSource> DescriptorProvider for JsonProvider<S> {
    fn module(&self) -> &str {
        &self.module
    }

    fn describe(&self) -> Result<Vec<DescriptorEntry>, ProviderError> {
        let text = self.source.text(&self.path)?;
        let value: Value = serde_json::from_str(&text)?;
        let items: Vec<Value> = match value {
            Value::Array(items) => items,
            Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
            other => {
                return Err(ProviderError::Malformed(format!(
                    "descriptor content is {}, expected a sequence of entries",
                    json_type(&other)
                )));
            }
        };
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ProviderError::from))
            .collect()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
