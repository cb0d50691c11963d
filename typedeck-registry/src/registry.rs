use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::provider::DescriptorProvider;

/// Extension point where API modules register their descriptor providers.
pub const API_MODULES: &str = "api-modules";

/// Named-slot registry where independently packaged modules register for
/// discovery.
///
/// The host platform owns the real registry; this trait is the seam the
/// aggregator calls through. Lookups must be idempotent per call, but contents
/// may change between calls — dynamic registration is expected, so callers do
/// not cache. An unknown point yields an empty list, not an error; only a
/// failing lookup itself is fatal.
pub trait ExtensionRegistry {
    fn extensions(
        &self,
        point: &str,
    ) -> Result<Vec<Arc<dyn DescriptorProvider>>, RegistryError>;
}

/// In-process extension registry; enumeration order is registration order.
#[derive(Clone, Default)]
pub struct StaticRegistry {
    points: HashMap<String, Vec<Arc<dyn DescriptorProvider>>>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, point: &str, provider: Arc<dyn DescriptorProvider>) {
        self.points.entry(point.to_string()).or_default().push(provider);
    }

    pub fn with(mut self, point: &str, provider: Arc<dyn DescriptorProvider>) -> Self {
        self.register(point, provider);
        self
    }
}

impl ExtensionRegistry for StaticRegistry {
    fn extensions(
        &self,
        point: &str,
    ) -> Result<Vec<Arc<dyn DescriptorProvider>>, RegistryError> {
        Ok(self.points.get(point).cloned().unwrap_or_default())
    }
}
