//! Host-owned registry of activated middleware instances.
//!
//! Nothing in this crate reads the registry implicitly; a host that runs
//! several named activations (one per realm, say) keeps one of these and
//! decides itself when to register or drop an instance.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::provider::ProviderSettings;

/// Map from instance name to its resolved settings.
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    instances: HashMap<String, Arc<ProviderSettings>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register settings under their instance name.
    ///
    /// Returns the previously registered settings for that name, if any.
    pub fn register(&mut self, settings: Arc<ProviderSettings>) -> Option<Arc<ProviderSettings>> {
        let name = settings.name().to_string();
        info!(instance = %name, realm = settings.realm(), "Registering Keycloak instance");
        self.instances.insert(name, settings)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ProviderSettings>> {
        self.instances.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<ProviderSettings>> {
        self.instances.remove(name)
    }

    /// Registered instance names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.instances.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
