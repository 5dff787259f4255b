//! Remote Registry
//!
//! Runtime exposure map for hosts that link this crate directly instead of
//! fetching the published bundle.

use std::collections::BTreeMap;

use crate::constants::{EXPOSE_APP, EXPOSE_BUTTON};
use crate::error::{Error, Result};

/// A module this remote exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposedModule {
    /// The App page
    App,
    /// The Button primitive
    Button,
}

impl ExposedModule {
    /// Public name the module is exposed under
    pub fn name(self) -> &'static str {
        match self {
            ExposedModule::App => EXPOSE_APP,
            ExposedModule::Button => EXPOSE_BUTTON,
        }
    }

    /// Source location backing this module in the bundle
    pub fn source_path(self) -> &'static str {
        match self {
            ExposedModule::App => "src/app/page.rs",
            ExposedModule::Button => "src/components/primitives/button.rs",
        }
    }
}

/// Registry resolving exposed module names
pub struct RemoteRegistry {
    modules: BTreeMap<&'static str, ExposedModule>,
}

impl RemoteRegistry {
    /// Registry of everything this remote exposes
    pub fn new() -> Self {
        let mut modules = BTreeMap::new();
        for module in [ExposedModule::App, ExposedModule::Button] {
            modules.insert(module.name(), module);
        }
        Self { modules }
    }

    /// Resolve a public module name
    pub fn resolve(&self, name: &str) -> Result<ExposedModule> {
        self.modules
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownExpose {
                name: name.to_string(),
            })
    }

    /// Exposed names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.modules.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for RemoteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::federation::manifest::FederationConfig;

    #[test]
    fn test_registry_resolves_exactly_the_exposed_modules() {
        let registry = RemoteRegistry::new();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.resolve("./App").expect("exposed"),
            ExposedModule::App
        );
        assert_eq!(
            registry.resolve("./Button").expect("exposed"),
            ExposedModule::Button
        );
        assert!(matches!(
            registry.resolve("./Header"),
            Err(Error::UnknownExpose { .. })
        ));
    }

    #[test]
    fn test_registry_agrees_with_federation_descriptor() {
        let registry = RemoteRegistry::new();
        let federation = FederationConfig::default_remote();

        let descriptor_names: Vec<&str> =
            federation.exposes.keys().map(String::as_str).collect();
        assert_eq!(registry.names(), descriptor_names);

        for name in registry.names() {
            let module = registry.resolve(name).expect("registered");
            assert_eq!(
                federation.resolve(name).expect("exposed"),
                module.source_path()
            );
        }
    }
}
