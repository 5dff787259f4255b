//! Federation Manifest
//!
//! Federation descriptor data structures and the remote entry manifest
//! published to hosts.

use std::collections::BTreeMap;

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::constants::{EXPOSE_APP, EXPOSE_BUTTON, REMOTE_ENTRY_FILE, REMOTE_NAME};
use crate::error::{Error, Result};

/// A dependency the host and this remote must resolve to one instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharedDependency {
    /// Host and remote share a single instance rather than bundling copies
    #[serde(default)]
    pub singleton: bool,
    /// Minimum compatible version constraint
    pub required_version: VersionReq,
}

impl SharedDependency {
    /// Whether a host-provided version satisfies this constraint
    pub fn satisfied_by(&self, version: &Version) -> bool {
        self.required_version.matches(version)
    }
}

/// Federation descriptor for this remote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FederationConfig {
    /// Symbolic name this remote publishes itself under
    pub name: String,
    /// Filename of the remote entry manifest
    pub filename: String,
    /// Public module names mapped to internal source locations
    pub exposes: BTreeMap<String, String>,
    /// Shared-dependency version-constraint table
    pub shared: BTreeMap<String, SharedDependency>,
}

impl FederationConfig {
    /// The descriptor this remote ships with
    pub fn default_remote() -> Self {
        let mut exposes = BTreeMap::new();
        exposes.insert(
            EXPOSE_APP.to_string(),
            "src/app/page.rs".to_string(),
        );
        exposes.insert(
            EXPOSE_BUTTON.to_string(),
            "src/components/primitives/button.rs".to_string(),
        );

        let mut shared = BTreeMap::new();
        shared.insert(
            "gpui".to_string(),
            SharedDependency {
                singleton: true,
                required_version: VersionReq::parse("^0.2.2")
                    .expect("version requirement is well-formed"),
            },
        );
        shared.insert(
            "gpui-component".to_string(),
            SharedDependency {
                singleton: true,
                required_version: VersionReq::parse("^0.5.0")
                    .expect("version requirement is well-formed"),
            },
        );

        Self {
            name: REMOTE_NAME.to_string(),
            filename: REMOTE_ENTRY_FILE.to_string(),
            exposes,
            shared,
        }
    }

    /// Validate the descriptor
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Invalid {
                message: "federation name must not be empty".to_string(),
            });
        }
        if self.filename.trim().is_empty() {
            return Err(Error::Invalid {
                message: "federation filename must not be empty".to_string(),
            });
        }
        if self.exposes.is_empty() {
            return Err(Error::Invalid {
                message: "federation must expose at least one module".to_string(),
            });
        }
        for (exposed, source) in &self.exposes {
            if !exposed.starts_with("./") {
                return Err(Error::Invalid {
                    message: format!("exposed module name must start with './': {exposed}"),
                });
            }
            if source.trim().is_empty() {
                return Err(Error::Invalid {
                    message: format!("exposed module has no source location: {exposed}"),
                });
            }
        }
        Ok(())
    }

    /// Resolve an exposed module name to its internal source location
    pub fn resolve(&self, exposed: &str) -> Result<&str> {
        self.exposes
            .get(exposed)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownExpose {
                name: exposed.to_string(),
            })
    }

    /// Check a host-provided version of a shared dependency
    ///
    /// A dependency absent from the table is not shared, so any version is
    /// acceptable. A present one must satisfy its version floor.
    pub fn check_shared(&self, name: &str, provided: &Version) -> Result<()> {
        match self.shared.get(name) {
            None => Ok(()),
            Some(dep) if dep.satisfied_by(provided) => Ok(()),
            Some(dep) => Err(Error::SharedVersion {
                name: name.to_string(),
                required: dep.required_version.clone(),
                provided: provided.clone(),
            }),
        }
    }

    /// Build the manifest published under [`FederationConfig::filename`]
    pub fn remote_entry(&self) -> RemoteEntry {
        RemoteEntry {
            name: self.name.clone(),
            modules: self.exposes.keys().cloned().collect(),
            shared: self.shared.clone(),
        }
    }
}

/// Remote entry manifest fetched by hosts to discover this remote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteEntry {
    /// Symbolic name of the remote
    pub name: String,
    /// Exposed module names, sorted
    pub modules: Vec<String>,
    /// Shared-dependency requirements the host must satisfy
    pub shared: BTreeMap<String, SharedDependency>,
}

impl RemoteEntry {
    /// Serialize the manifest for publishing
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exposure_map_is_exactly_app_and_button() {
        let federation = FederationConfig::default_remote();
        let exposed: Vec<&str> = federation.exposes.keys().map(String::as_str).collect();
        assert_eq!(exposed, vec!["./App", "./Button"]);
    }

    #[test]
    fn test_shared_table_pins_framework_and_component_layer() {
        let federation = FederationConfig::default_remote();
        assert_eq!(federation.shared.len(), 2);

        let gpui = federation.shared.get("gpui").expect("gpui is shared");
        assert!(gpui.singleton);
        assert!(gpui.satisfied_by(&Version::new(0, 2, 2)));
        assert!(gpui.satisfied_by(&Version::new(0, 2, 9)));
        assert!(!gpui.satisfied_by(&Version::new(0, 1, 8)));

        let component = federation
            .shared
            .get("gpui-component")
            .expect("gpui-component is shared");
        assert!(component.singleton);
        assert!(component.satisfied_by(&Version::new(0, 5, 0)));
        assert!(!component.satisfied_by(&Version::new(0, 4, 3)));
    }

    #[test]
    fn test_resolve_known_and_unknown_modules() {
        let federation = FederationConfig::default_remote();
        assert_eq!(
            federation.resolve("./Button").expect("exposed"),
            "src/components/primitives/button.rs"
        );
        assert!(matches!(
            federation.resolve("./Sidebar"),
            Err(Error::UnknownExpose { .. })
        ));
    }

    #[test]
    fn test_check_shared_version_floor() {
        let federation = FederationConfig::default_remote();
        assert!(federation
            .check_shared("gpui", &Version::new(0, 2, 5))
            .is_ok());
        assert!(matches!(
            federation.check_shared("gpui", &Version::new(0, 1, 0)),
            Err(Error::SharedVersion { .. })
        ));
        // A dependency the remote does not share carries no constraint
        assert!(federation
            .check_shared("serde", &Version::new(1, 0, 0))
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_exposure_names() {
        let mut federation = FederationConfig::default_remote();
        federation
            .exposes
            .insert("Button".to_string(), "src/x.rs".to_string());
        assert!(matches!(
            federation.validate(),
            Err(Error::Invalid { .. })
        ));

        let mut federation = FederationConfig::default_remote();
        federation.exposes.clear();
        assert!(matches!(
            federation.validate(),
            Err(Error::Invalid { .. })
        ));
    }

    #[test]
    fn test_remote_entry_manifest_content() {
        let entry = FederationConfig::default_remote().remote_entry();
        assert_eq!(entry.name, "remote");
        assert_eq!(entry.modules, vec!["./App", "./Button"]);

        let json = entry.to_json().expect("manifest serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["name"], "remote");
        assert_eq!(value["shared"]["gpui"]["singleton"], true);
        assert_eq!(value["shared"]["gpui"]["required_version"], "^0.2.2");
    }
}
