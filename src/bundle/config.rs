//! Bundle Configuration
//!
//! Bundle descriptor data structures, loading and validation.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{DEV_SERVER_PORT, STATIC_DIR};
use crate::error::{Error, Result};
use crate::federation::manifest::FederationConfig;

/// How the bundle is being built
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

/// Public path for emitted assets
///
/// `Auto` resolves the path at load time from the URL the bundle was fetched
/// from, so the remote can be consumed from any host origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PublicPath {
    Auto,
    Fixed(String),
}

impl From<String> for PublicPath {
    fn from(value: String) -> Self {
        if value == "auto" {
            PublicPath::Auto
        } else {
            PublicPath::Fixed(value)
        }
    }
}

impl From<PublicPath> for String {
    fn from(value: PublicPath) -> Self {
        match value {
            PublicPath::Auto => "auto".to_string(),
            PublicPath::Fixed(path) => path,
        }
    }
}

/// Development server settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DevServerConfig {
    /// Fixed local port
    pub port: u16,
    /// Directory of built assets to serve
    pub static_dir: String,
    /// Serve the host page template for unknown routes
    pub history_api_fallback: bool,
    /// Response headers, e.g. permissive cross-origin access
    pub headers: BTreeMap<String, String>,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        Self {
            port: DEV_SERVER_PORT,
            static_dir: STATIC_DIR.to_string(),
            history_api_fallback: true,
            headers,
        }
    }
}

impl DevServerConfig {
    /// Configured Access-Control-Allow-Origin value, if any
    pub fn allow_origin(&self) -> Option<&str> {
        self.headers.get("Access-Control-Allow-Origin").map(String::as_str)
    }
}

/// Output settings for emitted assets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Public path the bundle is addressed under
    pub public_path: PublicPath,
    /// Wipe the output directory before emitting
    pub clean: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            public_path: PublicPath::Auto,
            clean: true,
        }
    }
}

/// Module resolution settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveConfig {
    /// Recognized source extensions
    pub extensions: Vec<String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            extensions: vec![".rs".to_string(), ".json".to_string()],
        }
    }
}

/// A processing rule applied to matching source files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleRule {
    /// Glob the rule applies to
    pub pattern: String,
    /// Processing stages, in order
    pub pipeline: Vec<String>,
    /// Glob excluded from the rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

/// Bundle descriptor for this remote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleConfig {
    /// Entry point of the bundle
    pub entry: String,
    #[serde(default)]
    pub mode: BuildMode,
    #[serde(default)]
    pub dev_server: DevServerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub resolve: ResolveConfig,
    #[serde(default)]
    pub rules: Vec<ModuleRule>,
    pub federation: FederationConfig,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            entry: "src/main.rs".to_string(),
            mode: BuildMode::Development,
            dev_server: DevServerConfig::default(),
            output: OutputConfig::default(),
            resolve: ResolveConfig::default(),
            rules: vec![
                ModuleRule {
                    pattern: "*.rs".to_string(),
                    pipeline: vec!["cargo-check".to_string()],
                    exclude: Some("target".to_string()),
                },
                ModuleRule {
                    pattern: "*.theme.json".to_string(),
                    pipeline: vec!["theme-parse".to_string(), "theme-apply".to_string()],
                    exclude: None,
                },
            ],
            federation: FederationConfig::default_remote(),
        }
    }
}

impl BundleConfig {
    /// Load and validate a bundle descriptor from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let value = fs::read_to_string(path)?;
        let config: BundleConfig = toml::from_str(&value)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the descriptor at `path` if present, else the built-in defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            info!("Loading bundle descriptor from {}", path.display());
            Self::load(path)
        } else {
            info!("No bundle descriptor found, using built-in defaults");
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Validate the descriptor
    pub fn validate(&self) -> Result<()> {
        if self.entry.trim().is_empty() {
            return Err(Error::Invalid {
                message: "bundle entry must not be empty".to_string(),
            });
        }
        if self.dev_server.port == 0 {
            return Err(Error::Invalid {
                message: "dev server port must not be 0".to_string(),
            });
        }
        if self.dev_server.static_dir.trim().is_empty() {
            return Err(Error::Invalid {
                message: "dev server static_dir must not be empty".to_string(),
            });
        }
        self.federation.validate()
    }

    /// Emit the remote entry manifest under the static directory
    ///
    /// Honors `output.clean` by recreating the static directory first.
    pub fn emit_manifest(&self, root: &Path) -> Result<std::path::PathBuf> {
        let out_dir = root.join(&self.dev_server.static_dir);
        if self.output.clean && out_dir.exists() {
            fs::remove_dir_all(&out_dir)?;
        }
        fs::create_dir_all(&out_dir)?;

        let path = out_dir.join(&self.federation.filename);
        let entry = self.federation.remote_entry();
        fs::write(&path, entry.to_json()?)?;

        info!("Emitted remote entry manifest: {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BundleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dev_server.port, 3000);
        assert_eq!(config.dev_server.static_dir, "dist");
        assert_eq!(config.dev_server.allow_origin(), Some("*"));
        assert_eq!(config.output.public_path, PublicPath::Auto);
        assert!(config.output.clean);
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = BundleConfig::default();
        config.dev_server.port = 0;
        assert!(matches!(config.validate(), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_entry() {
        let mut config = BundleConfig::default();
        config.entry = "  ".to_string();
        assert!(matches!(config.validate(), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_public_path_parsing() {
        assert_eq!(PublicPath::from("auto".to_string()), PublicPath::Auto);
        assert_eq!(
            PublicPath::from("/static/remote/".to_string()),
            PublicPath::Fixed("/static/remote/".to_string())
        );
        assert_eq!(String::from(PublicPath::Auto), "auto");
    }

    #[test]
    fn test_descriptor_round_trips_through_toml() {
        let config = BundleConfig::default();
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed: BundleConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_descriptor_fills_defaults() {
        let text = r#"
            entry = "src/main.rs"

            [federation]
            name = "remote"
            filename = "remote-entry.json"

            [federation.exposes]
            "./App" = "src/app/page.rs"

            [federation.shared.gpui]
            singleton = true
            required_version = "^0.2.2"
        "#;
        let config: BundleConfig = toml::from_str(text).expect("parse");
        assert_eq!(config.mode, BuildMode::Development);
        assert_eq!(config.dev_server.port, 3000);
        assert!(config.dev_server.history_api_fallback);
    }
}
