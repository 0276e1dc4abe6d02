//! Application configuration for the demo host

use crate::core::features::{component, FeatureGate};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Demo host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Component activation flags
    pub features: Features,
    /// Sidebar the monster widget renders into
    pub sidebar: SidebarConfig,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "monster-widget", "monster-widget")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            features: Features::default(),
            sidebar: SidebarConfig::default(),
        }
    }
}

/// Component activation flags for the demo host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Features {
    #[serde(default)]
    pub blogs: bool,
    #[serde(default)]
    pub friends: bool,
    #[serde(default)]
    pub groups: bool,
    #[serde(default)]
    pub messages: bool,
    /// Whether the host runs a network of sites
    #[serde(default)]
    pub multisite: bool,
}

impl Features {
    /// Enable every component
    pub fn all() -> Self {
        Self {
            blogs: true,
            friends: true,
            groups: true,
            messages: true,
            multisite: true,
        }
    }
}

impl FeatureGate for Features {
    fn is_active(&self, comp: &str) -> bool {
        match comp {
            component::BLOGS => self.blogs,
            component::FRIENDS => self.friends,
            component::GROUPS => self.groups,
            component::MESSAGES => self.messages,
            _ => false,
        }
    }

    fn is_multisite(&self) -> bool {
        self.multisite
    }
}

/// Sidebar definition for the demo host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Sidebar id the monster widget is placed into
    pub id: String,
    /// Display name
    pub name: String,
    /// Container template with `{id}` and `{class}` placeholders
    pub before_widget: String,
    /// Closing wrapper
    pub after_widget: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            id: "sidebar-1".to_string(),
            name: "Primary Sidebar".to_string(),
            before_widget: "<li id=\"{id}\" class=\"widget {class}\">".to_string(),
            after_widget: "</li>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            features: Features {
                friends: true,
                ..Features::default()
            },
            ..AppConfig::default()
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();

        assert!(deserialized.features.friends);
        assert!(!deserialized.features.groups);
        assert_eq!(deserialized.sidebar.id, "sidebar-1");
    }

    #[test]
    fn test_missing_flags_default_to_inactive() {
        let json = r#"{
            "version": 1,
            "features": { "messages": true },
            "sidebar": {
                "id": "sidebar-2",
                "name": "Footer",
                "before_widget": "<div id=\"{id}\" class=\"{class}\">",
                "after_widget": "</div>"
            }
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.features.messages);
        assert!(!config.features.blogs);
        assert!(!config.features.multisite);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.features.groups = true;
        config.sidebar.id = "sidebar-9".to_string();

        // parent directory does not exist yet; save creates it
        config.save_to_path(&path).unwrap();
        let loaded = AppConfig::load_from_path(&path).unwrap();

        assert!(loaded.features.groups);
        assert!(!loaded.features.blogs);
        assert_eq!(loaded.sidebar.id, "sidebar-9");
    }

    #[test]
    fn test_feature_gate_ignores_unknown_components() {
        let features = Features::all();
        assert!(features.is_active(component::GROUPS));
        assert!(!features.is_active("forums"));
    }
}
