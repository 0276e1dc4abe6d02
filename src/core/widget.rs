//! Widget trait and related types

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Per-instance widget configuration
///
/// A flat map of setting key -> scalar value (string, number or bool),
/// matching what the host stores for a placed widget instance.
pub type WidgetConfig = HashMap<String, Value>;

/// One entry in the aggregator's render list
///
/// Pairs the id of a registered widget with an optional instance
/// configuration. Ordering of specs controls render order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Id of the widget as registered with the host
    pub widget_id: String,
    /// Instance configuration, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<WidgetConfig>,
}

impl WidgetSpec {
    /// Create a spec with no instance configuration
    pub fn new(widget_id: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            config: None,
        }
    }

    /// Create a spec with an instance configuration
    pub fn with_config(widget_id: impl Into<String>, config: WidgetConfig) -> Self {
        Self {
            widget_id: widget_id.into(),
            config: Some(config),
        }
    }
}

/// Trait for all widgets
///
/// Widgets are self-contained renderable content blocks managed by the
/// host. The aggregator only reads their class name; the host renderer
/// calls `render()` to produce the actual markup.
pub trait Widget: Send + Sync {
    /// Unique identifier for this widget type
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// CSS class name applied to the widget's container
    ///
    /// Widgets without a configured class return `None`; class
    /// resolution degrades to an empty string in that case.
    fn class_name(&self) -> Option<&str>;

    /// Render the widget to markup
    ///
    /// `config` carries the instance settings from the spec, or `None`
    /// when the widget should fall back to its defaults.
    fn render(&self, config: Option<&WidgetConfig>) -> Result<String>;
}

/// An entry in the host's widget table
///
/// The host table may hold values that are not widgets at all; class
/// resolution treats those like unregistered ids. Every `Widget` is a
/// valid entry via the blanket impl below.
pub trait RegistryEntry: Send + Sync {
    /// View this entry as a widget, if it is one
    fn as_widget(&self) -> Option<&dyn Widget> {
        None
    }
}

impl<W: Widget> RegistryEntry for W {
    fn as_widget(&self) -> Option<&dyn Widget> {
        Some(self)
    }
}

/// Extract a string setting from a widget config, with fallback
pub fn config_str<'a>(config: Option<&'a WidgetConfig>, key: &str, default: &'a str) -> &'a str {
    config
        .and_then(|c| c.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or(default)
}

/// Extract an integer setting from a widget config, with fallback
pub fn config_u64(config: Option<&WidgetConfig>, key: &str, default: u64) -> u64 {
    config
        .and_then(|c| c.get(key))
        .and_then(|v| v.as_u64())
        .unwrap_or(default)
}

/// Extract a boolean setting from a widget config, with fallback
pub fn config_bool(config: Option<&WidgetConfig>, key: &str, default: bool) -> bool {
    config
        .and_then(|c| c.get(key))
        .and_then(|v| v.as_bool())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_widget_spec_serialization() {
        let spec = WidgetSpec::with_config(
            "members",
            HashMap::from([("max_members".to_string(), json!(5))]),
        );
        let serialized = serde_json::to_string(&spec).unwrap();
        assert!(serialized.contains("\"widget_id\":\"members\""));

        let deserialized: WidgetSpec = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.widget_id, "members");
        assert_eq!(config_u64(deserialized.config.as_ref(), "max_members", 0), 5);
    }

    #[test]
    fn test_spec_without_config_omits_field() {
        let spec = WidgetSpec::new("login");
        let serialized = serde_json::to_string(&spec).unwrap();
        assert!(!serialized.contains("config"));

        let deserialized: WidgetSpec = serde_json::from_str(&serialized).unwrap();
        assert!(deserialized.config.is_none());
    }

    #[test]
    fn test_config_helpers_fall_back_on_missing_or_mistyped() {
        let config = HashMap::from([
            ("title".to_string(), json!("Members")),
            ("max_members".to_string(), json!("not a number")),
        ]);
        let config = Some(&config);

        assert_eq!(config_str(config, "title", "fallback"), "Members");
        assert_eq!(config_u64(config, "max_members", 5), 5);
        assert!(config_bool(config, "link_title", true));
        assert_eq!(config_str(None, "title", "fallback"), "fallback");
    }
}
