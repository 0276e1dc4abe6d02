//! Registries for widgets and sidebars

use super::widget::RegistryEntry;
use std::collections::HashMap;

/// Read-only lookup into the host's widget table
///
/// The aggregator never walks the table; it only resolves individual
/// ids, so hosts can back this with whatever storage they like.
pub trait WidgetLookup: Send + Sync {
    /// Look up a table entry by widget id
    fn get(&self, id: &str) -> Option<&dyn RegistryEntry>;
}

/// In-memory widget registry
///
/// The demo host's widget table. Entries are registered once at
/// startup and only read afterwards.
#[derive(Default)]
pub struct WidgetRegistry {
    entries: HashMap<String, Box<dyn RegistryEntry>>,
}

impl WidgetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table entry under an id
    ///
    /// A second registration for the same id replaces the first.
    pub fn register(&mut self, id: &str, entry: impl RegistryEntry + 'static) {
        self.entries.insert(id.to_string(), Box::new(entry));
    }

    /// List all registered ids
    pub fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl WidgetLookup for WidgetRegistry {
    fn get(&self, id: &str) -> Option<&dyn RegistryEntry> {
        self.entries.get(id).map(|e| e.as_ref())
    }
}

/// A named placement region
///
/// Carries the markup wrapper emitted around each widget instance
/// rendered into the region. `before_widget` is a container template
/// with `{id}` and `{class}` placeholders.
#[derive(Debug, Clone)]
pub struct Sidebar {
    /// Display name of the region
    pub name: String,
    /// Opening wrapper template
    pub before_widget: String,
    /// Closing wrapper
    pub after_widget: String,
}

/// Read-only lookup into the host's sidebar table
pub trait SidebarLookup: Send + Sync {
    /// Look up a sidebar by id
    fn get(&self, id: &str) -> Option<&Sidebar>;
}

/// In-memory sidebar registry for the demo host
#[derive(Default)]
pub struct SidebarRegistry {
    sidebars: HashMap<String, Sidebar>,
}

impl SidebarRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sidebar under an id
    pub fn register(&mut self, id: &str, sidebar: Sidebar) {
        self.sidebars.insert(id.to_string(), sidebar);
    }
}

impl SidebarLookup for SidebarRegistry {
    fn get(&self, id: &str) -> Option<&Sidebar> {
        self.sidebars.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::widget::{Widget, WidgetConfig};
    use anyhow::Result;

    struct FakeWidget;

    impl Widget for FakeWidget {
        fn id(&self) -> &str {
            "fake"
        }
        fn name(&self) -> &str {
            "Fake"
        }
        fn class_name(&self) -> Option<&str> {
            Some("widget_fake")
        }
        fn render(&self, _config: Option<&WidgetConfig>) -> Result<String> {
            Ok(String::new())
        }
    }

    /// A table entry that is not a widget
    struct OpaqueEntry;

    impl RegistryEntry for OpaqueEntry {}

    #[test]
    fn test_lookup_returns_registered_entry() {
        let mut registry = WidgetRegistry::new();
        registry.register("fake", FakeWidget);

        let entry = registry.get("fake").unwrap();
        assert_eq!(entry.as_widget().unwrap().id(), "fake");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_non_widget_entry_is_not_a_widget() {
        let mut registry = WidgetRegistry::new();
        registry.register("opaque", OpaqueEntry);

        let entry = registry.get("opaque").unwrap();
        assert!(entry.as_widget().is_none());
    }

    #[test]
    fn test_sidebar_lookup() {
        let mut sidebars = SidebarRegistry::new();
        sidebars.register(
            "sidebar-1",
            Sidebar {
                name: "Primary".to_string(),
                before_widget: "<li id=\"{id}\" class=\"widget {class}\">".to_string(),
                after_widget: "</li>".to_string(),
            },
        );

        assert_eq!(sidebars.get("sidebar-1").unwrap().name, "Primary");
        assert!(sidebars.get("sidebar-2").is_none());
    }
}
