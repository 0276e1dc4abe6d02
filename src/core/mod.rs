//! Core traits and types for the monster widget

pub mod features;
pub mod filter;
pub mod monster;
pub mod registry;
pub mod renderer;
pub mod template;
pub mod widget;

pub use features::FeatureGate;
pub use filter::FilterChain;
pub use monster::{
    widget_class, HostContext, MonsterWidget, PlaceholderCounter, RenderContext, RenderError,
    PLACEHOLDER_PREFIX,
};
pub use registry::{Sidebar, SidebarLookup, SidebarRegistry, WidgetLookup, WidgetRegistry};
pub use renderer::{HtmlRenderer, WidgetRenderer};
pub use widget::{RegistryEntry, Widget, WidgetConfig, WidgetSpec};
