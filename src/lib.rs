//! Monster Widget: render a whole stack of community widgets at once
//!
//! This library provides:
//! - The monster widget aggregator and its configuration filter chain
//! - Host collaborator traits (widget registry, sidebar registry,
//!   feature gate, single-widget renderer)
//! - An in-memory demo host with stub widgets and an HTML renderer
//! - Configuration management for the demo host

pub mod config;
pub mod core;
pub mod widgets;

// Re-export commonly used types
pub use config::{AppConfig, Features};
pub use core::{MonsterWidget, Widget, WidgetRegistry, WidgetSpec};
