//! The monster widget: renders a whole stack of widgets in one placement

use super::features::{component, FeatureGate};
use super::filter::FilterChain;
use super::registry::{SidebarLookup, WidgetLookup};
use super::renderer::WidgetRenderer;
use super::template;
use super::widget::{WidgetSpec, Widget, WidgetConfig};
use anyhow::Result;
use log::debug;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Prefix for the unique element id given to each rendered sub-widget
pub const PLACEHOLDER_PREFIX: &str = "monster-widget-placeholder-";

/// Errors the aggregator can raise on its own
///
/// Faults inside a delegated sub-widget render are not wrapped; they
/// propagate to the caller as-is.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The render context named a sidebar the host never registered
    #[error("unknown sidebar: {0}")]
    UnknownSidebar(String),
}

/// Monotonic counter backing the placeholder element ids
///
/// Starts at 1 and is never reset for the lifetime of the aggregator,
/// so ids stay unique across render calls. Atomic so hosts that render
/// concurrent requests on shared memory cannot hand out duplicates.
pub struct PlaceholderCounter(AtomicU64);

impl PlaceholderCounter {
    /// Create a counter starting at 1
    pub fn new() -> Self {
        Self(AtomicU64::new(1))
    }

    /// Take the next value
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for PlaceholderCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-placement render input supplied by the host
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Id of the sidebar being rendered into; its registry record
    /// carries the container template for the placement
    pub sidebar_id: String,
}

/// The host collaborators a render call reads from
///
/// Always passed in explicitly; the aggregator holds no ambient
/// references to host state.
pub struct HostContext<'a> {
    /// The host's widget table
    pub widgets: &'a dyn WidgetLookup,
    /// The host's sidebar table
    pub sidebars: &'a dyn SidebarLookup,
    /// The host's component activation flags
    pub features: &'a dyn FeatureGate,
}

/// Resolve the CSS class name for a registered widget
///
/// Total over all inputs: an unregistered id, a table entry that is
/// not a widget, and a widget with no configured class all resolve to
/// the empty string.
pub fn widget_class(widgets: &dyn WidgetLookup, id: &str) -> String {
    widgets
        .get(id)
        .and_then(|entry| entry.as_widget())
        .and_then(|widget| widget.class_name())
        .unwrap_or_default()
        .to_string()
}

/// Widget that renders a fixed stack of other widgets
///
/// Holds the pre-configured widget list and the placeholder counter.
/// One instance is meant to live for the whole process; rendering only
/// takes `&self`.
pub struct MonsterWidget {
    filters: FilterChain,
    counter: PlaceholderCounter,
}

impl MonsterWidget {
    /// Create an aggregator with an empty filter chain
    pub fn new() -> Self {
        Self {
            filters: FilterChain::new(),
            counter: PlaceholderCounter::new(),
        }
    }

    /// Register a configuration filter
    ///
    /// Filters transform the spec list after the built-in roster is
    /// assembled and before anything renders; see [`FilterChain`].
    pub fn add_filter<F>(&mut self, filter: F)
    where
        F: Fn(Vec<WidgetSpec>) -> Vec<WidgetSpec> + Send + Sync + 'static,
    {
        self.filters.add(filter);
    }

    /// Build the ordered list of widgets to render
    ///
    /// Four widgets are always included, in fixed order. Up to four
    /// more follow, each gated on a host component being active; the
    /// networkwide-posts widget additionally requires multi-site mode.
    /// The assembled list then runs through the filter chain, whose
    /// output is final.
    pub fn widget_config(&self, features: &dyn FeatureGate) -> Vec<WidgetSpec> {
        let mut widgets = vec![
            WidgetSpec::with_config(
                "login",
                instance(&[("title", json!("Login"))]),
            ),
            WidgetSpec::with_config(
                "members",
                instance(&[
                    ("title", json!("Members")),
                    ("max_members", json!(5)),
                    ("member_default", json!("active")),
                    ("link_title", json!(false)),
                ]),
            ),
            WidgetSpec::with_config(
                "whos-online",
                instance(&[
                    ("title", json!("Who's Online")),
                    ("max_members", json!(15)),
                ]),
            ),
            WidgetSpec::with_config(
                "recently-active",
                instance(&[
                    ("title", json!("Recently Active Members")),
                    ("max_members", json!(15)),
                ]),
            ),
        ];

        // Networkwide posts only exist when the blogs component runs
        // across a multi-site network
        if features.is_active(component::BLOGS) && features.is_multisite() {
            widgets.push(WidgetSpec::with_config(
                "recent-posts",
                instance(&[
                    ("title", json!("Recent Networkwide Posts")),
                    ("max_posts", json!(10)),
                    ("link_title", json!(true)),
                ]),
            ));
        }

        if features.is_active(component::FRIENDS) {
            widgets.push(WidgetSpec::with_config(
                "friends",
                instance(&[
                    ("title", json!("Friends")),
                    ("max_friends", json!(5)),
                    ("friend_default", json!("active")),
                    ("link_title", json!(false)),
                ]),
            ));
        }

        if features.is_active(component::GROUPS) {
            widgets.push(WidgetSpec::with_config(
                "groups",
                instance(&[
                    ("title", json!("Groups")),
                    ("max_groups", json!(5)),
                    ("group_default", json!("active")),
                    ("link_title", json!(false)),
                ]),
            ));
        }

        if features.is_active(component::MESSAGES) {
            widgets.push(WidgetSpec::with_config(
                "sitewide-notices",
                instance(&[("title", json!("Sitewide Notices"))]),
            ));
        }

        if !self.filters.is_empty() {
            debug!("Applying {} configuration filter(s)", self.filters.len());
        }
        self.filters.apply(widgets)
    }

    /// Render every configured widget into the named sidebar
    ///
    /// Each sub-widget gets the sidebar's container template filled
    /// with a fresh placeholder id and the widget's own class, then is
    /// delegated to the host renderer. An unregistered widget id is
    /// not an error here: the class degrades to an empty string and
    /// the renderer decides what the unknown id means. A fault inside
    /// a delegated render propagates to the caller.
    pub fn render(
        &self,
        ctx: &RenderContext,
        host: &HostContext,
        renderer: &mut dyn WidgetRenderer,
    ) -> Result<()> {
        let sidebar = host
            .sidebars
            .get(&ctx.sidebar_id)
            .ok_or_else(|| RenderError::UnknownSidebar(ctx.sidebar_id.clone()))?;

        for spec in self.widget_config(host.features) {
            let class = widget_class(host.widgets, &spec.widget_id);
            let placeholder = format!("{}{}", PLACEHOLDER_PREFIX, self.counter.next());
            let container = template::fill(&sidebar.before_widget, &placeholder, &class);

            debug!("Rendering widget '{}' as #{}", spec.widget_id, placeholder);
            renderer.render_widget(&spec.widget_id, spec.config.as_ref(), &container)?;
        }

        Ok(())
    }
}

impl Default for MonsterWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for MonsterWidget {
    fn id(&self) -> &str {
        "monster"
    }

    fn name(&self) -> &str {
        "Monster Widget"
    }

    fn class_name(&self) -> Option<&str> {
        Some("monster_widget")
    }

    fn render(&self, _config: Option<&WidgetConfig>) -> Result<String> {
        // The aggregator renders through MonsterWidget::render with the
        // host collaborators; the Widget impl only exists so the host
        // can keep it in its table like any other widget.
        Ok(String::new())
    }
}

/// Build a widget instance config from key/value pairs
fn instance(entries: &[(&str, Value)]) -> WidgetConfig {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}
