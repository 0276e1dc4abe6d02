//! Single-widget render delegation

use super::registry::WidgetLookup;
use super::widget::WidgetConfig;
use anyhow::Result;
use log::warn;

/// The host's single-widget render function
///
/// The aggregator hands each configured sub-widget to this
/// collaborator together with the already-filled container wrapper.
/// What an unknown id means is the renderer's call, not the
/// aggregator's.
pub trait WidgetRenderer {
    /// Render one widget instance into its container
    fn render_widget(
        &mut self,
        id: &str,
        config: Option<&WidgetConfig>,
        container: &str,
    ) -> Result<()>;
}

/// Renderer that accumulates HTML into a buffer
///
/// The demo host's render function: looks the widget up, emits the
/// container wrapper, the widget's own markup and the closing wrapper.
/// Unknown ids are skipped with a warning, matching what the host does
/// when asked to render a widget it never registered.
pub struct HtmlRenderer<'a> {
    widgets: &'a dyn WidgetLookup,
    after_widget: String,
    out: String,
}

impl<'a> HtmlRenderer<'a> {
    /// Create a renderer closing each container with `after_widget`
    pub fn new(widgets: &'a dyn WidgetLookup, after_widget: impl Into<String>) -> Self {
        Self {
            widgets,
            after_widget: after_widget.into(),
            out: String::new(),
        }
    }

    /// Consume the renderer and return the accumulated markup
    pub fn into_html(self) -> String {
        self.out
    }
}

impl WidgetRenderer for HtmlRenderer<'_> {
    fn render_widget(
        &mut self,
        id: &str,
        config: Option<&WidgetConfig>,
        container: &str,
    ) -> Result<()> {
        let Some(widget) = self.widgets.get(id).and_then(|e| e.as_widget()) else {
            warn!("Skipping unknown widget id: {}", id);
            return Ok(());
        };

        let markup = widget.render(config)?;
        self.out.push_str(container);
        self.out.push_str(&markup);
        self.out.push_str(&self.after_widget);
        self.out.push('\n');
        Ok(())
    }
}
