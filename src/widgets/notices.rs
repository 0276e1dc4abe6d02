//! Sitewide notices widget

use crate::core::widget::config_str;
use crate::core::{Widget, WidgetConfig};
use anyhow::Result;

/// Announcement box fed by the messaging component
pub struct SitewideNoticesWidget;

impl Widget for SitewideNoticesWidget {
    fn id(&self) -> &str {
        "sitewide-notices"
    }

    fn name(&self) -> &str {
        "Sitewide Notices"
    }

    fn class_name(&self) -> Option<&str> {
        Some("widget_sitewide_notices")
    }

    fn render(&self, config: Option<&WidgetConfig>) -> Result<String> {
        let title = config_str(config, "title", "Sitewide Notices");

        Ok(format!(
            concat!(
                "<h2 class=\"widget-title\">{}</h2>",
                "<div class=\"notice\">No new notices.</div>"
            ),
            title
        ))
    }
}
