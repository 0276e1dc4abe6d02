//! Recently-active members widget

use crate::core::widget::{config_str, config_u64};
use crate::core::{Widget, WidgetConfig};
use anyhow::Result;
use std::fmt::Write;

/// Avatars of members active most recently
pub struct RecentlyActiveWidget;

impl Widget for RecentlyActiveWidget {
    fn id(&self) -> &str {
        "recently-active"
    }

    fn name(&self) -> &str {
        "Recently Active Members"
    }

    fn class_name(&self) -> Option<&str> {
        Some("widget_recently_active")
    }

    fn render(&self, config: Option<&WidgetConfig>) -> Result<String> {
        let title = config_str(config, "title", "Recently Active Members");
        let max_members = config_u64(config, "max_members", 15);

        let mut out = String::new();
        write!(out, "<h2 class=\"widget-title\">{}</h2>", title)?;
        write!(out, "<div class=\"activity-block\" data-max=\"{}\">", max_members)?;
        for n in 1..=max_members {
            write!(
                out,
                "<img class=\"avatar\" src=\"/avatars/member-{0}.png\" alt=\"Member {0}\">",
                n
            )?;
        }
        out.push_str("</div>");
        Ok(out)
    }
}
