//! Groups widget

use crate::core::widget::{config_str, config_u64};
use crate::core::{Widget, WidgetConfig};
use anyhow::Result;
use std::fmt::Write;

/// Short list of community groups
pub struct GroupsWidget;

impl Widget for GroupsWidget {
    fn id(&self) -> &str {
        "groups"
    }

    fn name(&self) -> &str {
        "Groups"
    }

    fn class_name(&self) -> Option<&str> {
        Some("widget_groups")
    }

    fn render(&self, config: Option<&WidgetConfig>) -> Result<String> {
        let title = config_str(config, "title", "Groups");
        let max_groups = config_u64(config, "max_groups", 5);
        let default_tab = config_str(config, "group_default", "active");

        let mut out = String::new();
        write!(out, "<h2 class=\"widget-title\">{}</h2>", title)?;
        write!(out, "<ul class=\"group-list\" data-default-tab=\"{}\">", default_tab)?;
        for n in 1..=max_groups {
            write!(out, "<li><a href=\"/groups/group-{0}\">Group {0}</a></li>", n)?;
        }
        out.push_str("</ul>");
        Ok(out)
    }
}
