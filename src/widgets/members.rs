//! Members directory widget

use crate::core::widget::{config_bool, config_str, config_u64};
use crate::core::{Widget, WidgetConfig};
use anyhow::Result;
use std::fmt::Write;

/// Short list of community members
///
/// `member_default` selects the tab shown first (active, newest or
/// popular); `max_members` caps the list length.
pub struct MembersWidget;

impl Widget for MembersWidget {
    fn id(&self) -> &str {
        "members"
    }

    fn name(&self) -> &str {
        "Members"
    }

    fn class_name(&self) -> Option<&str> {
        Some("widget_members")
    }

    fn render(&self, config: Option<&WidgetConfig>) -> Result<String> {
        let title = config_str(config, "title", "Members");
        let max_members = config_u64(config, "max_members", 5);
        let default_tab = config_str(config, "member_default", "active");
        let link_title = config_bool(config, "link_title", false);

        let mut out = String::new();
        if link_title {
            write!(out, "<h2 class=\"widget-title\"><a href=\"/members\">{}</a></h2>", title)?;
        } else {
            write!(out, "<h2 class=\"widget-title\">{}</h2>", title)?;
        }

        write!(out, "<ul class=\"member-list\" data-default-tab=\"{}\">", default_tab)?;
        for n in 1..=max_members {
            write!(out, "<li><a href=\"/members/member-{0}\">Member {0}</a></li>", n)?;
        }
        out.push_str("</ul>");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_honors_max_members_and_linked_title() {
        let config = HashMap::from([
            ("title".to_string(), json!("Our Members")),
            ("max_members".to_string(), json!(2)),
            ("link_title".to_string(), json!(true)),
        ]);

        let html = MembersWidget.render(Some(&config)).unwrap();
        assert!(html.contains("<a href=\"/members\">Our Members</a>"));
        assert!(html.contains("Member 2"));
        assert!(!html.contains("Member 3"));
    }
}
