//! Friends widget

use crate::core::widget::{config_str, config_u64};
use crate::core::{Widget, WidgetConfig};
use anyhow::Result;
use std::fmt::Write;

/// The logged-in member's friends list
pub struct FriendsWidget;

impl Widget for FriendsWidget {
    fn id(&self) -> &str {
        "friends"
    }

    fn name(&self) -> &str {
        "Friends"
    }

    fn class_name(&self) -> Option<&str> {
        Some("widget_friends")
    }

    fn render(&self, config: Option<&WidgetConfig>) -> Result<String> {
        let title = config_str(config, "title", "Friends");
        let max_friends = config_u64(config, "max_friends", 5);
        let default_tab = config_str(config, "friend_default", "active");

        let mut out = String::new();
        write!(out, "<h2 class=\"widget-title\">{}</h2>", title)?;
        write!(out, "<ul class=\"friend-list\" data-default-tab=\"{}\">", default_tab)?;
        for n in 1..=max_friends {
            write!(out, "<li><a href=\"/members/friend-{0}\">Friend {0}</a></li>", n)?;
        }
        out.push_str("</ul>");
        Ok(out)
    }
}
