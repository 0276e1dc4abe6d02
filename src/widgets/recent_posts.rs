//! Recent networkwide posts widget

use crate::core::widget::{config_bool, config_str, config_u64};
use crate::core::{Widget, WidgetConfig};
use anyhow::Result;
use std::fmt::Write;

/// Latest posts from every site on the network
///
/// Only configured when the blogs component is active and the host
/// runs in multi-site mode; on a single site "networkwide" has nothing
/// to show.
pub struct RecentPostsWidget;

impl Widget for RecentPostsWidget {
    fn id(&self) -> &str {
        "recent-posts"
    }

    fn name(&self) -> &str {
        "Recent Networkwide Posts"
    }

    fn class_name(&self) -> Option<&str> {
        Some("widget_recent_posts")
    }

    fn render(&self, config: Option<&WidgetConfig>) -> Result<String> {
        let title = config_str(config, "title", "Recent Networkwide Posts");
        let max_posts = config_u64(config, "max_posts", 10);
        let link_title = config_bool(config, "link_title", false);

        let mut out = String::new();
        if link_title {
            write!(out, "<h2 class=\"widget-title\"><a href=\"/sites\">{}</a></h2>", title)?;
        } else {
            write!(out, "<h2 class=\"widget-title\">{}</h2>", title)?;
        }

        out.push_str("<ul class=\"post-list\">");
        for n in 1..=max_posts {
            write!(out, "<li><a href=\"/sites/post-{0}\">Post {0}</a></li>", n)?;
        }
        out.push_str("</ul>");
        Ok(out)
    }
}
