//! Built-in widgets for the demo host
//!
//! Stub renditions of the widgets the monster widget configures. Each
//! emits plain HTML so the aggregated output can be inspected without
//! a running host framework.

mod friends;
mod groups;
mod login;
mod members;
mod notices;
mod recent_posts;
mod recently_active;
mod whos_online;

pub use friends::FriendsWidget;
pub use groups::GroupsWidget;
pub use login::LoginWidget;
pub use members::MembersWidget;
pub use notices::SitewideNoticesWidget;
pub use recent_posts::RecentPostsWidget;
pub use recently_active::RecentlyActiveWidget;
pub use whos_online::WhosOnlineWidget;

use crate::core::WidgetRegistry;

/// Register all built-in widgets with a registry
pub fn register_all(registry: &mut WidgetRegistry) {
    registry.register("login", LoginWidget);
    registry.register("members", MembersWidget);
    registry.register("whos-online", WhosOnlineWidget);
    registry.register("recently-active", RecentlyActiveWidget);
    registry.register("recent-posts", RecentPostsWidget);
    registry.register("friends", FriendsWidget);
    registry.register("groups", GroupsWidget);
    registry.register("sitewide-notices", SitewideNoticesWidget);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Features;
    use crate::core::{
        widget_class, HostContext, HtmlRenderer, MonsterWidget, RenderContext, Sidebar,
        SidebarRegistry, WidgetLookup, PLACEHOLDER_PREFIX,
    };

    #[test]
    fn test_registered_ids_match_widget_ids() {
        let mut registry = WidgetRegistry::new();
        register_all(&mut registry);

        for id in registry.list() {
            let widget = registry.get(&id).and_then(|e| e.as_widget()).unwrap();
            assert_eq!(widget.id(), id);
            assert!(!widget_class(&registry, &id).is_empty());
        }
    }

    #[test]
    fn test_full_render_against_demo_host() {
        let mut registry = WidgetRegistry::new();
        register_all(&mut registry);

        let mut sidebars = SidebarRegistry::new();
        sidebars.register(
            "sidebar-1",
            Sidebar {
                name: "Primary".to_string(),
                before_widget: "<li id=\"{id}\" class=\"widget {class}\">".to_string(),
                after_widget: "</li>".to_string(),
            },
        );

        let monster = MonsterWidget::new();
        let host = HostContext {
            widgets: &registry,
            sidebars: &sidebars,
            features: &Features::all(),
        };
        let ctx = RenderContext {
            sidebar_id: "sidebar-1".to_string(),
        };

        let mut renderer = HtmlRenderer::new(&registry, "</li>");
        monster.render(&ctx, &host, &mut renderer).unwrap();
        let html = renderer.into_html();

        // all eight widgets, one container each, ids counting from 1
        assert_eq!(html.matches("<li id=").count(), 8);
        for n in 1..=8 {
            assert!(html.contains(&format!("id=\"{}{}\"", PLACEHOLDER_PREFIX, n)));
        }
        assert!(html.contains("class=\"widget widget_login\""));
        assert!(html.contains("class=\"widget widget_sitewide_notices\""));
        assert!(html.contains("Recent Networkwide Posts"));
    }
}
