//! Login form widget

use crate::core::widget::config_str;
use crate::core::{Widget, WidgetConfig};
use anyhow::Result;

/// Login form shown to logged-out visitors
pub struct LoginWidget;

impl Widget for LoginWidget {
    fn id(&self) -> &str {
        "login"
    }

    fn name(&self) -> &str {
        "Login"
    }

    fn class_name(&self) -> Option<&str> {
        Some("widget_login")
    }

    fn render(&self, config: Option<&WidgetConfig>) -> Result<String> {
        let title = config_str(config, "title", "Log In");

        Ok(format!(
            concat!(
                "<h2 class=\"widget-title\">{}</h2>",
                "<form class=\"login-form\" method=\"post\" action=\"/login\">",
                "<label>Username <input type=\"text\" name=\"username\"></label>",
                "<label>Password <input type=\"password\" name=\"password\"></label>",
                "<input type=\"submit\" value=\"Log In\">",
                "</form>"
            ),
            title
        ))
    }
}
