//! Container template handling
//!
//! A container template is a markup wrapper the host supplies per
//! sidebar, with `{id}` and `{class}` placeholders filled in for each
//! widget instance rendered into the region.

use regex::Regex;
use std::sync::OnceLock;

/// Fill a container template with an element id and class list
pub fn fill(template: &str, id: &str, class: &str) -> String {
    template.replace("{id}", id).replace("{class}", class)
}

/// Check whether a template references the id/class placeholder pair
///
/// Used to warn about templates that drop the placeholders entirely;
/// such a template still renders, but every instance wrapper comes out
/// identical.
pub fn has_placeholders(template: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\{(id|class)\}").expect("Invalid regex"));
    re.is_match(template)
}
