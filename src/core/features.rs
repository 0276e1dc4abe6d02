//! Feature activation gate

/// Optional host components the aggregator cares about
pub mod component {
    pub const BLOGS: &str = "blogs";
    pub const FRIENDS: &str = "friends";
    pub const GROUPS: &str = "groups";
    pub const MESSAGES: &str = "messages";
}

/// Host-level feature activation check
///
/// Mirrors the host's component activation flags. The aggregator only
/// reads these to decide which optional widgets to include.
pub trait FeatureGate: Send + Sync {
    /// Whether the named optional component is active
    fn is_active(&self, component: &str) -> bool;

    /// Whether the host runs in multi-site mode
    ///
    /// The networkwide-posts widget only makes sense across a network
    /// of sites, so it is gated on this in addition to the blogs
    /// component.
    fn is_multisite(&self) -> bool;
}
