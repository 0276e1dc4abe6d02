//! Extension point for transforming the widget configuration

use super::widget::WidgetSpec;

/// A registered configuration transform
pub type ConfigFilter = Box<dyn Fn(Vec<WidgetSpec>) -> Vec<WidgetSpec> + Send + Sync>;

/// Ordered chain of configuration filters
///
/// External code can add, remove or reorder specs before the
/// aggregator renders them. Filters run in registration order; each
/// one receives the previous filter's output, and the last filter's
/// output is what gets rendered.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<ConfigFilter>,
}

impl FilterChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transform at the end of the chain
    pub fn add<F>(&mut self, filter: F)
    where
        F: Fn(Vec<WidgetSpec>) -> Vec<WidgetSpec> + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    /// Number of registered filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter over the spec list, in registration order
    pub fn apply(&self, mut specs: Vec<WidgetSpec>) -> Vec<WidgetSpec> {
        for filter in &self.filters {
            specs = filter(specs);
        }
        specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_passes_through() {
        let chain = FilterChain::new();
        let specs = vec![WidgetSpec::new("login"), WidgetSpec::new("members")];
        let out = chain.apply(specs.clone());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].widget_id, "login");
    }

    #[test]
    fn test_len_tracks_registrations() {
        let mut chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);

        chain.add(|specs| specs);
        assert!(!chain.is_empty());
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_filters_run_in_registration_order() {
        let mut chain = FilterChain::new();
        chain.add(|mut specs| {
            specs.push(WidgetSpec::new("first"));
            specs
        });
        chain.add(|mut specs| {
            specs.push(WidgetSpec::new("second"));
            specs
        });

        let out = chain.apply(Vec::new());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].widget_id, "first");
        assert_eq!(out[1].widget_id, "second");
    }

    #[test]
    fn test_filter_output_replaces_input() {
        let mut chain = FilterChain::new();
        chain.add(|_| vec![WidgetSpec::new("only")]);

        let out = chain.apply(vec![WidgetSpec::new("login"), WidgetSpec::new("members")]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].widget_id, "only");
    }
}
