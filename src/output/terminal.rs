//! Plain-text route output.

use crate::models::{Prefix, RouteList};
use itertools::Itertools;

/// How the metric is shown after each summarized route.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MetricStyle {
    /// Do not print a metric
    None,
    /// Print metric X as '... in X'
    #[default]
    Full,
    /// Print metric X as '...mX'
    Brief,
}

impl MetricStyle {
    /// Format a single route.
    pub fn render(self, route: &Prefix) -> String {
        match self {
            MetricStyle::None => route.cidr(),
            MetricStyle::Full => route.to_string(),
            MetricStyle::Brief => format!("{}m{}", route.cidr(), route.metric()),
        }
    }
}

/// Format all routes, one per line.
pub fn render_routes(routes: &RouteList, style: MetricStyle) -> String {
    routes.iter().map(|route| style.render(route)).join("\n")
}
