//! Output formatting for summarized routes.
//!
//! - [`terminal`] - one route per line in a chosen [`MetricStyle`]
//! - [`json`] - JSON records

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{render_routes, MetricStyle};
