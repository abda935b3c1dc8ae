//! Route input.
//!
//! - [`route_text`] - routes written as `NETWORK/PREFLEN[mMETRIC]`

mod route_text;

pub use route_text::{parse_route, parse_routes, RouteTextError, DEFAULT_METRIC};
