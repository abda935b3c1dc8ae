//! Domain models for route summarization.
//!
//! This module contains the core data structures:
//! - [`Prefix`] - a route: address block plus metric
//! - [`RouteList`] - an ordered collection of valid routes
//! - [`AddressFamily`] - IPv4/IPv6 and the CIDR bit helpers in [`addr`]

pub mod addr;
mod error;
mod prefix;
mod route_list;

// Re-export public types
pub use addr::{
    broadcast_addr, cut_addr, get_cidr_mask, mask_to_len, AddressFamily, MAX_LENGTH_V4,
    MAX_LENGTH_V6,
};
pub use error::PrefixError;
pub use prefix::{MaskKind, Prefix, PrefixRecord, MAX_METRIC, MIN_METRIC};
pub use route_list::RouteList;
