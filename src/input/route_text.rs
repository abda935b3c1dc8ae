//! Parsing of routes written as `NETWORK/PREFLEN[mMETRIC]`.

use crate::models::{AddressFamily, MaskKind, Prefix, PrefixError, RouteList};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

/// Metric used when a route does not give one.
pub const DEFAULT_METRIC: u32 = 0;

/// Reasons a route string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTextError {
    #[error("could not find IP address, no slash found in: {0} (use CIDR notation: 1.1.1.0/24)")]
    MissingSlash(String),
    #[error("improperly formatted prefix (extra slash): {0}")]
    ExtraSlash(String),
    #[error("missing prefix length in: {0}")]
    MissingPrefixLength(String),
    #[error("an 'm' was supplied, but the metric was missing: {0}")]
    MissingMetric(String),
    #[error("duplicate 'm' character entered: {0}")]
    DuplicateMetricMarker(String),
    #[error("invalid prefix length {len:?} in: {route}")]
    InvalidPrefixLength { route: String, len: String },
    #[error("invalid metric {metric:?} in: {route}")]
    InvalidMetric { route: String, metric: String },
    #[error("expected an {expected} route: {route}")]
    WrongFamily { route: String, expected: AddressFamily },
    #[error("invalid route {route}: {source}")]
    InvalidRoute {
        route: String,
        #[source]
        source: PrefixError,
    },
}

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

/// Parse one route.
///
/// When `family` is given, routes of the other family are rejected.
///
/// # Examples
/// ```
/// use acrs::input::parse_route;
/// let route = parse_route("192.168.1.0/24m1", None).unwrap();
/// assert_eq!(route.to_string(), "192.168.1.0/24 in 1");
/// ```
pub fn parse_route(text: &str, family: Option<AddressFamily>) -> Result<Prefix, RouteTextError> {
    let route = text.trim();
    log::trace!("parse_route({route})");

    let (addr, len_metric) = route
        .split_once('/')
        .ok_or_else(|| RouteTextError::MissingSlash(route.to_string()))?;
    if len_metric.contains('/') {
        return Err(RouteTextError::ExtraSlash(route.to_string()));
    }
    if len_metric.is_empty() || len_metric.starts_with('m') {
        return Err(RouteTextError::MissingPrefixLength(route.to_string()));
    }

    let (len, metric) = match len_metric.split_once('m') {
        None => (len_metric, None),
        Some((_, metric)) if metric.contains('m') => {
            return Err(RouteTextError::DuplicateMetricMarker(route.to_string()))
        }
        Some((_, "")) => return Err(RouteTextError::MissingMetric(route.to_string())),
        Some((len, metric)) => (len, Some(metric)),
    };

    if !DIGITS.is_match(len) {
        return Err(RouteTextError::InvalidPrefixLength {
            route: route.to_string(),
            len: len.to_string(),
        });
    }
    let metric = match metric {
        None => DEFAULT_METRIC,
        Some(m) if DIGITS.is_match(m) => m.parse().unwrap_or(u32::MAX),
        Some(m) => {
            return Err(RouteTextError::InvalidMetric {
                route: route.to_string(),
                metric: m.to_string(),
            })
        }
    };

    let prefix = Prefix::parse(addr, len, MaskKind::PrefixLength, metric).map_err(|source| {
        RouteTextError::InvalidRoute {
            route: route.to_string(),
            source,
        }
    })?;

    match family {
        Some(expected) if prefix.family() != expected => Err(RouteTextError::WrongFamily {
            route: route.to_string(),
            expected,
        }),
        _ => Ok(prefix),
    }
}

/// Parse a list of routes into a [`RouteList`], stopping at the first bad one.
pub fn parse_routes<S: AsRef<str>>(
    texts: &[S],
    family: Option<AddressFamily>,
) -> Result<RouteList, RouteTextError> {
    let mut routes = RouteList::new();
    for text in texts {
        let prefix = parse_route(text.as_ref(), family)?;
        routes
            .push(prefix)
            .map_err(|source| RouteTextError::InvalidRoute {
                route: text.as_ref().to_string(),
                source,
            })?;
    }
    log::debug!("Parsed {} routes", routes.len());
    Ok(routes)
}

impl FromStr for Prefix {
    type Err = RouteTextError;

    fn from_str(text: &str) -> Result<Prefix, RouteTextError> {
        parse_route(text, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_with_metric() {
        let route = parse_route("192.168.1.0/24m1", None).unwrap();
        assert_eq!(route.cidr(), "192.168.1.0/24");
        assert_eq!(route.metric(), 1);
    }

    #[test]
    fn test_parse_route_default_metric() {
        let route = parse_route(" 10.1.2.3/8 ", None).unwrap();
        assert_eq!(route.to_string(), "10.0.0.0/8 in 0");
        assert_eq!(route.address().to_string(), "10.1.2.3");
    }

    #[test]
    fn test_parse_route_v6() {
        let route = parse_route("2001:db8::/64m20", Some(AddressFamily::V6)).unwrap();
        assert_eq!(route.to_string(), "2001:db8::/64 in 20");
    }

    #[test]
    fn test_parse_route_syntax_errors() {
        let err = |s| parse_route(s, None).unwrap_err();
        assert_eq!(err("10.0.0.0"), RouteTextError::MissingSlash("10.0.0.0".to_string()));
        assert_eq!(err("10.0.0.0/24/1"), RouteTextError::ExtraSlash("10.0.0.0/24/1".to_string()));
        assert_eq!(err("10.0.0.0/"), RouteTextError::MissingPrefixLength("10.0.0.0/".to_string()));
        assert_eq!(err("10.0.0.0/m1"), RouteTextError::MissingPrefixLength("10.0.0.0/m1".to_string()));
        assert_eq!(err("10.0.0.0/24m"), RouteTextError::MissingMetric("10.0.0.0/24m".to_string()));
        assert_eq!(
            err("10.0.0.0/24m1m2"),
            RouteTextError::DuplicateMetricMarker("10.0.0.0/24m1m2".to_string())
        );
        assert_eq!(
            err("10.0.0.0/24mm"),
            RouteTextError::DuplicateMetricMarker("10.0.0.0/24mm".to_string())
        );
        assert!(matches!(err("10.0.0.0/2x"), RouteTextError::InvalidPrefixLength { .. }));
        assert!(matches!(err("10.0.0.0/-1"), RouteTextError::InvalidPrefixLength { .. }));
        assert!(matches!(err("10.0.0.0/24m1x"), RouteTextError::InvalidMetric { .. }));
    }

    #[test]
    fn test_parse_route_value_errors() {
        let err = |s| parse_route(s, None).unwrap_err();
        assert!(matches!(
            err("10.0.0.0/33"),
            RouteTextError::InvalidRoute {
                source: PrefixError::PrefixLengthOutOfRange { len: 33, max: 32 },
                ..
            }
        ));
        assert!(matches!(
            err("10.0.0.0/24m65536"),
            RouteTextError::InvalidRoute {
                source: PrefixError::MetricOutOfRange { metric: 65536, .. },
                ..
            }
        ));
        assert!(matches!(
            err("10.0.0.0/24m99999999999999"),
            RouteTextError::InvalidRoute {
                source: PrefixError::MetricOutOfRange { .. },
                ..
            }
        ));
        assert!(matches!(
            err("10.0.0.300/24"),
            RouteTextError::InvalidRoute {
                source: PrefixError::InvalidAddress(_),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_route_wrong_family() {
        assert_eq!(
            parse_route("2001:db8::/32", Some(AddressFamily::V4)),
            Err(RouteTextError::WrongFamily {
                route: "2001:db8::/32".to_string(),
                expected: AddressFamily::V4
            })
        );
        assert!(parse_route("10.0.0.0/8", Some(AddressFamily::V6)).is_err());
    }

    #[test]
    fn test_parse_routes_stops_at_first_error() {
        let routes = parse_routes(&["10.0.0.0/24", "10.0.1.0/24m2"], None).unwrap();
        assert_eq!(routes.len(), 2);
        assert!(parse_routes(&["10.0.0.0/24", "bogus"], None).is_err());
        assert!(parse_routes::<&str>(&[], None).unwrap().is_empty());
    }

    #[test]
    fn test_from_str() {
        let route: Prefix = "172.16.0.0/12m3".parse().unwrap();
        assert_eq!(route.to_string(), "172.16.0.0/12 in 3");
        assert!("172.16.0.0".parse::<Prefix>().is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = parse_route("10.0.0.0/24m70000", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid route 10.0.0.0/24m70000: metric 70000 is out of range (0-65535)"
        );
    }
}
