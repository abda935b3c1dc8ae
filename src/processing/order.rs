//! Sort orders for the two summarization phases.

use crate::models::Prefix;
use std::cmp::Ordering;

/// Order used by the merge phase.
///
/// Ascending metric, then descending prefix length, then ascending network.
/// Routes with different metrics never end up next to each other inside a
/// tier, and the most specific prefixes are paired first.
pub fn merge_order(a: &Prefix, b: &Prefix) -> Ordering {
    a.metric()
        .cmp(&b.metric())
        .then_with(|| b.prefix_len().cmp(&a.prefix_len()))
        .then_with(|| a.family().cmp(&b.family()))
        .then_with(|| a.network_bits().cmp(&b.network_bits()))
}

/// Order used by the overlap phase.
///
/// Ascending network, then ascending prefix length, then ascending metric, so a
/// covering prefix always precedes the prefixes it contains.
pub fn overlap_order(a: &Prefix, b: &Prefix) -> Ordering {
    a.family()
        .cmp(&b.family())
        .then_with(|| a.network_bits().cmp(&b.network_bits()))
        .then_with(|| a.prefix_len().cmp(&b.prefix_len()))
        .then_with(|| a.metric().cmp(&b.metric()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaskKind;

    fn route(text: &str, metric: u32) -> Prefix {
        let (addr, len) = text.split_once('/').unwrap();
        Prefix::parse(addr, len, MaskKind::PrefixLength, metric).unwrap()
    }

    fn cidrs(routes: &[Prefix]) -> Vec<String> {
        routes.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_merge_order() {
        let mut routes = vec![
            route("10.0.0.128/25", 0),
            route("10.0.0.64/26", 0),
            route("10.0.0.0/26", 0),
            route("10.0.0.0/26", 1),
            route("9.0.0.0/8", 0),
        ];
        routes.sort_by(merge_order);
        assert_eq!(
            cidrs(&routes),
            vec![
                "10.0.0.0/26 in 0",
                "10.0.0.64/26 in 0",
                "10.0.0.128/25 in 0",
                "9.0.0.0/8 in 0",
                "10.0.0.0/26 in 1",
            ]
        );
    }

    #[test]
    fn test_overlap_order() {
        let mut routes = vec![
            route("10.0.0.5/32", 3),
            route("10.0.0.0/24", 9),
            route("10.0.0.0/24", 5),
            route("10.0.0.0/8", 7),
            route("9.0.0.0/8", 0),
        ];
        routes.sort_by(overlap_order);
        assert_eq!(
            cidrs(&routes),
            vec![
                "9.0.0.0/8 in 0",
                "10.0.0.0/8 in 7",
                "10.0.0.0/24 in 5",
                "10.0.0.0/24 in 9",
                "10.0.0.5/32 in 3",
            ]
        );
    }

    #[test]
    fn test_orders_compare_network_not_raw_address() {
        let a = route("10.0.0.77/24", 0);
        let b = route("10.0.0.3/24", 0);
        assert_eq!(merge_order(&a, &b), Ordering::Equal);
        assert_eq!(overlap_order(&a, &b), Ordering::Equal);
    }
}
