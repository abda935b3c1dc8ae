//! JSON route output.

use crate::models::RouteList;
use std::error::Error;

/// Format routes as a pretty-printed JSON array of `{"prefix", "metric"}` records.
pub fn render_json(routes: &RouteList) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(routes).map_err(|e| format!("Error serializing JSON: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_routes;
    use crate::models::Prefix;

    #[test]
    fn test_render_json() {
        let routes = parse_routes(&["10.0.0.0/24m2"], None).unwrap();
        let json = render_json(&routes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["prefix"], "10.0.0.0/24");
        assert_eq!(value[0]["metric"], 2);
    }

    #[test]
    fn test_render_json_reads_back() {
        let routes = parse_routes(&["10.0.0.0/24m2", "2001:db8::/48"], None).unwrap();
        let json = render_json(&routes).unwrap();
        let back: Vec<Prefix> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, routes.into_vec());
    }
}
