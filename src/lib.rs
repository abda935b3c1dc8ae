//! Automatic classless route summarization (ACRS).
//!
//! Reduces a list of IPv4/IPv6 routes to the smallest equivalent list of CIDR
//! prefixes: sibling prefixes with the same metric are merged into their
//! parent, and prefixes covered by a broader route with an equal or better
//! metric are removed.
//!
//! - [`models`] - [`models::Prefix`], [`models::RouteList`] and CIDR arithmetic
//! - [`processing`] - the [`processing::Summarizer`]
//! - [`input`] - `NETWORK/PREFLEN[mMETRIC]` parsing
//! - [`output`] - text and JSON rendering

pub mod cli;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use cli::Args;
use input::parse_routes;
use output::{render_json, render_routes};
use processing::{Summarizer, WriterSink};
use std::error::Error;
use std::io::Write;

/// Exit status when the routes were summarized.
pub const EXIT_SUMMARIZED: u8 = 0;
/// Exit status when nothing could be summarized.
pub const EXIT_UNCHANGED: u8 = 1;
/// Exit status for bad arguments or routes.
pub const EXIT_ERROR: u8 = 2;

/// Exit status for the result of [`run`].
pub fn exit_status(result: &Result<bool, Box<dyn Error>>) -> u8 {
    match result {
        Ok(true) => EXIT_SUMMARIZED,
        Ok(false) => EXIT_UNCHANGED,
        Err(_) => EXIT_ERROR,
    }
}

/// Parse, summarize and print the routes named in `args`.
///
/// The trace (with `-l`) and the summary are both written to `out`.
/// Returns whether anything was summarized.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<bool, Box<dyn Error>> {
    let family = args.family();
    let mut routes = parse_routes(&args.prefixes, Some(family))?;
    log::info!("Summarizing {} {} routes", routes.len(), family);

    let summarized = {
        let mut summarizer = Summarizer::with_sink(&mut routes, WriterSink::new(&mut *out));
        summarizer.set_logging(args.logging);
        summarizer.summarize()
    };
    log::info!("Summary has {} routes (summarized: {})", routes.len(), summarized);

    let text = if args.json {
        render_json(&routes)?
    } else {
        render_routes(&routes, args.metric_style)
    };
    writeln!(out, "{text}")?;

    Ok(summarized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(argv: &[&str]) -> (Result<bool, Box<dyn Error>>, String) {
        let args = Args::try_parse_from(argv).expect("Error parsing test args");
        let mut out = Vec::new();
        let result = run(&args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_summarizes() {
        let (result, out) = run_args(&["acrs", "192.168.0.0/24m1", "192.168.1.0/24m1"]);
        assert!(result.unwrap());
        assert_eq!(out, "192.168.0.0/23 in 1\n");
    }

    #[test]
    fn test_run_unchanged() {
        let (result, out) = run_args(&["acrs", "-m", "none", "192.168.1.1/32", "192.168.1.2/32"]);
        assert_eq!(exit_status(&result), EXIT_UNCHANGED);
        assert_eq!(out, "192.168.1.1/32\n192.168.1.2/32\n");
    }

    #[test]
    fn test_run_with_trace() {
        let (result, out) = run_args(&["acrs", "-l", "-m", "brief", "10.0.0.0/25", "10.0.0.128/25"]);
        assert_eq!(exit_status(&result), EXIT_SUMMARIZED);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.first(), Some(&"* Main summarization:"));
        assert_eq!(lines[lines.len() - 2], "* Finished. List was summarized.");
        assert_eq!(lines.last(), Some(&"10.0.0.0/24m0"));
    }

    #[test]
    fn test_run_json() {
        let (result, out) = run_args(&["acrs", "--json", "10.0.0.0/25", "10.0.0.128/25"]);
        assert!(result.unwrap());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["prefix"], "10.0.0.0/24");
    }

    #[test]
    fn test_run_rejects_bad_routes() {
        let (result, out) = run_args(&["acrs", "10.0.0.0/24", "10.0.0.0/24m"]);
        assert_eq!(exit_status(&result), EXIT_ERROR);
        assert!(out.is_empty());

        let (result, _) = run_args(&["acrs", "2001:db8::/32"]);
        assert!(result.unwrap_err().to_string().contains("expected an IPv4 route"));
    }

    #[test]
    fn test_run_ipv6() {
        let (result, out) = run_args(&["acrs", "-6", "2001:db8::/128", "2001:db8::1/128"]);
        assert!(result.unwrap());
        assert_eq!(out, "2001:db8::/127 in 0\n");
    }
}
