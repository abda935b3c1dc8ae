//! Command-line arguments.

use crate::models::AddressFamily;
use crate::output::MetricStyle;
use clap::Parser;

/// Automatic classless route summarization (ACRS)
///
/// PREFIX consists of <NETWORK>/<PREFLEN>[m<METRIC>]; METRIC is optional and
/// defaults to 0. Example: acrs 192.168.0.0/24m1 192.168.1.0/24
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about)]
pub struct Args {
    /// Print a trace of every summarization decision
    #[arg(short = 'l', long)]
    pub logging: bool,

    /// Input routes are IPv4 (default)
    #[arg(short = '4', long = "ipv4", conflicts_with = "ipv6")]
    pub ipv4: bool,

    /// Input routes are IPv6
    #[arg(short = '6', long = "ipv6")]
    pub ipv6: bool,

    /// Format of the metric in the summary output
    #[arg(short = 'm', long, value_enum, ignore_case = true, default_value_t = MetricStyle::Full)]
    pub metric_style: MetricStyle,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml")]
    pub log_config: String,

    /// Routes to summarize
    #[arg(required = true, value_name = "PREFIX")]
    pub prefixes: Vec<String>,
}

impl Args {
    /// Address family the routes must belong to.
    pub fn family(&self) -> AddressFamily {
        if self.ipv6 {
            AddressFamily::V6
        } else {
            AddressFamily::V4
        }
    }
}
