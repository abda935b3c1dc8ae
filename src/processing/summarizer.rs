//! Two-phase route summarization run to a fixed point.

use super::merge::merge_pass;
use super::overlap::overlap_pass;
use super::trace::{LogForward, LogSink, Trace};
use crate::models::RouteList;

/// Reduces a [`RouteList`] in place to an equivalent minimal set of routes.
///
/// The summarizer holds the only mutable borrow of the list while it exists.
/// After [`Summarizer::summarize`] the list is sorted by address.
///
/// # Examples
/// ```
/// use acrs::input::parse_routes;
/// use acrs::processing::Summarizer;
///
/// let mut routes = parse_routes(&["192.168.0.0/24", "192.168.1.0/24"], None).unwrap();
/// assert!(Summarizer::new(&mut routes).summarize());
/// assert_eq!(routes.as_slice()[0].cidr(), "192.168.0.0/23");
/// ```
pub struct Summarizer<'a, S: LogSink = LogForward> {
    routes: &'a mut RouteList,
    sink: S,
    logging: bool,
    passes: usize,
}

impl<'a> Summarizer<'a> {
    /// Summarizer whose trace goes to the `log` facade.
    pub fn new(routes: &'a mut RouteList) -> Summarizer<'a> {
        Summarizer::with_sink(routes, LogForward)
    }
}

impl<'a, S: LogSink> Summarizer<'a, S> {
    /// Summarizer whose trace goes to `sink`.
    pub fn with_sink(routes: &'a mut RouteList, sink: S) -> Summarizer<'a, S> {
        Summarizer {
            routes,
            sink,
            logging: false,
            passes: 0,
        }
    }

    /// Enable or disable the trace. Has no effect on which routes are chosen.
    pub fn set_logging(&mut self, logging: bool) {
        self.logging = logging;
    }

    pub fn logging(&self) -> bool {
        self.logging
    }

    /// Number of merge passes run by the last call to [`Summarizer::summarize`].
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn routes(&self) -> &RouteList {
        self.routes
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Merge sibling prefixes and remove covered prefixes until nothing changes.
    ///
    /// Returns whether the list was changed.
    pub fn summarize(&mut self) -> bool {
        let routes_in = self.routes.len();
        self.passes = 0;
        let mut trace = Trace::new(self.logging, &mut self.sink);

        trace.emit(format_args!("* Main summarization:"));
        let mut merged = false;
        loop {
            self.passes += 1;
            trace.emit(format_args!("*   Pass {}", self.passes));
            let (routes, changed) = merge_pass(self.routes.take(), &mut trace);
            self.routes.replace(routes);
            if !changed {
                trace.emit(format_args!("*     No routes to summarize on this pass."));
                break;
            }
            merged = true;
        }
        if !merged {
            trace.emit(format_args!("*   No routes affected by main summarization."));
        }

        trace.emit(format_args!("* Overlap removal:"));
        let mut pruned = false;
        loop {
            let (routes, changed) = overlap_pass(self.routes.take(), &mut trace);
            self.routes.replace(routes);
            if !changed {
                break;
            }
            pruned = true;
        }
        if !pruned {
            trace.emit(format_args!("*   No overlapping routes."));
        }

        let summarized = merged || pruned;
        if summarized {
            trace.emit(format_args!("* Finished. List was summarized."));
        } else {
            trace.emit(format_args!("* Finished. No summarization performed."));
        }

        log::debug!(
            "summarize: {} routes in, {} routes out, {} merge passes",
            routes_in,
            self.routes.len(),
            self.passes
        );
        summarized
    }
}
