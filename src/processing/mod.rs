//! Route summarization.
//!
//! - [`summarizer`] - the [`Summarizer`] driving both phases to a fixed point
//! - [`merge`] - merging sibling prefixes into their parent
//! - [`overlap`] - removing prefixes covered by a broader route
//! - [`order`] - the sort order each phase walks in
//! - [`trace`] - sinks for the decision trace

mod merge;
mod order;
mod overlap;
mod summarizer;
mod trace;

// Re-export public types and functions
pub use order::{merge_order, overlap_order};
pub use summarizer::Summarizer;
pub use trace::{LogForward, LogSink, WriterSink};
