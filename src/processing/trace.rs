//! Sinks for the human-readable summarization trace.

use std::fmt;
use std::io::Write;

/// Destination for trace lines, one structural decision per line.
pub trait LogSink {
    fn write_line(&mut self, line: &str);
}

/// Forwards trace lines to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogForward;

impl LogSink for LogForward {
    fn write_line(&mut self, line: &str) {
        log::info!("{line}");
    }
}

/// Collects trace lines in memory.
impl LogSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// Writes trace lines to any [`Write`], e.g. stdout.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> WriterSink<W> {
        WriterSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LogSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            log::warn!("Error writing trace line: {e}");
        }
    }
}

/// Trace switch handed to the summarization passes.
///
/// Lines are only formatted when tracing is enabled.
pub(crate) struct Trace<'s> {
    enabled: bool,
    sink: &'s mut dyn LogSink,
}

impl<'s> Trace<'s> {
    pub(crate) fn new(enabled: bool, sink: &'s mut dyn LogSink) -> Trace<'s> {
        Trace { enabled, sink }
    }

    pub(crate) fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.enabled {
            self.sink.write_line(&args.to_string());
        }
    }
}
