// ABOUTME: Scoped timing spans that report elapsed time to an injected sink on drop.
// ABOUTME: LogSink is the default collaborator, emitting structured events via the log crate.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Receives timing events from completed spans.
///
/// Injected rather than hardwired to the console so callers can collect
/// timings in tests or route them to their own observability layer.
pub trait TraceSink: Send + Sync {
    fn event(&self, name: &str, elapsed: Duration);
}

/// Default sink: emits each event through `log::info!`.
#[derive(Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn event(&self, name: &str, elapsed: Duration) {
        log::info!("completed {} in {:.2}s", name, elapsed.as_secs_f64());
    }
}

/// A scoped timing guard. The event fires when the span drops, so timings are
/// reported even when the guarded code returns early with an error.
pub struct Span<'a> {
    name: &'a str,
    start: Instant,
    sink: &'a dyn TraceSink,
}

impl<'a> Span<'a> {
    pub fn enter(name: &'a str, sink: &'a dyn TraceSink) -> Self {
        log::debug!("starting {}", name);
        Self {
            name,
            start: Instant::now(),
            sink,
        }
    }
}

impl Drop for Span<'_> {
    fn drop(&mut self) {
        self.sink.event(self.name, self.start.elapsed());
    }
}

/// Generate a coarse trace identifier for correlating a pipeline run's spans.
pub fn gen_trace_id() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("trace_{}", secs)
}
