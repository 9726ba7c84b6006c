//! Named timing spans for instrumenting a single unit of work.
//!
//! A [`Timing`] tracker is created per logical flow (one per request, one
//! per job) and records named start/end spans with a stable insertion
//! order. The full history, including spans that are still open, can be
//! snapshotted at any point for inspection or logging.
//!
//! # Example
//!
//! ```rust,ignore
//! use opskit::timing::Timing;
//!
//! let mut timing = Timing::new("request-42");
//! timing.start("load-config");
//! // ... work ...
//! let span = timing.end("load-config").unwrap();
//! assert!(span.duration_ms.unwrap() >= 0);
//! ```

use std::collections::HashMap;

use chrono::Utc;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Label used when a tracker is constructed without one.
const UNKNOWN_LABEL: &str = "unknown";

/// One timed interval recorded by a [`Timing`] tracker.
///
/// A span is open while `end_ms` is `None` and closed afterwards. The same
/// name may appear in multiple records over a tracker's lifetime, but never
/// twice among the currently open spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Span identifier, unique among open spans.
    pub name: String,
    /// Wall-clock capture time of `start`, in milliseconds since the epoch.
    pub start_ms: i64,
    /// Wall-clock capture time of `end`; `None` while the span is open.
    pub end_ms: Option<i64>,
    /// `end_ms - start_ms`; `None` while the span is open.
    pub duration_ms: Option<i64>,
    /// Owning process id, captured at start for log correlation.
    pub pid: u32,
    /// Zero-based position in the tracker history at the moment the span
    /// was started. Stable for the life of the record.
    pub index: usize,
}

impl Span {
    /// Whether this record has not been closed yet.
    pub fn is_open(&self) -> bool {
        self.end_ms.is_none()
    }
}

/// Logging collaborator notified when a span closes.
///
/// The tracker calls [`log`](TimingSink::log) at most once per `end`, only
/// when a sink is configured, and only after its own bookkeeping is
/// complete. The call is fire-and-forget: the tracker never waits on it and
/// ignores whatever the sink does with the line.
pub trait TimingSink: Send + Sync {
    /// Receive one formatted span-close line.
    fn log(&self, line: &str);
}

/// [`TimingSink`] adapter that forwards span-close lines to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TimingSink for TracingSink {
    fn log(&self, line: &str) {
        tracing::info!("{}", line);
    }
}

/// Format a closed span the way the sink receives it.
///
/// Pure function of the tracker label and the record; behavior is kept off
/// the record itself so spans stay plain data.
pub fn format_span(label: &str, span: &Span) -> String {
    format!(
        "[{}][Timing({}): {}] PID: {}, Duration: {}ms",
        label,
        span.index,
        span.name,
        span.pid,
        span.duration_ms.unwrap_or(0)
    )
}

/// Tracker for named, possibly concurrent, possibly re-started timing
/// spans within one logical flow of control.
///
/// Internal state is private; the recorded history is only reachable
/// through [`snapshot`](Timing::snapshot) (a defensive copy) or
/// serialization. A tracker is not synchronized: sharing one instance
/// across threads requires external locking, while independent instances
/// share nothing.
pub struct Timing {
    label: String,
    /// Span name -> history index of the currently open span of that name.
    active: HashMap<String, usize>,
    /// All spans ever started, insertion-ordered by start. Append-only.
    history: Vec<Span>,
    sink: Option<Box<dyn TimingSink>>,
}

impl Timing {
    /// Create a tracker with the given label and no sink.
    ///
    /// An empty label falls back to `"unknown"`.
    pub fn new(label: impl Into<String>) -> Self {
        Self::build(label.into(), None)
    }

    /// Create a tracker that emits one formatted line per closed span.
    pub fn with_sink(label: impl Into<String>, sink: impl TimingSink + 'static) -> Self {
        Self::build(label.into(), Some(Box::new(sink)))
    }

    fn build(label: String, sink: Option<Box<dyn TimingSink>>) -> Self {
        let label = if label.is_empty() {
            UNKNOWN_LABEL.to_string()
        } else {
            label
        };
        Self {
            label,
            active: HashMap::new(),
            history: Vec::new(),
            sink,
        }
    }

    /// The tracker label, fixed at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of spans ever started.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether no span has been started yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Number of currently open spans.
    pub fn open_count(&self) -> usize {
        self.active.len()
    }

    /// Whether a span with this name is currently open.
    pub fn is_open(&self, name: &str) -> bool {
        self.active.contains_key(name)
    }

    /// Open a new span under `name` and return a copy of its record.
    ///
    /// An empty name is a no-op returning `None`; callers may pass one to
    /// mean "don't time this". If a span with the same name is already
    /// open it is first closed through the same logic as [`end`](Self::end),
    /// so a stale open can never leak and `active` never holds two spans
    /// for one name.
    pub fn start(&mut self, name: &str) -> Option<Span> {
        if name.is_empty() {
            return None;
        }

        if self.active.contains_key(name) {
            self.end(name);
        }

        let index = self.history.len();
        let span = Span {
            name: name.to_string(),
            start_ms: Utc::now().timestamp_millis(),
            end_ms: None,
            duration_ms: None,
            pid: std::process::id(),
            index,
        };
        self.history.push(span.clone());
        self.active.insert(name.to_string(), index);
        Some(span)
    }

    /// Close the open span under `name` and return a copy of its record.
    ///
    /// An empty name is a no-op returning `None`.
    ///
    /// # Panics
    ///
    /// Panics if no span with `name` is open. An unmatched `end` is an
    /// instrumentation bug in the caller; tolerating it would corrupt
    /// duration bookkeeping, so it halts instead.
    pub fn end(&mut self, name: &str) -> Option<Span> {
        if name.is_empty() {
            return None;
        }

        let index = match self.active.remove(name) {
            Some(index) => index,
            None => panic!("should call Timing::start(\"{name}\") first"),
        };

        let end_ms = Utc::now().timestamp_millis();
        let span = &mut self.history[index];
        span.end_ms = Some(end_ms);
        span.duration_ms = Some(end_ms - span.start_ms);
        let span = span.clone();

        if let Some(sink) = &self.sink {
            sink.log(&format_span(&self.label, &span));
        }

        Some(span)
    }

    /// Time a closure as a span named `name`.
    pub fn time<F, R>(&mut self, name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.start(name);
        let result = f();
        self.end(name);
        result
    }

    /// Copy of the full span history, ordered by start index.
    ///
    /// Still-open spans are included with `end_ms`/`duration_ms` unset.
    /// Mutating the returned records does not affect the tracker.
    pub fn snapshot(&self) -> Vec<Span> {
        self.history.clone()
    }
}

impl std::fmt::Debug for Timing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timing")
            .field("label", &self.label)
            .field("spans", &self.history.len())
            .field("open", &self.active.len())
            .finish()
    }
}

impl Serialize for Timing {
    /// Serializes as the history sequence, matching [`snapshot`](Self::snapshot).
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.history.len()))?;
        for span in &self.history {
            seq.serialize_element(span)?;
        }
        seq.end()
    }
}
