//! Miscellaneous helpers for host applications.
//!
//! This crate collects the small utilities an application server reaches
//! for constantly:
//! - Named timing spans for request/operation latency
//! - Hashing, HMAC, and base64 wrappers
//! - Log-style date formatting
//! - String, slice, and JSON value shape helpers
//! - HTML/URI escaping
//! - Call-site introspection for diagnostics
//! - Logging setup with tracing
//!
//! Filesystem-facing helpers (JSON file IO, directory walkers) live in the
//! companion `opskit-fs` crate.

pub mod dates;
pub mod error;
pub mod hash;
pub mod log;
pub mod slices;
pub mod stack;
pub mod strings;
pub mod timing;
pub mod value;
pub mod web;

pub use error::{Error, Result};
pub use timing::{format_span, Span, Timing, TimingSink, TracingSink};
