//! Call-site introspection for diagnostics.
//!
//! Resolves which file (and optionally line) invoked the current code by
//! capturing and filtering a backtrace. Frames from the standard library,
//! the runtime, and this module itself are skipped so the answer points at
//! application code. Resolution needs debug info; without it the sentinel
//! `"<anonymous>"` is returned.

use std::backtrace::Backtrace;

/// How many application frames to consider when resolving the call site.
const DEFAULT_FRAME_LIMIT: usize = 4;

/// Returned when no application frame can be resolved.
pub const ANONYMOUS: &str = "<anonymous>";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    symbol: String,
    file: String,
    line: u32,
    column: u32,
}

impl Frame {
    fn format(&self, with_line: bool) -> String {
        if with_line {
            format!("{}:{}:{}", self.file, self.line, self.column)
        } else {
            self.file.clone()
        }
    }
}

/// Parse the rendered form of a [`Backtrace`] into symbolicated frames.
///
/// Frames without a source location (native or stripped) are dropped.
fn parse_frames(rendered: &str) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut lines = rendered.lines().peekable();

    while let Some(line) = lines.next() {
        // Symbol lines look like `   7: module::path::function`.
        let trimmed = line.trim_start();
        let Some((index, symbol)) = trimmed.split_once(':') else {
            continue;
        };
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let symbol = symbol.trim().to_string();

        // An indented `at path:line:col` line follows symbolicated frames.
        let location = lines
            .peek()
            .map(|next| next.trim_start())
            .and_then(|next| next.strip_prefix("at "))
            .map(str::to_string);
        let Some(location) = location else {
            continue;
        };
        lines.next();

        let mut parts = location.rsplitn(3, ':');
        let column = parts.next().and_then(|p| p.parse().ok());
        let line_no = parts.next().and_then(|p| p.parse().ok());
        let file = parts.next();
        if let (Some(file), Some(line_no), Some(column)) = (file, line_no, column) {
            frames.push(Frame {
                symbol,
                file: file.to_string(),
                line: line_no,
                column,
            });
        }
    }
    frames
}

/// Whether a frame belongs to the runtime rather than application code.
fn is_internal(frame: &Frame) -> bool {
    let symbol = frame.symbol.as_str();
    symbol.starts_with("std::")
        || symbol.starts_with("core::")
        || symbol.starts_with("alloc::")
        || symbol.starts_with("test::")
        || symbol.starts_with("backtrace::")
        || symbol.contains("rust_begin_short_backtrace")
        || symbol.contains("::stack::caller_file")
        || symbol.contains("::stack::caller_files")
        || symbol.contains("::stack::application_frames")
        || frame.file.contains("/rustc/")
}

fn application_frames(limit: usize) -> Vec<Frame> {
    let backtrace = Backtrace::force_capture();
    parse_frames(&backtrace.to_string())
        .into_iter()
        .filter(|frame| !is_internal(frame))
        .take(limit)
        .collect()
}

/// Resolve the file that reached the current code, outermost of the
/// nearest few application frames.
///
/// With `with_line` the result is `file:line:column`.
pub fn caller_file(with_line: bool) -> String {
    let frames = application_frames(DEFAULT_FRAME_LIMIT);
    match frames.last() {
        Some(frame) => frame.format(with_line),
        None => ANONYMOUS.to_string(),
    }
}

/// Resolve up to `limit` application call-site files, outermost first.
pub fn caller_files(with_line: bool, limit: usize) -> Vec<String> {
    let frames = application_frames(limit.max(1));
    if frames.is_empty() {
        return vec![ANONYMOUS.to_string()];
    }
    frames.iter().rev().map(|frame| frame.format(with_line)).collect()
}

/// Strip a base directory from a path and normalize separators to `/`.
pub fn resolved_filename(filepath: &str, base: &str) -> String {
    let stripped = filepath
        .strip_prefix(base)
        .map(|rest| rest.trim_start_matches(['/', '\\']))
        .unwrap_or(filepath);
    stripped.replace('\\', "/")
}
