//! Path existence filters and identifier camelization.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Filter `paths` down to those that exist under `base`.
///
/// Returned paths are the joined absolute forms.
pub fn existing_paths(paths: &[&str], base: impl AsRef<Path>) -> Vec<PathBuf> {
    let base = base.as_ref();
    paths
        .iter()
        .map(|p| base.join(p))
        .filter(|p| p.exists())
        .collect()
}

/// Like [`existing_paths`], keeping only regular files.
pub fn existing_files(paths: &[&str], base: impl AsRef<Path>) -> Vec<PathBuf> {
    existing_paths(paths, base)
        .into_iter()
        .filter(|p| p.is_file())
        .collect()
}

/// First-letter casing applied by [`camelize_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// `foo_bar` -> `fooBar`
    Lower,
    /// `foo_bar` -> `FooBar`
    Upper,
    /// Alias for [`CaseStyle::Lower`], the loader convention.
    Camel,
}

static SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").expect("segment pattern is valid"));

/// Camelize each `/`-separated segment of a relative file path.
///
/// The file extension is stripped first. Each segment must start with a
/// letter and contain only `a-z0-9_-`; `_x`/`-x` pairs become `X`.
///
/// ```text
/// "foo_bar/baz-qux.rs" -> ["fooBar", "bazQux"]   (Lower/Camel)
/// ```
pub fn camelize_path(filepath: &str, style: CaseStyle) -> Result<Vec<String>> {
    let trimmed = match filepath.rfind('.') {
        Some(pos) if pos > 0 => &filepath[..pos],
        _ => filepath,
    };

    trimmed
        .split('/')
        .map(|segment| camelize_segment(segment, style, filepath))
        .collect()
}

/// [`camelize_path`] joined with `sep` into a single identifier.
pub fn camelize_path_joined(filepath: &str, style: CaseStyle, sep: &str) -> Result<String> {
    Ok(camelize_path(filepath, style)?.join(sep))
}

fn camelize_segment(segment: &str, style: CaseStyle, path: &str) -> Result<String> {
    if !SEGMENT.is_match(segment) {
        return Err(Error::InvalidSegment {
            segment: segment.to_string(),
            path: path.to_string(),
        });
    }

    let mut camelized = String::with_capacity(segment.len());
    let mut upper_next = false;
    for c in segment.chars() {
        match c {
            '_' | '-' => upper_next = true,
            c if upper_next => {
                camelized.extend(c.to_uppercase());
                upper_next = false;
            }
            c => camelized.push(c),
        }
    }

    let mut chars = camelized.chars();
    let first = match chars.next() {
        Some(first) => first,
        None => return Ok(camelized),
    };
    let first = match style {
        CaseStyle::Lower | CaseStyle::Camel => first.to_ascii_lowercase(),
        CaseStyle::Upper => first.to_ascii_uppercase(),
    };
    Ok(std::iter::once(first).chain(chars).collect())
}
