//! Strict JSON file IO.
//!
//! Readers reject scalar documents (a bare string or number is almost
//! always a truncated or mis-written file), and writers create parent
//! directories and replace the target atomically via a temp file + rename.
//! Sync and async variants share semantics; the async ones go through
//! `tokio::fs`.

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Parse a JSON document, requiring an object or array at the top level.
pub fn strict_parse(s: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(s)?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(Error::NotAnObject),
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        let mut s = serde_json::to_string_pretty(value)?;
        s.push('\n');
        s
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

/// Read and strictly parse a JSON file.
pub fn read_json_sync(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    debug!(path = %path.display(), "Reading JSON file");
    let content = std::fs::read_to_string(path)?;
    strict_parse(&content)
}

/// Read and deserialize a JSON file into `T`.
pub fn read_sync<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    debug!(path = %path.display(), "Reading JSON file");
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Serialize `value` to a JSON file, creating parent directories.
///
/// Pretty output ends with a trailing newline. The write is atomic: the
/// content lands in a temp file first and is renamed over the target.
pub fn write_json_sync<T: Serialize>(
    path: impl AsRef<Path>,
    value: &T,
    pretty: bool,
) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Writing JSON file");

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = render(value, pretty)?;

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, &content)?;
    std::fs::rename(&temp_path, path)?;
    Ok(())
}

/// Async variant of [`read_json_sync`].
pub async fn read_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading JSON file");
    match tokio::fs::read_to_string(path).await {
        Ok(content) => strict_parse(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::NotFound(path.to_path_buf()))
        }
        Err(e) => Err(Error::Io(e)),
    }
}

/// Async variant of [`write_json_sync`].
pub async fn write_json<T: Serialize>(
    path: impl AsRef<Path>,
    value: &T,
    pretty: bool,
) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Writing JSON file");

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let content = render(value, pretty)?;

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &content).await?;
    tokio::fs::rename(&temp_path, path).await?;
    Ok(())
}
