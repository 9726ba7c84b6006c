//! Filesystem helpers for opskit.
//!
//! This crate provides the file-facing half of the toolkit:
//! - Strict JSON file IO, sync and async, with atomic writes
//! - Depth- and breadth-first directory walkers
//! - dotenv-style `KEY=value` parsing
//! - Path existence filters and identifier camelization

pub mod env;
pub mod error;
pub mod json;
pub mod paths;
pub mod walk;

pub use env::parse_key_value;
pub use error::{Error, Result};
pub use json::{read_json, read_json_sync, strict_parse, write_json, write_json_sync};
pub use paths::{camelize_path, camelize_path_joined, CaseStyle};
pub use walk::{walk_breadth, walk_depth};
