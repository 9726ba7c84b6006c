//! Hashing, HMAC, and base64 wrappers.

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};

/// Digest algorithms exposed by [`hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha256,
    Sha512,
}

/// Output encoding for digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestFormat {
    #[default]
    Hex,
    Base64,
}

fn encode_digest(bytes: &[u8], format: DigestFormat) -> String {
    match format {
        DigestFormat::Hex => hex::encode(bytes),
        DigestFormat::Base64 => STANDARD.encode(bytes),
    }
}

/// Digest `data` with the given algorithm and encode the result.
pub fn hash(algorithm: HashAlgorithm, data: impl AsRef<[u8]>, format: DigestFormat) -> String {
    let digest = match algorithm {
        HashAlgorithm::Md5 => md5::compute(data.as_ref()).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(data.as_ref()).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data.as_ref()).to_vec(),
    };
    encode_digest(&digest, format)
}

/// MD5 digest of `data`, hex-encoded.
pub fn md5(data: impl AsRef<[u8]>) -> String {
    hash(HashAlgorithm::Md5, data, DigestFormat::Hex)
}

/// SHA-256 digest of `data`, hex-encoded.
pub fn sha256(data: impl AsRef<[u8]>) -> String {
    hash(HashAlgorithm::Sha256, data, DigestFormat::Hex)
}

/// Digest a JSON value by its canonical (key-sorted) rendering.
///
/// Two values that differ only in object key order hash identically.
pub fn hash_value(algorithm: HashAlgorithm, value: &Value, format: DigestFormat) -> String {
    let canonical = canonicalize(value);
    // Canonical values always render.
    let rendered = serde_json::to_string(&canonical).unwrap_or_default();
    hash(algorithm, rendered, format)
}

/// Rebuild a value with object keys sorted, recursively.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = serde_json::Map::new();
            for key in keys {
                if let Some(inner) = map.get(key) {
                    sorted.insert(key.clone(), canonicalize(inner));
                }
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// HMAC-SHA256 of `data` under `key`.
///
/// Base64 is the conventional encoding for transmitted signatures; pass
/// [`DigestFormat::Hex`] for hex.
pub fn hmac_sha256(key: &[u8], data: impl AsRef<[u8]>, format: DigestFormat) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key)
        .map_err(|e| Error::InvalidInput(format!("hmac key: {e}")))?;
    mac.update(data.as_ref());
    Ok(encode_digest(&mac.finalize().into_bytes(), format))
}

/// HMAC-SHA512 of `data` under `key`.
pub fn hmac_sha512(key: &[u8], data: impl AsRef<[u8]>, format: DigestFormat) -> Result<String> {
    let mut mac = Hmac::<Sha512>::new_from_slice(key)
        .map_err(|e| Error::InvalidInput(format!("hmac key: {e}")))?;
    mac.update(data.as_ref());
    Ok(encode_digest(&mac.finalize().into_bytes(), format))
}

/// Base64-encode `data`, optionally with the URL-safe alphabet
/// (`-`/`_` instead of `+`/`/`).
pub fn base64_encode(data: impl AsRef<[u8]>, urlsafe: bool) -> String {
    if urlsafe {
        URL_SAFE.encode(data.as_ref())
    } else {
        STANDARD.encode(data.as_ref())
    }
}

/// Decode a base64 string produced by [`base64_encode`].
pub fn base64_decode(encoded: &str, urlsafe: bool) -> Result<Vec<u8>> {
    let decoded = if urlsafe {
        URL_SAFE.decode(encoded)?
    } else {
        STANDARD.decode(encoded)?
    };
    Ok(decoded)
}

/// Decode a base64 string into UTF-8 text.
pub fn base64_decode_string(encoded: &str, urlsafe: bool) -> Result<String> {
    let bytes = base64_decode(encoded, urlsafe)?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidInput(format!("not utf-8: {e}")))
}
