//! String helpers: random strings, forgiving splits, HTTP header hygiene.

use rand::Rng;

/// Character set used by [`random_string`] when none is given.
const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random string of `len` characters drawn from `charset`.
///
/// Defaults to 16 alphanumeric characters. Not suitable for secrets; use a
/// proper token generator for anything security-sensitive.
pub fn random_string(len: usize, charset: Option<&str>) -> String {
    let len = if len == 0 { 16 } else { len };
    let chars: Vec<char> = charset.unwrap_or(DEFAULT_CHARSET).chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let mut rng = rand::thread_rng();
    (0..len).map(|_| chars[rng.gen_range(0..chars.len())]).collect()
}

/// Split on `sep` (default `,`), trimming each piece and dropping empties.
pub fn split_trim(s: &str, sep: Option<&str>) -> Vec<String> {
    s.split(sep.unwrap_or(","))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Repeat `s` `n` times.
pub fn str_times(s: &str, n: usize) -> String {
    s.repeat(n)
}

// field-value  = *( field-content / obs-fold )
// field-vchar  = VCHAR / obs-text
// HTAB and SP are valid inside field-content; other control bytes and DEL are not.
const fn build_header_table() -> [bool; 256] {
    let mut table = [false; 256];
    table[b'\t' as usize] = true;
    let mut i = 0x20;
    while i < 256 {
        table[i] = true;
        i += 1;
    }
    table[0x7f] = false;
    table
}

/// Validity of each byte value as an HTTP header field-vchar.
const VALID_HEADER_CHARS: [bool; 256] = build_header_table();

fn is_valid_header_char(c: char) -> bool {
    (c as u32) < 256 && VALID_HEADER_CHARS[c as usize]
}

/// Whether `s` contains a character invalid in an HTTP header field value.
pub fn includes_invalid_header_char(s: &str) -> bool {
    s.chars().any(|c| !is_valid_header_char(c))
}

/// Replace invalid header field-value characters with `replacement`.
///
/// Returns the cleaned string and whether anything was replaced. Valid
/// input comes back unchanged (and unallocated beyond the copy).
pub fn replace_invalid_header_chars(s: &str, replacement: &str) -> (String, bool) {
    if !includes_invalid_header_char(s) {
        return (s.to_string(), false);
    }

    let mut cleaned = String::with_capacity(s.len());
    for c in s.chars() {
        if is_valid_header_char(c) {
            cleaned.push(c);
        } else {
            cleaned.push_str(replacement);
        }
    }
    (cleaned, true)
}
