//! HTML entity and URI-component escaping.

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverse [`escape_html`], also accepting the `&apos;`/`&#x27;` spellings.
///
/// Unrecognized entities pass through untouched.
pub fn unescape_html(s: &str) -> String {
    let mut unescaped = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('&') {
        unescaped.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let entity = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
            ("&#x27;", '\''),
            ("&apos;", '\''),
        ]
        .iter()
        .find(|(name, _)| rest.starts_with(name));

        match entity {
            Some((name, replacement)) => {
                unescaped.push(*replacement);
                rest = &rest[name.len()..];
            }
            None => {
                unescaped.push('&');
                rest = &rest[1..];
            }
        }
    }
    unescaped.push_str(rest);
    unescaped
}

// The unreserved set of encodeURIComponent: ALPHA / DIGIT / - _ . ! ~ * ' ( )
fn is_uri_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
}

/// Percent-encode a URI component.
///
/// Multi-byte characters are encoded per UTF-8 byte with uppercase hex.
pub fn encode_uri_component(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for c in s.chars() {
        if is_uri_unreserved(c) {
            encoded.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    encoded
}

/// Decode a percent-encoded URI component, never failing.
///
/// Malformed input (truncated `%`, bad hex, invalid UTF-8) decodes to
/// itself, so callers handling untrusted query strings need no error
/// branch.
pub fn decode_uri_component(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut iter = s.bytes();

    while let Some(byte) = iter.next() {
        if byte != b'%' {
            bytes.push(byte);
            continue;
        }
        let (hi, lo) = match (iter.next(), iter.next()) {
            (Some(hi), Some(lo)) => (hi, lo),
            _ => return s.to_string(),
        };
        let decode_nibble = |b: u8| (b as char).to_digit(16);
        match (decode_nibble(hi), decode_nibble(lo)) {
            (Some(hi), Some(lo)) => bytes.push((hi * 16 + lo) as u8),
            _ => return s.to_string(),
        }
    }

    String::from_utf8(bytes).unwrap_or_else(|_| s.to_string())
}
