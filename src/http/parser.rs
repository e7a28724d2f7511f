//! Request parsing: bounded token extraction over the raw request buffer
//! and literal scanning for the recognized headers.

use std::collections::HashMap;

use crate::http::request::{Method, Request};

/// Field-width cap for the method and version tokens.
pub const METHOD_CAP: usize = 15;
/// Field-width cap for the path token.
pub const PATH_CAP: usize = 255;
/// Field-width cap for the version token.
pub const VERSION_CAP: usize = 15;

/// Headers the parser recognizes; everything else on the wire is ignored.
const KNOWN_HEADERS: [&str; 2] = ["Content-Length", "User-Agent"];

/// A whitespace-delimited token with an explicit truncation marker.
///
/// Tokens longer than their field cap keep the first `cap` bytes and report
/// `truncated` instead of overflowing or rejecting the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub truncated: bool,
}

/// Result of scanning the header region for one recognized header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderField<'a> {
    /// Header prefix not present anywhere in the region.
    Missing,
    /// Prefix present but no closing CRLF before the end of the region.
    Unterminated,
    /// Complete value: the bytes between the prefix and the next CRLF.
    Value(&'a [u8]),
}

/// Returns the offset of the `\r\n\r\n` header terminator, if present.
pub fn find_header_terminator(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Extracts the next whitespace-delimited token starting at `*pos`, keeping
/// at most `cap` bytes.
///
/// The cursor is always left after the whole token, so a truncated token
/// does not bleed into the next one. An exhausted buffer yields an empty,
/// non-truncated token.
pub fn next_token(buf: &[u8], pos: &mut usize, cap: usize) -> Token {
    while *pos < buf.len() && buf[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    let start = *pos;
    while *pos < buf.len() && !buf[*pos].is_ascii_whitespace() {
        *pos += 1;
    }

    let token = &buf[start..*pos];
    let truncated = token.len() > cap;
    let kept = if truncated { &token[..cap] } else { token };

    Token {
        text: String::from_utf8_lossy(kept).into_owned(),
        truncated,
    }
}

/// Scans `region` for the literal `prefix` (e.g. `"User-Agent: "`).
///
/// The value runs from right after the first occurrence of the prefix to
/// the next CRLF. A prefix with no CRLF after it is `Unterminated`.
pub fn scan_header<'a>(region: &'a [u8], prefix: &str) -> HeaderField<'a> {
    let needle = prefix.as_bytes();
    let Some(at) = find_subslice(region, needle) else {
        return HeaderField::Missing;
    };

    let value_start = at + needle.len();
    match find_subslice(&region[value_start..], b"\r\n") {
        Some(len) => HeaderField::Value(&region[value_start..value_start + len]),
        None => HeaderField::Unterminated,
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Parses the header region into a `Request`.
///
/// The region is everything before the header terminator plus, when the
/// terminator was found, the CRLF that closes the final header line.
/// Unknown methods parse as `Method::OTHER`; over-long tokens are truncated
/// at their field cap. Unterminated header values stay out of the map.
pub fn parse_request(region: &[u8]) -> Request {
    let mut pos = 0;
    let method = next_token(region, &mut pos, METHOD_CAP);
    let path = next_token(region, &mut pos, PATH_CAP);
    let version = next_token(region, &mut pos, VERSION_CAP);

    if method.truncated || path.truncated || version.truncated {
        tracing::debug!(
            method = %method.text,
            path = %path.text,
            "request-line token truncated at field cap"
        );
    }

    let mut headers = HashMap::new();
    for name in KNOWN_HEADERS {
        let prefix = format!("{name}: ");
        if let HeaderField::Value(raw) = scan_header(region, &prefix) {
            headers.insert(name.to_string(), String::from_utf8_lossy(raw).into_owned());
        }
    }

    Request {
        method: Method::from_token(&method.text),
        path: path.text,
        version: version.text,
        headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
        let parsed = parse_request(raw);

        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.version, "HTTP/1.1");
    }

    #[test]
    fn terminator_found_mid_buffer() {
        let raw = b"GET / HTTP/1.1\r\n\r\nleftover";
        assert_eq!(find_header_terminator(raw), Some(14));
    }
}
