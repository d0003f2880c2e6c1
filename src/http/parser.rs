use crate::http::request::{Method, Request};
use std::collections::HashMap;

/// Upper bound on the request line plus headers.
pub const MAX_HEAD_BYTES: usize = 64 * 1024;

/// Upper bound on a declared request body. Nothing served reads bodies.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    InvalidContentLength,
    HeadTooLarge,
    BodyTooLarge,
    Incomplete,
}

/// Parses one request from the front of `buf`.
///
/// Head lines may end in `\r\n` or a bare `\n`; a blank line ends the head.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let (headers_end, body_start) = match find_headers_end(buf) {
        Some((end, start)) if end <= MAX_HEAD_BYTES => (end, start),
        Some(_) => return Err(ParseError::HeadTooLarge),
        None if buf.len() > MAX_HEAD_BYTES => return Err(ParseError::HeadTooLarge),
        None => return Err(ParseError::Incomplete),
    };
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[body_start..];

    let headers_str = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    if parts.next().is_some() || !version.starts_with("HTTP/") {
        return Err(ParseError::InvalidRequest);
    }

    if !method_str.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(ParseError::InvalidMethod);
    }
    let method = Method::parse(method_str);

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or(ParseError::InvalidHeader)?;

        headers.insert(
           key.trim().to_string(),
           value.trim().to_string(),
        );
    }

    // Body
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Content-Length"))
        .map(|(_, v)| v.parse::<usize>().map_err(|_| ParseError::InvalidContentLength))
        .transpose()?
        .unwrap_or(0);

    if content_length > MAX_BODY_BYTES {
        return Err(ParseError::BodyTooLarge);
    }

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();
    let request = Request::new(method, target, version, headers, body);

    let total_consumed = body_start + content_length;
    Ok((request, total_consumed))
}

/// Returns the head length and the offset where the body starts.
fn find_headers_end(buf: &[u8]) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(offset) = buf[from..].iter().position(|&b| b == b'\n') {
        let newline = from + offset;
        match buf.get(newline + 1) {
            Some(b'\n') => return Some((newline, newline + 2)),
            Some(b'\r') if buf.get(newline + 2) == Some(&b'\n') => {
                return Some((newline, newline + 3));
            }
            _ => from = newline + 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET /battery HTTP/1.1\r\nHost: localhost\r\n\r\n";

        let (parsed, consumed) = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/battery");
        assert_eq!(parsed.query, None);
        assert_eq!(parsed.headers.get("Host").unwrap(), "localhost");
        assert_eq!(consumed, req.len());
    }

    #[test]
    fn head_end_offsets() {
        assert_eq!(find_headers_end(b"GET / HTTP/1.0\r\n\r\nbody"), Some((15, 18)));
        assert_eq!(find_headers_end(b"GET / HTTP/1.0\n\nbody"), Some((14, 16)));
        assert_eq!(find_headers_end(b"GET / HTTP/1.0\r\n"), None);
        assert_eq!(find_headers_end(b"GET / HTTP/1.0\n"), None);
    }

    #[test]
    fn oversized_head_is_rejected() {
        let mut req = b"GET / HTTP/1.1\r\nX-Filler: ".to_vec();
        req.extend(std::iter::repeat_n(b'a', MAX_HEAD_BYTES));
        assert_eq!(parse_http_request(&req).unwrap_err(), ParseError::HeadTooLarge);
    }
}
