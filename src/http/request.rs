use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// HTTP request methods.
///
/// Only GET is served. Everything else is still parsed so the connection can
/// answer with 501 instead of dropping the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token, kept verbatim
    Other(String),
}

/// Represents a parsed HTTP request from a client.
///
/// The request target is split at the first `?` into `path` and `query`;
/// neither part is percent-decoded. Absolute-form targets are reduced to
/// their path and query first.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path without the query string (e.g., "/battery")
    pub path: String,
    /// Everything after the first `?`, `None` when the target has no `?`
    pub query: Option<String>,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
    /// Request body, if the client sent one
    pub body: Vec<u8>,
}

impl Method {
    /// Parses an HTTP method token. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use battery_beacon::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduces an absolute-form target (`http://host/path?q`) to its path and query.
///
/// Origin-form targets and anything that does not parse as an absolute URL
/// (e.g. `*`) are returned unchanged.
pub fn origin_form(target: &str) -> Cow<'_, str> {
    if target.starts_with('/') {
        return Cow::Borrowed(target);
    }
    match url::Url::parse(target) {
        Ok(url) if url.has_host() => match url.query() {
            Some(query) => Cow::Owned(format!("{}?{}", url.path(), query)),
            None => Cow::Owned(url.path().to_string()),
        },
        _ => Cow::Borrowed(target),
    }
}

/// Splits a request target into path and query at the first `?`.
pub fn split_target(target: &str) -> (&str, Option<&str>) {
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

impl Request {
    pub fn new(
        method: Method,
        target: &str,
        version: impl Into<String>,
        headers: HashMap<String, String>,
        body: Vec<u8>,
    ) -> Self {
        let target = origin_form(target);
        let (path, query) = split_target(&target);
        Request {
            method,
            path: path.to_string(),
            query: query.map(str::to_string),
            version: version.into(),
            headers,
            body,
        }
    }

    /// Shorthand for a GET with no headers.
    pub fn get(target: &str) -> Self {
        Self::new(Method::GET, target, "HTTP/1.0", HashMap::new(), Vec::new())
    }

    /// The origin-form request target, path plus any query.
    pub fn target(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    /// Decoded `key=value` pairs of the query string, in order.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let query = self.query.as_deref().unwrap_or_default();
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }
}
