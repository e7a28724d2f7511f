use std::collections::HashMap;

/// HTTP request methods the server distinguishes.
///
/// GET, HEAD and POST are routed; every other method folds into `OTHER` and
/// is answered with 405 Method Not Allowed at dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Submit data
    POST,
    /// Any other method token
    OTHER,
}

impl Method {
    /// Maps a request-line token to a method.
    ///
    /// Matching is exact and case-sensitive; `"get"` parses as `OTHER`.
    ///
    /// # Example
    ///
    /// ```
    /// # use rshttpd::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::OTHER);
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            _ => Method::OTHER,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Derived once from the raw buffer's header region and never mutated. Only
/// the headers the server acts on (`Content-Length`, `User-Agent`) populate
/// the map; lookup is by exact key, value case as received on the wire.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, HEAD, POST or OTHER)
    pub method: Method,
    /// The request path, truncated at the field cap if over-long
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
    /// Recognized headers as key-value pairs
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Retrieves a header value by exact key.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Value of the `User-Agent` header.
    ///
    /// `None` when the header is absent or its value never saw a closing
    /// CRLF before the end of the buffer; both cases are a 400 on the
    /// `/user-agent` route.
    pub fn user_agent(&self) -> Option<&str> {
        self.header("User-Agent")
    }

    /// Parses the `Content-Length` header as a decimal byte count.
    ///
    /// `None` if the header is missing or not a valid number.
    pub fn content_length(&self) -> Option<u64> {
        self.header("Content-Length")
            .and_then(|v| v.trim().parse().ok())
    }
}
