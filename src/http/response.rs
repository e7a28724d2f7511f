/// HTTP status codes the server emits.
///
/// - `Ok` (200): request successful
/// - `Created` (201): file written successfully
/// - `BadRequest` (400): malformed request, unsafe filename, bad body length
/// - `NotFound` (404): unknown route or missing file
/// - `MethodNotAllowed` (405): method other than GET/HEAD/POST
/// - `InternalServerError` (500): file or transport failure server-side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use rshttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Content type of the greeting, echo, user-agent and error responses.
pub const TEXT_PLAIN: &str = "text/plain";
/// Content type of file reads; also the writer's default.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Built once per request, written once, then discarded. `declared_length`
/// overrides the Content-Length derived from the body; HEAD responses to
/// `/files/` use it to advertise a size without carrying the bytes.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Content type; the writer defaults to `application/octet-stream`
    pub content_type: Option<&'static str>,
    /// Response body as bytes
    pub body: Vec<u8>,
    /// Explicit Content-Length override
    pub declared_length: Option<u64>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use rshttpd::http::response::{ResponseBuilder, StatusCode, OCTET_STREAM};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type(OCTET_STREAM)
///     .body(b"payload".to_vec())
///     .build();
/// assert_eq!(response.content_length(), 7);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Vec<u8>,
    declared_length: Option<u64>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: Vec::new(),
            declared_length: None,
        }
    }

    /// Sets the content type.
    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Overrides the advertised Content-Length independently of the body.
    pub fn declared_length(mut self, len: u64) -> Self {
        self.declared_length = Some(len);
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
            declared_length: self.declared_length,
        }
    }
}

impl Response {
    /// Content-Length the response advertises: the declared override when
    /// set, otherwise the body length. Accurate even when no body bytes are
    /// written (HEAD).
    pub fn content_length(&self) -> u64 {
        self.declared_length.unwrap_or(self.body.len() as u64)
    }

    /// Empty-bodied `text/plain` response, the shape of every error reply.
    pub fn empty(status: StatusCode) -> Self {
        ResponseBuilder::new(status).content_type(TEXT_PLAIN).build()
    }

    /// 200 OK `text/plain` response with the given body.
    pub fn text(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(TEXT_PLAIN)
            .body(body.into())
            .build()
    }
}
