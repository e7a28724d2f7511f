//! Route dispatch: the fixed method/path table, path-parameter extraction
//! and the handlers behind it.
//!
//! Path parameters are literal prefix strips (`/echo/`, `/files/`), not
//! pattern matching: everything after the prefix, including the empty
//! string and slashes, is the parameter verbatim.

use crate::files::{self, FileStore};
use crate::http::body::{BodyError, BodyReader, MAX_BODY_BYTES};
use crate::http::request::{Method, Request};
use crate::http::response::{OCTET_STREAM, Response, ResponseBuilder, StatusCode};

/// Maps a request to a response.
///
/// Every error this layer recognizes becomes a well-formed response
/// (400/404/405/500); only transport failures abort the connection, and
/// those are handled a layer up.
pub async fn dispatch(
    request: &Request,
    headers_complete: bool,
    body: &mut BodyReader<'_>,
    store: &FileStore,
) -> Response {
    match request.method {
        Method::GET | Method::HEAD => dispatch_read(request, store).await,
        Method::POST => dispatch_post(request, headers_complete, body, store).await,
        Method::OTHER => Response::empty(StatusCode::MethodNotAllowed),
    }
}

async fn dispatch_read(request: &Request, store: &FileStore) -> Response {
    let path = request.path.as_str();

    if path == "/" {
        Response::empty(StatusCode::Ok)
    } else if let Some(value) = path.strip_prefix("/echo/") {
        Response::text(value.as_bytes().to_vec())
    } else if path == "/user-agent" {
        match request.user_agent() {
            Some(ua) => Response::text(ua.as_bytes().to_vec()),
            // Absent, or unterminated before the end of the buffer.
            None => Response::empty(StatusCode::BadRequest),
        }
    } else if let Some(name) = path.strip_prefix("/files/") {
        serve_file(name, request.method == Method::HEAD, store).await
    } else {
        Response::empty(StatusCode::NotFound)
    }
}

async fn serve_file(name: &str, head_only: bool, store: &FileStore) -> Response {
    if !files::is_safe_filename(name) {
        return Response::empty(StatusCode::BadRequest);
    }

    if head_only {
        // Size comes from metadata; the file is never opened. A GET racing
        // a writer may observe a different size, accepted as benign.
        return match store.size(name).await {
            Ok(len) => ResponseBuilder::new(StatusCode::Ok)
                .content_type(OCTET_STREAM)
                .declared_length(len)
                .build(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Response::empty(StatusCode::NotFound)
            }
            Err(e) => {
                tracing::warn!(file = name, error = %e, "file stat failed");
                Response::empty(StatusCode::InternalServerError)
            }
        };
    }

    match store.read(name).await {
        Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
            .content_type(OCTET_STREAM)
            .body(contents)
            .build(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Response::empty(StatusCode::NotFound),
        Err(e) => {
            tracing::warn!(file = name, error = %e, "file read failed");
            Response::empty(StatusCode::InternalServerError)
        }
    }
}

async fn dispatch_post(
    request: &Request,
    headers_complete: bool,
    body: &mut BodyReader<'_>,
    store: &FileStore,
) -> Response {
    let Some(name) = request.path.strip_prefix("/files/") else {
        return Response::empty(StatusCode::NotFound);
    };
    if !files::is_safe_filename(name) {
        return Response::empty(StatusCode::BadRequest);
    }
    if !headers_complete {
        return Response::empty(StatusCode::BadRequest);
    }

    let Some(declared) = request.content_length() else {
        return Response::empty(StatusCode::BadRequest);
    };
    if declared > MAX_BODY_BYTES {
        return Response::empty(StatusCode::BadRequest);
    }

    let contents = match body.read_exact(declared).await {
        Ok(contents) => contents,
        Err(BodyError::UnexpectedEof) => return Response::empty(StatusCode::BadRequest),
        Err(BodyError::Io(e)) => {
            tracing::warn!(error = %e, "body read failed");
            return Response::empty(StatusCode::InternalServerError);
        }
    };

    match store.write(name, &contents).await {
        Ok(()) => Response::empty(StatusCode::Created),
        Err(e) => {
            tracing::warn!(file = name, error = %e, "file write failed");
            Response::empty(StatusCode::InternalServerError)
        }
    }
}
