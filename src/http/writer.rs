use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::{OCTET_STREAM, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Identity advertised in the `Server` response header.
pub const SERVER_ID: &str = concat!("rshttpd/", env!("CARGO_PKG_VERSION"));

/// Serializes the status line and the fixed header set.
///
/// The order is part of the wire contract: status line, Content-Type,
/// Content-Length, Connection, Server, blank line. Content-Length is always
/// present and accurate even when no body bytes follow.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    format!(
        "{} {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\nServer: {}\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        resp.content_type.unwrap_or(OCTET_STREAM),
        resp.content_length(),
        SERVER_ID,
    )
    .into_bytes()
}

/// Writes a response as two separate writes: the header block, then the
/// body. A failure on either aborts the connection; there is no retry or
/// partial-response recovery.
pub struct ResponseWriter {
    head: Vec<u8>,
    body: Vec<u8>,
}

impl ResponseWriter {
    /// `head_only` drops the body bytes while the serialized head keeps the
    /// Content-Length the full response would have carried.
    pub fn new(response: Response, head_only: bool) -> Self {
        let head = serialize_head(&response);
        let body = if head_only { Vec::new() } else { response.body };
        Self { head, body }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        stream.write_all(&self.head).await?;
        if !self.body.is_empty() {
            stream.write_all(&self.body).await?;
        }
        stream.flush().await?;
        Ok(())
    }
}
