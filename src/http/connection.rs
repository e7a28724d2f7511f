use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::files::FileStore;
use crate::http::body::BodyReader;
use crate::http::parser;
use crate::http::request::{Method, Request};
use crate::http::writer::ResponseWriter;
use crate::router;

/// Cap on the raw request buffer: the header block plus any body bytes read
/// incidentally while accumulating headers. Hitting the cap without a
/// terminator surfaces as incomplete headers, never as a silent drop.
pub const MAX_REQUEST_BYTES: usize = 16384;

const READ_CHUNK: usize = 1024;

/// Handles one client connection: a single request, a single response,
/// then close.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    store: FileStore,
}

enum ConnectionState {
    Reading,
    Processing {
        request: Request,
        headers_complete: bool,
    },
    Writing {
        writer: ResponseWriter,
    },
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, store: FileStore) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            store,
        }
    }

    /// Drives the connection state machine to completion.
    ///
    /// The socket closes on every exit path, error or not, when `self`
    /// drops. Transport errors propagate to the caller with no response
    /// written; route-level errors have already become responses by the
    /// time they reach the writing state.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some((request, headers_complete)) => {
                            self.state = ConnectionState::Processing {
                                request,
                                headers_complete,
                            };
                        }
                        None => {
                            // Peer never sent anything (e.g. a health-check
                            // ping): close with no response.
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing {
                    request,
                    headers_complete,
                } => {
                    tracing::debug!(
                        method = ?request.method,
                        path = %request.path,
                        version = %request.version,
                        "request parsed"
                    );

                    let mut body = BodyReader::new(&mut self.stream, &mut self.buffer);
                    let response =
                        router::dispatch(&request, headers_complete, &mut body, &self.store).await;

                    let head_only = request.method == Method::HEAD;
                    self.state = ConnectionState::Writing {
                        writer: ResponseWriter::new(response, head_only),
                    };
                }

                ConnectionState::Writing { mut writer } => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// Reads until the header terminator, peer close, or the buffer cap.
    ///
    /// Returns the parsed request plus whether the terminator was seen, or
    /// `None` when the peer closed without sending a byte. Bytes past the
    /// terminator stay buffered for the body reader.
    async fn read_request(&mut self) -> anyhow::Result<Option<(Request, bool)>> {
        let mut chunk = [0u8; READ_CHUNK];

        let terminator = loop {
            if let Some(pos) = parser::find_header_terminator(&self.buffer) {
                break Some(pos);
            }

            let headroom = MAX_REQUEST_BYTES - self.buffer.len();
            if headroom == 0 {
                break None;
            }

            let n = self
                .stream
                .read(&mut chunk[..headroom.min(READ_CHUNK)])
                .await?;
            if n == 0 {
                break None;
            }
            self.buffer.extend_from_slice(&chunk[..n]);
        };

        if self.buffer.is_empty() {
            return Ok(None);
        }

        match terminator {
            Some(pos) => {
                // Keep the CRLF that closes the final header line in the
                // parsed region; leftover bytes stay in the buffer.
                let head = self.buffer.split_to(pos + 4);
                Ok(Some((parser::parse_request(&head[..pos + 2]), true)))
            }
            None => {
                let request = parser::parse_request(&self.buffer);
                self.buffer.clear();
                Ok(Some((request, false)))
            }
        }
    }
}
