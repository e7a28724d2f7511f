//! Exact-length request body reading.

use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

/// Upper bound on a declared Content-Length. Larger declarations are a
/// client error before any allocation happens.
pub const MAX_BODY_BYTES: u64 = 1 << 30;

/// Failure modes while consuming a declared-length body.
#[derive(Debug)]
pub enum BodyError {
    /// Peer closed before the declared length arrived: a client error.
    UnexpectedEof,
    /// Transport failure mid-body: a server error.
    Io(std::io::Error),
}

/// Reads a body of declared length from the bytes the header read already
/// buffered plus further reads from the connection.
pub struct BodyReader<'a> {
    stream: &'a mut TcpStream,
    buffered: &'a mut BytesMut,
}

impl<'a> BodyReader<'a> {
    pub fn new(stream: &'a mut TcpStream, buffered: &'a mut BytesMut) -> Self {
        Self { stream, buffered }
    }

    /// Consumes exactly `len` bytes: first whatever the header read left in
    /// the buffer, then socket reads until the total is reached.
    ///
    /// The allocation is sized exactly to `len`; a zero-length body
    /// allocates nothing.
    pub async fn read_exact(&mut self, len: u64) -> Result<Vec<u8>, BodyError> {
        if len == 0 {
            return Ok(Vec::new());
        }

        let len = len as usize;
        let mut body = Vec::with_capacity(len);

        let take = self.buffered.len().min(len);
        body.extend_from_slice(&self.buffered[..take]);
        self.buffered.advance(take);

        while body.len() < len {
            let n = self
                .stream
                .read_buf(&mut body)
                .await
                .map_err(BodyError::Io)?;
            if n == 0 {
                return Err(BodyError::UnexpectedEof);
            }
        }

        Ok(body)
    }
}
