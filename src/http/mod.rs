//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset the server speaks: one request
//! per connection, `Content-Length`-framed bodies, and a fixed response
//! header set ending in `Connection: close`.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection handler implementing the
//!   request-response state machine
//! - **`parser`**: bounded token extraction and literal header scanning over
//!   the raw request buffer
//! - **`request`**: parsed request representation
//! - **`response`**: response representation with builder pattern
//! - **`body`**: exact-length request body reading
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until the header terminator
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch to a route, read the body if any
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send head, then body
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close → Closed
//! ```
//!
//! There is no keep-alive back-edge: every response declares
//! `Connection: close` and the socket is dropped after the single exchange.

pub mod body;
pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
