//! HTTP/1.0 protocol implementation for embedded systems.
//!
//! This module provides a lightweight HTTP server and client designed
//! specifically for embedded systems and `no_std` environments. It focuses on
//! simplicity, predictable memory usage and deterministic connection handling.
//!
//! # Features
//!
//! - One connection at a time, torn down after every exchange
//! - Request line parsing into method, path and query with a 64 byte buffer
//! - URL parsing with a 32 byte hostname buffer
//! - Millisecond timeouts on every wait
//! - Application code writes responses, or reads them, straight from the
//!   connection through a [`Stream`]
//!
//! # Result Codes
//!
//! [`Server::run`] and [`Client::get`] return `Result<(), Error>`; use
//! [`Error::code`](crate::network::error::Error::code) for the numeric form:
//!
//! | Code | Meaning                     |
//! |------|-----------------------------|
//! | 0    | success                     |
//! | -1   | I/O or parse failure        |
//! | -2   | timeout                     |
//! | -3   | URL parse failure (client)  |
//!
//! # Wire Format
//!
//! The server reads `METHOD SP path['?'query] SP HTTP-version CRLF` and ignores
//! any header lines. The client sends:
//!
//! ```text
//! GET /path HTTP/1.1
//! Host: hostname
//! Connection: close
//!
//! ```

/// Maximum length of a hostname, including room for a terminator.
pub const HOSTNAME_MAX: usize = 32;

/// Maximum length of a request line, including room for the line terminator.
pub const REQUEST_MAX: usize = 64;

/// Port used when a URL does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// Suggested budget for [`Client::get`], in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

/// HTTP client (requester).
pub mod client;

/// Request line reading and parsing.
pub mod request;

/// Status line parsing for responses.
pub mod response;

/// HTTP server (responder).
pub mod server;

/// Connection stream handed to handlers.
pub mod stream;

/// URL parsing.
pub mod url;

pub use client::{Client, Options, ResponseHandler};
pub use request::Request;
pub use response::StatusLine;
pub use server::{RequestHandler, Server};
pub use stream::Stream;
pub use url::Url;
