//! # nanohttp - Minimal HTTP for embedded devices
//!
//! A small HTTP/1.0-class server and client designed to run over a single
//! connection-oriented socket on resource-constrained devices. Everything runs
//! on one thread of control, every wait is bounded by a millisecond budget and
//! every buffer has a fixed capacity. The library never allocates.
//!
//! ## Features
//!
//! ### Server (responder)
//! - Waits for one connection at a time with a timeout
//! - Reads and parses the request line into method, path and query
//! - Hands a [`Stream`](network::application::http::Stream) bound to the
//!   connection to your [`RequestHandler`](network::application::http::RequestHandler)
//! - Disconnects and re-arms listening after every request
//!
//! ### Client (requester)
//! - Parses `[scheme://]host[:port][/path]` URLs into fixed-size buffers
//! - Connects, sends a minimal `GET` request and waits for the response
//! - Lets your [`ResponseHandler`](network::application::http::ResponseHandler)
//!   read the response straight from the connection
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nanohttp = "0.1.0"
//! ```
//!
//! ### Basic Server Example
//!
//! ```rust,no_run
//! use core::fmt::Write as _;
//! use nanohttp::network::application::http::{Request, RequestHandler, Server, Stream};
//! use nanohttp::network::time::Clock;
//! use nanohttp::network::{Address, Endpoint, Socket};
//! # struct MockSocket;
//! # impl Socket for MockSocket {
//! #     type Error = ();
//! #     fn listen(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn accept(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn available(&mut self) -> Result<usize, Self::Error> { Ok(0) }
//! #     fn connect(&mut self, _hostname: &str, _port: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn is_connected(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn disconnect(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn close(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn remote_addr(&self) -> Result<Address, Self::Error> { Ok(Address::default()) }
//! # }
//! # impl nanohttp::network::Read for MockSocket {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl nanohttp::network::Write for MockSocket {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Endpoint for MockSocket {}
//! # struct Ticks;
//! # impl Clock for Ticks {
//! #     fn millis(&self) -> u32 { 0 }
//! # }
//!
//! struct Hello;
//!
//! impl<E: Endpoint> RequestHandler<E> for Hello {
//!     fn on_request(&mut self, page: &mut Stream<'_, E>, request: &Request<'_>) {
//!         let _ = write!(page, "HTTP/1.0 200 OK\r\n\r\nHello from {}", request.path);
//!     }
//! }
//!
//! let mut socket = MockSocket;
//! let mut server = Server::new(Ticks, Hello);
//! server.begin(&mut socket).unwrap();
//!
//! // loop {
//! //     let _ = server.run(1000);
//! // }
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices through the `std` feature
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Network abstraction layer: transport traits, time budgets and the HTTP
/// protocol implementation.
pub mod network;
