//! A network abstraction layer for embedded systems
//!
//! This module provides the traits the HTTP endpoints are written against. A
//! platform implements [`Socket`], [`Read`] and [`Write`] for its TCP socket
//! (and marks it with [`Endpoint`]); the protocol code never touches the
//! hardware or the IP stack directly.
//!

#![deny(unsafe_code)]

use core::fmt;

/// Common error types for network operations
pub mod error;

/// Millisecond clock and deadline polling
pub mod time;

/// Application layer protocols
pub mod application;

/// Re-exports of common traits
pub mod prelude {
    pub use super::time::Clock;
    pub use super::{Endpoint, Read, Socket, Write};
}

/// Read data from a connection.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection.
    ///
    /// Returns `Ok(0)` when no data is available.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Write data to a connection.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Connection management for a single TCP socket.
///
/// All operations return immediately. Waiting, and the timeout budget that
/// bounds it, is handled by the caller through polling.
pub trait Socket {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Put the socket in listening mode for incoming connections.
    fn listen(&mut self) -> Result<(), Self::Error>;

    /// Check for an incoming connection on a listening socket.
    ///
    /// Returns `Ok(true)` once a client is connected.
    fn accept(&mut self) -> Result<bool, Self::Error>;

    /// Number of bytes that can be read without blocking.
    fn available(&mut self) -> Result<usize, Self::Error>;

    /// Start connecting to the given host. Name resolution is up to the
    /// implementation.
    fn connect(&mut self, hostname: &str, port: u16) -> Result<(), Self::Error>;

    /// Check whether a connection started with [`connect`](Socket::connect)
    /// has been established.
    fn is_connected(&mut self) -> Result<bool, Self::Error>;

    /// Drop the current connection; the socket itself stays open.
    fn disconnect(&mut self) -> Result<(), Self::Error>;

    /// Close the socket.
    fn close(&mut self) -> Result<(), Self::Error>;

    /// Address of the connected peer.
    fn remote_addr(&self) -> Result<Address, Self::Error>;
}

/// A socket usable as an HTTP endpoint.
pub trait Endpoint: Socket + Read + Write {}

/// An IPv4 network address and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Address {
    /// IPv4 address octets.
    pub ip: [u8; 4],
    /// Port number.
    pub port: u16,
}

impl Address {
    /// Create an address from octets and a port.
    pub const fn new(ip: [u8; 4], port: u16) -> Self {
        Self { ip, port }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.ip;
        write!(f, "{}.{}.{}.{}:{}", a, b, c, d, self.port)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Address {
    fn format(&self, f: defmt::Formatter) {
        let [a, b, c, d] = self.ip;
        defmt::write!(f, "{}.{}.{}.{}:{}", a, b, c, d, self.port)
    }
}
