//! The connection view handed to handlers.

use crate::network::error::Error;
use crate::network::time::{self, Clock};
use crate::network::{Address, Endpoint, Read, Socket, Write};
use core::fmt;
use heapless::Vec;

/// A view of the live connection, handed to request and response handlers.
///
/// The stream borrows the endpoint for the duration of one handler call only.
/// It implements [`core::fmt::Write`], so responses can be produced with
/// `write!`.
///
/// Reads that have to wait for more data (see [`Stream::read_line`]) share the
/// millisecond budget of the operation that created the stream.
pub struct Stream<'s, E: Endpoint> {
    sock: &'s mut E,
    clock: &'s mut dyn Clock,
    ms: u32,
}

impl<'s, E: Endpoint> Stream<'s, E> {
    pub(crate) fn new(sock: &'s mut E, clock: &'s mut dyn Clock, ms: u32) -> Self {
        Self { sock, clock, ms }
    }

    /// Write the whole buffer to the connection.
    pub fn write_all(&mut self, mut buf: &[u8]) -> Result<(), Error> {
        while !buf.is_empty() {
            match self.sock.write(buf) {
                Ok(0) => return Err(Error::WriteError),
                Ok(n) => buf = &buf[n..],
                Err(_) => return Err(Error::WriteError),
            }
        }
        Ok(())
    }

    /// Flush buffered output to the peer.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.sock.flush().map_err(|_| Error::WriteError)
    }

    /// Read whatever data is available, up to `buf.len()` bytes.
    ///
    /// Returns `Ok(0)` when nothing has arrived yet; this call never waits.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        self.sock.read(buf).map_err(|_| Error::ReadError)
    }

    /// Number of bytes that can be read without waiting.
    pub fn available(&mut self) -> Result<usize, Error> {
        self.sock.available().map_err(|_| Error::ReadError)
    }

    /// Read one line into `buf` and return it without the line terminator.
    ///
    /// A line arriving in several segments is waited for until its `\n`
    /// shows up. When the peer disconnects first, whatever was received is
    /// returned as the last line.
    ///
    /// # Errors
    ///
    /// * [`Error::ProtocolError`] - The line does not fit in `buf`
    /// * [`Error::Timeout`] - The rest of the line did not arrive in time
    /// * [`Error::ConnectionClosed`] - The peer went away before sending anything
    pub fn read_line<'b, const N: usize>(
        &mut self,
        buf: &'b mut Vec<u8, N>,
    ) -> Result<&'b str, Error> {
        buf.clear();
        let mut byte = [0u8; 1];
        loop {
            if self.read(&mut byte)? == 0 {
                if self.wait_readable()? {
                    continue;
                }
                if buf.is_empty() {
                    return Err(Error::ConnectionClosed);
                }
                break;
            }
            if byte[0] == b'\n' {
                break;
            }
            buf.push(byte[0]).map_err(|_| Error::ProtocolError)?;
        }
        line_str(buf)
    }

    /// Wait until data can be read.
    ///
    /// Returns `false` once the peer is gone with nothing left to read.
    pub(crate) fn wait_readable(&mut self) -> Result<bool, Error> {
        let Self { sock, clock, ms } = self;
        time::poll(&mut **clock, *ms, || {
            if sock.available().map_err(|_| Error::ReadError)? > 0 {
                return Ok(Some(true));
            }
            match sock.is_connected() {
                Ok(true) => Ok(None),
                _ => Ok(Some(false)),
            }
        })
    }

    /// Address of the peer on the other end of the connection.
    pub fn remote_addr(&self) -> Result<Address, Error> {
        self.sock.remote_addr().map_err(|_| Error::InvalidAddress)
    }
}

impl<E: Endpoint + fmt::Debug> fmt::Debug for Stream<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("sock", &self.sock)
            .field("ms", &self.ms)
            .finish_non_exhaustive()
    }
}

impl<E: Endpoint> fmt::Write for Stream<'_, E> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

/// Strip a trailing carriage return and view the line as text.
fn line_str<const N: usize>(buf: &mut Vec<u8, N>) -> Result<&str, Error> {
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    core::str::from_utf8(buf).map_err(|_| Error::ProtocolError)
}
