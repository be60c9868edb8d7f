//! HTTP requester.
//!
//! A [`Client`] borrows a socket between [`Client::begin`] and
//! [`Client::end`] (or until it is dropped). Every [`Client::get`] opens a
//! connection, sends one request, hands the connection to the
//! [`ResponseHandler`] and disconnects again.

use super::stream::Stream;
use super::url::Url;
use super::DEFAULT_PORT;
use crate::network::error::Error;
use crate::network::time::{self, Clock};
use crate::network::{Endpoint, Socket};
use core::fmt::Write;
use heapless::String;

/// Application extension consuming responses.
pub trait ResponseHandler<E: Endpoint> {
    /// Called once the server has started answering. The response, status
    /// line included, is read from `body`.
    fn on_response(&mut self, body: &mut Stream<'_, E>, hostname: &str, path: &str);
}

/// Configuration options for the HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Port used when the URL does not name one.
    pub default_port: u16,
    /// Value of the `User-Agent` header; the header is omitted when `None`.
    pub user_agent: Option<&'static str>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_port: DEFAULT_PORT,
            user_agent: None,
        }
    }
}

/// An HTTP client issuing one request at a time.
#[derive(Debug)]
pub struct Client<'a, E: Endpoint, C: Clock, H: ResponseHandler<E>> {
    sock: Option<&'a mut E>,
    clock: C,
    handler: H,
    options: Options,
}

impl<'a, E, C, H> Client<'a, E, C, H>
where
    E: Endpoint,
    C: Clock,
    H: ResponseHandler<E>,
{
    /// Create a client with default options.
    pub fn new(clock: C, handler: H) -> Self {
        Self::with_options(clock, handler, Options::default())
    }

    /// Create a client with the given options.
    pub fn with_options(clock: C, handler: H, options: Options) -> Self {
        Self {
            sock: None,
            clock,
            handler,
            options,
        }
    }

    /// Use `sock` for all requests until [`end`](Client::end) is called or
    /// the client is dropped.
    pub fn begin(&mut self, sock: &'a mut E) -> Result<(), Error> {
        self.sock = Some(sock);
        debug!("client: bound");
        Ok(())
    }

    /// Close and release the socket.
    ///
    /// Returns [`Error::NotOpen`] when no socket is bound, so a second call is
    /// harmless.
    pub fn end(&mut self) -> Result<(), Error> {
        let sock = self.sock.take().ok_or(Error::NotOpen)?;
        if sock.close().is_err() {
            warn!("client: close failed");
        }
        debug!("client: closed");
        Ok(())
    }

    /// Request `url` and pass the response to the handler.
    ///
    /// `ms` bounds both the connection attempt and the wait for the first
    /// response bytes (0 = forever); see [`DEFAULT_TIMEOUT_MS`](super::DEFAULT_TIMEOUT_MS)
    /// for a sensible value.
    ///
    /// # Errors
    ///
    /// * [`Error::NotOpen`] - No socket is bound
    /// * [`Error::InvalidUrl`] - The URL could not be parsed; nothing was sent
    /// * [`Error::ConnectionRefused`] - The connection could not be opened
    /// * [`Error::Timeout`] - Connecting or waiting for the response took too long
    /// * [`Error::WriteError`] - The request could not be sent
    pub fn get(&mut self, url: &str, ms: u32) -> Result<(), Error> {
        let Self {
            sock,
            clock,
            handler,
            options,
        } = self;
        let sock = sock.as_deref_mut().ok_or(Error::NotOpen)?;

        let url = Url::parse_with_port(url, options.default_port).inspect_err(|_| {
            debug!("client: rejected url");
        })?;

        let result = exchange(sock, clock, handler, options, &url, ms);
        if let Err(e) = result {
            debug!("client: request failed: {}", e);
        }
        if sock.disconnect().is_err() {
            warn!("client: disconnect failed");
        }
        result
    }

    /// Whether a socket is bound.
    pub fn is_bound(&self) -> bool {
        self.sock.is_some()
    }

    /// The bound socket, if any.
    pub fn socket(&self) -> Option<&E> {
        self.sock.as_deref()
    }

    /// The response handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// A mutable reference to the response handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

impl<E, C, H> Drop for Client<'_, E, C, H>
where
    E: Endpoint,
    C: Clock,
    H: ResponseHandler<E>,
{
    fn drop(&mut self) {
        let _ = self.end();
    }
}

/// Connect, send the request and dispatch the response.
fn exchange<E, C, H>(
    sock: &mut E,
    clock: &mut C,
    handler: &mut H,
    options: &Options,
    url: &Url<'_>,
    ms: u32,
) -> Result<(), Error>
where
    E: Endpoint,
    C: Clock,
    H: ResponseHandler<E>,
{
    // --- Connect ---
    sock.connect(&url.hostname, url.port)
        .map_err(|_| Error::ConnectionRefused)?;
    time::poll(clock, ms, || match sock.is_connected() {
        Ok(true) => Ok(Some(())),
        Ok(false) => Ok(None),
        Err(_) => Err(Error::ConnectionRefused),
    })?;
    debug!("client: connected to {=str}:{=u16}", url.hostname.as_str(), url.port);

    // --- Send Request ---
    let mut stream = Stream::new(sock, clock, ms);
    stream.write_all(b"GET ")?;
    if !url.path.starts_with('/') {
        stream.write_all(b"/")?;
    }
    stream.write_all(url.path.as_bytes())?;
    stream.write_all(b" HTTP/1.1\r\nHost: ")?;
    stream.write_all(url.hostname.as_bytes())?;
    if url.port != DEFAULT_PORT {
        let mut port: String<6> = String::new();
        write!(port, ":{}", url.port).map_err(|_| Error::WriteError)?;
        stream.write_all(port.as_bytes())?;
    }
    stream.write_all(b"\r\n")?;
    if let Some(agent) = options.user_agent {
        stream.write_all(b"User-Agent: ")?;
        stream.write_all(agent.as_bytes())?;
        stream.write_all(b"\r\n")?;
    }
    stream.write_all(b"Connection: close\r\n\r\n")?;
    stream.flush()?;

    // --- Wait for Response ---
    if !stream.wait_readable()? {
        return Err(Error::ConnectionClosed);
    }

    handler.on_response(&mut stream, &url.hostname, url.path);
    Ok(())
}
