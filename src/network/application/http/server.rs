//! HTTP responder.
//!
//! The server owns nothing but a reference to a listening socket. Each call to
//! [`Server::run`] is one complete service cycle:
//!
//! ```text
//! wait for connection ──▶ read request line ──▶ on_request() ──▶ disconnect + listen
//!        │                        │
//!        ▼                        ▼
//!  Timeout (-2)            ReadError / ProtocolError (-1) ──▶ disconnect + listen
//! ```
//!
//! No state survives a cycle apart from the bound socket, so the server is
//! ready for the next `run` whatever the outcome of the previous one.

use super::request::Request;
use super::stream::Stream;
use super::REQUEST_MAX;
use crate::network::error::Error;
use crate::network::time::{self, Clock};
use crate::network::{Address, Endpoint, Socket};
use heapless::Vec;

/// Application extension producing responses to requests.
pub trait RequestHandler<E: Endpoint> {
    /// Write the complete response (status line, headers, body) for
    /// `request` to `page`.
    ///
    /// Neither `page` nor `request` may be kept past the call; the connection
    /// is closed as soon as the handler returns.
    fn on_request(&mut self, page: &mut Stream<'_, E>, request: &Request<'_>);
}

/// An HTTP server handling one connection at a time.
#[derive(Debug)]
pub struct Server<'a, E: Endpoint, C: Clock, H: RequestHandler<E>> {
    sock: Option<&'a mut E>,
    clock: C,
    handler: H,
}

impl<'a, E, C, H> Server<'a, E, C, H>
where
    E: Endpoint,
    C: Clock,
    H: RequestHandler<E>,
{
    /// Create a server that is not yet bound to a socket.
    pub fn new(clock: C, handler: H) -> Self {
        Self {
            sock: None,
            clock,
            handler,
        }
    }

    /// Bind the server to `sock` and start listening.
    ///
    /// A previously bound socket is replaced without being closed. When
    /// listening fails the socket stays bound and [`Error::BindError`] is
    /// returned.
    pub fn begin(&mut self, sock: &'a mut E) -> Result<(), Error> {
        let sock = self.sock.insert(sock);
        sock.listen().map_err(|_| {
            warn!("server: listen failed");
            Error::BindError
        })?;
        debug!("server: listening");
        Ok(())
    }

    /// Serve one request, waiting at most `ms` milliseconds (0 = forever)
    /// for a client to connect.
    ///
    /// # Errors
    ///
    /// * [`Error::NotOpen`] - No socket is bound
    /// * [`Error::Timeout`] - No client connected within the budget
    /// * [`Error::ReadError`] - The request line did not arrive in time
    /// * [`Error::ProtocolError`] - The request line was too long or malformed
    /// * Other errors reported by the transport while serving or resetting
    pub fn run(&mut self, ms: u32) -> Result<(), Error> {
        let Self {
            sock,
            clock,
            handler,
        } = self;
        let sock = sock.as_deref_mut().ok_or(Error::NotOpen)?;

        // Wait for a client
        let accepted = time::poll(clock, ms, || match sock.accept() {
            Ok(true) => Ok(Some(())),
            Ok(false) => Ok(None),
            Err(_) => Err(Error::ConnectionRefused),
        });
        match accepted {
            Ok(()) => {}
            Err(Error::Timeout) => {
                trace!("server: no connection within {=u32} ms", ms);
                return Err(Error::Timeout);
            }
            Err(e) => {
                warn!("server: accept failed");
                let _ = reset(sock);
                return Err(e);
            }
        }

        let served = serve(sock, clock, handler, ms);
        if let Err(e) = served {
            debug!("server: request failed: {}", e);
        }
        served.and(reset(sock))
    }

    /// Stop the server and close the socket.
    ///
    /// Returns [`Error::NotOpen`] when no socket is bound, so a second call is
    /// harmless.
    pub fn end(&mut self) -> Result<(), Error> {
        let sock = self.sock.take().ok_or(Error::NotOpen)?;
        if sock.close().is_err() {
            warn!("server: close failed");
        }
        debug!("server: closed");
        Ok(())
    }

    /// Address of the most recently connected client.
    pub fn client_addr(&self) -> Result<Address, Error> {
        let sock = self.sock.as_deref().ok_or(Error::NotOpen)?;
        sock.remote_addr().map_err(|_| Error::InvalidAddress)
    }

    /// Whether a socket is bound.
    pub fn is_bound(&self) -> bool {
        self.sock.is_some()
    }

    /// The bound socket, if any.
    pub fn socket(&self) -> Option<&E> {
        self.sock.as_deref()
    }

    /// The request handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// A mutable reference to the request handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

/// Read, parse and dispatch a single request on an accepted connection.
fn serve<E, C, H>(sock: &mut E, clock: &mut C, handler: &mut H, ms: u32) -> Result<(), Error>
where
    E: Endpoint,
    C: Clock,
    H: RequestHandler<E>,
{
    let mut page = Stream::new(sock, clock, ms);
    let mut line: Vec<u8, REQUEST_MAX> = Vec::new();
    let line = page.read_line(&mut line).map_err(|e| match e {
        Error::Timeout => Error::ReadError,
        e => e,
    })?;
    let request = Request::parse(line)?;
    debug!(
        "server: {=str} {=str} ?{=str}",
        request.method,
        request.path,
        request.query
    );

    handler.on_request(&mut page, &request);
    page.flush()
}

/// Drop the client and listen for the next one.
fn reset<E: Endpoint>(sock: &mut E) -> Result<(), Error> {
    let disconnected = sock.disconnect().map_err(|_| Error::ConnectionClosed);
    let listening = sock.listen().map_err(|_| Error::BindError);
    if disconnected.is_err() || listening.is_err() {
        warn!("server: reset failed");
    }
    disconnected.and(listening)
}
