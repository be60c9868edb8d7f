//! Scripted socket, stepping clock and recording handlers shared by the tests

use core::fmt::Write as _;
use nanohttp::network::application::http::{
    Request, RequestHandler, ResponseHandler, StatusLine, Stream,
};
use nanohttp::network::error::Error;
use nanohttp::network::time::Clock;
use nanohttp::network::{Address, Endpoint, Read, Socket, Write};
use std::collections::VecDeque;

/// A socket whose peers are scripted up front.
///
/// Server role: every entry of `incoming` is one client connection, its bytes
/// become readable once `accept` picks it up. Client role: `response` becomes
/// readable after `connect`, and `is_connected` reports `false` for the first
/// `connect_delay` polls.
#[derive(Debug, Default)]
pub struct MockSocket {
    pub incoming: VecDeque<Vec<u8>>,
    pub response: Option<Vec<u8>>,
    pub connect_delay: usize,
    pub refuse: bool,
    pub fail_listen: bool,
    pub peer: Address,

    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
    pub listening: bool,
    pub connected: bool,
    pub closed: bool,
    pub listen_calls: usize,
    pub disconnect_calls: usize,
    pub connects: Vec<(String, u16)>,
}

impl MockSocket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a client connection that will send `data`.
    pub fn with_client(mut self, data: &[u8]) -> Self {
        self.incoming.push_back(data.to_vec());
        self
    }

    /// Serve `data` to the next outgoing connection.
    pub fn with_response(mut self, data: &[u8]) -> Self {
        self.response = Some(data.to_vec());
        self
    }

    pub fn sent(&self) -> &str {
        std::str::from_utf8(&self.tx).unwrap()
    }
}

impl Socket for MockSocket {
    type Error = Error;

    fn listen(&mut self) -> Result<(), Self::Error> {
        self.listen_calls += 1;
        if self.fail_listen || self.closed {
            return Err(Error::NotOpen);
        }
        self.listening = true;
        Ok(())
    }

    fn accept(&mut self) -> Result<bool, Self::Error> {
        if self.closed {
            return Err(Error::NotOpen);
        }
        if self.connected {
            return Ok(true);
        }
        if !self.listening {
            return Ok(false);
        }
        match self.incoming.pop_front() {
            Some(data) => {
                self.rx = data.into_iter().collect();
                self.listening = false;
                self.connected = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn available(&mut self) -> Result<usize, Self::Error> {
        Ok(self.rx.len())
    }

    fn connect(&mut self, hostname: &str, port: u16) -> Result<(), Self::Error> {
        if self.closed {
            return Err(Error::NotOpen);
        }
        self.connects.push((hostname.to_string(), port));
        if self.refuse {
            return Err(Error::ConnectionRefused);
        }
        self.connected = true;
        Ok(())
    }

    fn is_connected(&mut self) -> Result<bool, Self::Error> {
        if self.connect_delay > 0 {
            self.connect_delay -= 1;
            return Ok(false);
        }
        if self.connected && self.rx.is_empty() {
            if let Some(data) = self.response.take() {
                self.rx = data.into_iter().collect();
            }
        }
        Ok(self.connected)
    }

    fn disconnect(&mut self) -> Result<(), Self::Error> {
        self.disconnect_calls += 1;
        self.connected = false;
        self.rx.clear();
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.closed = true;
        self.listening = false;
        self.connected = false;
        Ok(())
    }

    fn remote_addr(&self) -> Result<Address, Self::Error> {
        Ok(self.peer)
    }
}

impl Read for MockSocket {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let len = buf.len().min(self.rx.len());
        for (slot, byte) in buf.iter_mut().zip(self.rx.drain(..len)) {
            *slot = byte;
        }
        Ok(len)
    }
}

impl Write for MockSocket {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if !self.connected {
            return Err(Error::NotOpen);
        }
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Endpoint for MockSocket {}

/// A clock that only moves forward while someone is waiting.
#[derive(Debug, Default)]
pub struct MockClock {
    pub now: u32,
}

impl Clock for MockClock {
    fn millis(&self) -> u32 {
        self.now
    }

    fn idle(&mut self) {
        self.now = self.now.wrapping_add(1);
    }
}

/// Records every request and answers with a small plain text page.
#[derive(Debug, Default)]
pub struct Recorder {
    pub requests: Vec<(String, String, String)>,
    pub client: Option<Address>,
}

impl<E: Endpoint> RequestHandler<E> for Recorder {
    fn on_request(&mut self, page: &mut Stream<'_, E>, request: &Request<'_>) {
        self.requests.push((
            request.method.to_string(),
            request.path.to_string(),
            request.query.to_string(),
        ));
        self.client = page.remote_addr().ok();
        page.write_all(b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n\r\n")
            .unwrap();
        write!(page, "path={} query={}", request.path, request.query).unwrap();
    }
}

/// Reads the whole response: status line, headers and body.
#[derive(Debug, Default)]
pub struct Collector {
    pub calls: usize,
    pub hostname: String,
    pub path: String,
    pub status: Option<u16>,
    pub headers: Vec<String>,
    pub body: Vec<u8>,
}

impl<E: Endpoint> ResponseHandler<E> for Collector {
    fn on_response(&mut self, body: &mut Stream<'_, E>, hostname: &str, path: &str) {
        self.calls += 1;
        self.hostname = hostname.to_string();
        self.path = path.to_string();

        let mut buf: heapless::Vec<u8, 128> = heapless::Vec::new();
        let status = StatusLine::parse(body.read_line(&mut buf).unwrap()).unwrap();
        self.status = Some(status.status_code);

        self.headers.clear();
        loop {
            let line = body.read_line(&mut buf).unwrap();
            if line.is_empty() {
                break;
            }
            self.headers.push(line.to_string());
        }

        self.body.clear();
        let mut chunk = [0u8; 32];
        loop {
            let n = body.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            self.body.extend_from_slice(&chunk[..n]);
        }
    }
}
