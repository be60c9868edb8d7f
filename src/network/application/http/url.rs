//! Splitting request URLs for the client.

use super::{DEFAULT_PORT, HOSTNAME_MAX};
use crate::network::error::Error;
use heapless::String;

/// A URL split into the parts needed to issue a request.
///
/// The hostname is copied into a fixed-size buffer; the path borrows from the
/// URL string, which therefore has to outlive the `Url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url<'a> {
    /// Host name or dotted address, shorter than [`HOSTNAME_MAX`].
    pub hostname: String<HOSTNAME_MAX>,
    /// Port to connect to.
    pub port: u16,
    /// Resource path, starting with `/`. A URL without a path but with a
    /// query or fragment keeps just that part here, e.g. `?x=1`.
    pub path: &'a str,
}

impl<'a> Url<'a> {
    /// Parse `[scheme://]host[:port][/path]`, using port 80 when none is given.
    ///
    /// ```rust
    /// use nanohttp::network::application::http::Url;
    ///
    /// let url = Url::parse("http://host.example/path/to/page").unwrap();
    /// assert_eq!(url.hostname.as_str(), "host.example");
    /// assert_eq!(url.port, 80);
    /// assert_eq!(url.path, "/path/to/page");
    /// ```
    pub fn parse(url: &'a str) -> Result<Self, Error> {
        Self::parse_with_port(url, DEFAULT_PORT)
    }

    /// Parse a URL, using `default_port` when it does not name a port.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidUrl`] when the host is empty or does not fit in
    /// [`HOSTNAME_MAX`], or when the port is empty, not a number, out of range
    /// or followed by anything other than a path.
    pub fn parse_with_port(url: &'a str, default_port: u16) -> Result<Self, Error> {
        let rest = match url.split_once("://") {
            Some((scheme, rest)) if is_scheme(scheme) => rest,
            _ => url,
        };

        let host_end = rest.find(['/', ':', '?', '#']).unwrap_or(rest.len());
        let (host, mut rest) = rest.split_at(host_end);
        if host.is_empty() || host.len() >= HOSTNAME_MAX {
            return Err(Error::InvalidUrl);
        }
        let hostname = String::try_from(host).map_err(|_| Error::InvalidUrl)?;

        let mut port = default_port;
        if let Some(after) = rest.strip_prefix(':') {
            let digits = after.find(['/', '?', '#']).unwrap_or(after.len());
            let (number, tail) = after.split_at(digits);
            if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidUrl);
            }
            port = number.parse::<u16>().map_err(|_| Error::InvalidUrl)?;
            rest = tail;
        }

        let path = if rest.is_empty() { "/" } else { rest };

        Ok(Self {
            hostname,
            port,
            path,
        })
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(s: &str) -> bool {
    let mut bytes = s.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}
