//! Request line handling for the server.
//!
//! Only the first line of a request is interpreted:
//!
//! ```text
//! GET /path?param1=value1&param2=value2 HTTP/1.0\r\n
//! ```
//!
//! Header lines and any body are left unread on the connection.

use super::REQUEST_MAX;
use crate::network::error::Error;

/// A parsed request line.
///
/// All fields borrow from the line buffer of the current service cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    /// Request method, e.g. `GET`. Never empty.
    pub method: &'a str,
    /// Resource path without query. Never empty.
    pub path: &'a str,
    /// Query string without the leading `?`; empty when there is none.
    pub query: &'a str,
    /// Protocol version token, e.g. `HTTP/1.0`.
    pub version: &'a str,
}

impl<'a> Request<'a> {
    /// Parse a request line, without its line terminator.
    ///
    /// ```rust
    /// use nanohttp::network::application::http::Request;
    ///
    /// let request = Request::parse("GET /a/b?x=1 HTTP/1.0").unwrap();
    /// assert_eq!(request.method, "GET");
    /// assert_eq!(request.path, "/a/b");
    /// assert_eq!(request.query, "x=1");
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::ProtocolError`] when the line is [`REQUEST_MAX`] bytes or
    /// longer, when the method or path is missing, or when no space follows
    /// the path.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        if line.len() >= REQUEST_MAX {
            return Err(Error::ProtocolError);
        }

        let (method, rest) = line.split_once(' ').ok_or(Error::ProtocolError)?;
        if method.is_empty() {
            return Err(Error::ProtocolError);
        }

        let (target, rest) = rest.split_once(' ').ok_or(Error::ProtocolError)?;
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };
        let path = strip_fragment(path);
        let query = strip_fragment(query);
        if path.is_empty() {
            return Err(Error::ProtocolError);
        }

        let version = rest.split(' ').next().unwrap_or("");

        Ok(Self {
            method,
            path,
            query,
            version,
        })
    }
}

fn strip_fragment(s: &str) -> &str {
    match s.find('#') {
        Some(i) => &s[..i],
        None => s,
    }
}
