//! Response status lines.

use crate::network::error::Error;

/// The first line of an HTTP response, e.g. `HTTP/1.0 200 OK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine<'a> {
    /// Protocol version token.
    pub version: &'a str,
    /// Three digit status code.
    pub status_code: u16,
    /// Reason phrase; may be empty.
    pub reason: &'a str,
}

impl<'a> StatusLine<'a> {
    /// Parse a status line, without its line terminator.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let mut parts = line.splitn(3, ' ');
        let version = parts.next().ok_or(Error::ProtocolError)?;
        if !version.starts_with("HTTP/") {
            return Err(Error::ProtocolError);
        }

        let code = parts.next().ok_or(Error::ProtocolError)?;
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::ProtocolError);
        }
        let status_code = code.parse::<u16>().map_err(|_| Error::ProtocolError)?;

        Ok(Self {
            version,
            status_code,
            reason: parts.next().unwrap_or(""),
        })
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
