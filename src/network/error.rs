//! Common error types for network operations

/// A common error type for network operations.
///
/// This enum defines the errors the HTTP endpoints report. It is designed to
/// be simple and portable for `no_std` environments. Every variant maps onto
/// one of the numeric result codes through [`Error::code`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted without a bound socket.
    NotOpen,
    /// The socket could not be put into listening mode.
    BindError,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation, or no data arrived in time.
    ReadError,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed.
    ConnectionClosed,
    /// An invalid address was provided.
    InvalidAddress,
    /// A protocol-specific error occurred.
    ProtocolError,
    /// The URL could not be parsed.
    InvalidUrl,
}

impl Error {
    /// Generic I/O or parse failure.
    pub const CODE_FAILURE: i32 = -1;
    /// A wait exceeded its budget.
    pub const CODE_TIMEOUT: i32 = -2;
    /// The URL could not be parsed.
    pub const CODE_URL: i32 = -3;

    /// Numeric result code of this error.
    ///
    /// ```rust
    /// use nanohttp::network::error::Error;
    ///
    /// assert_eq!(Error::Timeout.code(), -2);
    /// assert_eq!(Error::InvalidUrl.code(), -3);
    /// assert_eq!(Error::ProtocolError.code(), -1);
    /// ```
    pub const fn code(self) -> i32 {
        match self {
            Error::Timeout => Self::CODE_TIMEOUT,
            Error::InvalidUrl => Self::CODE_URL,
            _ => Self::CODE_FAILURE,
        }
    }
}

/// Convert the outcome of a `run` or `get` call into its numeric code.
///
/// Returns zero on success and a negative code otherwise.
pub fn code(result: Result<(), Error>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.code(),
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::BindError => defmt::write!(f, "BindError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::ProtocolError => defmt::write!(f, "ProtocolError"),
            Error::InvalidUrl => defmt::write!(f, "InvalidUrl"),
        }
    }
}
