//! Error types for the cidrset library.

use std::fmt;
use std::io;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the serialization paths.
///
/// Insertions and lookups cannot fail; the only failure modes are a
/// malformed length header and I/O errors from the caller's sink or
/// source, which are passed through untouched.
#[derive(Debug)]
pub enum Error {
    /// The length header of a serialized blob is not a multiple of 4.
    InvalidFormat,

    /// An error propagated from the underlying reader or writer.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFormat => write!(f, "invalid format"),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::InvalidFormat => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
