//! Error types for cstrbuf.

use std::fmt;
use std::str::Utf8Error;

/// Errors that can occur while building or reading a [`CStrBuf`](crate::CStrBuf).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CStrBufError {
    /// A raw allocation was requested with fewer than one unit.
    ///
    /// A buffer must hold at least the terminator.
    InvalidLength,

    /// The source text contains a null byte before its end.
    EmbeddedNull {
        /// Byte offset of the first null in the source.
        position: usize,
    },

    /// The buffer has no null unit, so it is not a valid C string yet.
    NotTerminated,

    /// The payload is not valid UTF-8.
    InvalidUtf8(Utf8Error),
}

impl fmt::Display for CStrBufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CStrBufError::InvalidLength => write!(f, "length must be at least 1"),
            CStrBufError::EmbeddedNull { position } => {
                write!(f, "string contains null character at byte {}", position)
            }
            CStrBufError::NotTerminated => write!(f, "buffer is not null-terminated"),
            CStrBufError::InvalidUtf8(e) => write!(f, "invalid utf-8: {}", e),
        }
    }
}

impl std::error::Error for CStrBufError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CStrBufError::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Utf8Error> for CStrBufError {
    fn from(e: Utf8Error) -> Self {
        CStrBufError::InvalidUtf8(e)
    }
}
