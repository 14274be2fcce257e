//! Owned null-terminated buffer.

use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "bytes")]
use bytes::Bytes;

use crate::error::CStrBufError;
use crate::unit::{self, Unit};
use crate::util::nul_position;

/// A buffer that reads as a Rust string and can be handed to C functions
/// expecting a `char *`.
///
/// The storage is laid out exactly like a C string: `len()` units, the last
/// of which is `0`. Rust owns and frees the memory; foreign code only ever
/// borrows it through [`as_ptr`](Self::as_ptr) or [`pin`](Self::pin).
///
/// Buffers built from text ([`new`](Self::new), [`try_new`](Self::try_new))
/// never contain a `0` before the terminator. Buffers built with
/// [`with_len`](Self::with_len) are scratch space for foreign writers and
/// only become valid strings once something terminates them.
///
/// # Example
///
/// ```
/// use cstrbuf::CStrBuf;
///
/// let buf = CStrBuf::<u8>::new("hello");
/// assert_eq!(buf.len(), 6);
/// assert_eq!(buf.as_bytes_with_nul(), b"hello\0");
/// assert_eq!(buf.to_string_lossy(), "hello");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CStrBuf<T: Unit = u8> {
    /// Backing storage. Never empty.
    units: Vec<T>,
}

impl<T: Unit> CStrBuf<T> {
    /// Number of units taken by the terminator.
    pub const TERMINATOR_LEN: usize = 1;

    /// Allocates a buffer of exactly `n` units, terminator included.
    ///
    /// The string `"hello\0"` has length 6. The content is not meaningful;
    /// fill it (for example from a foreign call through
    /// [`with_mut_ptr`](Self::with_mut_ptr)) and make sure a `0` ends up in
    /// the buffer before reading it as a string.
    ///
    /// # Panics
    ///
    /// Panics if `n` is less than 1.
    ///
    /// # Example
    ///
    /// ```
    /// use cstrbuf::CStrBuf;
    ///
    /// let buf = CStrBuf::<i8>::with_len(5);
    /// assert_eq!(buf.len(), 5);
    /// ```
    pub fn with_len<I>(n: I) -> Self
    where
        I: TryInto<usize>,
    {
        match Self::try_with_len(n) {
            Ok(buf) => buf,
            Err(e) => panic!("{}", e),
        }
    }

    /// Allocates a buffer of exactly `n` units, terminator included.
    ///
    /// # Errors
    ///
    /// Returns [`CStrBufError::InvalidLength`] if `n` is zero, negative, or
    /// does not fit in `usize`.
    pub fn try_with_len<I>(n: I) -> Result<Self, CStrBufError>
    where
        I: TryInto<usize>,
    {
        let len = match n.try_into() {
            Ok(len) if len >= Self::TERMINATOR_LEN => len,
            _ => {
                log::debug!("rejected raw allocation: length below 1");
                return Err(CStrBufError::InvalidLength);
            }
        };

        log::trace!("allocating raw buffer of {} units", len);
        Ok(Self {
            units: vec![T::NUL; len],
        })
    }

    /// Builds a null-terminated copy of `s`.
    ///
    /// # Panics
    ///
    /// Panics if `s` contains a null byte. Use [`try_new`](Self::try_new)
    /// when the input is not already known to be null-free.
    pub fn new<S: AsRef<[u8]>>(s: S) -> Self {
        match Self::try_new(s) {
            Ok(buf) => buf,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds a null-terminated copy of `s`.
    ///
    /// Every byte is copied verbatim; with `i8` units the stored bit pattern
    /// equals the source byte. The result has `s.len() + 1` units.
    ///
    /// # Errors
    ///
    /// Returns [`CStrBufError::EmbeddedNull`] with the offset of the first
    /// null byte if `s` contains one. No buffer is produced in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use cstrbuf::{CStrBuf, CStrBufError};
    ///
    /// let err = CStrBuf::<u8>::try_new("a\0b").unwrap_err();
    /// assert_eq!(err, CStrBufError::EmbeddedNull { position: 1 });
    /// ```
    pub fn try_new<S: AsRef<[u8]>>(s: S) -> Result<Self, CStrBufError> {
        let src = s.as_ref();
        if let Some(position) = nul_position(src) {
            log::debug!(
                "rejected {}-byte string: null character at byte {}",
                src.len(),
                position
            );
            return Err(CStrBufError::EmbeddedNull { position });
        }

        let mut units = Vec::with_capacity(src.len() + Self::TERMINATOR_LEN);
        units.extend(src.iter().map(|&b| T::from_byte(b)));
        units.push(T::NUL);
        Ok(Self { units })
    }

    /// Total number of units, terminator included.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Number of payload units (`len() - 1`).
    #[inline]
    pub fn content_len(&self) -> usize {
        self.units.len().saturating_sub(Self::TERMINATOR_LEN)
    }

    /// Returns `true` if the payload is empty, i.e. the buffer is `[0]`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content_len() == 0
    }

    /// Returns `true` if the last unit is the terminator.
    ///
    /// Always `true` for buffers built from text.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.units.last().is_some_and(|u| u.is_nul())
    }

    /// Writes the terminator into the last unit.
    ///
    /// Use this after filling a [`with_len`](Self::with_len) buffer whose
    /// writer may not have terminated it. Readers stop at the first `0`, so
    /// an earlier terminator still wins.
    pub fn terminate(&mut self) {
        if let Some(last) = self.units.last_mut() {
            *last = T::NUL;
        }
        log::trace!("terminated {}-unit buffer", self.units.len());
    }

    /// Returns the text up to the first `0` unit.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`. Valid text is
    /// borrowed without copying.
    ///
    /// # Panics
    ///
    /// Panics if the buffer holds no `0` unit at all. Only a
    /// [`with_len`](Self::with_len) buffer that was never terminated can be
    /// in that state; see [`to_str`](Self::to_str) for a checked read.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self.until_nul() {
            Some(bytes) => String::from_utf8_lossy(bytes),
            None => panic!("{}", CStrBufError::NotTerminated),
        }
    }

    /// Returns the text up to the first `0` unit without copying.
    ///
    /// # Errors
    ///
    /// [`CStrBufError::NotTerminated`] if there is no `0` unit, and
    /// [`CStrBufError::InvalidUtf8`] if the text is not UTF-8.
    pub fn to_str(&self) -> Result<&str, CStrBufError> {
        let bytes = self.until_nul().ok_or(CStrBufError::NotTerminated)?;
        Ok(std::str::from_utf8(bytes)?)
    }

    /// Returns a [`CStr`] over the units up to and including the first `0`.
    ///
    /// # Errors
    ///
    /// [`CStrBufError::NotTerminated`] if there is no `0` unit.
    pub fn as_c_str(&self) -> Result<&CStr, CStrBufError> {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul())
            .map_err(|_| CStrBufError::NotTerminated)
    }

    /// Returns the payload: every unit except the last, as bytes.
    ///
    /// The slice aliases the buffer's storage; nothing is copied. Unlike
    /// [`to_str`](Self::to_str) this does not stop at an earlier `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use cstrbuf::CStrBuf;
    ///
    /// let buf = CStrBuf::<i8>::new("hi");
    /// assert_eq!(buf.to_bytes(), b"hi");
    /// ```
    pub fn to_bytes(&self) -> &[u8] {
        match self.units.split_last() {
            Some((_, payload)) => unit::as_bytes(payload),
            None => &[],
        }
    }

    /// Mutable view of the payload. The terminator is not reachable through it.
    pub fn to_bytes_mut(&mut self) -> &mut [u8] {
        match self.units.split_last_mut() {
            Some((_, payload)) => unit::as_bytes_mut(payload),
            None => &mut [],
        }
    }

    /// All units as bytes, terminator included.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        unit::as_bytes(&self.units)
    }

    /// All units, terminator included.
    #[inline]
    pub fn as_units(&self) -> &[T] {
        &self.units
    }

    /// All units, mutably, terminator included.
    ///
    /// Overwriting the last unit with a non-zero value leaves the buffer
    /// unterminated until [`terminate`](Self::terminate) is called.
    #[inline]
    pub fn as_units_mut(&mut self) -> &mut [T] {
        &mut self.units
    }

    /// Pointer to the first unit, ready to pass as a C `const char *`.
    ///
    /// O(1): the storage already has the C layout. The pointer is valid only
    /// while `self` is alive and not mutated or moved; prefer
    /// [`pin`](Self::pin) or [`with_ptr`](Self::with_ptr) to tie it to a
    /// scope.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.units.as_ptr()
    }

    /// Mutable pointer to the first unit, for C functions that write into
    /// the buffer. At most [`len`](Self::len) units may be written.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.units.as_mut_ptr()
    }

    /// Consumes the buffer and returns its storage, terminator included.
    pub fn into_units(self) -> Vec<T> {
        self.units
    }

    fn until_nul(&self) -> Option<&[u8]> {
        nul_position(&self.units).map(|end| unit::as_bytes(&self.units[..end]))
    }
}

#[cfg(feature = "bytes")]
impl CStrBuf<u8> {
    /// Converts the payload into [`Bytes`] without copying the storage.
    ///
    /// The terminator is dropped from the view.
    pub fn into_bytes(self) -> Bytes {
        let payload_len = self.content_len();
        let mut bytes = Bytes::from(self.units);
        bytes.truncate(payload_len);
        bytes
    }
}

impl<T: Unit> Default for CStrBuf<T> {
    /// The empty string: a single terminator.
    fn default() -> Self {
        Self {
            units: vec![T::NUL],
        }
    }
}

impl<T: Unit> fmt::Debug for CStrBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CStrBuf")
            .field(&String::from_utf8_lossy(self.to_bytes()))
            .finish()
    }
}

impl<T: Unit> fmt::Display for CStrBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl<T: Unit> TryFrom<&str> for CStrBuf<T> {
    type Error = CStrBufError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl<T: Unit> TryFrom<String> for CStrBuf<T> {
    type Error = CStrBufError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl<T: Unit> TryFrom<&[u8]> for CStrBuf<T> {
    type Error = CStrBufError;

    fn try_from(s: &[u8]) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl<T: Unit> FromStr for CStrBuf<T> {
    type Err = CStrBufError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}
