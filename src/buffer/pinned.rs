//! Scoped foreign-pointer access.
//!
//! A raw pointer carries no lifetime, so nothing stops it from outliving
//! the buffer it came from. These helpers keep the buffer borrowed for as
//! long as the pointer is meant to be in use, which keeps it allocated and
//! unmoved for the duration of a foreign call.

use std::ffi::CStr;
use std::marker::PhantomData;

use super::CStrBuf;
use crate::error::CStrBufError;
use crate::unit::Unit;

/// A buffer borrowed for the duration of a foreign call.
///
/// While a `Pinned` exists the buffer cannot be dropped, moved or mutated.
/// The compiler does not know what the foreign side does with the pointer
/// once the `Pinned` is gone; retaining it past that point is on the caller.
///
/// # Example
///
/// ```
/// use std::ffi::{c_char, CStr};
/// use cstrbuf::CStrBuf;
///
/// # unsafe extern "C" fn strlen(s: *const c_char) -> usize {
/// #     unsafe { CStr::from_ptr(s) }.to_bytes().len()
/// # }
/// let buf = CStrBuf::<c_char>::new("hello");
/// let pinned = buf.pin();
/// let len = unsafe { strlen(pinned.as_ptr()) };
/// assert_eq!(len, 5);
/// ```
#[derive(Debug)]
pub struct Pinned<'a, T: Unit> {
    buf: &'a CStrBuf<T>,
    // Raw pointers handed out are not meant to cross threads with the guard.
    _not_send: PhantomData<*const T>,
}

impl<'a, T: Unit> Pinned<'a, T> {
    /// Pointer to the first unit; valid while this guard is alive.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Number of units behind the pointer, terminator included.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the pinned string has no payload.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The pinned string as a [`CStr`].
    pub fn as_c_str(&self) -> Result<&'a CStr, CStrBufError> {
        self.buf.as_c_str()
    }

    /// The pinned buffer.
    #[inline]
    pub fn buffer(&self) -> &'a CStrBuf<T> {
        self.buf
    }
}

impl<T: Unit> CStrBuf<T> {
    /// Borrows the buffer for a foreign call; see [`Pinned`].
    pub fn pin(&self) -> Pinned<'_, T> {
        Pinned {
            buf: self,
            _not_send: PhantomData,
        }
    }

    /// Runs `f` with a pointer to the first unit.
    ///
    /// The buffer stays borrowed until `f` returns. `f` must not let the
    /// pointer escape.
    pub fn with_ptr<R, F>(&self, f: F) -> R
    where
        F: FnOnce(*const T) -> R,
    {
        let pinned = self.pin();
        f(pinned.as_ptr())
    }

    /// Runs `f` with a mutable pointer to the first unit and the number of
    /// units that may be written through it.
    ///
    /// This is the usual way to let a C function fill a
    /// [`with_len`](Self::with_len) buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use cstrbuf::CStrBuf;
    ///
    /// let mut buf = CStrBuf::<u8>::with_len(4);
    /// buf.with_mut_ptr(|ptr, cap| unsafe {
    ///     // stand-in for a foreign writer such as snprintf
    ///     std::ptr::copy_nonoverlapping(b"ok\0".as_ptr(), ptr, 3.min(cap));
    /// });
    /// assert_eq!(buf.to_str(), Ok("ok"));
    /// ```
    pub fn with_mut_ptr<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(*mut T, usize) -> R,
    {
        let len = self.len();
        f(self.as_mut_ptr(), len)
    }
}
