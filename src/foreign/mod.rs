//! Walking null-terminated strings through raw pointers.
//!
//! These read memory that the type system cannot track: a pointer from
//! [`CStrBuf::as_ptr`](crate::CStrBuf::as_ptr), or a string a C library
//! returned. Each function scans forward until the first `0` unit.

use std::slice;

use crate::unit::Unit;

/// Counts the units before the first `0`, like C's `strlen`.
///
/// # Safety
///
/// `ptr` must point to a run of readable units that contains a `0`, and
/// that memory must not be written for the duration of the call.
///
/// # Panics
///
/// Panics if `ptr` is null.
pub unsafe fn strlen<T: Unit>(ptr: *const T) -> usize {
    assert!(!ptr.is_null(), "strlen called with a null pointer");

    let mut len = 0;
    // SAFETY: the caller guarantees every unit up to and including the
    // terminator is readable, and the loop stops at the terminator.
    while !unsafe { *ptr.add(len) }.is_nul() {
        len += 1;
    }
    len
}

/// Borrows the units before the first `0` as bytes.
///
/// # Safety
///
/// Same contract as [`strlen`], and the memory must stay valid and
/// unmodified for `'a`.
///
/// # Panics
///
/// Panics if `ptr` is null.
pub unsafe fn bytes_until_nul<'a, T: Unit>(ptr: *const T) -> &'a [u8] {
    // SAFETY: forwarded to the caller.
    let len = unsafe { strlen(ptr) };
    // SAFETY: `len` units were just read through `ptr`; units are one byte
    // wide with alignment 1.
    unsafe { slice::from_raw_parts(ptr.cast::<u8>(), len) }
}

/// Returns `true` if the string at `ptr` is exactly `s`.
///
/// A string holding a `0` byte never compares equal, since the foreign
/// side stops reading there.
///
/// # Safety
///
/// Same contract as [`strlen`].
///
/// # Example
///
/// ```
/// use cstrbuf::{foreign, CStrBuf};
///
/// let buf = CStrBuf::<i8>::new("hello");
/// assert!(buf.with_ptr(|ptr| unsafe { foreign::eq_str(ptr, "hello") }));
/// ```
pub unsafe fn eq_str<T: Unit>(ptr: *const T, s: &str) -> bool {
    // SAFETY: forwarded to the caller.
    let run = unsafe { bytes_until_nul(ptr) };
    run == s.as_bytes()
}
