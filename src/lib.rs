//! cstrbuf
//!
//! Owned, null-terminated byte buffers for FFI.
//!
//! A [`CStrBuf`] stores a string in exactly the layout C expects: the bytes
//! followed by a single `0`. Rust owns and frees the memory, so the same
//! buffer can be read back as a `&str` and handed to a C function as a
//! `const char *` without any copy or marshaling step.
//!
//! The crate intentionally:
//! - does NOT concatenate, slice or format strings
//! - does NOT free memory owned by foreign code
//! - does NOT handle wide or multi-unit encodings
//!
//! Units are single bytes, signed or unsigned ([`Unit`] is implemented for
//! `u8` and `i8`, so `CStrBuf<c_char>` works on every target).
//!
//! # Building
//!
//! ```
//! use cstrbuf::{CStrBuf, CStrBufError};
//!
//! // Checked: embedded nulls are reported
//! let buf = CStrBuf::<u8>::try_new("hello")?;
//! assert_eq!(buf.to_str()?, "hello");
//! assert!(CStrBuf::<u8>::try_new("a\0b").is_err());
//!
//! // Raw: scratch space for a foreign writer, terminator included
//! let scratch = CStrBuf::<i8>::with_len(64);
//! assert_eq!(scratch.len(), 64);
//! # Ok::<(), CStrBufError>(())
//! ```
//!
//! # Passing to C
//!
//! ```
//! use std::ffi::{c_char, CStr};
//! use cstrbuf::CStrBuf;
//!
//! # unsafe extern "C" fn puts(s: *const c_char) -> usize {
//! #     unsafe { CStr::from_ptr(s) }.to_bytes().len()
//! # }
//! let greeting = CStrBuf::<c_char>::new("hello, world");
//!
//! // The buffer stays borrowed, and therefore alive, for the whole call.
//! let written = greeting.with_ptr(|ptr| unsafe { puts(ptr) });
//! assert_eq!(written, 12);
//! ```
//!
//! # Safety contract
//!
//! A raw pointer outlives the borrow checker's view of it. The storage is
//! guaranteed to stay allocated and unmoved only while the buffer is
//! borrowed; use [`CStrBuf::pin`] or [`CStrBuf::with_ptr`] to make that
//! scope explicit around foreign calls.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

mod buffer;
mod error;
mod unit;
mod util; // internal terminator search

pub mod foreign;

//
// Public surface
//

pub use buffer::{CStrBuf, Pinned};
pub use error::CStrBufError;
pub use unit::Unit;
