//! The null-terminated buffer and its foreign-pointer views.
//!
//! - [`CStrBuf`] owns the storage and exposes the string, byte and pointer views
//! - [`Pinned`] keeps a buffer borrowed while foreign code holds its pointer

mod cstr_buf;
mod pinned;

pub use cstr_buf::CStrBuf;
pub use pinned::Pinned;
