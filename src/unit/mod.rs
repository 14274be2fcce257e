//! Single-byte unit types.
//!
//! C's `char` is signed on some targets and unsigned on others, so buffers
//! are generic over the unit. [`Unit`] is implemented for `u8` and `i8`,
//! which covers [`core::ffi::c_char`] everywhere.

use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for i8 {}
}

/// An 8-bit element of a null-terminated string.
///
/// Conversions to and from `u8` keep the bit pattern: `0xE2` stored as an
/// `i8` unit is `-30`, and reads back as `0xE2`.
///
/// This trait is sealed.
pub trait Unit: sealed::Sealed + Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The terminator value.
    const NUL: Self;

    /// Converts a raw byte into a unit.
    fn from_byte(byte: u8) -> Self;

    /// Converts the unit back into its raw byte.
    fn to_byte(self) -> u8;

    /// Returns `true` if this unit is the terminator.
    #[inline]
    fn is_nul(self) -> bool {
        self == Self::NUL
    }
}

impl Unit for u8 {
    const NUL: Self = 0;

    #[inline]
    fn from_byte(byte: u8) -> Self {
        byte
    }

    #[inline]
    fn to_byte(self) -> u8 {
        self
    }
}

impl Unit for i8 {
    const NUL: Self = 0;

    #[inline]
    fn from_byte(byte: u8) -> Self {
        byte as i8
    }

    #[inline]
    fn to_byte(self) -> u8 {
        self as u8
    }
}

/// Views a unit slice as raw bytes.
#[inline]
pub(crate) fn as_bytes<T: Unit>(units: &[T]) -> &[u8] {
    // SAFETY: `Unit` is sealed to `u8` and `i8`, both one byte wide with
    // alignment 1 and no invalid bit patterns.
    unsafe { std::slice::from_raw_parts(units.as_ptr().cast::<u8>(), units.len()) }
}

/// Views a mutable unit slice as raw bytes.
#[inline]
pub(crate) fn as_bytes_mut<T: Unit>(units: &mut [T]) -> &mut [u8] {
    // SAFETY: same layout argument as `as_bytes`; the exclusive borrow is
    // carried over to the returned slice.
    unsafe { std::slice::from_raw_parts_mut(units.as_mut_ptr().cast::<u8>(), units.len()) }
}
