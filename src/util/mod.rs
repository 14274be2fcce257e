//! Internal utility functions and helpers.
//!
//! It is an implementation detail and not part of the public API.

use crate::unit::Unit;

/// Returns the index of the first terminator in `units`, if any.
#[inline]
pub(crate) fn nul_position<T: Unit>(units: &[T]) -> Option<usize> {
    units.iter().position(|u| u.is_nul())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nul_position() {
        assert_eq!(nul_position(b"abc\0".as_slice()), Some(3));
        assert_eq!(nul_position(b"\0abc".as_slice()), Some(0));
        assert_eq!(nul_position(b"abc".as_slice()), None);
        assert_eq!(nul_position::<i8>(&[]), None);
    }
}
