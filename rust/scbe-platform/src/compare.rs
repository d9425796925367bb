//! Constant-time byte comparison.
//!
//! Used anywhere a secret-derived value (signature, bound key, MAC) is
//! checked against an expected value, so branch timing can't leak which
//! byte first differed.

use subtle::ConstantTimeEq;

/// Returns true iff `a` and `b` are byte-equal. Different lengths are
/// rejected before the constant-time comparison (length is not secret).
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_slices_compare_true() {
        assert!(constant_time_eq(b"abc", b"abc"));
    }

    #[test]
    fn differing_slices_compare_false() {
        assert!(!constant_time_eq(b"abc", b"abd"));
    }

    #[test]
    fn differing_lengths_compare_false() {
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(!constant_time_eq(b"", b"a"));
    }

    #[test]
    fn empty_slices_compare_true() {
        assert!(constant_time_eq(b"", b""));
    }
}
