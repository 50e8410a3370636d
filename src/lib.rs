//! Arbitrary-precision fixed-point numbers in a configurable radix,
//! implemented purely in Rust.
//!
//! A number is a sign, a sequence of digits with the most significant
//! digit first, and a decimal-point position. Addition, subtraction and
//! multiplication are exact; division produces a caller-specified number
//! of fractional digits (the scale) and truncates toward zero. The
//! division engine is Knuth's Algorithm D adapted to fixed-point operands.
//!
//! ``` rust
//! use radix_fixed::BigFixedNumber;
//!
//! let n = BigFixedNumber::parse("1000", 10).unwrap();
//! let d = BigFixedNumber::parse("3", 10).unwrap();
//!
//! let q = n.div(&d, 10, 4).unwrap();
//! assert_eq!(q.format(10).unwrap(), "333.3333");
//!
//! let r = n.rem(&d, 10, 0).unwrap();
//! assert_eq!(r.format(10).unwrap(), "1");
//! ```

#![deny(clippy::suspicious)]

mod conv;
mod defs;
mod num;

/// Low-level operations on raw digit sequences.
pub mod digits;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Digit;
pub use crate::defs::DoubleDigit;
pub use crate::defs::Error;
pub use crate::defs::Sign;
pub use crate::defs::RADIX_MAX;
pub use crate::defs::RADIX_MIN;
pub use crate::num::BigFixedNumber;

#[cfg(test)]
mod tests {

    use super::*;
    use core::cmp::Ordering;
    use rand::random;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn num(s: &str) -> BigFixedNumber {
        BigFixedNumber::parse(s, 10).unwrap()
    }

    // one unit in the last fractional digit at the given scale
    fn ulp(scale: usize) -> BigFixedNumber {
        let mut digits = vec![0; scale + 1];
        digits[scale] = 1;
        BigFixedNumber::from_digits(Sign::Pos, &digits, 1, 10).unwrap()
    }

    #[test]
    fn test_division_examples() {
        init_logging();

        let q = num("1000").div(&num("3"), 10, 4).unwrap();
        assert_eq!(q.digits(), [3, 3, 3, 3, 3, 3, 3]);
        assert_eq!(q.int_len(), 3);
        assert_eq!(q.frac_len(), 4);

        assert_eq!(
            num("7").div(&num("0"), 10, 2).unwrap_err(),
            Error::DivisionByZero
        );

        // the first nonzero quotient digit lies beyond the requested scale
        let q = num("0.01").div(&num("100"), 10, 1).unwrap();
        assert!(q.is_zero());
        assert_eq!(q.int_len(), 1);
        assert_eq!(q.frac_len(), 1);

        // one more fractional digit and the loop reaches it
        let q = num("0.01").div(&num("100"), 10, 4).unwrap();
        assert_eq!(q.format(10).unwrap(), "0.0001");
    }

    #[test]
    fn test_division_reconstruction() {
        init_logging();

        for _ in 0..500 {
            let n = BigFixedNumber::random(6, 6, 10).unwrap();
            let d = BigFixedNumber::random(4, 4, 10).unwrap();
            if d.is_zero() {
                continue;
            }
            let scale = random::<usize>() % 6;

            let q = n.div(&d, 10, scale).unwrap();
            let r = n.sub(&q.mul(&d, 10).unwrap(), 10).unwrap();

            // n = q*d + r with |r| below one unit in the last produced
            // quotient digit times the divisor
            let bound = d.mul(&ulp(scale), 10).unwrap();
            assert_eq!(r.cmp_abs(&bound), Ordering::Less);
            assert!(r.is_zero() || r.sign() == n.sign());
        }
    }

    #[test]
    fn test_normalization_invariance() {
        // the same ratio expressed with scaled operand pairs must come out
        // digit for digit identical, whatever scaling factor the engine
        // picks internally for each pair
        let expected = num("1000").div(&num("3"), 10, 4).unwrap();
        for (n, d) in [("2000", "6"), ("3000", "9"), ("8000", "24")] {
            let q = num(n).div(&num(d), 10, 4).unwrap();
            assert_eq!(q.digits(), expected.digits(), "{}/{}", n, d);
            assert_eq!(q.int_len(), expected.int_len());
        }
    }

    #[test]
    fn test_zero_dividend() {
        for d in ["1", "0.003", "99999", "-7.5"] {
            let q = num("0").div(&num(d), 10, 3).unwrap();
            assert!(q.is_zero());
            assert_eq!(q.sign(), Sign::Pos);
        }
    }

    #[test]
    fn test_scale_zero() {
        let q = num("17").div(&num("5"), 10, 0).unwrap();
        assert_eq!(q.format(10).unwrap(), "3");
        assert_eq!(q.frac_len(), 0);
    }

    #[test]
    fn test_other_radixes() {
        let n = BigFixedNumber::parse("ff", 16).unwrap();
        let d = BigFixedNumber::parse("3", 16).unwrap();
        let q = n.div(&d, 16, 2).unwrap();
        assert_eq!(q.format(16).unwrap(), "55.00");

        let n = BigFixedNumber::parse("1011", 2).unwrap();
        let d = BigFixedNumber::parse("11", 2).unwrap();
        let q = n.div(&d, 2, 4).unwrap();
        assert_eq!(q.format(2).unwrap(), "11.1010");
    }

    #[test]
    fn test_mixed_expression() {
        // (12.5 * 0.8 - 1) / 3 at scale 5
        let p = num("12.5").mul(&num("0.8"), 10).unwrap();
        let s = p.sub(&num("1"), 10).unwrap();
        let q = s.div(&num("3"), 10, 5).unwrap();
        assert_eq!(q.cmp(&num("3.00000")), Ordering::Equal);
    }
}
