//! BigFixedNumber definition, and basic arithmetic, comparison, and number
//! manipulation operations.

use crate::defs::check_radix;
use crate::defs::Digit;
use crate::defs::Error;
use crate::defs::Sign;
use crate::digits::div_fixed;
use crate::digits::mul_basic;
use crate::digits::DigitBuf;
use crate::digits::LsdDigits;
use core::cmp::Ordering;
use itertools::izip;

/// An arbitrary-precision fixed-point number: a sequence of digits in some
/// radix, most significant digit first, a count of integer-part digits, and
/// a sign.
///
/// A number does not carry its radix. Arithmetic operations take the radix
/// as a parameter, and keeping it consistent between construction and use
/// is the caller's responsibility.
///
/// The canonical form keeps at least one integer digit and no further
/// leading zero digits in the integer part. Fractional digits are never
/// removed by any operation: trailing zeroes preserve the scale a value was
/// computed at.
#[derive(Debug, Clone)]
pub struct BigFixedNumber {
    s: Sign,
    ip: usize,    // number of integer-part digits
    m: DigitBuf,  // digits, most significant first
}

impl BigFixedNumber {

    /// Returns a new number with the value of zero.
    pub fn zero() -> Result<Self, Error> {
        Ok(BigFixedNumber {
            s: Sign::Pos,
            ip: 1,
            m: DigitBuf::new(1)?,
        })
    }

    /// Builds a number from `digits`, of which the first `ip` form the
    /// integer part, validating every digit against `radix`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `digits` is empty, `ip` exceeds its length, the
    ///    radix is out of range, or a digit is not below the radix.
    ///  - MemoryAllocation: failed to allocate memory for the digits.
    pub fn from_digits(s: Sign, digits: &[Digit], ip: usize, radix: Digit) -> Result<Self, Error> {
        check_radix(radix)?;
        if digits.iter().any(|d| *d >= radix) {
            return Err(Error::InvalidArgument);
        }
        Self::from_raw_parts(s, digits, ip)
    }

    /// Builds a number from raw parts. The digit values are not validated
    /// against any radix.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `digits` is empty or `ip` exceeds its length.
    ///  - MemoryAllocation: failed to allocate memory for the digits.
    pub fn from_raw_parts(s: Sign, digits: &[Digit], ip: usize) -> Result<Self, Error> {
        if digits.is_empty() || ip > digits.len() {
            return Err(Error::InvalidArgument);
        }
        let (m, ip) = if ip == 0 {
            // give the integer part its zero digit
            let mut m = DigitBuf::new(digits.len() + 1)?;
            m[1..].copy_from_slice(digits);
            (m, 1)
        } else {
            (DigitBuf::from_digits(digits)?, ip)
        };
        let mut ret = BigFixedNumber { s, ip, m };
        ret.strip_leading_zeros();
        Ok(ret)
    }

    /// Returns the sign, the digit sequence, and the integer-part length.
    pub fn to_raw_parts(&self) -> (Sign, &[Digit], usize) {
        (self.s, &self.m, self.ip)
    }

    /// Sign of the number.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Number of integer-part digits.
    #[inline]
    pub fn int_len(&self) -> usize {
        self.ip
    }

    /// Number of fractional digits.
    #[inline]
    pub fn frac_len(&self) -> usize {
        self.m.len() - self.ip
    }

    /// Total number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.m.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    /// The digit sequence, most significant digit first.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.m
    }

    /// Returns true if the number has the value of zero.
    pub fn is_zero(&self) -> bool {
        self.m.iter().all(|d| *d == 0)
    }

    /// Returns the number with the opposite sign.
    pub fn neg(&self) -> Self {
        let mut ret = self.clone();
        if !ret.is_zero() {
            ret.s = ret.s.invert();
        }
        ret
    }

    /// Removes the leading zero digits of the integer part, keeping at
    /// least one integer digit. Fractional digits are left untouched. A
    /// number with the value of zero is given a positive sign.
    pub fn strip_leading_zeros(&mut self) {
        let mut n = 0;
        while self.ip - n > 1 && self.m[n] == 0 {
            n += 1;
        }
        if n > 0 {
            self.m.remove_leading(n);
            self.ip -= n;
        }
        if self.s == Sign::Neg && self.is_zero() {
            self.s = Sign::Pos;
        }
    }

    // digit at the position `pos`: position 0 is the least significant
    // integer digit, positive positions go left, negative go right
    fn digit_at(&self, pos: isize) -> Digit {
        let idx = self.ip as isize - 1 - pos;
        if idx >= 0 && (idx as usize) < self.m.len() {
            self.m[idx as usize]
        } else {
            0
        }
    }

    /// Compares the absolute values of `self` and `d2`.
    pub fn cmp_abs(&self, d2: &Self) -> Ordering {
        let top = self.ip.max(d2.ip) as isize;
        let bottom = -(self.frac_len().max(d2.frac_len()) as isize);
        for pos in (bottom..top).rev() {
            let a = self.digit_at(pos);
            let b = d2.digit_at(pos);
            if a != b {
                return a.cmp(&b);
            }
        }
        Ordering::Equal
    }

    /// Compares `self` and `d2`.
    pub fn cmp(&self, d2: &Self) -> Ordering {
        if self.s != d2.s {
            if self.is_zero() && d2.is_zero() {
                return Ordering::Equal;
            }
            return if self.s == Sign::Pos {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        let ret = self.cmp_abs(d2);
        if self.s == Sign::Pos {
            ret
        } else {
            ret.reverse()
        }
    }

    /// Adds `d2` to `self`.
    pub fn add(&self, d2: &Self, radix: Digit) -> Result<Self, Error> {
        check_radix(radix)?;
        self.add_signed(d2, d2.s, radix)
    }

    /// Subtracts `d2` from `self`.
    pub fn sub(&self, d2: &Self, radix: Digit) -> Result<Self, Error> {
        check_radix(radix)?;
        self.add_signed(d2, d2.s.invert(), radix)
    }

    // sign resolution at the whole-number level: equal signs combine the
    // magnitudes, differing signs subtract the smaller magnitude from the
    // larger one, which keeps its sign
    fn add_signed(&self, d2: &Self, s2: Sign, radix: Digit) -> Result<Self, Error> {
        let mut ret = if self.s == s2 {
            let mut r = Self::abs_add(self, d2, radix)?;
            r.s = self.s;
            r
        } else if self.cmp_abs(d2) == Ordering::Less {
            let mut r = Self::abs_sub(d2, self, radix)?;
            r.s = s2;
            r
        } else {
            let mut r = Self::abs_sub(self, d2, radix)?;
            r.s = self.s;
            r
        };
        ret.strip_leading_zeros();
        Ok(ret)
    }

    // |self| + |d2|, operands aligned at the point
    fn abs_add(d1: &Self, d2: &Self, radix: Digit) -> Result<Self, Error> {
        let fp = d1.frac_len().max(d2.frac_len());
        let ip = d1.ip.max(d2.ip) + 1;
        let mut m = DigitBuf::new(ip + fp)?;
        let i1 = LsdDigits::new(&d1.m, fp - d1.frac_len());
        let i2 = LsdDigits::new(&d2.m, fp - d2.frac_len());
        let mut carry = 0;
        for (r, a, b) in izip!(m.iter_mut().rev(), i1, i2) {
            let mut val = a + b + carry;
            if val >= radix {
                val -= radix;
                carry = 1;
            } else {
                carry = 0;
            }
            *r = val;
        }
        debug_assert_eq!(carry, 0);
        Ok(BigFixedNumber {
            s: Sign::Pos,
            ip,
            m,
        })
    }

    // |self| - |d2|, requires |self| >= |d2|
    fn abs_sub(d1: &Self, d2: &Self, radix: Digit) -> Result<Self, Error> {
        let fp = d1.frac_len().max(d2.frac_len());
        let ip = d1.ip.max(d2.ip);
        let mut m = DigitBuf::new(ip + fp)?;
        let i1 = LsdDigits::new(&d1.m, fp - d1.frac_len());
        let i2 = LsdDigits::new(&d2.m, fp - d2.frac_len());
        let mut borrow = 0;
        for (r, a, b) in izip!(m.iter_mut().rev(), i1, i2) {
            let vd = b + borrow;
            if a < vd {
                *r = a + radix - vd;
                borrow = 1;
            } else {
                *r = a - vd;
                borrow = 0;
            }
        }
        debug_assert_eq!(borrow, 0);
        Ok(BigFixedNumber {
            s: Sign::Pos,
            ip,
            m,
        })
    }

    /// Multiplies `self` by `d2`. The fractional length of the product is
    /// the sum of the fractional lengths of the operands.
    pub fn mul(&self, d2: &Self, radix: Digit) -> Result<Self, Error> {
        check_radix(radix)?;
        let mut m = DigitBuf::new(self.m.len() + d2.m.len())?;
        mul_basic(&self.m, &d2.m, &mut m, radix);
        let mut ret = BigFixedNumber {
            s: Sign::product(self.s, d2.s),
            ip: self.ip + d2.ip,
            m,
        };
        ret.strip_leading_zeros();
        Ok(ret)
    }

    /// Divides `self` by `d2`, producing `scale` fractional digits. The
    /// quotient is truncated toward zero.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` has the value of zero.
    ///  - InvalidArgument: the radix is out of range.
    ///  - MemoryAllocation: failed to allocate the working buffers.
    pub fn div(&self, d2: &Self, radix: Digit, scale: usize) -> Result<Self, Error> {
        check_radix(radix)?;
        let (m, ip) = div_fixed(&self.m, self.ip, &d2.m, d2.ip, radix, scale)?;
        let mut ret = BigFixedNumber {
            s: Sign::product(self.s, d2.s),
            ip,
            m,
        };
        ret.strip_leading_zeros();
        Ok(ret)
    }

    /// Remainder of the division of `self` by `d2` at the given scale,
    /// computed as `self - d2*(self / d2)`. With a scale of zero this is
    /// the classic integer remainder, carrying the sign of the dividend.
    pub fn rem(&self, d2: &Self, radix: Digit, scale: usize) -> Result<Self, Error> {
        let q = self.div(d2, radix, scale)?;
        let p = q.mul(d2, radix)?;
        self.sub(&p, radix)
    }
}

#[cfg(feature = "random")]
impl BigFixedNumber {

    /// Generates a random number with up to `max_ip` integer and up to
    /// `max_fp` fractional digits. Intended for differential testing
    /// against a reference implementation.
    pub fn random(max_ip: usize, max_fp: usize, radix: Digit) -> Result<Self, Error> {
        check_radix(radix)?;
        let ip = 1 + rand::random::<usize>() % max_ip.max(1);
        let fp = rand::random::<usize>() % (max_fp + 1);
        let mut m = DigitBuf::new(ip + fp)?;
        for d in m.iter_mut() {
            *d = rand::random::<Digit>() % radix;
        }
        let mut ret = BigFixedNumber {
            s: if rand::random::<bool>() {
                Sign::Pos
            } else {
                Sign::Neg
            },
            ip,
            m,
        };
        ret.strip_leading_zeros();
        Ok(ret)
    }
}
