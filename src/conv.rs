//! Conversion of numbers to and from their string representation.

use crate::defs::Digit;
use crate::defs::Error;
use crate::defs::Sign;
use crate::defs::RADIX_MIN;
use crate::num::BigFixedNumber;

// largest radix a string of the digits 0-9, a-z can represent
const STR_RADIX_MAX: Digit = 36;

impl BigFixedNumber {

    /// Parses a number from its representation in the given radix.
    ///
    /// The accepted form is an optional sign followed by radix digits with
    /// at most one point: `[+|-] digits [ . digits ]`. Letters `a` - `z`,
    /// in either case, stand for the digit values above nine. String
    /// conversion supports radixes up to 36; a point with no digits around
    /// it is rejected.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the radix is outside `2..=36`, a character is
    ///    not a digit of the radix, the point appears twice, or the string
    ///    contains no digits.
    ///  - MemoryAllocation: failed to allocate memory for the digits.
    pub fn parse(s: &str, radix: Digit) -> Result<Self, Error> {
        if !(RADIX_MIN..=STR_RADIX_MAX).contains(&radix) {
            return Err(Error::InvalidArgument);
        }

        let mut rest = s;
        let mut sign = Sign::Pos;
        if let Some(tail) = s.strip_prefix('-') {
            sign = Sign::Neg;
            rest = tail;
        } else if let Some(tail) = s.strip_prefix('+') {
            rest = tail;
        }

        let mut digits: Vec<Digit> = Vec::with_capacity(rest.len());
        let mut point = None;
        for c in rest.chars() {
            if c == '.' {
                if point.is_some() {
                    return Err(Error::InvalidArgument);
                }
                point = Some(digits.len());
            } else {
                let d = c.to_digit(radix).ok_or(Error::InvalidArgument)?;
                digits.push(d);
            }
        }
        if digits.is_empty() {
            return Err(Error::InvalidArgument);
        }

        let ip = point.unwrap_or(digits.len());
        Self::from_raw_parts(sign, &digits, ip)
    }

    /// Formats the number in the given radix, using the letters `a` - `z`
    /// for the digit values above nine. A point and the fractional digits
    /// are printed only when the number has a fractional part.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the radix is outside `2..=36`, or the number
    ///    holds a digit the radix cannot represent.
    pub fn format(&self, radix: Digit) -> Result<String, Error> {
        if !(RADIX_MIN..=STR_RADIX_MAX).contains(&radix) {
            return Err(Error::InvalidArgument);
        }

        let mut ret = String::with_capacity(self.len() + 2);
        if self.sign() == Sign::Neg {
            ret.push('-');
        }
        for (i, d) in self.digits().iter().enumerate() {
            if i == self.int_len() {
                ret.push('.');
            }
            let c = char::from_digit(*d, radix).ok_or(Error::InvalidArgument)?;
            ret.push(c);
        }
        Ok(ret)
    }
}
