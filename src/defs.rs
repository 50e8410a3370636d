//! Definitions.

/// A single digit of a number. Digit values are in `[0, radix)`.
pub type Digit = u32;

/// Two digits wide unsigned type used in intermediate computations.
pub type DoubleDigit = u64;

/// Smallest supported radix.
pub const RADIX_MIN: Digit = 2;

/// Largest supported radix. The bound keeps the three-digit trial
/// computation of the division engine inside `DoubleDigit`.
pub const RADIX_MAX: Digit = 1 << 16;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Sign {
    Neg = -1,
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Sign of a product or quotient of values with signs `s1` and `s2`.
    pub fn product(s1: Self, s2: Self) -> Self {
        if s1 == s2 {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

use smallvec::CollectionAllocErr;

/// Possible errors.
#[derive(Debug)]
pub enum Error {
    /// Divisor is zero.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,

    /// Memory allocation error.
    MemoryAllocation(CollectionAllocErr),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MemoryAllocation(l0), Self::MemoryAllocation(r0)) => {
                core::mem::discriminant(l0) == core::mem::discriminant(r0)
            }
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Returns an error if `radix` is outside the supported range.
pub(crate) fn check_radix(radix: Digit) -> Result<(), Error> {
    if (RADIX_MIN..=RADIX_MAX).contains(&radix) {
        Ok(())
    } else {
        Err(Error::InvalidArgument)
    }
}
