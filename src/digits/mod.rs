//! Everything related to digit sequences.
//!
//! Digit sequences are kept with the most significant digit first. The
//! functions here are the low-level building blocks of the arithmetic
//! operations; they do not know about signs or the position of the point.

mod buf;
mod div;
mod mul;
mod util;

pub use buf::DigitBuf;
pub use mul::mul_basic;
pub use mul::mul_by_digit;
pub use util::add_range;
pub use util::scale_in_place;
pub use util::sub_range;

pub(crate) use div::div_fixed;
pub(crate) use util::LsdDigits;
