//! Multiplication of digit sequences.

use crate::defs::Digit;
use crate::defs::DoubleDigit;

/// Multiplies `src` by a single digit into `dst`.
///
/// `dst` must be one digit longer than `src`; the final carry is stored in
/// `dst[0]`, one position further left than any input digit. A zero digit
/// zero-fills the destination and a unit digit copies the source over, so
/// neither produces spurious carries.
pub fn mul_by_digit(src: &[Digit], f: Digit, dst: &mut [Digit], radix: Digit) {
    debug_assert_eq!(dst.len(), src.len() + 1);
    if f == 0 {
        dst.fill(0);
    } else if f == 1 {
        dst[0] = 0;
        dst[1..].copy_from_slice(src);
    } else {
        let rdx = radix as DoubleDigit;
        let mut carry: DoubleDigit = 0;
        for (a, b) in src.iter().rev().zip(dst.iter_mut().rev()) {
            let val = *a as DoubleDigit * f as DoubleDigit + carry;
            *b = (val % rdx) as Digit;
            carry = val / rdx;
        }
        dst[0] = carry as Digit;
    }
}

/// Schoolbook multiplication of two digit sequences.
///
/// `m3` must be `m1.len() + m2.len()` digits long and is fully overwritten.
pub fn mul_basic(m1: &[Digit], m2: &[Digit], m3: &mut [Digit], radix: Digit) {
    debug_assert_eq!(m3.len(), m1.len() + m2.len());
    let rdx = radix as DoubleDigit;
    let l2 = m2.len();

    m3.fill(0);

    // rows run from the least significant digit of m1 so that the carry
    // slot m3[i] of every row is still untouched when the row completes
    for (i, d1) in m1.iter().enumerate().rev() {
        let d1 = *d1 as DoubleDigit;
        if d1 == 0 {
            continue;
        }

        let mut carry: DoubleDigit = 0;
        for (d2, acc) in m2.iter().rev().zip(m3[i + 1..=i + l2].iter_mut().rev()) {
            let val = d1 * *d2 as DoubleDigit + *acc as DoubleDigit + carry;
            *acc = (val % rdx) as Digit;
            carry = val / rdx;
        }
        m3[i] = carry as Digit;
    }
}
