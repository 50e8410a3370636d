//! Fixed-point long division.
//!
//! An implementation of Knuth's Algorithm D adapted to fixed-point operands
//! in an arbitrary radix. Both operands are copied into working buffers
//! padded with guard digits and scaled so that the leading digit of the
//! divisor is at least half the radix; the trial digit taken from the top
//! two dividend digits then overshoots by at most two, and a three-digit
//! refinement leaves it at most one too large. The remaining overshoot is
//! detected by the borrow of the multiply-and-subtract step and repaired by
//! adding the divisor back once.

use crate::defs::Digit;
use crate::defs::DoubleDigit;
use crate::defs::Error;
use crate::digits::buf::DigitBuf;
use crate::digits::mul::mul_by_digit;
use crate::digits::util::add_range;
use crate::digits::util::scale_in_place;
use crate::digits::util::sub_range;

/// Divides `num` by `den`, producing the quotient digits and the number of
/// integer-part digits among them.
///
/// `num_ip` and `den_ip` give how many leading digits of each operand
/// belong to the integer part. `scale` is the number of fractional digits
/// to produce; the quotient is truncated, not rounded. The produced digit
/// sequence is not canonicalized: leading zero digits are left for the
/// caller to strip.
///
/// ## Errors
///
///  - DivisionByZero: `den` has the value of zero.
///  - MemoryAllocation: failed to allocate the working buffers.
pub(crate) fn div_fixed(
    num: &[Digit],
    num_ip: usize,
    den: &[Digit],
    den_ip: usize,
    radix: Digit,
    scale: usize,
) -> Result<(DigitBuf, usize), Error> {
    if den.iter().all(|d| *d == 0) {
        return Err(Error::DivisionByZero);
    }

    let num_fp = num.len() - num_ip;
    let den_fp = den.len() - den_ip;

    // where, in digit positions, the quotient digits begin
    let int_width = num_ip + den_fp;

    let frac_delta = num_fp as isize - den_fp as isize;
    let offset = if frac_delta < scale as isize {
        (scale as isize - frac_delta) as usize
    } else {
        0
    };

    // working copies; u gets one leading guard slot, and both get room for
    // the scale extension and for the trial digits read past the
    // subtraction window
    let mut u = DigitBuf::new(num.len() + offset + 3)?;
    u[1..=num.len()].copy_from_slice(num);
    let mut v = DigitBuf::new(den.len() + offset + 3)?;
    v[..den.len()].copy_from_slice(den);

    // leading zero digits of the divisor take no part in the division;
    // trailing digits are kept as they are, zero or not, and count toward
    // the divisor width
    let mut vs = 0;
    let mut divisor_width = den.len();
    while v[vs] == 0 {
        vs += 1;
        divisor_width -= 1;
    }

    let mut produced = scale + 1;
    if divisor_width > int_width + scale {
        // the first nonzero quotient digit lies beyond the requested scale;
        // the loop bound below would be negative in this regime
        log::trace!("quotient is zero at scale {}", scale);
        let q = DigitBuf::new(produced)?;
        return Ok((q, produced - scale));
    }
    if divisor_width <= int_width {
        produced = int_width - divisor_width + scale + 1;
    }
    let q_ip = produced - scale;
    let mut q = DigitBuf::new(produced)?;
    let mut temp = DigitBuf::new(divisor_width + 1)?;

    // D1: scale both operands so that the leading digit of the divisor is
    // at least half the radix; this bounds the trial digit overshoot
    let norm = radix / (v[vs] + 1);
    if norm != 1 {
        let carry = scale_in_place(&mut u[..num.len() + offset + 1], norm, radix);
        debug_assert_eq!(carry, 0);
        let carry = scale_in_place(&mut v[vs..vs + divisor_width], norm, radix);
        debug_assert_eq!(carry, 0);
    }
    log::trace!(
        "dividing {}+{} digits by {} digits, scale {}, norm {}",
        num_ip,
        num_fp,
        divisor_width,
        scale,
        norm
    );

    let rdx = radix as DoubleDigit;
    let v0 = v[vs] as DoubleDigit;
    let v1 = v[vs + 1] as DoubleDigit;

    let mut j = if divisor_width > int_width {
        divisor_width - int_width
    } else {
        0
    };

    for i in 0..=int_width + scale - divisor_width {
        // D3: trial digit from the top two dividend digits; on equal
        // leading digits the estimate would overflow, and the largest
        // possible digit is taken instead
        let u2 = u[i] as DoubleDigit * rdx + u[i + 1] as DoubleDigit;
        let mut qg = if u[i] as DoubleDigit == v0 {
            rdx - 1
        } else {
            u2 / v0
        };

        // refine against the second divisor digit and the third dividend
        // digit; after normalization two decrements suffice
        if v1 * qg > (u2 - v0 * qg) * rdx + u[i + 2] as DoubleDigit {
            qg -= 1;
            if v1 * qg > (u2 - v0 * qg) * rdx + u[i + 2] as DoubleDigit {
                qg -= 1;
            }
        }

        // D4: multiply and subtract
        if qg != 0 {
            mul_by_digit(&v[vs..vs + divisor_width], qg as Digit, &mut temp, radix);
            if sub_range(&mut u[i..=i + divisor_width], &temp, radix) != 0 {
                // D6: the trial digit was still one too large; the carry
                // out of the add-back cancels the borrow and must not
                // propagate past the window
                qg -= 1;
                log::debug!("add-back at output position {}", j);
                if add_range(
                    &mut u[i + 1..=i + divisor_width],
                    &v[vs..vs + divisor_width],
                    radix,
                ) != 0
                {
                    u[0] = 0;
                }
            }
        }

        q[j] = qg as Digit;
        j += 1;
    }

    Ok((q, q_ip))
}
