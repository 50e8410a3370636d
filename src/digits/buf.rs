//! Buffer for holding the digits of a number.

use crate::defs::Digit;
use crate::defs::Error;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 10;

/// Buffer for holding the digits of a number, most significant digit first.
#[derive(Debug, Clone)]
pub struct DigitBuf {
    inner: SmallVec<[Digit; STATIC_ALLOCATION]>,
}

impl DigitBuf {
    /// New buffer of `sz` zero digits.
    pub fn new(sz: usize) -> Result<Self, Error> {
        let mut inner = SmallVec::new();
        inner
            .try_reserve_exact(sz)
            .map_err(Error::MemoryAllocation)?;
        inner.resize(sz, 0);
        Ok(DigitBuf { inner })
    }

    /// New buffer holding a copy of `digits`.
    pub fn from_digits(digits: &[Digit]) -> Result<Self, Error> {
        let mut buf = Self::new(digits.len())?;
        buf.inner.copy_from_slice(digits);
        Ok(buf)
    }

    #[inline]
    pub fn fill(&mut self, d: Digit) {
        self.inner.fill(d);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop the `n` most significant digits of the buffer.
    pub fn remove_leading(&mut self, n: usize) {
        let l = self.inner.len();
        let n = n.min(l);
        self.inner.rotate_left(n);
        self.inner.truncate(l - n);
    }
}

impl<I: SliceIndex<[Digit]>> IndexMut<I> for DigitBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Digit]>> Index<I> for DigitBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for DigitBuf {
    type Target = [Digit];

    #[inline]
    fn deref(&self) -> &[Digit] {
        self.inner.deref()
    }
}

impl DerefMut for DigitBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Digit] {
        self.inner.deref_mut()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_digit_buf() {
        let mut buf = DigitBuf::new(4).unwrap();
        assert_eq!(buf.len(), 4);
        assert_eq!(&buf[..], [0, 0, 0, 0]);

        buf.fill(7);
        buf[0] = 1;
        assert_eq!(&buf[..], [1, 7, 7, 7]);

        buf.remove_leading(2);
        assert_eq!(&buf[..], [7, 7]);

        buf.remove_leading(5);
        assert!(buf.is_empty());

        let buf = DigitBuf::from_digits(&[3, 1, 4]).unwrap();
        assert_eq!(&buf[..], [3, 1, 4]);
    }
}
