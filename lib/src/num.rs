use crate::view::ByteView;

impl<'a> ByteView<'a> {
    /// Parses consecutive leading ASCII decimal digits as an unsigned
    /// 64-bit integer without mutating the view.
    ///
    /// Scanning stops at the first non-digit byte or the end of the view.
    /// When no digits are consumed the result is `0`, indistinguishable
    /// from a parsed zero. Accumulation wraps on overflow, matching native
    /// unsigned 64-bit arithmetic.
    #[inline]
    pub fn leading_u64(&self) -> u64 {
        let mut result: u64 = 0;
        for &b in self.0 {
            if !b.is_ascii_digit() {
                break;
            }
            result = result.wrapping_mul(10).wrapping_add(u64::from(b - b'0'));
        }
        result
    }

    /// Parses leading ASCII decimal digits like
    /// [`leading_u64`](Self::leading_u64), additionally rebinding `self`
    /// past the consumed digits.
    #[inline]
    pub fn chop_leading_u64(&mut self) -> u64 {
        self.chop_while(|b| b.is_ascii_digit()).leading_u64()
    }
}
