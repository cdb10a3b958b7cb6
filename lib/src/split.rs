use crate::view::ByteView;

impl<'a> ByteView<'a> {
    /// Returns an iterator over `delim`-separated segments of the view.
    ///
    /// The delimiter is not included in the segments. Consecutive
    /// delimiters yield empty segments, and an empty view yields a single
    /// empty segment, so joining the segments with `delim` reproduces the
    /// input.
    #[inline]
    pub fn split(&self, delim: u8) -> Split<'a> {
        Split {
            remainder: Some(*self),
            delim,
        }
    }

    /// Returns an iterator over the lines of the view.
    ///
    /// Lines are separated by `\n`; a trailing `\r` is stripped from each
    /// line, and a final trailing newline does not produce an empty line.
    #[inline]
    pub fn lines(&self) -> Lines<'a> {
        Lines { remainder: *self }
    }
}

/// Iterator over delimiter-separated segments of a [`ByteView`].
#[derive(Copy, Clone, Debug)]
pub struct Split<'a> {
    remainder: Option<ByteView<'a>>,
    delim: u8,
}

impl<'a> Iterator for Split<'a> {
    type Item = ByteView<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let mut rest = self.remainder?;
        match rest.try_chop_by_byte(self.delim) {
            Some(segment) => {
                self.remainder = Some(rest);
                Some(segment)
            }
            None => {
                self.remainder = None;
                Some(rest)
            }
        }
    }
}

/// Iterator over the lines of a [`ByteView`].
#[derive(Copy, Clone, Debug)]
pub struct Lines<'a> {
    remainder: ByteView<'a>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = ByteView<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remainder.is_empty() {
            return None;
        }
        let line = self.remainder.chop_by_byte(b'\n');
        Some(match line.as_bytes() {
            [rest @ .., b'\r'] => ByteView(rest),
            _ => line,
        })
    }
}
