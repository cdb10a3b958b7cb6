use crate::view::ByteView;

/// ASCII space class: space, tab, newline, carriage return, form feed and
/// vertical tab.
#[inline]
pub(crate) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c' | b'\x0b')
}

impl<'a> ByteView<'a> {
    /// Returns a view with leading ASCII whitespace removed.
    ///
    /// The input view is unchanged; an all-whitespace view trims to
    /// [`ByteView::empty`].
    #[inline]
    pub fn trim_start(&self) -> ByteView<'a> {
        let mut s = self.0;
        while s.first().is_some_and(|b| is_space(*b)) {
            s = &s[1..];
        }
        ByteView(s)
    }

    /// Returns a view with trailing ASCII whitespace removed.
    #[inline]
    pub fn trim_end(&self) -> ByteView<'a> {
        let mut s = self.0;
        while s.last().is_some_and(|b| is_space(*b)) {
            s = &s[..s.len() - 1];
        }
        ByteView(s)
    }

    /// Returns a view with leading and trailing ASCII whitespace removed.
    #[inline]
    pub fn trim(&self) -> ByteView<'a> {
        self.trim_start().trim_end()
    }
}
