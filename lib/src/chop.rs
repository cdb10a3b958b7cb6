use crate::view::ByteView;

impl<'a> ByteView<'a> {
    /// Removes and returns the bytes before the first occurrence of `delim`,
    /// rebinding `self` to the bytes after it. The delimiter itself is
    /// discarded.
    ///
    /// When `delim` does not occur, the entire view is returned and `self`
    /// becomes [`ByteView::empty`].
    ///
    /// ```
    /// use byteview::ByteView;
    ///
    /// let mut input = ByteView::from("hello\nworld");
    /// assert_eq!(input.chop_by_byte(b'\n'), "hello");
    /// assert_eq!(input, "world");
    /// ```
    #[inline]
    pub fn chop_by_byte(&mut self, delim: u8) -> ByteView<'a> {
        match memchr::memchr(delim, self.0) {
            Some(i) => {
                let chopped = ByteView(&self.0[..i]);
                self.0 = &self.0[i + 1..];
                chopped
            }
            None => {
                let chopped = *self;
                self.0 = &[];
                chopped
            }
        }
    }

    /// Removes and returns the bytes before the leftmost occurrence of the
    /// byte sequence `delim`, rebinding `self` to the bytes after it.
    ///
    /// Matching is literal, with no escaping. When `delim` does not occur,
    /// the entire view is returned and `self` becomes empty. An empty
    /// `delim` matches at offset zero, so nothing is consumed.
    #[inline]
    pub fn chop_by_slice(&mut self, delim: impl AsRef<[u8]>) -> ByteView<'a> {
        let delim = delim.as_ref();
        match memchr::memmem::find(self.0, delim) {
            Some(i) => {
                let chopped = ByteView(&self.0[..i]);
                self.0 = &self.0[i + delim.len()..];
                chopped
            }
            None => {
                let chopped = *self;
                self.0 = &[];
                chopped
            }
        }
    }

    /// Non-destructive variant of [`chop_by_byte`](Self::chop_by_byte).
    ///
    /// When `delim` occurs, behaves identically and returns the consumed
    /// prefix. When it does not, `self` is left unchanged and `None` is
    /// returned, so the view can be probed without draining it.
    #[inline]
    pub fn try_chop_by_byte(&mut self, delim: u8) -> Option<ByteView<'a>> {
        let i = memchr::memchr(delim, self.0)?;
        let chopped = ByteView(&self.0[..i]);
        self.0 = &self.0[i + 1..];
        Some(chopped)
    }

    /// Removes and returns the first `n` bytes, rebinding `self` to the
    /// rest. Requesting more than available clamps to the whole view.
    #[inline]
    pub fn chop_left(&mut self, n: usize) -> ByteView<'a> {
        let (chopped, rest) = self.0.split_at(n.min(self.0.len()));
        self.0 = rest;
        ByteView(chopped)
    }

    /// Removes and returns the last `n` bytes, rebinding `self` to the
    /// rest. Requesting more than available clamps to the whole view.
    #[inline]
    pub fn chop_right(&mut self, n: usize) -> ByteView<'a> {
        let (rest, chopped) = self.0.split_at(self.0.len() - n.min(self.0.len()));
        self.0 = rest;
        ByteView(chopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chop_by_byte_existing() {
        let mut input = ByteView::from("hello\nworld");
        let line = input.chop_by_byte(b'\n');
        assert_eq!(ByteView::from("hello"), line);
        assert_eq!(ByteView::from("world"), input);
    }

    #[test]
    fn chop_by_byte_non_existing() {
        let mut input = ByteView::from("hello\nworld");
        let line = input.chop_by_byte(b' ');
        assert_eq!(ByteView::from("hello\nworld"), line);
        assert_eq!(ByteView::empty(), input);
    }

    #[test]
    fn chop_by_byte_partitions_input() {
        let original = "one,two,three";
        let mut input = ByteView::from(original);
        let prefix = input.chop_by_byte(b',');
        let rebuilt = [prefix.as_bytes(), b",".as_slice(), input.as_bytes()].concat();
        assert_eq!(original.as_bytes(), rebuilt.as_slice());
    }

    #[test]
    fn chop_by_slice_existing() {
        let mut input = ByteView::from("hello\nworld\ngoodbye");
        let line = input.chop_by_slice("\nwor");
        assert_eq!(ByteView::from("hello"), line);
        assert_eq!(ByteView::from("ld\ngoodbye"), input);
    }

    #[test]
    fn chop_by_slice_non_existing() {
        let mut input = ByteView::from("hello\nworld");
        let line = input.chop_by_slice("goodbye");
        assert_eq!(ByteView::from("hello\nworld"), line);
        assert_eq!(ByteView::empty(), input);
    }

    #[test]
    fn chop_by_slice_empty_delim_consumes_nothing() {
        let mut input = ByteView::from("hello");
        assert_eq!(ByteView::empty(), input.chop_by_slice(""));
        assert_eq!(ByteView::from("hello"), input);
    }

    #[test]
    fn try_chop_by_byte_existing() {
        let mut input = ByteView::from("hello\nworld");
        let line = input.try_chop_by_byte(b'\n');
        assert_eq!(Some(ByteView::from("hello")), line);
        assert_eq!(ByteView::from("world"), input);
    }

    #[test]
    fn try_chop_by_byte_non_existing_leaves_input() {
        let mut input = ByteView::from("hello\nworld");
        let line = input.try_chop_by_byte(b' ');
        assert_eq!(None, line);
        assert_eq!(ByteView::from("hello\nworld"), input);
    }

    #[test]
    fn chop_left() {
        let mut input = ByteView::from("hello");
        let hell = input.chop_left(4);
        assert_eq!(ByteView::from("o"), input);
        assert_eq!(ByteView::from("hell"), hell);
    }

    #[test]
    fn overchop_left_clamps() {
        let mut input = ByteView::from("hello");
        let hell = input.chop_left(10);
        assert_eq!(ByteView::empty(), input);
        assert_eq!(ByteView::from("hello"), hell);
    }

    #[test]
    fn chop_right() {
        let mut input = ByteView::from("hello");
        let hell = input.chop_right(4);
        assert_eq!(ByteView::from("h"), input);
        assert_eq!(ByteView::from("ello"), hell);
    }

    #[test]
    fn overchop_right_clamps() {
        let mut input = ByteView::from("hello");
        let hell = input.chop_right(10);
        assert_eq!(ByteView::empty(), input);
        assert_eq!(ByteView::from("hello"), hell);
    }
}
