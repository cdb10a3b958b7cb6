use crate::view::ByteView;

impl ByteView<'_> {
    /// Leftmost offset of `byte` within the view, or `None` when absent.
    #[inline]
    pub fn index_of(&self, byte: u8) -> Option<usize> {
        memchr::memchr(byte, self.0)
    }

    /// Returns `true` if the view begins with `prefix`.
    ///
    /// A zero-length prefix always matches; a prefix longer than the view
    /// never does.
    #[inline]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.0.starts_with(prefix.as_ref())
    }

    /// Returns `true` if the view ends with `suffix`.
    #[inline]
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        self.0.ends_with(suffix.as_ref())
    }

    /// Byte-wise equality after ASCII case folding.
    ///
    /// `A`-`Z` compare equal to `a`-`z`; all other bytes compare as-is, so
    /// non-ASCII content is never folded.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, other: impl AsRef<[u8]>) -> bool {
        self.0.eq_ignore_ascii_case(other.as_ref())
    }
}
