use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// Missing NUL terminator error.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct MissingNulError;

impl Display for MissingNulError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "no nul terminator in buffer")
    }
}

impl Error for MissingNulError {}
