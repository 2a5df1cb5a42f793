use core::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuaternionError
{
    /// A sequence was used as a quaternion but did not hold exactly 4 elements.
    InvalidArgument { found: usize },
}

impl Error for QuaternionError {}

impl fmt::Display for QuaternionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument { found } => write!(
                f,
                "Expecting an array of 4 elements or another quaternion, got {} elements",
                found
            ),
        }
    }
}
