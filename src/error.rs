use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("report i/o failed: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Index errors abort one test; anything else ends the session.
    pub const fn aborts_test_only(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }
}

/// Bounds check for reads and removals, `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Bounds check for insertions, `index <= len`.
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}
