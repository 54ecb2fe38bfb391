use thiserror::Error;

#[derive(Debug, Error)]
pub enum Id3Error {
    #[error("index {index} out of range for length {len}")]
    Index { index: usize, len: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("format error: {0}")]
    Format(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parameters(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Id3Error>;

impl Id3Error {
    pub(crate) fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Id3Error::InvalidInput(msg.into())
    }

    pub(crate) fn format<S: Into<String>>(msg: S) -> Self {
        Id3Error::Format(msg.into())
    }
}

/// Bounds-checked lookup shared by every view implementation.
#[inline]
pub(crate) fn checked_get<T>(items: &[T], index: usize) -> Result<&T> {
    items.get(index).ok_or(Id3Error::Index {
        index,
        len: items.len(),
    })
}
