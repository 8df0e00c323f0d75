use thiserror::Error;

/// Unified error type for version-track operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionTrackError {
    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Convenience type alias for Results in version-track
pub type Result<T> = std::result::Result<T, VersionTrackError>;

impl VersionTrackError {
    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        VersionTrackError::Parse(msg.into())
    }

    /// Create an out-of-bounds error for a positional list operation
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        VersionTrackError::IndexOutOfBounds { index, len }
    }
}
