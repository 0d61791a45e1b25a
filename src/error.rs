//! Error types for the mdfront library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdfront operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the file and directory boundary.
///
/// The core transform itself never fails; it returns its input unchanged
/// whenever it cannot confidently convert a document. Errors only arise
/// when touching the filesystem.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The given directory does not exist.
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// The given path exists but is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The file content is not valid UTF-8.
    #[error("File is not valid UTF-8: {0}")]
    Decode(PathBuf),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DirectoryNotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "Directory not found: /missing");

        let err = Error::Decode(PathBuf::from("notes.md"));
        assert_eq!(err.to_string(), "File is not valid UTF-8: notes.md");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
