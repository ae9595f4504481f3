use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or storing a word pool.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The pool file does not exist.
    #[error("word file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The pool file is not valid JSON or does not have the expected shape.
    #[error("invalid word file {}: {reason}", path.display())]
    Format {
        /// The offending file, or `<memory>` for in-memory input.
        path: PathBuf,
        /// What was wrong with the document.
        reason: String,
    },

    /// Any other I/O failure while reading or writing.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
