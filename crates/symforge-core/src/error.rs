//! Error types for symbol generation

use thiserror::Error;

/// Result type for symbol-generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a header into an object file
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the input header
    #[error("failed to read header '{path}': {source}")]
    HeaderRead {
        /// Path of the header that was requested
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The compiler binary could not be started
    #[error("failed to launch compiler: {source}")]
    CompilerLaunch {
        /// Command line that was attempted
        command: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The compiler ran and reported failure
    #[error("compiler exited with status {status}")]
    CompilerFailed {
        /// The compiler's own exit status (-1 when killed by a signal)
        status: i32,
        /// Command line that was invoked
        command: String,
        /// Captured standard-error stream
        stderr: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
