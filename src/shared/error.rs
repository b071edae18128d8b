use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Code 2 is what clap uses for argument errors, so application
/// failures start at 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was produced (possibly empty)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, unreadable bundle, missing openssl, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for certificate discovery.
#[derive(Debug, Error)]
pub enum CertInventoryError {
    #[error("Failed to read certificate bundle: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    BundleReadError { path: PathBuf, details: String },

    #[error("Failed to list certificate directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have read permissions on the directory")]
    DirectoryReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to decode certificates from {path}\nDetails: {source}\n\n💡 Hint: Please verify that openssl is installed and the temporary directory is writable")]
    DecodeAborted {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Outcome of a single failed decode operation.
///
/// `TimedOut` and `Failed` only affect the block being decoded; `Spawn` and
/// `Io` mean the decode operation cannot run at all and abort the invocation.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("decode operation did not finish within {}s and was abandoned", .timeout.as_secs_f64())]
    TimedOut { timeout: Duration },

    #[error("decode operation exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("failed to start decode program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while staging certificate for decoding: {0}")]
    Io(#[from] io::Error),
}

impl DecodeError {
    /// Whether this error must abort the whole invocation instead of
    /// being absorbed into an empty result for one block.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DecodeError::Spawn { .. } | DecodeError::Io(_))
    }
}
