use std::io;
use thiserror::Error;

/// Enumeration of all fatal errors that can stop an extraction run
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Malformed invocation (missing input, unknown flag, bad track number)
    #[error("usage: {0}")]
    Usage(String),
    /// No qualifying cue track, or the requested track is not one
    #[error("{0}")]
    TrackNotFound(String),
    /// The container could not be opened or parsed
    #[error("mp4: {0}")]
    ContainerRead(#[from] Mp4Error),
    /// Writing the rendered cues failed
    #[error("output: {0}")]
    Output(#[from] io::Error),
}

impl ExtractError {
    /// Create a track-not-found error with the given message.
    pub fn track_not_found(message: impl Into<String>) -> Self {
        ExtractError::TrackNotFound(message.into())
    }

    /// Process exit code for this error: 1 for usage errors, 2 for anything
    /// that happened after the invocation was accepted.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExtractError::Usage(_) => 1,
            ExtractError::TrackNotFound(_)
            | ExtractError::ContainerRead(_)
            | ExtractError::Output(_) => 2,
        }
    }
}

/// MP4 format specific errors
#[derive(Debug, Error)]
pub enum Mp4Error {
    /// Generic MP4 error with a descriptive message
    #[error("{message}")]
    Error { message: String },
    /// Reading the underlying file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Mp4Error {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Mp4Error::Error {
            message: message.into(),
        }
    }
}

// Type alias for Result with ExtractError
pub type ExtractResult<T> = Result<T, ExtractError>;

// Type alias for Result with Mp4Error
pub type Mp4Result<T> = Result<T, Mp4Error>;
