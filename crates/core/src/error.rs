// Central Error Type for the Probe

use thiserror::Error;

/// Probe-level error type
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Clock reading out of range: {0} ms since epoch")]
    ClockOutOfRange(i64),

    #[error("Runtime version identifier is empty")]
    EmptyVersion,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// True when the reader of our output went away (closed pipe)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ProbeError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;
