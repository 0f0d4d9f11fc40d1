//! Error types for chunkdelta.

use std::fmt;
use std::io;

use thiserror::Error;

/// Errors that can occur while chunking, diffing or patching.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// An I/O error occurred while reading input data.
    #[error("io error while {phase}: {source}")]
    Io {
        /// What the reader was doing when the error occurred.
        phase: IoPhase,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// One input of a diff run failed.
    #[error("{side} data: {source}")]
    Side {
        /// Which input failed.
        side: Side,
        /// The failure on that input.
        #[source]
        source: Box<ChunkError>,
    },

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A diff list does not fit the data it is applied to.
    #[error("invalid diff: {message}")]
    InvalidDiff {
        /// Description of the mismatch.
        message: String,
    },
}

impl ChunkError {
    pub(crate) fn io(phase: IoPhase, source: io::Error) -> Self {
        ChunkError::Io { phase, source }
    }

    pub(crate) fn invalid_diff(message: impl Into<String>) -> Self {
        ChunkError::InvalidDiff {
            message: message.into(),
        }
    }

    /// Tags this error with the diff input it came from.
    pub(crate) fn on(self, side: Side) -> Self {
        ChunkError::Side {
            side,
            source: Box::new(self),
        }
    }

    /// Returns the underlying I/O error, looking through side tags.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            ChunkError::Io { source, .. } => Some(source),
            ChunkError::Side { source, .. } => source.io_error(),
            _ => None,
        }
    }

    /// Returns the I/O phase that failed, looking through side tags.
    pub fn phase(&self) -> Option<IoPhase> {
        match self {
            ChunkError::Io { phase, .. } => Some(*phase),
            ChunkError::Side { source, .. } => source.phase(),
            _ => None,
        }
    }
}

/// The read operation that was in progress when an I/O error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoPhase {
    /// Filling the fingerprint window at the start of a chunk.
    WindowFill,
    /// Reading the next byte while sliding the window.
    Slide,
    /// Fetching a delta payload by random access.
    PayloadFetch {
        /// Offset of the payload in its source.
        offset: u64,
        /// Length of the payload.
        len: u64,
    },
}

impl fmt::Display for IoPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoPhase::WindowFill => write!(f, "reading initial data window"),
            IoPhase::Slide => write!(f, "reading next byte"),
            IoPhase::PayloadFetch { offset, len } => {
                write!(f, "reading payload at {} (len={})", offset, len)
            }
        }
    }
}

/// Which input of a diff run an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The original data.
    Original,
    /// The updated data.
    Updated,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Original => write!(f, "original"),
            Side::Updated => write!(f, "updated"),
        }
    }
}
