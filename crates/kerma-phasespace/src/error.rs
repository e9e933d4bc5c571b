//! Error types for phase-space I/O.

use std::fmt;
use std::io;

/// Errors that can occur while writing, reading, or replaying a
/// phase-space stream.
///
/// End-of-stream is not an error: readers report it as `Ok(None)` and
/// the replay source reports it as an [`Exhausted`] outcome, since an
/// exhausted stream is the ordinary way a replayed run ends.
///
/// [`Exhausted`]: crate::source::SourceOutcome::Exhausted
#[derive(Debug)]
pub enum PhasespaceError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// A record was cut short — the stream ends partway through the
    /// fixed 68-byte layout.
    TruncatedRecord {
        /// How many bytes of the record were present.
        got: usize,
    },
    /// A write was attempted after the stream was closed.
    WriterClosed,
}

impl fmt::Display for PhasespaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TruncatedRecord { got } => {
                write!(
                    f,
                    "truncated record: got {got} of {} bytes",
                    crate::RECORD_BYTES
                )
            }
            Self::WriterClosed => write!(f, "phase-space stream is closed"),
        }
    }
}

impl std::error::Error for PhasespaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PhasespaceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
