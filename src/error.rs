use std::{fmt::Display, io, sync::Arc};

/// All the ways a run can fail. `io::ErrorKind::Interrupted` is absent on
/// purpose: the writer absorbs it by retrying, so it never reaches callers.
#[derive(Debug, Clone)]
pub enum Error {
    MissingLength {
        program: String,
    },
    InvalidLength {
        argument: String,
    },
    InvalidSeed {
        argument: String,
    },
    AllocationFailure {
        requested: usize,
    },
    SinkFailure {
        bytes_written: usize,
        source: Arc<io::Error>,
    },
    SinkStalled {
        bytes_written: usize,
        zero_writes: usize,
    },
}

impl Error {
    pub(crate) fn sink_failure(bytes_written: usize, error: io::Error) -> Error {
        Error::SinkFailure {
            bytes_written,
            source: Arc::new(error),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingLength { program } => {
                write!(f, "usage: {} <length> [seed]", program)
            }
            Error::InvalidLength { argument } => {
                write!(
                    f,
                    "invalid length '{}': expected a non-negative integer",
                    argument
                )
            }
            Error::InvalidSeed { argument } => {
                write!(f, "invalid seed '{}': expected an unsigned integer", argument)
            }
            Error::AllocationFailure { requested } => {
                write!(f, "failed to allocate a buffer of {} bytes", requested)
            }
            Error::SinkFailure {
                bytes_written,
                source,
            } => {
                write!(f, "write failed after {} bytes: {}", bytes_written, source)
            }
            Error::SinkStalled {
                bytes_written,
                zero_writes,
            } => {
                write!(
                    f,
                    "sink stalled after {} bytes ({} consecutive zero-byte writes)",
                    bytes_written, zero_writes
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SinkFailure { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
