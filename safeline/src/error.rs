use fmtguard::GuardError;
use textbuf::TextBufError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, IntakeError>;

/// Errors from the line intake pipeline
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The bounded buffer refused the line
    #[error(transparent)]
    Buffer(#[from] TextBufError),
    /// The line failed the format-guard check
    #[error(transparent)]
    Guard(#[from] GuardError),
    /// The line contains a byte outside printable ASCII
    #[error("Input rejected: non-printable byte {byte:#04x} at position {position}")]
    NonPrintable {
        /// The offending byte
        byte: u8,
        /// Byte position within the line
        position: usize,
    },
    /// A line did not fit in the line source's scratch window
    #[error("Line too long: scratch window of {window} bytes exhausted")]
    LineTooLong {
        /// Size of the scratch window in bytes
        window: usize,
    },
    /// The scratch window provided to the line source is empty
    #[error("Invalid line source: scratch window is empty")]
    EmptyScratch,
    /// The underlying reader failed
    #[error("Read error: {kind:?}")]
    Read {
        /// Error kind reported by the reader
        kind: embedded_io::ErrorKind,
    },
}
