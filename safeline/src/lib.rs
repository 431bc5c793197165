#![no_std]

//! `safeline`: bounded line intake.
//!
//! Reads lines from any [`embedded_io::Read`] source into a
//! client-provided scratch window, runs optional validation gates over
//! each line, and delivers the result into a bounded
//! [`textbuf::ByteBuf`] under that buffer's overflow policy. The
//! pipeline never reads a terminal itself and never performs output;
//! callers supply the reader and render the buffer contents.
//!
//! ```
//! use safeline::{Intake, LineSource};
//! use textbuf::ByteBuf;
//!
//! let mut reader: &[u8] = b"hello\n%s%s%s\n";
//! let mut scratch = [0u8; 128];
//! let mut source = LineSource::new(&mut reader, &mut scratch).unwrap();
//! let mut buf = ByteBuf::new(64).unwrap();
//!
//! let intake = Intake::new().require_plain(true);
//!
//! intake.read_line_into(&mut source, &mut buf).unwrap();
//! assert_eq!(buf.as_text(), b"hello");
//!
//! // The second line is a format-string payload and is rejected
//! // before it ever reaches the buffer.
//! assert!(intake.read_line_into(&mut source, &mut buf).is_err());
//! assert_eq!(buf.as_text(), b"hello");
//! ```

mod error;
mod intake;
mod line_source;

// Re-export public types
pub use error::{IntakeError, Result};
pub use intake::{is_printable_ascii, Intake};
pub use line_source::LineSource;
