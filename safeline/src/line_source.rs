use embedded_io::Read;

use crate::error::{IntakeError, Result};

/// Pulls bytes from a reader into a client-provided scratch window and
/// yields one line at a time.
///
/// A line runs up to and excluding `\n`; a preceding `\r` is stripped.
/// The final line before end of input may be unterminated. The source
/// never reads a terminal itself; it only consumes whatever reader it
/// was given.
pub struct LineSource<'buf, R: Read> {
    reader: R,
    scratch: &'buf mut [u8],
    n_bytes: usize,
    consumed: usize,
}

impl<'buf, R: Read> LineSource<'buf, R> {
    /// Creates a line source over `reader` using `scratch` as the
    /// working window. A line longer than the window is an error, not a
    /// silent split.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::EmptyScratch` if `scratch` is empty.
    pub fn new(reader: R, scratch: &'buf mut [u8]) -> Result<Self> {
        if scratch.is_empty() {
            return Err(IntakeError::EmptyScratch);
        }
        Ok(Self {
            reader,
            scratch,
            n_bytes: 0,
            consumed: 0,
        })
    }

    /// Returns the next line, or `Ok(None)` once the input is finished.
    ///
    /// The returned slice borrows the scratch window and is valid until
    /// the next call.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::LineTooLong` if no newline arrives within
    /// the scratch window, and `IntakeError::Read` if the reader fails.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.discard_consumed();

        loop {
            if let Some(i) = find_newline(&self.scratch[..self.n_bytes]) {
                self.consumed = i + 1;
                let end = strip_carriage_return(&self.scratch[..i]);
                return Ok(Some(&self.scratch[..end]));
            }

            if self.n_bytes == self.scratch.len() {
                return Err(IntakeError::LineTooLong {
                    window: self.scratch.len(),
                });
            }

            let n_new = self
                .reader
                .read(&mut self.scratch[self.n_bytes..])
                .map_err(|e| IntakeError::Read {
                    kind: embedded_io::Error::kind(&e),
                })?;
            if n_new == 0 {
                // End of input: hand out the unterminated tail, if any
                if self.n_bytes == 0 {
                    return Ok(None);
                }
                self.consumed = self.n_bytes;
                let n = self.n_bytes;
                return Ok(Some(&self.scratch[..n]));
            }
            self.n_bytes += n_new;
        }
    }

    fn discard_consumed(&mut self) {
        if self.consumed > 0 {
            self.scratch.copy_within(self.consumed..self.n_bytes, 0);
            self.n_bytes -= self.consumed;
            self.consumed = 0;
        }
    }
}

fn find_newline(window: &[u8]) -> Option<usize> {
    window.iter().position(|&b| b == b'\n')
}

fn strip_carriage_return(line: &[u8]) -> usize {
    if line.last() == Some(&b'\r') {
        line.len() - 1
    } else {
        line.len()
    }
}
