use embedded_io::Read;
use fmtguard::Classification;
use textbuf::{ByteBuf, Written};

use crate::error::{IntakeError, Result};
use crate::line_source::LineSource;

/// True if every byte of `line` is printable ASCII (space through `~`).
#[must_use]
pub fn is_printable_ascii(line: &[u8]) -> bool {
    line.iter().all(|&b| (0x20..=0x7e).contains(&b))
}

/// Composed intake pipeline: validate one line and deliver it into a
/// bounded buffer under the buffer's own overflow policy.
///
/// The gates are off by default; each mirrors one hardening check from
/// console-input handling: `printable_only` rejects control and
/// non-ASCII bytes, `require_plain` rejects format-directive payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intake {
    printable_only: bool,
    require_plain: bool,
}

impl Intake {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects lines containing bytes outside printable ASCII.
    #[must_use]
    pub fn printable_only(mut self, yes: bool) -> Self {
        self.printable_only = yes;
        self
    }

    /// Rejects lines that are not plain under the format guard.
    #[must_use]
    pub fn require_plain(mut self, yes: bool) -> Self {
        self.require_plain = yes;
        self
    }

    /// Runs the gates on `line` and writes it into `buf`.
    ///
    /// Validation happens before delivery, so a rejected line never
    /// touches the buffer.
    ///
    /// # Errors
    ///
    /// `NonPrintable` or `Guard` if a gate rejects the line, or the
    /// buffer's `Overflow` error under its reject policy.
    pub fn deliver(&self, line: &[u8], buf: &mut ByteBuf) -> Result<Written> {
        if self.printable_only {
            if let Some((position, &byte)) = line
                .iter()
                .enumerate()
                .find(|(_, &b)| !(0x20..=0x7e).contains(&b))
            {
                return Err(IntakeError::NonPrintable { byte, position });
            }
        }

        if self.require_plain {
            if let Classification::Templated { position } = fmtguard::classify_bytes(line) {
                return Err(fmtguard::GuardError::TemplatedInput { position }.into());
            }
        }

        Ok(buf.write(line)?)
    }

    /// Reads the next line from `source` and delivers it into `buf`.
    ///
    /// Returns `Ok(None)` once the input is finished.
    ///
    /// # Errors
    ///
    /// Everything `next_line` and `deliver` can return.
    pub fn read_line_into<R: Read>(
        &self,
        source: &mut LineSource<'_, R>,
        buf: &mut ByteBuf,
    ) -> Result<Option<Written>> {
        match source.next_line()? {
            None => Ok(None),
            Some(line) => {
                let outcome = self.deliver(line, buf)?;
                Ok(Some(outcome))
            }
        }
    }
}
