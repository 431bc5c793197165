use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::error::TextBufError;
use crate::unit::Unit;

/// Largest capacity accepted for element type `T`.
///
/// Derived from the platform allocation limit, so a request above it is
/// rejected before any allocation is attempted.
#[must_use]
pub fn max_capacity<T: Unit>() -> usize {
    (isize::MAX as usize) / mem::size_of::<T>()
}

/// What `write` does when the source is longer than the usable space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Refuse the whole write and leave the buffer unchanged.
    #[default]
    Reject,
    /// Copy as much as fits and report how much was kept.
    Truncate,
}

/// Outcome of a successful `write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Written {
    /// The whole source was copied.
    Complete,
    /// The source was cut to fit; `copied` elements were kept.
    Truncated {
        /// Number of elements actually copied
        copied: usize,
    },
}

/// A bounded text buffer: owned storage of a fixed element count, with
/// the occupied prefix tracked by an explicit length field.
///
/// The length is the single source of truth for where the text ends;
/// there is no terminator value to scan for, and no operation can move
/// the length past the capacity.
#[derive(Debug)]
pub struct TextBuf<T: Unit> {
    data: Box<[T]>,
    length: usize,
    policy: OverflowPolicy,
}

/// Narrow buffer over 8-bit code units.
pub type ByteBuf = TextBuf<u8>;

/// Wide buffer over fixed-width code points.
pub type WideBuf = TextBuf<char>;

impl<T: Unit> TextBuf<T> {
    /// Creates a buffer of exactly `capacity` elements with the default
    /// [`OverflowPolicy::Reject`].
    ///
    /// # Errors
    ///
    /// Returns `TextBufError::InvalidCapacity` if `capacity` is 0 or
    /// above [`max_capacity`], before any allocation is attempted.
    /// Returns `TextBufError::AllocationFailure` if the storage could
    /// not be reserved.
    pub fn new(capacity: usize) -> Result<Self, TextBufError> {
        Self::new_with_policy(capacity, OverflowPolicy::Reject)
    }

    /// Creates a buffer of exactly `capacity` elements with the given
    /// overflow policy.
    ///
    /// # Errors
    ///
    /// Same as [`TextBuf::new`].
    pub fn new_with_policy(
        capacity: usize,
        policy: OverflowPolicy,
    ) -> Result<Self, TextBufError> {
        let max = max_capacity::<T>();
        if capacity == 0 || capacity > max {
            return Err(TextBufError::InvalidCapacity {
                requested: capacity,
                max,
            });
        }

        let mut storage: Vec<T> = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| TextBufError::AllocationFailure {
                requested: capacity,
            })?;
        storage.resize(capacity, T::default());

        Ok(Self {
            data: storage.into_boxed_slice(),
            length: 0,
            policy,
        })
    }

    /// Creates a buffer sized from measured data: capacity is
    /// `source.len() + extra`, and `source` is copied in.
    ///
    /// # Errors
    ///
    /// Returns `TextBufError::InvalidCapacity` if the computed capacity
    /// is 0, overflows `usize`, or is above [`max_capacity`].
    pub fn from_source(source: &[T], extra: usize) -> Result<Self, TextBufError> {
        let capacity =
            source
                .len()
                .checked_add(extra)
                .ok_or(TextBufError::InvalidCapacity {
                    requested: usize::MAX,
                    max: max_capacity::<T>(),
                })?;

        let mut buf = Self::new(capacity)?;
        buf.data[..source.len()].copy_from_slice(source);
        buf.length = source.len();
        Ok(buf)
    }

    /// Creates a buffer sized from measured data with one spare slot,
    /// so a later `write` of the same source always fits.
    ///
    /// # Errors
    ///
    /// Same as [`TextBuf::from_source`].
    pub fn from_text(source: &[T]) -> Result<Self, TextBufError> {
        Self::from_source(source, 1)
    }

    /// Number of elements currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.length == self.data.len()
    }

    /// Fixed element count of the storage, set at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of elements `push` can still accept.
    #[must_use]
    pub fn available(&self) -> usize {
        self.data.len() - self.length
    }

    #[must_use]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Replaces the buffer content with `source`.
    ///
    /// At most `capacity - 1` elements are usable by `write`; the last
    /// slot stays reserved. A source that does not fit is handled per
    /// the buffer's policy: under `Reject` the buffer is left untouched,
    /// under `Truncate` the first `capacity - 1` elements are kept and
    /// the cut is reported in the outcome.
    ///
    /// # Errors
    ///
    /// Returns `TextBufError::Overflow` under `Reject` when `source` is
    /// longer than `capacity - 1`.
    pub fn write(&mut self, source: &[T]) -> Result<Written, TextBufError> {
        let usable = self.data.len() - 1;

        if source.len() <= usable {
            self.data[..source.len()].copy_from_slice(source);
            self.length = source.len();
            return Ok(Written::Complete);
        }

        match self.policy {
            OverflowPolicy::Reject => Err(TextBufError::Overflow {
                requested: source.len(),
                available: usable,
            }),
            OverflowPolicy::Truncate => {
                self.data[..usable].copy_from_slice(&source[..usable]);
                self.length = usable;
                Ok(Written::Truncated { copied: usable })
            }
        }
    }

    /// Appends one element.
    ///
    /// Unlike `write`, `push` may fill the buffer to its full capacity.
    ///
    /// # Errors
    ///
    /// Returns `TextBufError::Overflow` if the buffer is full. A failed
    /// push leaves the contents unchanged.
    pub fn push(&mut self, element: T) -> Result<(), TextBufError> {
        if self.length == self.data.len() {
            return Err(TextBufError::Overflow {
                requested: 1,
                available: 0,
            });
        }
        self.data[self.length] = element;
        self.length += 1;
        Ok(())
    }

    /// Read-only view of the occupied prefix `[0, len)`.
    ///
    /// Storage beyond the length is never exposed.
    #[must_use]
    pub fn as_text(&self) -> &[T] {
        &self.data[..self.length]
    }

    /// Cuts the length down to `new_len`. A `new_len` at or above the
    /// current length is a no-op.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.length {
            self.length = new_len;
        }
    }

    /// Resets the length to 0. Storage past the new length is not
    /// cleared and is never read again until overwritten.
    pub fn clear(&mut self) {
        self.length = 0;
    }
}

impl<T: Unit> AsRef<[T]> for TextBuf<T> {
    fn as_ref(&self) -> &[T] {
        self.as_text()
    }
}
