use thiserror::Error;

/// Error types for `TextBuf` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TextBufError {
    /// Requested capacity is zero or above the allocation ceiling
    #[error("Invalid capacity: requested {requested} elements, allowed range is 1..={max}")]
    InvalidCapacity {
        /// Capacity that was requested
        requested: usize,
        /// Largest capacity accepted for this element type
        max: usize,
    },
    /// A write or push would exceed the space left in the buffer
    #[error("Buffer overflow: requested {requested} elements, but only {available} available")]
    Overflow {
        /// Number of elements the operation needed
        requested: usize,
        /// Number of elements the buffer had room for
        available: usize,
    },
    /// Backing storage could not be obtained
    #[error("Allocation failure: could not reserve {requested} elements")]
    AllocationFailure {
        /// Capacity that could not be reserved
        requested: usize,
    },
}
