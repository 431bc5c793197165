use thiserror::Error;

/// Error type for rejected template candidates
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GuardError {
    /// The input contains an active format directive and must not be
    /// forwarded to a formatting routine as a template
    #[error("Input rejected: unescaped directive character at position {position}")]
    TemplatedInput {
        /// Character position of the offending directive introducer
        position: usize,
    },
}
