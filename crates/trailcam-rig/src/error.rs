//! Rig error types.

/// Errors produced by the camera rig.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RigError {
    /// The target sequence handed to the solver was empty.
    #[error("degenerate input: target list is empty")]
    DegenerateInput,

    /// A [`RigConfig`](crate::RigConfig) failed validation.
    #[error("invalid rig config: {0}")]
    InvalidConfig(String),
}
