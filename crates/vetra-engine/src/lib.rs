//! Compiled engine artifact model for vetra.
//!
//! This crate defines the data consumed by `vetra-runtime`:
//! - Element types and device placements (`DataType`, `Device`)
//! - Per-slot call signatures (`TensorSpec`, `Signature`)
//! - The compiled artifact itself (`EngineState`)
//!
//! An `EngineState` is produced by an external compiler and is immutable
//! once constructed. It is shared between its producer and any number of
//! execution contexts through `Arc<EngineState>`.

pub mod signature;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use signature::{Signature, TensorSpec};
pub use state::EngineState;
pub use types::{DataType, Device};

/// Result type using the crate's error type.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while validating a compiled engine artifact.
///
/// These are construction-time contract violations: a well-behaved compiler
/// never produces an artifact that trips them, so callers treat them as
/// fatal rather than recoverable.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Engine artifact '{0}' has no compiled code")]
    EmptyArtifact(String),

    #[error("Invalid engine signature: {0}")]
    InvalidSignature(String),
}
