//! Error types for the runtime crate.

use thiserror::Error;

/// Runtime execution errors.
///
/// Two classes share this enum, mirroring how failures reach callers:
/// construction errors (`InvalidEngine`, `LoadError`) mean the context was
/// never usable and indicate a contract violation by whoever produced the
/// artifact; execution errors (`InvocationError`, `EngineFault`) come from
/// the engine during a call and are the caller's to handle.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The engine artifact failed validation.
    #[error("Invalid engine artifact: {0}")]
    InvalidEngine(#[from] vetra_engine::EngineError),

    /// The engine runtime could not load the artifact.
    #[error("Engine load failed: {0}")]
    LoadError(String),

    /// The engine rejected the invocation (arity, shape, dtype, or device
    /// mismatch against its declared signature).
    #[error("Invocation rejected: {0}")]
    InvocationError(String),

    /// The engine failed internally during the invocation (resource
    /// exhaustion, kernel fault).
    #[error("Engine fault: {0}")]
    EngineFault(String),

    /// Invalid host-side tensor use.
    #[error("Invalid tensor: {0}")]
    TensorError(String),

    /// No engine is registered under the requested name.
    #[error("No engine registered under '{0}'")]
    NotRegistered(String),
}

/// Specialized Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
