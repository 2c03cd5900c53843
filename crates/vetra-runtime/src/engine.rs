//! The seam to the compiled-engine runtime library.
//!
//! The bridge does not define the engine's binary calling convention; that
//! contract belongs to the compiler that produced the `EngineState` and the
//! runtime library that executes it. These traits are the whole of what the
//! bridge assumes about that library.

use crate::error::Result;
use crate::tensor::Tensor;
use std::sync::Arc;
use vetra_engine::EngineState;

/// A loaded engine, ready for repeated invocation.
///
/// One instance backs one `ExecutionContext` and owns that context's
/// per-invocation resources (binding tables, device handles, scratch
/// memory). Instances are never shared between contexts.
///
/// `Send + Sync` is required so a context can be handed to or shared across
/// threads. Whether two threads may call `invoke` on the same instance
/// concurrently is the implementation's contract: an implementation that is
/// not internally reentrant must serialize its invocations itself, and
/// callers wanting parallelism should build one context per caller instead.
pub trait EngineInstance: Send + Sync {
    /// Invoke the compiled engine against an ordered input sequence.
    ///
    /// The call blocks until the engine completes and returns the outputs
    /// in the engine's declared order. Implementations must not return a
    /// partial output sequence: on any internal failure they return an
    /// error and no outputs.
    ///
    /// # Errors
    /// Returns an error if the inputs don't match the engine's declared
    /// signature or the engine faults during the call.
    fn invoke(&self, inputs: &[Tensor]) -> Result<Vec<Tensor>>;
}

/// The engine runtime library: loads compiled artifacts into invocable
/// instances.
pub trait EngineRuntime {
    /// Materialize per-context resources for a compiled artifact.
    ///
    /// Called once per `ExecutionContext`, during construction. The
    /// returned instance holds its own reference to the artifact if it
    /// needs one; the shared `EngineState` outlives every instance loaded
    /// from it.
    ///
    /// # Errors
    /// Returns an error if the artifact cannot be loaded (corrupt code
    /// blob, unusable metadata, device initialization failure).
    fn load(&self, state: &Arc<EngineState>) -> Result<Box<dyn EngineInstance>>;
}
