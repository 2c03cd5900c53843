//! Execution contexts: one loaded engine, one invocation entry point.

use crate::engine::{EngineInstance, EngineRuntime};
use crate::error::Result;
use crate::tensor::Tensor;
use std::sync::Arc;
use vetra_engine::EngineState;

/// Runtime object binding one compiled engine to the resources needed to
/// invoke it repeatedly.
///
/// A context is created once per deployed engine. Which engine it wraps is
/// fixed at construction; the per-context runtime state lives in the
/// `EngineInstance` loaded during construction and is private to this
/// context. Dropping the context releases the instance and its resources.
/// The shared `EngineState` survives as long as any other holder keeps a
/// reference to it.
///
/// A dropped context cannot be invoked: `execute` borrows the context, so
/// use-after-destruction is rejected at compile time rather than at
/// runtime.
pub struct ExecutionContext {
    state: Arc<EngineState>,
    instance: Box<dyn EngineInstance>,
}

impl ExecutionContext {
    /// Construct a context by eagerly loading the compiled artifact.
    ///
    /// Construction either fully succeeds or yields no context: the engine
    /// runtime materializes binding tables and device resources here, not
    /// lazily on first call. A load failure is a contract violation by the
    /// artifact's producer, not a condition to retry.
    ///
    /// # Errors
    /// Returns an error if the engine runtime cannot load the artifact.
    pub fn new(state: Arc<EngineState>, runtime: &dyn EngineRuntime) -> Result<Self> {
        let instance = runtime.load(&state)?;

        tracing::debug!(
            engine = state.name(),
            inputs = state.signature().input_arity(),
            outputs = state.signature().output_arity(),
            "execution context created"
        );

        Ok(Self { state, instance })
    }

    /// Invoke the engine against an ordered input sequence.
    ///
    /// This is a pure dispatch: the input sequence reaches the engine
    /// exactly as given (same count, same order), and whatever the engine
    /// produces is returned untouched. Validation of shapes, dtypes, and
    /// arity is the engine's job; a rejection or internal fault surfaces as
    /// an error and no output sequence is returned.
    ///
    /// The call blocks until the engine completes.
    pub fn execute(&self, inputs: &[Tensor]) -> Result<Vec<Tensor>> {
        let span = tracing::trace_span!("execute", engine = self.state.name());
        let _guard = span.enter();

        let outputs = self.instance.invoke(inputs)?;

        let declared = self.state.signature().output_arity();
        if outputs.len() != declared {
            tracing::warn!(
                engine = self.state.name(),
                declared,
                produced = outputs.len(),
                "engine produced a different output count than its signature declares"
            );
        }

        Ok(outputs)
    }

    /// The engine artifact this context wraps.
    pub fn state(&self) -> &Arc<EngineState> {
        &self.state
    }
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("engine", &self.state.name())
            .finish_non_exhaustive()
    }
}
