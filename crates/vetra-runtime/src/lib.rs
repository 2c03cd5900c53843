//! Execution bridge between a host tensor framework and compiled engines.
//!
//! This crate turns a compiled `EngineState` (from `vetra-engine`) into a
//! callable object. The pieces:
//!
//! 1. **`EngineRuntime` / `EngineInstance`** - the seam to the engine
//!    runtime library that loads and invokes compiled artifacts
//! 2. **`ExecutionContext`** - owns one loaded engine instance and exposes
//!    `execute(inputs) -> outputs`
//! 3. **`binding`** - glue for exposing contexts to a host framework's
//!    dispatch tables
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vetra_runtime::{EngineRuntime, ExecutionContext, Tensor};
//!
//! fn main() -> anyhow::Result<()> {
//!     # let engine_runtime: Box<dyn EngineRuntime> = todo!();
//!     # let state: Arc<vetra_engine::EngineState> = todo!();
//!     // The compiler produced `state`; `engine_runtime` is the library
//!     // that knows how to load and invoke the compiled artifact.
//!     let context = ExecutionContext::new(Arc::clone(&state), engine_runtime.as_ref())?;
//!
//!     let input = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
//!     let outputs = context.execute(&[input])?;
//!
//!     let result = outputs[0].to_vec::<f32>()?;
//!     println!("Result: {:?}", result);
//!
//!     Ok(())
//! }
//! ```

pub mod binding;
mod context;
mod engine;
mod error;
mod tensor;

// Public exports
pub use binding::BindingRegistry;
pub use context::ExecutionContext;
pub use engine::{EngineInstance, EngineRuntime};
pub use error::{Result, RuntimeError};
pub use tensor::Tensor;
