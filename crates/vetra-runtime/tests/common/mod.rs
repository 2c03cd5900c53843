//! Common test utilities for the runtime integration suite.
//!
//! Provides an in-process engine runtime so contexts can be exercised
//! without a real compiled artifact. The fake engine validates calls
//! against the artifact's declared signature and computes a left-fold
//! subtraction of its inputs, which makes input reordering observable in
//! the output values.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use vetra_engine::{DataType, Device, EngineState, Signature, TensorSpec};
use vetra_runtime::{EngineInstance, EngineRuntime, Result, RuntimeError, Tensor};

/// Build an f32 engine artifact with `n_inputs` input slots of `shape` and
/// one output slot of the same shape, all placed on the CPU.
pub fn make_engine(name: &str, n_inputs: usize, shape: &[usize]) -> Arc<EngineState> {
    make_engine_on(name, n_inputs, shape, Device::Cpu)
}

/// Build an f32 engine artifact with every slot placed on `device`.
pub fn make_engine_on(
    name: &str,
    n_inputs: usize,
    shape: &[usize],
    device: Device,
) -> Arc<EngineState> {
    let inputs = (0..n_inputs)
        .map(|i| TensorSpec::new(format!("in{}", i), DataType::F32, shape, device))
        .collect();
    let outputs = vec![TensorSpec::new("out", DataType::F32, shape, device)];

    let state = EngineState::new(
        name,
        vec![0x7F, b'E', b'L', b'F'], // placeholder code blob
        Vec::new(),
        Signature::new(inputs, outputs),
    )
    .expect("test artifact should be valid");

    Arc::new(state)
}

/// Fake engine runtime backing integration tests.
///
/// Tracks how many loaded instances are alive so tests can assert that
/// dropping a context releases its per-context resources.
pub struct SubtractRuntime {
    live_instances: Arc<AtomicUsize>,
    fail_load: bool,
    fail_invoke: bool,
    extra_output: bool,
}

impl SubtractRuntime {
    pub fn new() -> Self {
        Self {
            live_instances: Arc::new(AtomicUsize::new(0)),
            fail_load: false,
            fail_invoke: false,
            extra_output: false,
        }
    }

    /// A runtime that refuses to load any artifact.
    pub fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Self::new()
        }
    }

    /// A runtime whose instances fault on every invocation.
    pub fn faulting() -> Self {
        Self {
            fail_invoke: true,
            ..Self::new()
        }
    }

    /// A runtime whose instances return one output more than the artifact
    /// declares.
    pub fn over_producing() -> Self {
        Self {
            extra_output: true,
            ..Self::new()
        }
    }

    /// Number of loaded instances currently alive.
    pub fn live_instances(&self) -> usize {
        self.live_instances.load(Ordering::SeqCst)
    }
}

impl EngineRuntime for SubtractRuntime {
    fn load(&self, state: &Arc<EngineState>) -> Result<Box<dyn EngineInstance>> {
        if self.fail_load {
            return Err(RuntimeError::LoadError(format!(
                "cannot load '{}': unsupported code format",
                state.name()
            )));
        }

        self.live_instances.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SubtractInstance {
            state: Arc::clone(state),
            live_instances: Arc::clone(&self.live_instances),
            fail_invoke: self.fail_invoke,
            extra_output: self.extra_output,
        }))
    }
}

/// Fake loaded engine: validates against the declared signature, then
/// computes `in0 - in1 - ... - inN` into every declared output slot.
struct SubtractInstance {
    state: Arc<EngineState>,
    live_instances: Arc<AtomicUsize>,
    fail_invoke: bool,
    extra_output: bool,
}

impl Drop for SubtractInstance {
    fn drop(&mut self) {
        self.live_instances.fetch_sub(1, Ordering::SeqCst);
    }
}

impl EngineInstance for SubtractInstance {
    fn invoke(&self, inputs: &[Tensor]) -> Result<Vec<Tensor>> {
        if self.fail_invoke {
            return Err(RuntimeError::EngineFault(format!(
                "engine '{}' kernel fault",
                self.state.name()
            )));
        }

        let signature = self.state.signature();
        if inputs.len() != signature.input_arity() {
            return Err(RuntimeError::InvocationError(format!(
                "engine '{}' expects {} inputs, got {}",
                self.state.name(),
                signature.input_arity(),
                inputs.len()
            )));
        }

        for (slot, (spec, tensor)) in signature.inputs.iter().zip(inputs).enumerate() {
            if tensor.dtype() != spec.dtype || tensor.shape() != spec.shape.as_slice() {
                return Err(RuntimeError::InvocationError(format!(
                    "input slot {} of engine '{}' expects {:?}{:?}, got {:?}{:?}",
                    slot,
                    self.state.name(),
                    spec.dtype,
                    spec.shape,
                    tensor.dtype(),
                    tensor.shape()
                )));
            }
            if tensor.device() != spec.device {
                return Err(RuntimeError::InvocationError(format!(
                    "input slot {} of engine '{}' expects placement {}, got {}",
                    slot,
                    self.state.name(),
                    spec.device,
                    tensor.device()
                )));
            }
        }

        let mut acc = match inputs.first() {
            Some(first) => first.to_vec::<f32>()?,
            None => Vec::new(),
        };
        for tensor in inputs.iter().skip(1) {
            for (a, b) in acc.iter_mut().zip(tensor.as_slice::<f32>()?) {
                *a -= b;
            }
        }

        let mut outputs: Vec<Tensor> = signature
            .outputs
            .iter()
            .map(|spec| {
                Tensor::from_raw(
                    bytemuck::cast_slice(&acc).to_vec(),
                    &spec.shape,
                    spec.dtype,
                    spec.device,
                )
            })
            .collect();

        if self.extra_output {
            if let Some(first) = outputs.first().cloned() {
                outputs.push(first);
            }
        }

        Ok(outputs)
    }
}
