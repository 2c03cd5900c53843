//! Call signatures declared by compiled engines.
//!
//! A signature is the calling-convention metadata an engine carries so the
//! runtime (and the engine itself) can validate invocations: one
//! `TensorSpec` per input slot and one per output slot, in call order.

use crate::types::{DataType, Device};

/// Expected metadata for a single input or output slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorSpec {
    /// Slot name (for diagnostics; slots are matched by position, not name).
    pub name: String,

    /// Element type.
    pub dtype: DataType,

    /// Static shape. Shapes are fully resolved by the compiler before the
    /// artifact is emitted.
    pub shape: Vec<usize>,

    /// Placement of the slot's data.
    pub device: Device,
}

impl TensorSpec {
    /// Create a new tensor spec.
    pub fn new(name: impl Into<String>, dtype: DataType, shape: &[usize], device: Device) -> Self {
        Self {
            name: name.into(),
            dtype,
            shape: shape.to_vec(),
            device,
        }
    }

    /// Total number of elements in this slot.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Size of this slot's data in bytes.
    pub fn size_bytes(&self) -> usize {
        self.numel() * self.dtype.size()
    }
}

/// Ordered input and output slots of a compiled engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    /// Input slots in call order.
    pub inputs: Vec<TensorSpec>,

    /// Output slots in return order.
    pub outputs: Vec<TensorSpec>,
}

impl Signature {
    /// Create a signature from input and output slots.
    pub fn new(inputs: Vec<TensorSpec>, outputs: Vec<TensorSpec>) -> Self {
        Self { inputs, outputs }
    }

    /// Number of input slots.
    pub fn input_arity(&self) -> usize {
        self.inputs.len()
    }

    /// Number of output slots.
    pub fn output_arity(&self) -> usize {
        self.outputs.len()
    }
}
