//! Host-facing tensor type for engine input/output interchange.

use crate::error::{Result, RuntimeError};
use bytemuck::Pod;
use vetra_engine::{DataType, Device};

/// A tensor value passed to or returned from an engine.
///
/// The bridge treats tensor contents as opaque bytes; only the metadata
/// (shape, dtype, device) is inspected. For basic usage, create from Vec
/// and extract to Vec.
#[derive(Debug, Clone)]
pub struct Tensor {
    data: Vec<u8>,
    shape: Vec<usize>,
    dtype: DataType,
    device: Device,
}

impl Tensor {
    /// Create a CPU tensor from a vector with a given shape.
    ///
    /// # Example
    /// ```
    /// # use vetra_runtime::Tensor;
    /// let data = vec![1.0f32, 2.0, 3.0, 4.0];
    /// let tensor = Tensor::from_vec(data, &[2, 2]);
    /// ```
    pub fn from_vec<T: Pod>(data: Vec<T>, shape: &[usize]) -> Self {
        let expected_len: usize = shape.iter().product();
        assert_eq!(
            data.len(),
            expected_len,
            "Data length {} doesn't match shape {:?} (expected {})",
            data.len(),
            shape,
            expected_len
        );

        let dtype = Self::infer_dtype::<T>();
        let bytes = bytemuck::cast_slice(&data).to_vec();

        Self {
            data: bytes,
            shape: shape.to_vec(),
            dtype,
            device: Device::Cpu,
        }
    }

    /// Create a tensor from raw bytes.
    ///
    /// Engine implementations use this to construct output tensors from
    /// whatever buffers the compiled code produced.
    pub fn from_raw(data: Vec<u8>, shape: &[usize], dtype: DataType, device: Device) -> Self {
        Self {
            data,
            shape: shape.to_vec(),
            dtype,
            device,
        }
    }

    /// Mark this tensor as placed on a device.
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Get a typed slice view of the tensor data.
    ///
    /// # Errors
    /// Returns an error if the element type size doesn't match.
    pub fn as_slice<T: Pod>(&self) -> Result<&[T]> {
        if std::mem::size_of::<T>() * self.len() != self.data.len() {
            return Err(RuntimeError::TensorError("Type size mismatch".to_string()));
        }
        Ok(bytemuck::cast_slice(&self.data))
    }

    /// Convert tensor contents to a Vec.
    ///
    /// # Errors
    /// Returns an error if the element type size doesn't match.
    pub fn to_vec<T: Pod>(&self) -> Result<Vec<T>> {
        Ok(self.as_slice::<T>()?.to_vec())
    }

    /// Get raw bytes of the tensor data.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the shape of the tensor.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the data type of the tensor.
    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    /// Get the placement of the tensor.
    pub fn device(&self) -> Device {
        self.device
    }

    /// Get the total number of elements in the tensor.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Check if the tensor is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Infer DataType from Rust type.
    fn infer_dtype<T: Pod>() -> DataType {
        let type_name = std::any::type_name::<T>();
        if type_name.contains("f32") {
            DataType::F32
        } else if type_name.contains("f16") {
            DataType::F16
        } else if type_name.contains("i32") {
            DataType::I32
        } else if type_name.contains("i64") {
            DataType::I64
        } else if type_name.contains("u32") {
            DataType::U32
        } else if type_name.contains("u8") {
            DataType::U8
        } else {
            // Default to F32 for unknown types
            DataType::F32
        }
    }
}
