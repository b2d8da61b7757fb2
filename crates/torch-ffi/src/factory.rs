//! Tensor constructors. Arguments go to libtorch unchecked; invalid sizes
//! come back as the native error.

use torch_ffi_sys as sys;

use crate::error::Result;
use crate::options::TensorOptions;
use crate::tensor::Tensor;

/// `torch::eye(n)`: an `n x n` identity matrix with default options.
pub fn eye(n: i64) -> Result<Tensor> {
    // SAFETY: `out` is a valid write target supplied by `from_call`.
    Tensor::from_call("eye", |out| unsafe { sys::tf_eye(n, out) })
}

/// `torch::eye(n, options)`.
pub fn eye_with_options(n: i64, options: TensorOptions) -> Result<Tensor> {
    // SAFETY: `options` is live for the call; the shim copies it.
    Tensor::from_call("eye", |out| unsafe {
        sys::tf_eye_options(n, options.as_ptr(), out)
    })
}

/// `torch::zeros(sizes, options)`.
pub fn zeros(sizes: &[i64], options: TensorOptions) -> Result<Tensor> {
    // SAFETY: `sizes` is a valid slice and `options` is live for the call.
    Tensor::from_call("zeros", |out| unsafe {
        sys::tf_zeros(sizes.as_ptr(), sizes.len(), options.as_ptr(), out)
    })
}

/// `torch::ones(sizes, options)`.
pub fn ones(sizes: &[i64], options: TensorOptions) -> Result<Tensor> {
    // SAFETY: `sizes` is a valid slice and `options` is live for the call.
    Tensor::from_call("ones", |out| unsafe {
        sys::tf_ones(sizes.as_ptr(), sizes.len(), options.as_ptr(), out)
    })
}
