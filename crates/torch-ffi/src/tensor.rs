use std::fmt;
use std::ptr;

use torch_ffi_sys as sys;

use crate::error::{check, take_string, write_native, Result};
use crate::options::TensorOptions;

/// `at::Tensor`: a reference handle to libtorch-managed storage.
///
/// Cloning copies the handle, not the data; both handles alias the same
/// storage and in-place operations through one are visible through the other.
/// `==` is native `is_same` (identity), never value equality. Storage lives as
/// long as libtorch's own reference count says it does.
///
/// Handles are neither `Send` nor `Sync`: aliases can share storage and this
/// layer adds no synchronization.
pub struct Tensor {
    c_tensor: *mut sys::tf_tensor,
}

macro_rules! query {
    ($($(#[$meta:meta])* $name:ident: $ty:ty => $ffi:ident;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Result<$ty> {
                let mut out = <$ty>::default();
                // SAFETY: `self` holds a live handle and `out` is a valid write target.
                check(stringify!($name), unsafe { sys::$ffi(self.c_tensor, &mut out) })?;
                Ok(out)
            }
        )+
    };
}

impl Tensor {
    /// Native default construction: an undefined tensor. Operations on it fail
    /// exactly as libtorch makes them fail.
    pub fn new() -> Self {
        // SAFETY: the default constructor takes no input and does not raise.
        Self::from_raw(unsafe { sys::tf_tensor_new() })
    }

    pub(crate) fn from_raw(c_tensor: *mut sys::tf_tensor) -> Self {
        Self { c_tensor }
    }

    /// Runs a shim call that writes a fresh handle into its out-parameter.
    pub(crate) fn from_call(
        op: &'static str,
        call: impl FnOnce(*mut *mut sys::tf_tensor) -> sys::tf_error,
    ) -> Result<Self> {
        let mut out = ptr::null_mut();
        check(op, call(&mut out))?;
        Ok(Self::from_raw(out))
    }

    pub(crate) fn as_ptr(&self) -> *const sys::tf_tensor {
        self.c_tensor
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut sys::tf_tensor {
        self.c_tensor
    }

    /// True when both handles refer to the same tensor.
    pub fn is_same(&self, other: &Tensor) -> bool {
        // SAFETY: both handles are live.
        unsafe { sys::tf_tensor_is_same(self.c_tensor, other.c_tensor) }
    }

    /// Native `reset()`: this handle becomes undefined.
    pub fn reset(&mut self) {
        // SAFETY: `self` holds a live handle.
        unsafe { sys::tf_tensor_reset(self.c_tensor) };
    }

    /// The options this tensor was built with, as a fresh value.
    pub fn options(&self) -> Result<TensorOptions> {
        let mut out = ptr::null_mut();
        // SAFETY: `self` holds a live handle; `out` receives an owned options handle.
        check("options", unsafe {
            sys::tf_tensor_get_options(self.c_tensor, &mut out)
        })?;
        Ok(TensorOptions::from_raw(out))
    }

    query! {
        defined: bool => tf_tensor_defined;
        dim: i64 => tf_tensor_dim;
        ndimension: i64 => tf_tensor_ndimension;
        nbytes: usize => tf_tensor_nbytes;
        numel: i64 => tf_tensor_numel;
        itemsize: usize => tf_tensor_itemsize;
        element_size: i64 => tf_tensor_element_size;
        has_storage: bool => tf_tensor_has_storage;
        /// Device index; `-1` for CPU tensors.
        get_device: i64 => tf_tensor_get_device;
        /// Reads the single element of a one-element tensor.
        item_f64: f64 => tf_tensor_item_f64;
        item_i64: i64 => tf_tensor_item_i64;
        item_bool: bool => tf_tensor_item_bool;
    }

    query! {
        is_cuda: bool => tf_tensor_is_cuda;
        is_hip: bool => tf_tensor_is_hip;
        is_sparse: bool => tf_tensor_is_sparse;
        is_mkldnn: bool => tf_tensor_is_mkldnn;
        is_vulkan: bool => tf_tensor_is_vulkan;
        is_quantized: bool => tf_tensor_is_quantized;
        is_meta: bool => tf_tensor_is_meta;
    }

    pub fn sizes(&self) -> Result<Vec<i64>> {
        let rank = usize::try_from(self.dim()?).unwrap_or_default();
        let mut sizes = vec![0i64; rank];
        // SAFETY: `sizes` has room for exactly `rank` entries.
        check("sizes", unsafe {
            sys::tf_tensor_sizes(self.c_tensor, sizes.as_mut_ptr(), sizes.len())
        })?;
        Ok(sizes)
    }

    /// Native `operator<<` rendering.
    pub fn to_native_string(&self) -> Result<String> {
        let mut out = ptr::null_mut();
        // SAFETY: `self` holds a live handle; `out` receives a shim-owned string.
        check("to_string", unsafe {
            sys::tf_tensor_to_string(self.c_tensor, &mut out)
        })?;
        // SAFETY: the call succeeded, so `out` was set to a fresh string.
        Ok(unsafe { take_string(out) })
    }
}

impl Default for Tensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Tensor {
    /// Copies the handle; the clone aliases the same storage.
    fn clone(&self) -> Self {
        // SAFETY: `self` holds a live handle; the copy bumps the native refcount.
        Self::from_raw(unsafe { sys::tf_tensor_clone_handle(self.c_tensor) })
    }
}

impl Drop for Tensor {
    fn drop(&mut self) {
        // SAFETY: the handle is owned by this value and released once.
        unsafe { sys::tf_tensor_free(self.c_tensor) };
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Tensor {}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_native(f, self.to_native_string())
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("defined", &self.defined().ok())
            .field("sizes", &self.sizes().ok())
            .finish()
    }
}
