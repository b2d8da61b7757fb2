use std::fmt;
use std::ptr;

use torch_ffi_sys as sys;

use crate::error::{check, take_string, write_native, Result};

/// Element type, numbered as `at::ScalarType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Uint8,
    Int8,
    Int16,
    Int,
    Int64,
    Half,
    Float,
    Double,
    Bool,
    BFloat16,
}

impl Kind {
    pub fn scalar_type_code(self) -> i32 {
        match self {
            Kind::Uint8 => 0,
            Kind::Int8 => 1,
            Kind::Int16 => 2,
            Kind::Int => 3,
            Kind::Int64 => 4,
            Kind::Half => 5,
            Kind::Float => 6,
            Kind::Double => 7,
            Kind::Bool => 11,
            Kind::BFloat16 => 15,
        }
    }
}

/// `at::TensorOptions`: a construction descriptor with value semantics.
///
/// Factories take options by value and the shim copies them into the native
/// call, so later changes to a clone never reach a tensor already built.
/// `Clone` is the native copy constructor.
pub struct TensorOptions {
    c_options: *mut sys::tf_tensor_options,
}

// SAFETY: at::TensorOptions is a self-contained value with no shared state.
unsafe impl Send for TensorOptions {}

impl TensorOptions {
    /// Native default construction.
    pub fn new() -> Self {
        // SAFETY: the default constructor takes no input and does not raise.
        let c_options = unsafe { sys::tf_options_new() };
        Self { c_options }
    }

    /// Native `dtype(...)`: a new value with the element type replaced.
    pub fn dtype(&self, kind: Kind) -> TensorOptions {
        // SAFETY: `self` holds a live handle and every `Kind` is a valid ScalarType.
        Self::from_raw(unsafe { sys::tf_options_dtype(self.c_options, kind.scalar_type_code()) })
    }

    pub(crate) fn from_raw(c_options: *mut sys::tf_tensor_options) -> Self {
        Self { c_options }
    }

    pub(crate) fn as_ptr(&self) -> *const sys::tf_tensor_options {
        self.c_options
    }

    /// Native `operator<<` rendering.
    pub fn to_native_string(&self) -> Result<String> {
        let mut out = ptr::null_mut();
        // SAFETY: `self` holds a live handle; `out` receives a shim-owned string.
        check("options_to_string", unsafe {
            sys::tf_options_to_string(self.c_options, &mut out)
        })?;
        // SAFETY: the call succeeded, so `out` was set to a fresh string.
        Ok(unsafe { take_string(out) })
    }
}

impl Default for TensorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TensorOptions {
    fn clone(&self) -> Self {
        // SAFETY: `self` holds a live handle; the copy is independently owned.
        let c_options = unsafe { sys::tf_options_clone(self.c_options) };
        Self { c_options }
    }
}

impl Drop for TensorOptions {
    fn drop(&mut self) {
        // SAFETY: the handle is owned by this value and released once.
        unsafe { sys::tf_options_free(self.c_options) };
    }
}

impl fmt::Debug for TensorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_native(f, self.to_native_string())
    }
}
