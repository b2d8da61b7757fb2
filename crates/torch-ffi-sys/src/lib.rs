//! Raw declarations for the libtorch C ABI shim in `csrc/torch_ffi.cpp`.
//!
//! Everything here is a direct mirror of `csrc/torch_ffi.h`. Functions that can
//! raise return a [`tf_error`]: null on success, otherwise the native
//! exception's `what()` text, owned by the caller and released with
//! [`tf_string_free`]. Linkage against `c10` and `torch_cpu` is emitted by the
//! build script (paths resolved by `torch-ffi-build`); there is no runtime
//! loading.
#![allow(non_camel_case_types)]

use std::marker::{PhantomData, PhantomPinned};
use std::os::raw::c_char;

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _data: [u8; 0],
                _marker: PhantomData<(*mut u8, PhantomPinned)>,
            }
        )*
    };
}

opaque!(tf_tensor_options, tf_tensor, tf_scalar);

pub type tf_error = *mut c_char;

pub const TF_INDEX_NONE: i32 = 0;
pub const TF_INDEX_ELLIPSIS: i32 = 1;
pub const TF_INDEX_INTEGER: i32 = 2;
pub const TF_INDEX_BOOLEAN: i32 = 3;
pub const TF_INDEX_SLICE: i32 = 4;
pub const TF_INDEX_TENSOR: i32 = 5;

/// One `at::indexing::TensorIndex`. Only the fields relevant to `kind` are read.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct tf_indexer {
    pub kind: i32,
    pub integer: i64,
    pub boolean: bool,
    pub has_start: bool,
    pub start: i64,
    pub has_stop: bool,
    pub stop: i64,
    pub step: i64,
    pub tensor: *const tf_tensor,
}

impl tf_indexer {
    pub const fn empty(kind: i32) -> Self {
        Self {
            kind,
            integer: 0,
            boolean: false,
            has_start: false,
            start: 0,
            has_stop: false,
            stop: 0,
            step: 1,
            tensor: std::ptr::null(),
        }
    }
}

extern "C" {
    pub fn tf_string_free(s: *mut c_char);

    pub fn tf_options_new() -> *mut tf_tensor_options;
    pub fn tf_options_clone(options: *const tf_tensor_options) -> *mut tf_tensor_options;
    pub fn tf_options_dtype(
        options: *const tf_tensor_options,
        scalar_type: i32,
    ) -> *mut tf_tensor_options;
    pub fn tf_options_free(options: *mut tf_tensor_options);
    pub fn tf_options_to_string(
        options: *const tf_tensor_options,
        out: *mut *mut c_char,
    ) -> tf_error;

    pub fn tf_scalar_from_i64(value: i64) -> *mut tf_scalar;
    pub fn tf_scalar_from_u64(value: u64) -> *mut tf_scalar;
    pub fn tf_scalar_from_f64(value: f64) -> *mut tf_scalar;
    pub fn tf_scalar_from_bool(value: bool) -> *mut tf_scalar;
    pub fn tf_scalar_free(scalar: *mut tf_scalar);

    pub fn tf_tensor_new() -> *mut tf_tensor;
    pub fn tf_tensor_clone_handle(this: *const tf_tensor) -> *mut tf_tensor;
    pub fn tf_tensor_free(this: *mut tf_tensor);
    pub fn tf_tensor_is_same(this: *const tf_tensor, other: *const tf_tensor) -> bool;
    pub fn tf_tensor_reset(this: *mut tf_tensor);
    pub fn tf_tensor_to_string(this: *const tf_tensor, out: *mut *mut c_char) -> tf_error;
    pub fn tf_tensor_get_options(
        this: *const tf_tensor,
        out: *mut *mut tf_tensor_options,
    ) -> tf_error;

    pub fn tf_eye(n: i64, out: *mut *mut tf_tensor) -> tf_error;
    pub fn tf_eye_options(
        n: i64,
        options: *const tf_tensor_options,
        out: *mut *mut tf_tensor,
    ) -> tf_error;
    pub fn tf_zeros(
        sizes: *const i64,
        len: usize,
        options: *const tf_tensor_options,
        out: *mut *mut tf_tensor,
    ) -> tf_error;
    pub fn tf_ones(
        sizes: *const i64,
        len: usize,
        options: *const tf_tensor_options,
        out: *mut *mut tf_tensor,
    ) -> tf_error;

    pub fn tf_tensor_defined(this: *const tf_tensor, out: *mut bool) -> tf_error;
    pub fn tf_tensor_dim(this: *const tf_tensor, out: *mut i64) -> tf_error;
    pub fn tf_tensor_ndimension(this: *const tf_tensor, out: *mut i64) -> tf_error;
    pub fn tf_tensor_nbytes(this: *const tf_tensor, out: *mut usize) -> tf_error;
    pub fn tf_tensor_numel(this: *const tf_tensor, out: *mut i64) -> tf_error;
    pub fn tf_tensor_itemsize(this: *const tf_tensor, out: *mut usize) -> tf_error;
    pub fn tf_tensor_element_size(this: *const tf_tensor, out: *mut i64) -> tf_error;
    pub fn tf_tensor_has_storage(this: *const tf_tensor, out: *mut bool) -> tf_error;
    pub fn tf_tensor_get_device(this: *const tf_tensor, out: *mut i64) -> tf_error;
    pub fn tf_tensor_sizes(this: *const tf_tensor, out: *mut i64, len: usize) -> tf_error;
    pub fn tf_tensor_item_f64(this: *const tf_tensor, out: *mut f64) -> tf_error;
    pub fn tf_tensor_item_i64(this: *const tf_tensor, out: *mut i64) -> tf_error;
    pub fn tf_tensor_item_bool(this: *const tf_tensor, out: *mut bool) -> tf_error;

    pub fn tf_tensor_is_cuda(this: *const tf_tensor, out: *mut bool) -> tf_error;
    pub fn tf_tensor_is_hip(this: *const tf_tensor, out: *mut bool) -> tf_error;
    pub fn tf_tensor_is_sparse(this: *const tf_tensor, out: *mut bool) -> tf_error;
    pub fn tf_tensor_is_mkldnn(this: *const tf_tensor, out: *mut bool) -> tf_error;
    pub fn tf_tensor_is_vulkan(this: *const tf_tensor, out: *mut bool) -> tf_error;
    pub fn tf_tensor_is_quantized(this: *const tf_tensor, out: *mut bool) -> tf_error;
    pub fn tf_tensor_is_meta(this: *const tf_tensor, out: *mut bool) -> tf_error;

    pub fn tf_tensor_index(
        this: *const tf_tensor,
        indices: *const tf_indexer,
        len: usize,
        out: *mut *mut tf_tensor,
    ) -> tf_error;

    pub fn tf_tensor_index_put1_scalar(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        value: *const tf_scalar,
    ) -> tf_error;
    pub fn tf_tensor_index_put2_scalar(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        value: *const tf_scalar,
    ) -> tf_error;
    pub fn tf_tensor_index_put3_scalar(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        i2: *const tf_indexer,
        value: *const tf_scalar,
    ) -> tf_error;
    pub fn tf_tensor_index_put4_scalar(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        i2: *const tf_indexer,
        i3: *const tf_indexer,
        value: *const tf_scalar,
    ) -> tf_error;
    pub fn tf_tensor_index_put5_scalar(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        i2: *const tf_indexer,
        i3: *const tf_indexer,
        i4: *const tf_indexer,
        value: *const tf_scalar,
    ) -> tf_error;
    pub fn tf_tensor_index_put6_scalar(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        i2: *const tf_indexer,
        i3: *const tf_indexer,
        i4: *const tf_indexer,
        i5: *const tf_indexer,
        value: *const tf_scalar,
    ) -> tf_error;

    pub fn tf_tensor_index_put1_tensor(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        value: *const tf_tensor,
    ) -> tf_error;
    pub fn tf_tensor_index_put2_tensor(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        value: *const tf_tensor,
    ) -> tf_error;
    pub fn tf_tensor_index_put3_tensor(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        i2: *const tf_indexer,
        value: *const tf_tensor,
    ) -> tf_error;
    pub fn tf_tensor_index_put4_tensor(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        i2: *const tf_indexer,
        i3: *const tf_indexer,
        value: *const tf_tensor,
    ) -> tf_error;
    pub fn tf_tensor_index_put5_tensor(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        i2: *const tf_indexer,
        i3: *const tf_indexer,
        i4: *const tf_indexer,
        value: *const tf_tensor,
    ) -> tf_error;
    pub fn tf_tensor_index_put6_tensor(
        this: *mut tf_tensor,
        i0: *const tf_indexer,
        i1: *const tf_indexer,
        i2: *const tf_indexer,
        i3: *const tf_indexer,
        i4: *const tf_indexer,
        i5: *const tf_indexer,
        value: *const tf_tensor,
    ) -> tf_error;

    pub fn tf_tensor_neg(this: *const tf_tensor, out: *mut *mut tf_tensor) -> tf_error;
    pub fn tf_tensor_bitwise_not(this: *const tf_tensor, out: *mut *mut tf_tensor) -> tf_error;

    pub fn tf_tensor_iadd_tensor(this: *mut tf_tensor, other: *const tf_tensor) -> tf_error;
    pub fn tf_tensor_iadd_scalar(this: *mut tf_tensor, other: *const tf_scalar) -> tf_error;
    pub fn tf_tensor_isub_tensor(this: *mut tf_tensor, other: *const tf_tensor) -> tf_error;
    pub fn tf_tensor_isub_scalar(this: *mut tf_tensor, other: *const tf_scalar) -> tf_error;
    pub fn tf_tensor_imul_tensor(this: *mut tf_tensor, other: *const tf_tensor) -> tf_error;
    pub fn tf_tensor_imul_scalar(this: *mut tf_tensor, other: *const tf_scalar) -> tf_error;
    pub fn tf_tensor_idiv_tensor(this: *mut tf_tensor, other: *const tf_tensor) -> tf_error;
    pub fn tf_tensor_idiv_scalar(this: *mut tf_tensor, other: *const tf_scalar) -> tf_error;
    pub fn tf_tensor_iand_tensor(this: *mut tf_tensor, other: *const tf_tensor) -> tf_error;
    pub fn tf_tensor_iand_scalar(this: *mut tf_tensor, other: *const tf_scalar) -> tf_error;
    pub fn tf_tensor_ior_tensor(this: *mut tf_tensor, other: *const tf_tensor) -> tf_error;
    pub fn tf_tensor_ior_scalar(this: *mut tf_tensor, other: *const tf_scalar) -> tf_error;
    pub fn tf_tensor_ixor_tensor(this: *mut tf_tensor, other: *const tf_tensor) -> tf_error;
    pub fn tf_tensor_ixor_scalar(this: *mut tf_tensor, other: *const tf_scalar) -> tf_error;
}
