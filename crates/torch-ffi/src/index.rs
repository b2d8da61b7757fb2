//! Advanced indexing: `index` with any number of indexers, and the fixed-arity
//! `index_put1` ... `index_put6` family.
//!
//! The native `index_put_` is reached through a brace-enclosed index list
//! built at the shim call site, which needs one entry point per arity. The
//! family stops at [`INDEX_PUT_MAX_ARITY`]; a seventh index does not compile.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use torch_ffi_sys as sys;

use crate::error::{check, Result};
use crate::ops::Operand;
use crate::tensor::Tensor;

/// Highest number of indices `index_put*` accepts (batch, time, channel,
/// height, width, depth).
pub const INDEX_PUT_MAX_ARITY: usize = 6;

/// One `at::indexing::TensorIndex`.
#[derive(Debug, Clone, Copy)]
pub enum TensorIndexer<'a> {
    None,
    Ellipsis,
    Integer(i64),
    Boolean(bool),
    Slice {
        start: Option<i64>,
        stop: Option<i64>,
        step: i64,
    },
    Tensor(&'a Tensor),
}

impl TensorIndexer<'_> {
    pub fn slice(start: Option<i64>, stop: Option<i64>, step: i64) -> Self {
        TensorIndexer::Slice { start, stop, step }
    }

    fn to_raw(self) -> sys::tf_indexer {
        match self {
            TensorIndexer::None => sys::tf_indexer::empty(sys::TF_INDEX_NONE),
            TensorIndexer::Ellipsis => sys::tf_indexer::empty(sys::TF_INDEX_ELLIPSIS),
            TensorIndexer::Integer(integer) => sys::tf_indexer {
                integer,
                ..sys::tf_indexer::empty(sys::TF_INDEX_INTEGER)
            },
            TensorIndexer::Boolean(boolean) => sys::tf_indexer {
                boolean,
                ..sys::tf_indexer::empty(sys::TF_INDEX_BOOLEAN)
            },
            TensorIndexer::Slice { start, stop, step } => sys::tf_indexer {
                has_start: start.is_some(),
                start: start.unwrap_or_default(),
                has_stop: stop.is_some(),
                stop: stop.unwrap_or_default(),
                step,
                ..sys::tf_indexer::empty(sys::TF_INDEX_SLICE)
            },
            TensorIndexer::Tensor(tensor) => sys::tf_indexer {
                tensor: tensor.as_ptr(),
                ..sys::tf_indexer::empty(sys::TF_INDEX_TENSOR)
            },
        }
    }
}

impl From<i64> for TensorIndexer<'_> {
    fn from(index: i64) -> Self {
        TensorIndexer::Integer(index)
    }
}

impl From<bool> for TensorIndexer<'_> {
    fn from(mask: bool) -> Self {
        TensorIndexer::Boolean(mask)
    }
}

impl<'a> From<&'a Tensor> for TensorIndexer<'a> {
    fn from(tensor: &'a Tensor) -> Self {
        TensorIndexer::Tensor(tensor)
    }
}

impl From<Range<i64>> for TensorIndexer<'_> {
    fn from(range: Range<i64>) -> Self {
        TensorIndexer::slice(Some(range.start), Some(range.end), 1)
    }
}

impl From<RangeFrom<i64>> for TensorIndexer<'_> {
    fn from(range: RangeFrom<i64>) -> Self {
        TensorIndexer::slice(Some(range.start), None, 1)
    }
}

impl From<RangeTo<i64>> for TensorIndexer<'_> {
    fn from(range: RangeTo<i64>) -> Self {
        TensorIndexer::slice(None, Some(range.end), 1)
    }
}

impl From<RangeFull> for TensorIndexer<'_> {
    fn from(_: RangeFull) -> Self {
        TensorIndexer::slice(None, None, 1)
    }
}

macro_rules! index_put {
    ($($(#[$meta:meta])* $name:ident => $scalar_ffi:ident, $tensor_ffi:ident, ($($idx:ident),+);)+) => {
        $(
            $(#[$meta])*
            pub fn $name<'a>(
                &mut self,
                $($idx: impl Into<TensorIndexer<'a>>,)+
                value: impl Into<Operand<'a>>,
            ) -> Result<()> {
                $(let $idx = $idx.into().to_raw();)+
                let status = match value.into() {
                    // SAFETY: indexers and value outlive the call; `self` is live.
                    Operand::Scalar(value) => unsafe {
                        sys::$scalar_ffi(self.as_mut_ptr(), $(&$idx,)+ value.as_ptr())
                    },
                    // SAFETY: as above.
                    Operand::Tensor(value) => unsafe {
                        sys::$tensor_ffi(self.as_mut_ptr(), $(&$idx,)+ value.as_ptr())
                    },
                };
                check(stringify!($name), status)
            }
        )+
    };
}

impl Tensor {
    /// Native `index`: a new handle, a view of `self` wherever libtorch's
    /// rules make it one.
    pub fn index(&self, indices: &[TensorIndexer<'_>]) -> Result<Tensor> {
        let raw = indices
            .iter()
            .map(|index| index.to_raw())
            .collect::<Vec<_>>();
        // SAFETY: `raw` and any tensors it points at outlive the call.
        Tensor::from_call("index", |out| unsafe {
            sys::tf_tensor_index(self.as_ptr(), raw.as_ptr(), raw.len(), out)
        })
    }

    index_put! {
        /// `index_put_({i0}, value)`: writes through to storage in place.
        index_put1 => tf_tensor_index_put1_scalar, tf_tensor_index_put1_tensor, (i0);
        index_put2 => tf_tensor_index_put2_scalar, tf_tensor_index_put2_tensor, (i0, i1);
        index_put3 => tf_tensor_index_put3_scalar, tf_tensor_index_put3_tensor, (i0, i1, i2);
        index_put4 => tf_tensor_index_put4_scalar, tf_tensor_index_put4_tensor,
            (i0, i1, i2, i3);
        index_put5 => tf_tensor_index_put5_scalar, tf_tensor_index_put5_tensor,
            (i0, i1, i2, i3, i4);
        index_put6 => tf_tensor_index_put6_scalar, tf_tensor_index_put6_tensor,
            (i0, i1, i2, i3, i4, i5);
    }
}
