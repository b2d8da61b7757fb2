//! Forwarding bindings for libtorch's `TensorOptions`, `Tensor` and `Scalar`.
//!
//! Names and signatures follow the libtorch C++ API so its documentation
//! applies directly. Each method is a single blocking call into libtorch with
//! no buffering, copying or deferred execution added on this side:
//!
//! - [`TensorOptions`] is a value; factories take it by value.
//! - [`Tensor`] is a reference handle; clones alias the same storage and `==`
//!   is identity.
//! - Anything `Into<Scalar>` is accepted where libtorch takes a `c10::Scalar`.
//!
//! Native exceptions surface as [`TorchError`] carrying the native message
//! verbatim. libtorch (`c10` and `torch_cpu`) is linked at build time by
//! `torch-ffi-sys`; `torch-ffi-build` documents how the libraries are located.
//!
//! The libtorch rpath is embedded only in this workspace's own targets. A
//! binary in another crate has to add `-Wl,-rpath,<libtorch>/lib` itself (a
//! build script depending on `torch-ffi-sys` sees the directory as
//! `DEP_TORCH_CPU_LIB_DIR`) or run with the library path set.
//!
//! ```no_run
//! use torch_ffi::{eye, TensorIndexer};
//!
//! let mut identity = eye(3)?;
//! let alias = identity.clone();
//! identity += 1.0;
//! assert_eq!(alias.index(&[TensorIndexer::from(0i64), TensorIndexer::from(0i64)])?.item_f64()?, 2.0);
//! # Ok::<(), torch_ffi::TorchError>(())
//! ```

mod error;
mod factory;
mod index;
mod ops;
mod options;
mod scalar;
mod tensor;

pub use error::{Result, TorchError};
pub use factory::{eye, eye_with_options, ones, zeros};
pub use index::{TensorIndexer, INDEX_PUT_MAX_ARITY};
pub use ops::Operand;
pub use options::{Kind, TensorOptions};
pub use scalar::Scalar;
pub use tensor::Tensor;
