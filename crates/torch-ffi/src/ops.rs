//! Unary and compound-assignment operators.
//!
//! The named methods return the native failure as `Err`. The `std::ops` forms
//! cannot return a `Result`; they panic with the unaltered native message.

use std::ops::{
    AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, MulAssign, Neg, Not,
    SubAssign,
};

use torch_ffi_sys as sys;

use crate::error::{check, Result};
use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Right-hand side of an in-place operator or the value of an `index_put`:
/// either a tensor handle or a scalar.
#[derive(Debug)]
pub enum Operand<'a> {
    Tensor(&'a Tensor),
    Scalar(Scalar),
}

impl<'a> From<&'a Tensor> for Operand<'a> {
    fn from(tensor: &'a Tensor) -> Self {
        Operand::Tensor(tensor)
    }
}

impl From<Scalar> for Operand<'_> {
    fn from(scalar: Scalar) -> Self {
        Operand::Scalar(scalar)
    }
}

macro_rules! operand_from_scalar {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Operand<'_> {
                fn from(value: $ty) -> Self {
                    Operand::Scalar(Scalar::from(value))
                }
            }
        )+
    };
}

operand_from_scalar!(i64, i32, i16, i8, u64, u32, u16, u8, isize, usize, f64, f32, bool);

macro_rules! compound {
    ($($(#[$meta:meta])* $name:ident, $tensor_ffi:ident, $scalar_ffi:ident, $trait:ident :: $method:ident;)+) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name<'a>(&mut self, other: impl Into<Operand<'a>>) -> Result<()> {
                    let status = match other.into() {
                        // SAFETY: both handles are live; aliasing is allowed natively.
                        Operand::Tensor(other) => unsafe {
                            sys::$tensor_ffi(self.as_mut_ptr(), other.as_ptr())
                        },
                        // SAFETY: `self` and the scalar are live for the call.
                        Operand::Scalar(other) => unsafe {
                            sys::$scalar_ffi(self.as_mut_ptr(), other.as_ptr())
                        },
                    };
                    check(stringify!($name), status)
                }
            )+
        }

        $(
            impl<'a, T: Into<Operand<'a>>> $trait<T> for Tensor {
                fn $method(&mut self, rhs: T) {
                    if let Err(err) = self.$name(rhs) {
                        panic!("{err}");
                    }
                }
            }
        )+
    };
}

compound! {
    /// `operator+=`.
    iadd, tf_tensor_iadd_tensor, tf_tensor_iadd_scalar, AddAssign::add_assign;
    /// `operator-=`.
    isub, tf_tensor_isub_tensor, tf_tensor_isub_scalar, SubAssign::sub_assign;
    /// `operator*=`.
    imul, tf_tensor_imul_tensor, tf_tensor_imul_scalar, MulAssign::mul_assign;
    /// `operator/=`.
    idiv, tf_tensor_idiv_tensor, tf_tensor_idiv_scalar, DivAssign::div_assign;
    /// `operator&=`.
    iand, tf_tensor_iand_tensor, tf_tensor_iand_scalar, BitAndAssign::bitand_assign;
    /// `operator|=`.
    ior, tf_tensor_ior_tensor, tf_tensor_ior_scalar, BitOrAssign::bitor_assign;
    /// `operator^=`.
    ixor, tf_tensor_ixor_tensor, tf_tensor_ixor_scalar, BitXorAssign::bitxor_assign;
}

impl Tensor {
    /// Unary `operator-`.
    pub fn neg(&self) -> Result<Tensor> {
        // SAFETY: `self` is live; `out` is supplied by `from_call`.
        Tensor::from_call("neg", |out| unsafe { sys::tf_tensor_neg(self.as_ptr(), out) })
    }

    /// `operator~`.
    pub fn bitwise_not(&self) -> Result<Tensor> {
        // SAFETY: `self` is live; `out` is supplied by `from_call`.
        Tensor::from_call("bitwise_not", |out| unsafe {
            sys::tf_tensor_bitwise_not(self.as_ptr(), out)
        })
    }
}

impl Neg for &Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        Tensor::neg(self).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Not for &Tensor {
    type Output = Tensor;

    fn not(self) -> Tensor {
        self.bitwise_not().unwrap_or_else(|err| panic!("{err}"))
    }
}
