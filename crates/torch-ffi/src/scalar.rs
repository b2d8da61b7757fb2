use std::fmt;

use torch_ffi_sys as sys;

/// `c10::Scalar`, built by the native constructor for the host value.
///
/// Operations that take a scalar accept anything `Into<Scalar>`: signed
/// integers widen to `i64`, unsigned ones to `u64`, floats to `f64`, and
/// `bool` stays `bool`. A `u64` keeps its unsigned native tag, so values above
/// `i64::MAX` are not narrowed.
pub struct Scalar {
    c_scalar: *mut sys::tf_scalar,
}

// SAFETY: c10::Scalar is an immutable value once constructed.
unsafe impl Send for Scalar {}

impl Scalar {
    pub fn int(value: i64) -> Self {
        // SAFETY: scalar constructors take plain values and do not raise.
        Self::from_raw(unsafe { sys::tf_scalar_from_i64(value) })
    }

    pub fn uint(value: u64) -> Self {
        // SAFETY: as above.
        Self::from_raw(unsafe { sys::tf_scalar_from_u64(value) })
    }

    pub fn float(value: f64) -> Self {
        // SAFETY: as above.
        Self::from_raw(unsafe { sys::tf_scalar_from_f64(value) })
    }

    pub fn boolean(value: bool) -> Self {
        // SAFETY: as above.
        Self::from_raw(unsafe { sys::tf_scalar_from_bool(value) })
    }

    fn from_raw(c_scalar: *mut sys::tf_scalar) -> Self {
        Self { c_scalar }
    }

    pub(crate) fn as_ptr(&self) -> *const sys::tf_scalar {
        self.c_scalar
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        // SAFETY: the handle is owned by this value and released once.
        unsafe { sys::tf_scalar_free(self.c_scalar) };
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar").finish_non_exhaustive()
    }
}

macro_rules! scalar_from {
    ($ctor:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$ctor(<$wide>::from(value))
                }
            }
        )+
    };
}

scalar_from!(int as i64: i64, i32, i16, i8);
scalar_from!(uint as u64: u64, u32, u16, u8);
scalar_from!(float as f64: f64, f32);
scalar_from!(boolean as bool: bool);

// `From` is not implemented between pointer-sized and fixed-width integers;
// every supported target has pointers of at most 64 bits.
impl From<isize> for Scalar {
    fn from(value: isize) -> Self {
        Scalar::int(value as i64)
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        Scalar::uint(value as u64)
    }
}
