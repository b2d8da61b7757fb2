use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_char;

use thiserror::Error;
use torch_ffi_sys as sys;

/// A failure raised inside libtorch.
///
/// `Display` is the native exception text exactly as libtorch produced it;
/// `op` only names the forwarding call that observed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TorchError {
    op: &'static str,
    message: String,
}

impl TorchError {
    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, TorchError>;

pub(crate) fn check(op: &'static str, status: sys::tf_error) -> Result<()> {
    if status.is_null() {
        return Ok(());
    }
    // SAFETY: a non-null status is a NUL-terminated string allocated by the shim
    // and handed over to us.
    let message = unsafe { take_string(status) };
    tracing::debug!(target: "torch_ffi", op, %message, "native call raised");
    Err(TorchError { op, message })
}

/// Writes a native rendering, or the native failure text when printing raised.
pub(crate) fn write_native(f: &mut fmt::Formatter<'_>, rendered: Result<String>) -> fmt::Result {
    match rendered {
        Ok(text) => f.write_str(&text),
        Err(err) => write!(f, "{err}"),
    }
}

/// Copies and releases a string allocated by the shim.
///
/// # Safety
/// `raw` must be a non-null, NUL-terminated string returned by the shim that
/// has not been freed yet.
pub(crate) unsafe fn take_string(raw: *mut c_char) -> String {
    let text = unsafe { CStr::from_ptr(raw) }
        .to_string_lossy()
        .into_owned();
    unsafe { sys::tf_string_free(raw) };
    text
}
