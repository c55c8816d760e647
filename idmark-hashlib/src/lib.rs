//! C ABI exports for the IdMark identity digest.
//!
//! The digest of an identity is the BLAKE3 hex digest of
//! `"{email}:{timestamp}"`. Compiled as `cdylib`/`staticlib` for foreign
//! embedders and as `rlib` for in-workspace consumers.
//!
//! Both exports are pure functions with no global state and may be called
//! concurrently from any number of threads.

use std::ffi::{CStr, CString, c_char};

use blake3::Hasher;

/// Compute the identity digest for a null-terminated email and a Unix
/// timestamp in seconds.
///
/// Returns an owned, null-terminated string of 64 lowercase hex characters,
/// or null when `email` is null or not valid UTF-8.
///
/// # Safety
/// `email` must be null or point to a valid null-terminated string. A
/// non-null result must be released with [`free_str`] exactly once.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hash_identity(email: *const c_char, timestamp: u64) -> *mut c_char {
    if email.is_null() {
        return std::ptr::null_mut();
    }
    let email = match unsafe { CStr::from_ptr(email) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let mut hasher = Hasher::new();
    hasher.update(format!("{email}:{timestamp}").as_bytes());
    let hex = hasher.finalize().to_hex();

    // Hex output contains no interior NUL, so construction cannot fail.
    CString::new(hex.as_str()).unwrap_or_default().into_raw()
}

/// Release a string previously returned by [`hash_identity`]. Null is a
/// no-op.
///
/// # Safety
/// `s` must be null or a pointer obtained from [`hash_identity`] that has
/// not already been released.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_str(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(s));
    }
}
