//! Scoped ownership of foreign-allocated strings.

use std::ffi::{CStr, c_char};
use std::ptr::NonNull;

use crate::hasher::ReleaseFn;

/// Owns one non-null, null-terminated string allocated by the foreign
/// routine.
///
/// The pointer is released through the paired release function exactly once,
/// when the guard drops. Ties the release to scope exit rather than to
/// matched free calls in control flow.
pub struct ForeignStr {
    ptr: NonNull<c_char>,
    release: ReleaseFn,
}

impl ForeignStr {
    /// Takes ownership of `ptr`, to be released with `release` on drop.
    ///
    /// # Safety
    /// `ptr` must be a live null-terminated string allocated by the foreign
    /// routine paired with `release`, and must not be released anywhere
    /// else.
    pub unsafe fn from_raw(ptr: NonNull<c_char>, release: ReleaseFn) -> Self {
        Self { ptr, release }
    }

    /// Copies the foreign bytes into an owned `String`, replacing invalid
    /// UTF-8 rather than trusting it. The copy outlives the foreign buffer.
    pub fn to_owned_lossy(&self) -> String {
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }
            .to_string_lossy()
            .into_owned()
    }
}

impl Drop for ForeignStr {
    fn drop(&mut self) {
        unsafe { (self.release)(self.ptr.as_ptr()) };
    }
}
