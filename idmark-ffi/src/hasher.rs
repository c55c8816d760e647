//! The foreign-call protocol for one digest computation.

use std::ffi::{CString, c_char};
use std::ptr::NonNull;

use tracing::debug;

use crate::guard::ForeignStr;

/// C ABI digest entry point: identity string and timestamp in, owned digest
/// string (or null for failure) out.
pub type HashFn = unsafe extern "C" fn(*const c_char, u64) -> *mut c_char;

/// C ABI release function for strings returned by a [`HashFn`].
pub type ReleaseFn = unsafe extern "C" fn(*mut c_char);

/// Outcome of one foreign digest call.
///
/// The foreign side only signals null or non-null; that channel is converted
/// to this variant at the boundary and goes no further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutcome {
    /// The digest, copied into locally owned memory.
    Digest(String),
    /// The foreign routine returned null: it rejected the input or could not
    /// produce a result. The two cases are indistinguishable at this layer.
    Failure,
}

/// Handle on a foreign digest routine: the hash entry point and its paired
/// release function.
///
/// Plain function pointers, so the handle is `Copy` and shared freely across
/// request tasks. Calls are not serialized; the entry points must be
/// reentrant.
#[derive(Clone, Copy, Debug)]
pub struct ForeignHasher {
    hash: HashFn,
    release: ReleaseFn,
}

impl ForeignHasher {
    /// Builds a handle from a hash entry point and its paired release
    /// function.
    pub fn new(hash: HashFn, release: ReleaseFn) -> Self {
        Self { hash, release }
    }

    /// Computes the digest of `(email, timestamp)` across the boundary.
    ///
    /// The email is copied into a null-terminated buffer owned by exactly
    /// this call; it is dropped when the call returns, on success and
    /// failure alike. A non-null result is copied out and released exactly
    /// once; null maps to [`HashOutcome::Failure`].
    pub fn hash_identity(&self, email: &str, timestamp: u64) -> HashOutcome {
        // An interior NUL cannot be represented in a null-terminated string;
        // such input never reaches the foreign routine.
        let Ok(c_email) = CString::new(email) else {
            debug!("identity contains an interior NUL, not crossing the boundary");
            return HashOutcome::Failure;
        };

        let raw = unsafe { (self.hash)(c_email.as_ptr(), timestamp) };

        match NonNull::new(raw) {
            None => {
                debug!("foreign digest routine signaled failure");
                HashOutcome::Failure
            }
            Some(ptr) => {
                let result = unsafe { ForeignStr::from_raw(ptr, self.release) };
                HashOutcome::Digest(result.to_owned_lossy())
            }
        }
    }
}
