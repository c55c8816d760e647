//! Safe wrapper around the C ABI identity digest routine.
//!
//! The foreign contract is narrow: a hash entry point taking a
//! null-terminated identity string and a 64-bit timestamp, returning either
//! an owned null-terminated digest string or null for failure, plus a
//! release function for non-null results.
//!
//! This crate owns every crossing of that boundary:
//! - input buffers live exactly as long as the call that uses them;
//! - a non-null result is copied into locally owned memory behind a scoped
//!   guard, then released through the paired release function;
//! - a null result is never dereferenced or released;
//! - every foreign allocation is released exactly once on every path,
//!   including early returns and unwinds.

mod guard;
mod hasher;

pub use hasher::{ForeignHasher, HashFn, HashOutcome, ReleaseFn};
