//! Constructors and variant checks for the two-variant outcome type.
//!
//! The outcome type is [`core::result::Result`]: `Ok(value)` is the success
//! variant and `Err(error)` the failure variant. Pattern matching on the
//! variant is the way to narrow; [`is_ok`] and [`is_error`] are plain
//! predicates for places where only the tag matters.
//!
//! # Examples
//!
//! ```
//! use safetry::{failure, is_error, is_ok, success, Error, SafeResult};
//!
//! let ok: SafeResult<i32> = success(42);
//! let err: SafeResult<i32> = failure(Error::new("nope"));
//!
//! assert!(is_ok(&ok));
//! assert!(is_error(&err));
//!
//! if let Ok(value) = ok {
//!     assert_eq!(value, 42);
//! }
//! ```

/// Wraps `value` in the success variant.
#[inline]
pub fn success<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Wraps `error` in the failure variant.
#[inline]
pub fn failure<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// Returns `true` iff `result` is the success variant.
#[inline]
pub fn is_ok<T, E>(result: &Result<T, E>) -> bool {
    matches!(result, Ok(_))
}

/// Returns `true` iff `result` is the failure variant.
#[inline]
pub fn is_error<T, E>(result: &Result<T, E>) -> bool {
    matches!(result, Err(_))
}
