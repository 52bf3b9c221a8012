//! Free-function combinators over results.
//!
//! Every combinator consumes its input and returns a new value; none mutates
//! a result in place. Only [`tap_error`] runs a side effect. Panics raised by
//! caller-supplied callbacks are never caught here.
//!
//! # Examples
//!
//! ```
//! use safetry::{map_error, safe_call, tap_error, Error};
//!
//! let mut seen = Vec::new();
//! let result = safe_call(|| "eighty".parse::<u16>());
//! let result = tap_error(result, |e| seen.push(e.message().to_string()));
//! let result = map_error(result, |e| Error::new(format!("bad port: {e}")));
//!
//! assert_eq!(result.unwrap_err().message(), "bad port: invalid digit found in string");
//! assert_eq!(seen, ["invalid digit found in string"]);
//! ```

use std::any::Any;

mod combine;

pub use combine::{combine, combine_iter, Combine};

/// Returns the success value, or raises the contained error.
///
/// The error is raised as the panic payload itself via
/// [`std::panic::panic_any`], so a surrounding [`safe_catch`](crate::safe_catch)
/// or [`safe_call`](crate::safe_call) recovers the very same error.
///
/// ```
/// use safetry::{failure, safe_catch, unwrap, Error, SafeResult};
///
/// let original = Error::new("boom");
/// let inner: SafeResult<i32> = failure(original.clone());
///
/// let recovered = safe_catch(|| unwrap(inner));
/// assert_eq!(recovered.unwrap_err(), original);
/// ```
#[inline]
#[track_caller]
pub fn unwrap<T, E>(result: Result<T, E>) -> T
where
    E: Any + Send + 'static,
{
    match result {
        Ok(value) => value,
        Err(error) => std::panic::panic_any(error),
    }
}

/// Calls `handler` with the error when `result` is a failure, then returns
/// `result` unchanged.
///
/// ```
/// use safetry::{failure, tap_error, Error, SafeResult};
///
/// let mut seen = Vec::new();
/// let result: SafeResult<()> = failure(Error::new("disk full"));
/// let result = tap_error(result, |e| seen.push(e.message().to_owned()));
///
/// assert!(result.is_err());
/// assert_eq!(seen, ["disk full"]);
/// ```
#[inline]
pub fn tap_error<T, E, F>(result: Result<T, E>, handler: F) -> Result<T, E>
where
    F: FnOnce(&E),
{
    if let Err(error) = &result {
        handler(error);
    }
    result
}

/// Transforms the success value; a failure passes through with the same
/// error and `mapper` is not invoked.
#[inline]
pub fn map_value<T, U, E, F>(result: Result<T, E>, mapper: F) -> Result<U, E>
where
    F: FnOnce(T) -> U,
{
    match result {
        Ok(value) => Ok(mapper(value)),
        Err(error) => Err(error),
    }
}

/// Transforms the error; a success passes through untouched and `mapper` is
/// not invoked.
///
/// ```
/// use safetry::{failure, map_error, Error, SafeResult};
///
/// let result: SafeResult<()> = failure(Error::new("timeout"));
/// let result = map_error(result, |e| Error::new(format!("fetch: {e}")));
/// assert_eq!(result.unwrap_err().message(), "fetch: timeout");
/// ```
#[inline]
pub fn map_error<T, E, E2, F>(result: Result<T, E>, mapper: F) -> Result<T, E2>
where
    F: FnOnce(E) -> E2,
{
    match result {
        Ok(value) => Ok(value),
        Err(error) => Err(mapper(error)),
    }
}

/// Returns the success value, or `default` on failure.
#[inline]
pub fn fallback<T, E>(result: Result<T, E>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(_) => default,
    }
}

/// Returns the success value, or the output of `default` called with the
/// error on failure. `default` is never called on success.
///
/// ```
/// use safetry::{fallback_with, safe_call};
///
/// let result = safe_call(|| Err::<String, _>("boom"));
/// let value = fallback_with(result, |err| format!("Error handled: {}", err.message()));
/// assert_eq!(value, "Error handled: boom");
/// ```
#[inline]
pub fn fallback_with<T, E, F>(result: Result<T, E>, default: F) -> T
where
    F: FnOnce(E) -> T,
{
    match result {
        Ok(value) => value,
        Err(error) => default(error),
    }
}
