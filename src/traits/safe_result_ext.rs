//! Extension trait for method-chained combinators on `Result` types.
//!
//! This module provides [`SafeResultExt`], which exposes the free-function
//! combinators as methods so a pipeline reads top to bottom.
//!
//! # Examples
//!
//! ```
//! use safetry::{safe_catch, SafeResultExt};
//!
//! let greeting = safe_catch(|| "hello".to_uppercase())
//!     .map_value(|s| format!("Processed: {s}"))
//!     .fallback("Default".to_string());
//!
//! assert_eq!(greeting, "Processed: HELLO");
//! ```

use std::any::Any;

use crate::combinators;

/// Extension trait adding the combinator set to `Result` types.
///
/// The methods mirror the free functions in [`combinators`](crate::combinators)
/// one for one; pick whichever reads better at the call site.
///
/// # Examples
///
/// ## Logging and recovering
///
/// ```
/// use safetry::{safe_call, SafeResultExt};
///
/// let mut log = Vec::new();
/// let port = safe_call(|| "eighty".parse::<u16>())
///     .tap_error(|e| log.push(format!("bad port: {e}")))
///     .fallback(80);
///
/// assert_eq!(port, 80);
/// assert_eq!(log.len(), 1);
/// ```
///
/// ## Recovering from the error
///
/// ```
/// use safetry::{safe_call, SafeResultExt};
///
/// let value = safe_call(|| Err::<String, _>("boom"))
///     .fallback_with(|err| format!("Error handled: {}", err.message()));
///
/// assert_eq!(value, "Error handled: boom");
/// ```
pub trait SafeResultExt<T, E>: Sized {
    /// Calls `handler` with the error on failure and returns `self` unchanged.
    fn tap_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(&E);

    /// Transforms the success value, leaving a failure untouched.
    fn map_value<U, F>(self, mapper: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U;

    /// Transforms the error, leaving a success untouched.
    fn map_error<E2, F>(self, mapper: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2;

    /// Returns the success value, or `default` on failure.
    fn fallback(self, default: T) -> T;

    /// Returns the success value, or `default(error)` on failure.
    fn fallback_with<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T;

    /// Returns the success value, or raises the error as the panic payload.
    ///
    /// See [`unwrap`](crate::unwrap).
    fn unwrap_or_raise(self) -> T
    where
        E: Any + Send + 'static;
}

impl<T, E> SafeResultExt<T, E> for Result<T, E> {
    #[inline]
    fn tap_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(&E),
    {
        combinators::tap_error(self, handler)
    }

    #[inline]
    fn map_value<U, F>(self, mapper: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        combinators::map_value(self, mapper)
    }

    #[inline]
    fn map_error<E2, F>(self, mapper: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        combinators::map_error(self, mapper)
    }

    #[inline]
    fn fallback(self, default: T) -> T {
        combinators::fallback(self, default)
    }

    #[inline]
    fn fallback_with<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        combinators::fallback_with(self, default)
    }

    #[inline]
    #[track_caller]
    fn unwrap_or_raise(self) -> T
    where
        E: Any + Send + 'static,
    {
        combinators::unwrap(self)
    }
}
