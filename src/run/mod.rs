//! Synchronous execution wrapper.
//!
//! Runs a unit of work exactly once and reports its outcome as a
//! [`SafeResult`]. Both an `Err` return and a panic count as failure; neither
//! escapes to the caller. The async counterparts live in
//! [`async_ext`](crate::async_ext).
//!
//! # Examples
//!
//! ```
//! use safetry::{safe_call, safe_catch};
//!
//! let parsed = safe_call(|| "42".parse::<i32>());
//! assert_eq!(parsed.unwrap(), 42);
//!
//! let panicked = safe_catch(|| -> i32 { panic!("boom") });
//! assert_eq!(panicked.unwrap_err().message(), "boom");
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::types::{RawError, SafeResult};

mod config;

pub use config::{ErrorTransform, RunConfig};

impl RunConfig {
    /// Runs a fallible operation, settling `Err` values and panics into an
    /// [`Error`](crate::Error).
    pub fn call<F, T, R>(&self, operation: F) -> SafeResult<T>
    where
        F: FnOnce() -> Result<T, R>,
        R: Into<RawError>,
    {
        match panic::catch_unwind(AssertUnwindSafe(operation)) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(raw)) => Err(self.settle(raw.into())),
            Err(payload) => Err(self.settle(RawError::Panic(payload))),
        }
    }

    /// Runs an operation that returns a plain value; only a panic counts as
    /// failure.
    pub fn catch<F, T>(&self, operation: F) -> SafeResult<T>
    where
        F: FnOnce() -> T,
    {
        panic::catch_unwind(AssertUnwindSafe(operation))
            .map_err(|payload| self.settle(RawError::Panic(payload)))
    }
}

/// Runs a fallible operation with the default [`RunConfig`].
///
/// ```
/// use safetry::{safe_call, Error};
///
/// let original = Error::new("boom");
/// let result = safe_call(|| Err::<(), _>(original.clone()));
/// assert_eq!(result.unwrap_err(), original);
/// ```
#[inline]
pub fn safe_call<F, T, R>(operation: F) -> SafeResult<T>
where
    F: FnOnce() -> Result<T, R>,
    R: Into<RawError>,
{
    RunConfig::default().call(operation)
}

/// Runs a plain-valued operation with the default [`RunConfig`].
///
/// ```
/// use safetry::safe_catch;
///
/// let result = safe_catch(|| "hello".to_uppercase());
/// assert_eq!(result.unwrap(), "HELLO");
/// ```
#[inline]
pub fn safe_catch<F, T>(operation: F) -> SafeResult<T>
where
    F: FnOnce() -> T,
{
    RunConfig::default().catch(operation)
}
