//! Async entry points of the execution wrapper.

use core::future::Future;
use std::panic::{self, AssertUnwindSafe};

use crate::run::RunConfig;
use crate::types::{RawError, SafeResult};

use super::safe_future::SafeFuture;

impl RunConfig {
    /// Invokes `operation` and awaits the future it returns.
    ///
    /// `operation` is called on the first poll. A panic while calling it, or
    /// while polling its future, settles into a failure just like an `Err`
    /// output does. The returned future owns a clone of this configuration.
    ///
    /// ```rust
    /// use safetry::RunConfig;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let config = RunConfig::new().capture_stack(true);
    /// let result = config.run(|| async { Err::<(), _>("boom") }).await;
    /// assert!(result.unwrap_err().has_stack());
    /// # });
    /// ```
    pub fn run<F, Fut, T, R>(&self, operation: F) -> impl Future<Output = SafeResult<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, R>>,
        R: Into<RawError>,
    {
        let config = self.clone();
        async move {
            match panic::catch_unwind(AssertUnwindSafe(operation)) {
                Ok(future) => SafeFuture::new(future, config).await,
                Err(payload) => Err(config.settle(RawError::Panic(payload))),
            }
        }
    }

    /// Awaits an already-pending fallible future.
    #[inline]
    pub fn await_future<Fut, T, R>(&self, future: Fut) -> SafeFuture<Fut>
    where
        Fut: Future<Output = Result<T, R>>,
        R: Into<RawError>,
    {
        SafeFuture::new(future, self.clone())
    }
}

/// Invokes an async operation with the default [`RunConfig`].
///
/// ```rust
/// use safetry::{fallback, safe_run};
///
/// async fn fetch(id: &str) -> Result<String, &'static str> {
///     if id == "invalid" { Err("Invalid ID") } else { Ok(format!("User {id}")) }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let user = safe_run(|| fetch("123")).await;
/// assert_eq!(fallback(user, "Unknown".to_string()), "User 123");
/// # });
/// ```
#[inline]
pub fn safe_run<F, Fut, T, R>(operation: F) -> impl Future<Output = SafeResult<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, R>>,
    R: Into<RawError>,
{
    RunConfig::default().run(operation)
}

/// Awaits an already-pending fallible future with the default [`RunConfig`].
#[inline]
pub fn safe_await<Fut, T, R>(future: Fut) -> SafeFuture<Fut>
where
    Fut: Future<Output = Result<T, R>>,
    R: Into<RawError>,
{
    RunConfig::default().await_future(future)
}
