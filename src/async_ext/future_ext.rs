//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.safe()` and the `fallback_async*` family as methods,
//! mirroring the sync [`SafeResultExt`](crate::traits::SafeResultExt) trait.

use core::future::Future;

use crate::run::RunConfig;
use crate::types::RawError;

use super::fallback;
use super::safe_future::SafeFuture;

/// Extension trait for settling and recovering async Result-returning
/// futures.
///
/// # Examples
///
/// ## Settling a pending operation
///
/// ```rust
/// use safetry::prelude_async::*;
///
/// async fn load(path: &str) -> Result<String, std::io::Error> {
///     Err(std::io::Error::new(std::io::ErrorKind::NotFound, format!("{path} not found")))
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let result = load("config.toml").safe().await;
/// assert_eq!(result.unwrap_err().message(), "config.toml not found");
/// # });
/// ```
///
/// ## Recovering with a default
///
/// ```rust
/// use safetry::prelude_async::*;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let value = async { Err::<u16, &str>("bad port") }
///     .fallback_async_with(|_| 8080)
///     .await;
/// assert_eq!(value, 8080);
/// # });
/// ```
pub trait FutureSafeResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Settles this future with the default [`RunConfig`].
    ///
    /// Equivalent to [`safe_await`](crate::safe_await).
    fn safe(self) -> SafeFuture<Self>
    where
        E: Into<RawError>,
    {
        SafeFuture::new(self, RunConfig::default())
    }

    /// Settles this future with `config`.
    fn safe_with(self, config: &RunConfig) -> SafeFuture<Self>
    where
        E: Into<RawError>,
    {
        SafeFuture::new(self, config.clone())
    }

    /// Awaits this future, returning its value or `default` on failure.
    fn fallback_async(self, default: T) -> impl Future<Output = T> {
        fallback::fallback_async(self, default)
    }

    /// Awaits this future, calling `default` with the error on failure.
    fn fallback_async_with<F>(self, default: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> T,
    {
        fallback::fallback_async_with(self, default)
    }

    /// Awaits this future, then awaits `default(error)` on failure.
    fn fallback_async_then<F, DFut>(self, default: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> DFut,
        DFut: Future<Output = T>,
    {
        fallback::fallback_async_then(self, default)
    }
}

impl<Fut, T, E> FutureSafeResultExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}
