//! Fallbacks for results that are still pending.

use core::future::Future;

use crate::combinators;

/// Awaits `pending`, returning its value or `default` on failure.
///
/// ```rust
/// use safetry::{failure, fallback_async, Error};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let pending = async { failure::<String, Error>(Error::new("async error")) };
/// assert_eq!(fallback_async(pending, "async default".to_string()).await, "async default");
/// # });
/// ```
pub async fn fallback_async<Fut, T, E>(pending: Fut, default: T) -> T
where
    Fut: Future<Output = Result<T, E>>,
{
    combinators::fallback(pending.await, default)
}

/// Awaits `pending`, calling `default` synchronously with the error on
/// failure.
pub async fn fallback_async_with<Fut, T, E, F>(pending: Fut, default: F) -> T
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(E) -> T,
{
    combinators::fallback_with(pending.await, default)
}

/// Awaits `pending`, then on failure awaits the future produced by
/// `default` from the error.
///
/// ```rust
/// use safetry::{fallback_async_then, safe_run};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let pending = safe_run(|| async { Err::<String, _>("async error") });
/// let value = fallback_async_then(pending, |err| async move {
///     format!("Recovered from: {}", err.message())
/// })
/// .await;
///
/// assert_eq!(value, "Recovered from: async error");
/// # });
/// ```
pub async fn fallback_async_then<Fut, T, E, F, DFut>(pending: Fut, default: F) -> T
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(E) -> DFut,
    DFut: Future<Output = T>,
{
    match pending.await {
        Ok(value) => value,
        Err(error) => default(error).await,
    }
}
