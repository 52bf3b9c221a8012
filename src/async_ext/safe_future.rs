//! Future wrapper that settles an already-pending operation into a
//! [`SafeResult`].

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::run::RunConfig;
use crate::types::{RawError, SafeResult};

pin_project! {
    /// A Future that turns the outcome of an inner fallible future into a
    /// [`SafeResult`].
    ///
    /// Every poll of the inner future runs under `catch_unwind`, so both an
    /// `Err` output and a panic during polling settle into a failure using
    /// the wrapper's [`RunConfig`]. The inner future is never polled again
    /// once it has panicked.
    ///
    /// # Cancel Safety
    ///
    /// `SafeFuture` is cancel-safe if the inner future is cancel-safe.
    /// Dropping it simply drops the inner future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safetry::safe_await;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let result = safe_await(async { Err::<i32, _>("rejected") }).await;
    /// assert_eq!(result.unwrap_err().message(), "rejected");
    /// # });
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct SafeFuture<Fut> {
        #[pin]
        future: Fut,
        config: RunConfig,
        settled: bool,
    }
}

impl<Fut> SafeFuture<Fut> {
    /// Wraps `future`, settling its failure with `config`.
    #[inline]
    pub fn new(future: Fut, config: RunConfig) -> Self {
        Self { future, config, settled: false }
    }

    /// Returns the configuration used to settle failures.
    #[inline]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}

impl<Fut, T, R> Future for SafeFuture<Fut>
where
    Fut: Future<Output = Result<T, R>>,
    R: Into<RawError>,
{
    type Output = SafeResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.settled, "SafeFuture polled after completion");

        let future = this.future;
        let raw = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(Ok(value))) => {
                *this.settled = true;
                return Poll::Ready(Ok(value));
            },
            Ok(Poll::Ready(Err(raw))) => raw.into(),
            Err(payload) => RawError::Panic(payload),
        };

        *this.settled = true;
        Poll::Ready(Err(this.config.settle(raw)))
    }
}

impl<Fut, T, R> FusedFuture for SafeFuture<Fut>
where
    Fut: Future<Output = Result<T, R>>,
    R: Into<RawError>,
{
    fn is_terminated(&self) -> bool {
        self.settled
    }
}
