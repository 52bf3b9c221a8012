//! Configuration for the execution wrapper.

use std::fmt;
use std::sync::Arc;

use crate::types::{Error, RawError};

/// Caller-supplied conversion from a raw failure to an [`Error`].
pub type ErrorTransform = Arc<dyn Fn(RawError) -> Error + Send + Sync + 'static>;

/// Options controlling how failures are turned into [`Error`] values.
///
/// The default configuration normalizes raw failures and leaves stacks
/// alone. A configuration is cheap to clone and can be shared between any
/// number of concurrent runs.
///
/// # Examples
///
/// ```
/// use safetry::{Error, RunConfig};
///
/// let config = RunConfig::new()
///     .capture_stack(true)
///     .error_transform(|raw| Error::new(format!("wrapped {}", raw.kind())));
///
/// let result = config.call(|| Err::<(), _>("boom"));
/// let err = result.unwrap_err();
/// assert_eq!(err.message(), "wrapped text");
/// assert!(err.has_stack());
/// ```
#[derive(Clone, Default)]
pub struct RunConfig {
    capture_stack: bool,
    error_transform: Option<ErrorTransform>,
}

impl RunConfig {
    /// Creates the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures a stack trace on failures whose error has none.
    #[must_use]
    #[inline]
    pub fn capture_stack(mut self, enabled: bool) -> Self {
        self.capture_stack = enabled;
        self
    }

    /// Replaces normalization with `transform`.
    ///
    /// The transform's output is used as-is. If the transform panics, the
    /// panic is not caught and reaches the caller of the run.
    #[must_use]
    pub fn error_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(RawError) -> Error + Send + Sync + 'static,
    {
        self.error_transform = Some(Arc::new(transform));
        self
    }

    /// Returns whether stack capture is enabled.
    #[inline]
    pub fn captures_stack(&self) -> bool {
        self.capture_stack
    }

    /// Returns whether a custom error transform is installed.
    #[inline]
    pub fn has_error_transform(&self) -> bool {
        self.error_transform.is_some()
    }

    /// Turns a raw failure into the final [`Error`].
    pub(crate) fn settle(&self, raw: RawError) -> Error {
        #[cfg(feature = "tracing")]
        let kind = raw.kind();

        let error = match &self.error_transform {
            Some(transform) => transform(raw),
            None => raw.normalize(),
        };

        let error = if self.capture_stack && !error.has_stack() {
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "safetry::run", "capturing stack for settled failure");
            error.capture_stack()
        } else {
            error
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "safetry::run",
            raw_kind = kind,
            transformed = self.error_transform.is_some(),
            error = %error,
            "operation failed; settled into failure"
        );

        error
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("capture_stack", &self.capture_stack)
            .field("error_transform", &self.error_transform.as_ref().map(|_| ".."))
            .finish()
    }
}
