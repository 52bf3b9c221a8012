//! The library's error kind.
//!
//! [`Error`] carries a human-readable message, an optional captured stack
//! trace, and an optional foreign cause. Every failure that passes through
//! the execution wrapper ends up as one of these.

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a foreign error kept as the cause of an [`Error`].
pub type SharedSource = Arc<dyn StdError + Send + Sync + 'static>;

/// Error value with a message, an optional stack trace and an optional cause.
///
/// `Error` is cheap to clone: the cause is reference counted, so clones share
/// the same underlying foreign error.
///
/// # Examples
///
/// ```
/// use safetry::Error;
///
/// let err = Error::new("boom");
/// assert_eq!(err.message(), "boom");
/// assert!(!err.has_stack());
///
/// let err = err.capture_stack();
/// assert!(err.has_stack());
/// ```
#[must_use]
#[derive(Clone)]
pub struct Error {
    message: Cow<'static, str>,
    stack: Option<String>,
    source: Option<SharedSource>,
}

impl Error {
    /// Creates an error from a message, without stack or cause.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into(), stack: None, source: None }
    }

    /// Wraps a foreign error, using its `Display` output as the message.
    ///
    /// The foreign error stays reachable through [`std::error::Error::source`].
    ///
    /// ```
    /// use std::error::Error as _;
    /// use safetry::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
    /// let err = Error::from_source(io);
    /// assert_eq!(err.message(), "missing.toml");
    /// assert!(err.source().is_some());
    /// ```
    pub fn from_source<S>(source: S) -> Self
    where
        S: StdError + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(source))
    }

    /// Wraps an already boxed foreign error.
    pub fn from_boxed(source: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::from_shared(Arc::from(source))
    }

    fn from_shared(source: SharedSource) -> Self {
        Self { message: Cow::Owned(source.to_string()), stack: None, source: Some(source) }
    }

    /// Sets the stack trace, replacing any previous one.
    #[inline]
    pub fn with_stack<S>(mut self, stack: S) -> Self
    where
        S: Into<String>,
    {
        self.stack = Some(stack.into());
        self
    }

    /// Captures a stack trace at the call site if none is present.
    ///
    /// An existing stack is left untouched. Capture ignores
    /// `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` so the field is always populated.
    pub fn capture_stack(mut self) -> Self {
        if self.stack.is_none() {
            self.stack = Some(Backtrace::force_capture().to_string());
        }
        self
    }

    /// Returns the message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the captured stack trace, if any.
    #[inline]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Returns `true` when a stack trace is attached.
    #[inline]
    pub fn has_stack(&self) -> bool {
        self.stack.is_some()
    }

    /// Returns the shared foreign cause, if this error wraps one.
    #[inline]
    pub fn shared_source(&self) -> Option<&SharedSource> {
        self.source.as_ref()
    }

    /// Consumes the error, returning its message.
    #[inline]
    pub fn into_message(self) -> Cow<'static, str> {
        self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("message", &self.message)
            .field("stack", &self.stack.as_ref().map(|_| ".."))
            .field("source", &self.source)
            .finish()
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|s| s as &(dyn StdError + 'static))
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        let same_source = match (&self.source, &other.source) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        same_source && self.message == other.message && self.stack == other.stack
    }
}

impl Eq for Error {}

impl From<&'static str> for Error {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
