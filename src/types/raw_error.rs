//! Raw failure values and their normalization into [`Error`].
//!
//! Whatever an operation raises (an `Err` of some type, or a panic payload)
//! is first captured as a [`RawError`]. Normalization then walks an explicit
//! fallback chain:
//!
//! 1. an [`Error`] is kept as-is (moved, never copied);
//! 2. text becomes the message of a new [`Error`];
//! 3. a foreign `std::error::Error` becomes the cause of a new [`Error`],
//!    unless it is a boxed [`Error`], which is unboxed and kept;
//! 4. a panic payload is downcast to [`Error`], `String`, `&'static str`, a
//!    boxed `std::error::Error` or one of the foreign error types this module
//!    converts; anything else degrades to the fixed message
//!    [`OPAQUE_PANIC_MESSAGE`].
//!
//! The last step is deliberately low fidelity: no attempt is made to guess
//! structure from an arbitrary payload.

use std::any::Any;
use std::borrow::Cow;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;

use crate::types::Error;

/// Message used for panic payloads that are neither [`Error`] nor text.
pub const OPAQUE_PANIC_MESSAGE: &str = "Box<dyn Any>";

/// A failure exactly as it was raised, before normalization.
pub enum RawError {
    /// Already the library's error kind.
    Error(Error),
    /// A textual failure.
    Text(Cow<'static, str>),
    /// Any other error type.
    Foreign(Box<dyn StdError + Send + Sync + 'static>),
    /// A caught panic payload.
    Panic(Box<dyn Any + Send + 'static>),
}

impl RawError {
    /// Wraps an arbitrary error type.
    ///
    /// ```
    /// use safetry::{RawError, safe_call};
    ///
    /// #[derive(Debug)]
    /// struct Denied;
    ///
    /// impl std::fmt::Display for Denied {
    ///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         f.write_str("access denied")
    ///     }
    /// }
    ///
    /// impl std::error::Error for Denied {}
    ///
    /// let result = safe_call(|| Err::<(), _>(Denied).map_err(RawError::foreign));
    /// assert_eq!(result.unwrap_err().message(), "access denied");
    /// ```
    pub fn foreign<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Foreign(Box::new(error))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Error(_) => "error",
            Self::Text(_) => "text",
            Self::Foreign(_) => "foreign",
            Self::Panic(_) => "panic",
        }
    }

    /// Converts the raw value into an [`Error`] via the fallback chain.
    pub fn normalize(self) -> Error {
        match self {
            Self::Error(error) => error,
            Self::Text(text) => Error::new(text),
            Self::Foreign(source) => normalize_foreign(source),
            Self::Panic(payload) => normalize_panic(payload),
        }
    }
}

fn normalize_foreign(source: Box<dyn StdError + Send + Sync + 'static>) -> Error {
    match source.downcast::<Error>() {
        Ok(error) => *error,
        Err(other) => Error::from_boxed(other),
    }
}

fn normalize_panic(payload: Box<dyn Any + Send + 'static>) -> Error {
    let payload = match payload.downcast::<Error>() {
        Ok(error) => return *error,
        Err(other) => other,
    };
    let payload = match payload.downcast::<String>() {
        Ok(text) => return Error::new(*text),
        Err(other) => other,
    };
    let payload = match payload.downcast::<&'static str>() {
        Ok(text) => return Error::new(*text),
        Err(other) => other,
    };
    let payload = match payload.downcast::<Box<dyn StdError + Send + Sync + 'static>>() {
        Ok(source) => return normalize_foreign(*source),
        Err(other) => other,
    };
    match downcast_foreign_payload(payload) {
        Ok(source) => Error::from_boxed(source),
        Err(_) => Error::new(OPAQUE_PANIC_MESSAGE),
    }
}

impl fmt::Debug for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Foreign(source) => f.debug_tuple("Foreign").field(source).finish(),
            Self::Panic(_) => f.write_str("Panic(..)"),
        }
    }
}

impl From<RawError> for Error {
    #[inline]
    fn from(raw: RawError) -> Self {
        raw.normalize()
    }
}

impl From<Error> for RawError {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Error(error)
    }
}

impl From<&'static str> for RawError {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for RawError {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for RawError {
    #[inline]
    fn from(text: Cow<'static, str>) -> Self {
        Self::Text(text)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for RawError {
    #[inline]
    fn from(source: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::Foreign(source)
    }
}

impl From<Infallible> for RawError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

macro_rules! impl_foreign_raw_error {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawError {
                #[inline]
                fn from(error: $ty) -> Self {
                    Self::foreign(error)
                }
            }
        )*

        /// Recovers a foreign error raised as a panic payload, e.g. by
        /// [`unwrap`](crate::unwrap) on an `io::Result`.
        fn downcast_foreign_payload(
            payload: Box<dyn Any + Send + 'static>,
        ) -> Result<Box<dyn StdError + Send + Sync + 'static>, Box<dyn Any + Send + 'static>> {
            $(
                let payload = match payload.downcast::<$ty>() {
                    Ok(error) => {
                        let error: Box<dyn StdError + Send + Sync + 'static> = error;
                        return Ok(error);
                    }
                    Err(other) => other,
                };
            )*
            Err(payload)
        }
    };
}

impl_foreign_raw_error!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
);
