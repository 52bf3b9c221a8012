//! Error types and result aliases.
//!
//! # Examples
//!
//! ```
//! use safetry::{Error, RawError, SafeResult};
//!
//! let raw = RawError::from("disk full");
//! let result: SafeResult<()> = Err(raw.normalize());
//! assert_eq!(result.unwrap_err(), Error::new("disk full"));
//! ```

pub mod error;
pub mod raw_error;

pub use error::*;
pub use raw_error::*;

/// Result alias with the library's [`Error`] as the failure payload.
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type SafeResult<T> = Result<T, Error>;
