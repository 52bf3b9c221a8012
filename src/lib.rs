//! Result-first error handling.
//!
//! safetry runs work that may fail (by returning `Err` or by panicking),
//! turns the outcome into an ordinary [`SafeResult`], and offers a small set
//! of combinators to inspect, transform and recover from it. Each submodule
//! re-exports its public surface from here, so consumers can simply depend
//! on `safetry::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Running and recovering
//!
//! ```
//! use safetry::{fallback, map_value, safe_catch};
//!
//! let result = safe_catch(|| "hello".to_uppercase());
//! let result = map_value(result, |s| format!("Processed: {s}"));
//! assert_eq!(fallback(result, "Default".to_string()), "Processed: HELLO");
//! ```
//!
//! ## Normalizing whatever was raised
//!
//! ```
//! use safetry::{safe_call, safe_catch, Error};
//!
//! let from_text = safe_call(|| Err::<(), _>("string error"));
//! assert_eq!(from_text.unwrap_err().message(), "string error");
//!
//! let from_panic = safe_catch(|| -> u32 { std::panic::panic_any(7_u8) });
//! assert_eq!(from_panic.unwrap_err().message(), "Box<dyn Any>");
//!
//! let original = Error::new("kept as-is");
//! let kept = safe_call(|| Err::<(), _>(original.clone()));
//! assert_eq!(kept.unwrap_err(), original);
//! ```
//!
//! ## Combining positionally
//!
//! ```
//! use safetry::{combine, success, SafeResult};
//!
//! let all: SafeResult<Vec<i32>> = combine(vec![success(1), success(2), success(3)]);
//! assert_eq!(all.unwrap(), [1, 2, 3]);
//! ```

/// Free-function combinators over results
pub mod combinators;
/// Shorthand macros for running operations and building failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Constructors and variant checks for the outcome type
pub mod result;
/// Synchronous execution wrapper and its configuration
pub mod run;
/// Extension traits for method-chained combinators
pub mod traits;
/// Error kind, raw failures and result aliases
pub mod types;

/// Async execution wrapper and pending-result fallbacks (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use combinators::*;
pub use result::*;
pub use run::*;
pub use traits::*;
pub use types::{Error, RawError, SafeResult};

#[cfg(feature = "async")]
pub use async_ext::*;
