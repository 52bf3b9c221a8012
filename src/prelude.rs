//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use safetry::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`safe!`], [`fail!`]
//! - **Types**: [`Error`], [`RawError`], [`RunConfig`], [`SafeResult`]
//! - **Functions**: constructors, the sync wrapper and every sync combinator
//! - **Traits**: [`SafeResultExt`], [`Combine`]
//!
//! # Examples
//!
//! ```
//! use safetry::prelude::*;
//!
//! fn read_port(raw: &str) -> u16 {
//!     safe_call(|| raw.parse::<u16>())
//!         .map_error(|e| Error::new(format!("invalid port {raw:?}: {e}")))
//!         .fallback(8080)
//! }
//!
//! assert_eq!(read_port("3000"), 3000);
//! assert_eq!(read_port("http"), 8080);
//! ```

// Macros
pub use crate::{fail, safe};

// Core types
pub use crate::run::RunConfig;
pub use crate::types::{Error, RawError, SafeResult};

// Functions
pub use crate::combinators::{
    combine, combine_iter, fallback, fallback_with, map_error, map_value, tap_error, unwrap,
};
pub use crate::result::{failure, is_error, is_ok, success};
pub use crate::run::{safe_call, safe_catch};

// Traits
pub use crate::combinators::Combine;
pub use crate::traits::SafeResultExt;
