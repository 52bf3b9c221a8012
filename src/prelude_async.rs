//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async entry points and extension trait.
//!
//! # Usage
//!
//! ```rust
//! use safetry::prelude_async::*;
//!
//! async fn fetch(id: u64) -> Result<String, &'static str> {
//!     if id == 0 { Err("Invalid ID") } else { Ok(format!("User {id}")) }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let name = safe_run(|| fetch(0))
//!     .fallback_async("Unknown user".to_string())
//!     .await;
//! assert_eq!(name, "Unknown user");
//! # });
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`safe!`], [`fail!`]
//! - **Types**: [`Error`], [`RawError`], [`RunConfig`], [`SafeResult`]
//! - **Traits**: [`SafeResultExt`], [`Combine`]
//!
//! ## Async-Specific
//!
//! - **Functions**: [`safe_run`], [`safe_await`], [`fallback_async`],
//!   [`fallback_async_with`], [`fallback_async_then`]
//! - **Traits**: [`FutureSafeResultExt`] - `.safe()` and `.fallback_async*()` for futures
//! - **Types**: [`SafeFuture`]

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{
    fallback_async, fallback_async_then, fallback_async_with, safe_await, safe_run,
    FutureSafeResultExt, SafeFuture,
};
