//! Async extensions for safetry.
//!
//! This module provides the asynchronous half of the execution wrapper and
//! the pending-result fallbacks. Suspension only ever happens at the
//! caller's `.await`; nothing here spawns tasks or keeps global state, so
//! any number of runs may proceed concurrently.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! safetry = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use safetry::prelude_async::*;
//!
//! async fn process(input: &str) -> Result<String, &'static str> {
//!     if input == "fail" { Err("Processing failed") } else { Ok(input.to_uppercase()) }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let value = safe_run(|| process("fail"))
//!     .fallback_async_with(|err| format!("Error handled: {}", err.message()))
//!     .await;
//! assert_eq!(value, "Error handled: Processing failed");
//! # });
//! ```

mod fallback;
mod future_ext;
mod run;
mod safe_future;

pub use fallback::{fallback_async, fallback_async_then, fallback_async_with};
pub use future_ext::FutureSafeResultExt;
pub use run::{safe_await, safe_run};
pub use safe_future::SafeFuture;
