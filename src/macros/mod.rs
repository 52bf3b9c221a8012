//! Shorthand macros for running operations and building failures.
//!
//! - [`macro@crate::safe`] - Runs a `Result`-producing expression or block
//!   through [`safe_call`](crate::safe_call).
//! - [`macro@crate::fail`] - Builds a failure holding a formatted
//!   [`Error`](crate::Error), with the message built by `format!`.
//!
//! # Examples
//!
//! ```
//! use safetry::{fail, safe, SafeResult};
//!
//! fn check(age: u32) -> SafeResult<u32> {
//!     if age < 18 {
//!         return fail!("age {} is below 18", age);
//!     }
//!     Ok(age)
//! }
//!
//! assert_eq!(check(30).unwrap(), 30);
//! assert_eq!(check(12).unwrap_err().message(), "age 12 is below 18");
//!
//! let parsed = safe!({
//!     let raw = "17";
//!     raw.parse::<u32>()
//! });
//! assert_eq!(parsed.unwrap(), 17);
//! ```

/// Runs a `Result`-producing expression or block with
/// [`safe_call`](crate::safe_call), yielding a
/// [`SafeResult`](crate::SafeResult).
///
/// # Syntax
///
/// - `safe!(expr)` - Wraps a single `Result`-producing expression
/// - `safe!({ ... })` - Wraps a block that produces a `Result`
/// - `safe!(config => expr)` - Uses the given [`RunConfig`](crate::RunConfig)
///
/// # Examples
///
/// ```rust
/// use safetry::{safe, RunConfig};
///
/// let result = safe!("not a number".parse::<i32>());
/// assert!(result.is_err());
///
/// let config = RunConfig::new().capture_stack(true);
/// let result = safe!(config => Err::<(), _>("boom"));
/// assert!(result.unwrap_err().has_stack());
/// ```
#[macro_export]
macro_rules! safe {
    ($config:expr => $expr:expr $(,)?) => {
        $crate::RunConfig::call(&$config, || $expr)
    };
    ($expr:expr $(,)?) => {
        $crate::safe_call(|| $expr)
    };
}

/// Builds a failure whose [`Error`](crate::Error) message is formatted from
/// the arguments.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use safetry::{fail, SafeResult};
///
/// let user_id = 42;
/// let result: SafeResult<()> = fail!("user {} not found", user_id);
/// assert_eq!(result.unwrap_err().message(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::failure($crate::Error::new(::std::format!($($arg)*)))
    };
}
