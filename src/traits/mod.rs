//! Extension traits for composing results as method chains.

mod safe_result_ext;

pub use safe_result_ext::SafeResultExt;
