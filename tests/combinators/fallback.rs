use std::cell::Cell;

use safetry::{failure, fallback, fallback_with, success, Error, SafeResult};

#[test]
fn fallback_returns_value_on_success() {
    let result: SafeResult<&str> = success("success value");
    assert_eq!(fallback(result, "default"), "success value");
}

#[test]
fn fallback_returns_default_on_failure() {
    let result: SafeResult<&str> = failure(Error::new("test error"));
    assert_eq!(fallback(result, "default value"), "default value");

    let result: SafeResult<i32> = failure(Error::new("failed"));
    assert_eq!(fallback(result, 99), 99);
}

#[test]
fn fallback_with_calls_default_with_error() {
    let result: SafeResult<String> = failure(Error::new("test error"));
    let value = fallback_with(result, |err| format!("Error: {}", err.message()));

    assert_eq!(value, "Error: test error");
}

#[test]
fn fallback_with_never_calls_default_on_success() {
    let called = Cell::new(false);
    let result: SafeResult<i32> = success(42);

    let value = fallback_with(result, |_| {
        called.set(true);
        0
    });

    assert_eq!(value, 42);
    assert!(!called.get());
}

#[test]
fn fallback_with_builds_structured_defaults() {
    #[derive(Debug, PartialEq)]
    struct Recovered {
        message: String,
        fallback_value: &'static str,
    }

    let result: SafeResult<Recovered> = failure(Error::new("validation failed"));
    let value = fallback_with(result, |err| Recovered {
        message: err.message().to_owned(),
        fallback_value: "recovered",
    });

    assert_eq!(
        value,
        Recovered { message: "validation failed".to_string(), fallback_value: "recovered" }
    );
}
