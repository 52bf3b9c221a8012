use std::cell::Cell;
use std::error::Error as _;

use safetry::{safe_call, safe_catch, unwrap, Error, RawError, RunConfig};

#[test]
fn safe_catch_returns_success_for_plain_value() {
    let result = safe_catch(|| "success");
    assert_eq!(result, Ok("success"));
}

#[test]
fn safe_call_returns_success_for_ok() {
    let result = safe_call(|| Ok::<_, Error>(42));
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn safe_call_keeps_error_identity() {
    let error = Error::new("test error").with_stack("original frames");
    let result = safe_call(|| Err::<(), _>(error.clone()));

    assert_eq!(result.unwrap_err(), error);
}

fn boxed_lookup() -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
    Err(Error::new("boom").with_stack("origin frames"))?
}

#[test]
fn safe_call_keeps_library_error_behind_box() {
    let err = safe_call(boxed_lookup).unwrap_err();

    assert_eq!(err, Error::new("boom").with_stack("origin frames"));
    assert!(err.source().is_none());
}

#[test]
fn stack_capture_does_not_overwrite_boxed_error_stack() {
    let err = RunConfig::new().capture_stack(true).call(boxed_lookup).unwrap_err();
    assert_eq!(err.stack(), Some("origin frames"));
}

#[test]
fn safe_catch_recovers_foreign_error_raised_by_unwrap() {
    let io: std::io::Result<i32> =
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read denied"));
    let result = safe_catch(move || unwrap(io));

    assert_eq!(result.unwrap_err().message(), "read denied");
}

#[test]
fn safe_call_normalizes_string_errors() {
    let result = safe_call(|| Err::<(), _>("string error"));
    assert_eq!(result.unwrap_err().message(), "string error");

    let result = safe_call(|| Err::<(), _>(format!("code {}", 500)));
    assert_eq!(result.unwrap_err().message(), "code 500");
}

#[test]
fn safe_call_normalizes_foreign_errors() {
    let result = safe_call(|| "nan".parse::<u8>());

    let err = result.unwrap_err();
    assert_eq!(err.message(), "invalid digit found in string");
    assert!(err.source().is_some());
}

#[test]
fn safe_call_accepts_explicit_raw_errors() {
    #[derive(Debug)]
    struct Quota;

    impl std::fmt::Display for Quota {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("quota exceeded")
        }
    }

    impl std::error::Error for Quota {}

    let result = safe_call(|| Err::<(), _>(RawError::foreign(Quota)));
    assert_eq!(result.unwrap_err().message(), "quota exceeded");
}

#[test]
fn safe_call_converts_panics() {
    let result = safe_call(|| -> Result<i32, Error> { panic!("exploded at step {}", 3) });
    assert_eq!(result.unwrap_err().message(), "exploded at step 3");
}

#[test]
fn safe_catch_converts_panics_with_error_payload() {
    let error = Error::new("raised directly");
    let raised = error.clone();
    let result = safe_catch(move || -> i32 { std::panic::panic_any(raised) });

    assert_eq!(result.unwrap_err(), error);
}

#[test]
fn safe_catch_degrades_unknown_payloads() {
    let result = safe_catch(|| -> i32 { std::panic::panic_any(vec![1, 2, 3]) });
    assert_eq!(result.unwrap_err().message(), "Box<dyn Any>");
}

#[test]
fn operation_runs_exactly_once() {
    let calls = Cell::new(0);
    let result = safe_call(|| {
        calls.set(calls.get() + 1);
        Err::<(), _>("always fails")
    });

    assert!(result.is_err());
    assert_eq!(calls.get(), 1);
}

#[test]
fn infallible_operations_are_accepted() {
    let result = safe_call(|| Ok::<_, std::convert::Infallible>("never fails"));
    assert_eq!(result.unwrap(), "never fails");
}
