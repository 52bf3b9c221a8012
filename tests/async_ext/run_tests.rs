//! Tests for the async entry points of the execution wrapper.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use safetry::prelude_async::*;

async fn process_value(input: &str) -> Result<String, Error> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    if input == "fail" {
        return Err(Error::new("Processing failed"));
    }
    Ok(input.to_uppercase())
}

#[tokio::test]
async fn safe_run_returns_success_for_async_operation() {
    let result = safe_run(|| async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok::<_, Error>("async success")
    })
    .await;

    assert_eq!(result, Ok("async success"));
}

#[tokio::test]
async fn safe_run_keeps_rejected_error_identity() {
    let error = Error::new("async error").with_stack("origin");
    let rejected = error.clone();

    let result = safe_run(move || async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Err::<(), _>(rejected)
    })
    .await;

    assert_eq!(result.unwrap_err(), error);
}

#[tokio::test]
async fn safe_run_normalizes_rejections() {
    let result = safe_run(|| async { Err::<(), _>("string rejection") }).await;
    assert_eq!(result.unwrap_err().message(), "string rejection");

    let result = safe_run(|| async { "x".parse::<f64>() }).await;
    assert_eq!(result.unwrap_err().message(), "invalid float literal");
}

#[tokio::test]
async fn safe_run_catches_panic_while_invoking() {
    fn exploding() -> std::future::Ready<Result<i32, Error>> {
        panic!("invoked and exploded")
    }

    let result = safe_run(exploding).await;
    assert_eq!(result.unwrap_err().message(), "invoked and exploded");
}

#[tokio::test]
async fn safe_run_catches_panic_while_polling() {
    let result = safe_run(|| async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        if "always".is_empty() {
            return Ok::<i32, Error>(0);
        }
        panic!("panicked mid-flight")
    })
    .await;

    assert_eq!(result.unwrap_err().message(), "panicked mid-flight");
}

#[tokio::test]
async fn safe_run_fails_at_later_step() {
    async fn steps(count: u32) -> Result<String, Error> {
        for i in 0..count {
            tokio::time::sleep(Duration::from_millis(1)).await;
            if i == 2 {
                return Err(Error::new(format!("Failed at step {}", i + 1)));
            }
        }
        Ok(format!("Completed {count} steps"))
    }

    let ok = safe_run(|| steps(2)).await;
    assert_eq!(fallback(ok, "Failed".to_string()), "Completed 2 steps");

    let err = safe_run(|| steps(5)).await;
    assert_eq!(err.unwrap_err().message(), "Failed at step 3");
}

#[tokio::test]
async fn operation_is_invoked_once_and_lazily() {
    let calls = AtomicU32::new(0);

    let pending = safe_run(|| {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err::<(), _>("once") }
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let result = pending.await;
    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn safe_await_handles_resolved_future() {
    let result = safe_await(async { Ok::<_, Error>("resolved value") }).await;
    assert_eq!(result, Ok("resolved value"));
}

#[tokio::test]
async fn safe_await_handles_rejected_future() {
    let error = Error::new("rejection error");
    let result = safe_await(std::future::ready(Err::<(), _>(error.clone()))).await;

    assert_eq!(result.unwrap_err(), error);
}

#[tokio::test]
async fn configured_run_transforms_and_captures() {
    let config = RunConfig::new()
        .capture_stack(true)
        .error_transform(|raw| Error::new(format!("Transformed: {}", raw.normalize())));

    let result = config.run(|| process_value("fail")).await;
    let err = result.unwrap_err();

    assert_eq!(err.message(), "Transformed: Processing failed");
    assert!(err.has_stack());

    let result = config.await_future(process_value("ok")).await;
    assert_eq!(result, Ok("OK".to_string()));
}

#[tokio::test]
async fn concurrent_runs_do_not_interfere() {
    let config = RunConfig::new().capture_stack(true);

    let (a, b, c) = tokio::join!(
        config.run(|| process_value("first")),
        config.run(|| process_value("fail")),
        safe_run(|| process_value("third")),
    );

    assert_eq!(a, Ok("FIRST".to_string()));
    assert_eq!(b.unwrap_err().message(), "Processing failed");
    assert_eq!(c, Ok("THIRD".to_string()));
}

#[tokio::test]
async fn safe_run_future_can_be_spawned() {
    fn assert_send<F: Future + Send>(future: F) -> F {
        future
    }

    let handle = tokio::spawn(assert_send(safe_run(|| process_value("spawned"))));
    let result = handle.await.expect("task should not be cancelled");

    assert_eq!(result, Ok("SPAWNED".to_string()));
}
