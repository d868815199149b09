use super::*;

#[test]
fn describe_drops_query_string() {
    assert_eq!(describe("GET", "/auth/verify-email?token=secret"), "GET /auth/verify-email");
}

#[test]
fn describe_keeps_plain_paths() {
    assert_eq!(describe("DELETE", "/records/7"), "DELETE /records/7");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_fail_without_browser() {
    let err = block_on(login("a@b.co", "pw"));
    assert!(matches!(err, Err(ApiError::Network(_))));
}

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
