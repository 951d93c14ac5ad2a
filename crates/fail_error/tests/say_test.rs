//! Tests for mapping errors to client-safe status and message pairs.

use fail_error::{
    FailError, MESSAGE_UNEXPECTED, as_fail, bad_request, is_unknown, not_found_with, say,
    unauthorized,
};
use http::StatusCode;
use std::error::Error;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("password for admin is hunter2")]
struct LeakyError;

#[test]
fn no_error_is_ok() {
    assert_eq!(say(None), (StatusCode::OK, "OK"));
}

#[test]
fn failure_answers_its_own_status() {
    let fail = not_found_with("x");
    assert_eq!(say(Some(&fail)), (StatusCode::NOT_FOUND, "x"));
}

#[test]
fn plain_errors_are_masked() {
    let (status, message) = say(Some(&LeakyError));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message, MESSAGE_UNEXPECTED);
    assert!(!message.contains("hunter2"));
}

#[test]
fn unclassified_failure_is_masked() {
    let fail = FailError::wrap(LeakyError);
    assert_eq!(
        say(Some(&fail)),
        (StatusCode::INTERNAL_SERVER_ERROR, MESSAGE_UNEXPECTED)
    );
}

#[test]
fn boxed_failures_are_recognized() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(unauthorized("token expired"));
    assert_eq!(
        say(Some(&*boxed)),
        (StatusCode::UNAUTHORIZED, "token expired")
    );
    assert!(!is_unknown(Some(&*boxed)));
}

#[test]
fn wrapped_failure_is_not_unwrapped() {
    // A failure used as the cause of a plain error stays hidden.
    let inner = bad_request("bad");
    let outer = std::io::Error::other(inner);
    assert!(is_unknown(Some(&outer)));
    assert_eq!(say(Some(&outer)).0, StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn unknown_means_not_a_failure() {
    assert!(is_unknown(None));
    assert!(is_unknown(Some(&LeakyError)));
    assert!(!is_unknown(Some(&FailError::wrap(LeakyError))));
    assert!(!is_unknown(Some(&bad_request("x"))));
}

#[test]
fn as_fail_borrows_the_failure() {
    let fail = bad_request("missing name");
    let found = as_fail(Some(&fail)).map(FailError::message);
    assert_eq!(found, Some("missing name"));
    assert!(as_fail(Some(&LeakyError)).is_none());
}
