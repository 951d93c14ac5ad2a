//! Turning arbitrary errors into client-safe answers.
//!
//! Every function here takes `Option<&(dyn Error + 'static)>`, where `None`
//! means "no error". Boxed errors are passed as `Some(&*boxed)`.

use crate::{FailError, FailKind, MESSAGE_OK, MESSAGE_UNEXPECTED};
use http::StatusCode;
use std::error::Error;

/// The failure behind `err`, if it is one.
pub fn as_fail<'a>(err: Option<&'a (dyn Error + 'static)>) -> Option<&'a FailError> {
    err.and_then(|err| err.downcast_ref::<FailError>())
}

/// HTTP status and client message for an error.
///
/// No error answers `200 OK`. A [`FailError`] answers its own status and
/// message. Anything else answers a generic 500 so that internal error text
/// never reaches the client.
///
/// # Examples
///
/// ```
/// use fail_error::{not_found_with, say};
/// use http::StatusCode;
///
/// assert_eq!(say(None), (StatusCode::OK, "OK"));
///
/// let fail = not_found_with("x");
/// assert_eq!(say(Some(&fail)), (StatusCode::NOT_FOUND, "x"));
///
/// let io = std::io::Error::other("secret path /etc/shadow");
/// assert_eq!(
///     say(Some(&io)),
///     (StatusCode::INTERNAL_SERVER_ERROR, "an unexpected error has occurred"),
/// );
/// ```
pub fn say<'a>(err: Option<&'a (dyn Error + 'static)>) -> (StatusCode, &'a str) {
    let Some(err) = err else {
        return (StatusCode::OK, MESSAGE_OK);
    };
    match err.downcast_ref::<FailError>() {
        Some(fail) => fail.say(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, MESSAGE_UNEXPECTED),
    }
}

fn is_kind(err: Option<&(dyn Error + 'static)>, kind: FailKind) -> bool {
    as_fail(err).is_some_and(|fail| fail.is(kind))
}

/// True if `err` is a Bad Request failure.
pub fn is_bad_request(err: Option<&(dyn Error + 'static)>) -> bool {
    is_kind(err, FailKind::BadRequest)
}

/// True if `err` is a Conflict failure.
pub fn is_conflict(err: Option<&(dyn Error + 'static)>) -> bool {
    is_kind(err, FailKind::Conflict)
}

/// True if `err` is an Unauthorized failure.
pub fn is_unauthorized(err: Option<&(dyn Error + 'static)>) -> bool {
    is_kind(err, FailKind::Unauthorized)
}

/// True if `err` is a Forbidden failure.
pub fn is_forbidden(err: Option<&(dyn Error + 'static)>) -> bool {
    is_kind(err, FailKind::Forbidden)
}

/// True if `err` is a Not Found failure.
pub fn is_not_found(err: Option<&(dyn Error + 'static)>) -> bool {
    is_kind(err, FailKind::NotFound)
}

/// True if `err` is an Unexpected failure.
pub fn is_unexpected(err: Option<&(dyn Error + 'static)>) -> bool {
    is_kind(err, FailKind::Unexpected)
}

/// True if `err` is not a [`FailError`], whatever its classification.
///
/// `None` is unknown.
///
/// # Examples
///
/// ```
/// use fail_error::{is_unknown, unauthorized};
///
/// let fail = unauthorized("log in first");
/// assert!(!is_unknown(Some(&fail)));
/// assert!(is_unknown(Some(&std::fmt::Error)));
/// assert!(is_unknown(None));
/// ```
pub fn is_unknown(err: Option<&(dyn Error + 'static)>) -> bool {
    as_fail(err).is_none()
}
