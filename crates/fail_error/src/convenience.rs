//! Free-standing constructors for failures without an underlying error.
//!
//! Each function records the caller's location, exactly as if the caller
//! had written `FailError::unspecified()` itself.

use crate::{BoxError, FailError};
use tracing::debug;

/// A Bad Request failure with no underlying error.
#[track_caller]
pub fn bad_request(message: impl Into<String>) -> FailError {
    FailError::unspecified().bad_request(message)
}

/// A Bad Request failure with details and no underlying error.
#[track_caller]
pub fn bad_request_with<I, S>(message: impl Into<String>, details: I) -> FailError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FailError::unspecified().bad_request_with(message, details)
}

/// A Conflict failure with no underlying error.
#[track_caller]
pub fn conflict(message: impl Into<String>) -> FailError {
    FailError::unspecified().conflict(message)
}

/// A Conflict failure with details and no underlying error.
#[track_caller]
pub fn conflict_with<I, S>(message: impl Into<String>, details: I) -> FailError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FailError::unspecified().conflict_with(message, details)
}

/// A Forbidden failure with no underlying error.
#[track_caller]
pub fn forbidden(message: impl Into<String>) -> FailError {
    FailError::unspecified().forbidden(message)
}

/// A Not Found failure with the default message.
#[track_caller]
pub fn not_found() -> FailError {
    FailError::unspecified().not_found()
}

/// A Not Found failure with a custom message.
#[track_caller]
pub fn not_found_with(message: impl Into<String>) -> FailError {
    FailError::unspecified().not_found_with(message)
}

/// An Unauthorized failure with no underlying error.
#[track_caller]
pub fn unauthorized(message: impl Into<String>) -> FailError {
    FailError::unspecified().unauthorized(message)
}

/// An Unexpected failure with no underlying error.
#[track_caller]
pub fn unexpected() -> FailError {
    FailError::unspecified().unexpected()
}

/// Re-stamp an error with the caller's location.
///
/// A [`FailError`] keeps its classification and cause. Any other error is
/// wrapped and classified as unexpected, since an unrecognized error is
/// never passed through to clients.
///
/// # Examples
///
/// ```
/// use fail_error::{FailKind, conflict, recapture};
///
/// let passed_up = recapture(conflict("already exists"));
/// assert_eq!(passed_up.kind(), Some(FailKind::Conflict));
///
/// let masked = recapture(std::io::Error::other("EACCES"));
/// assert_eq!(masked.kind(), Some(FailKind::Unexpected));
/// assert_eq!(masked.cause().to_string(), "EACCES");
/// ```
#[track_caller]
pub fn recapture<E>(err: E) -> FailError
where
    E: Into<BoxError>,
{
    let err: BoxError = err.into();
    match err.downcast::<FailError>() {
        Ok(fail) => fail.recapture(),
        Err(other) => {
            debug!(error = %other, "Masking unrecognized error as unexpected");
            FailError::wrap(other).unexpected()
        }
    }
}
