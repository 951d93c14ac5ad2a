//! HTTP-ready error classification.
//!
//! A [`FailError`] wraps an underlying error together with the HTTP status,
//! the message that is safe to show clients, optional details, and the source
//! location where it was created. Handlers classify errors once and hand them
//! to a response writer; logs keep the full story.
//!
//! # Lifecycle
//!
//! - [`FailError::wrap`] records the cause and the caller's location
//! - a classification method (`bad_request`, `not_found`, ...) sets status
//!   and message
//! - [`say`] turns any error into a status and client message, masking
//!   anything that is not a `FailError` as a 500
//!
//! Free functions such as [`bad_request`] start from the [`UNSPECIFIED`]
//! sentinel when there is no underlying error.
//!
//! # Examples
//!
//! ```
//! use fail_error::{FailError, FailResult, is_not_found, say};
//! use http::StatusCode;
//!
//! fn find_user(id: u64) -> FailResult<String> {
//!     let lookup: Result<String, std::io::Error> =
//!         Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no row"));
//!     lookup.map_err(|e| FailError::wrap(e).not_found_with(format!("user {id} not found")))
//! }
//!
//! let err = find_user(7).unwrap_err();
//! assert!(is_not_found(Some(&err)));
//! assert_eq!(say(Some(&err)), (StatusCode::NOT_FOUND, "user 7 not found"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod convenience;
mod fail;
mod kind;
mod render;
mod say;
mod unspecified;

pub use config::{ConfigError, ConfigErrorKind};
pub use convenience::{
    bad_request, bad_request_with, conflict, conflict_with, forbidden, not_found, not_found_with,
    recapture, unauthorized, unexpected,
};
pub use fail::{BoxError, FailError, FailResult};
pub use kind::{FailKind, MESSAGE_NOT_FOUND, MESSAGE_OK, MESSAGE_UNEXPECTED};
pub use render::{Field, Template};
pub use say::{
    as_fail, is_bad_request, is_conflict, is_forbidden, is_not_found, is_unauthorized,
    is_unexpected, is_unknown, say,
};
pub use unspecified::{UNSPECIFIED, UnspecifiedError};
