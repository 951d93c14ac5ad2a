//! Writing classified failures to HTTP responses.
//!
//! This crate turns errors, classified with [`fail_error`] or not, into
//! responses. [`emit_response`] writes the status and client-safe message of
//! an error to any [`ResponseSink`] with exactly one write; a [`Responder`]
//! does the same with a [`ResponseConfig`] controlling body format and
//! logging.
//!
//! With the `axum` feature (on by default), [`HttpFail`] lets handlers return
//! any error with `?` and have it answered safely.
//!
//! # Examples
//!
//! ```
//! use fail_error::FailError;
//! use fail_response::Responder;
//!
//! let err = FailError::wrap("connection refused").unexpected();
//! let response = Responder::default().response(Some(&err));
//!
//! assert_eq!(response.status(), 500);
//! assert_eq!(response.body(), "an unexpected error has occurred\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "axum")]
mod handler;
mod responder;
mod sink;

#[cfg(feature = "axum")]
pub use handler::HttpFail;
pub use config::{BodyFormat, ResponseConfig, ResponseConfigBuilder};
pub use responder::{Responder, emit_response};
pub use sink::{ResponseSink, ResponseWriter, json_error, plain_text_error};
