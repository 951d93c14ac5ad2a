//! Emitting errors as responses.

use crate::{ResponseConfig, ResponseSink, ResponseWriter};
use fail_error::{as_fail, say};
use http::{Response, StatusCode};
use std::error::Error;
use tracing::{Span, debug, error, field, instrument};

/// Writes errors to response sinks according to a [`ResponseConfig`].
///
/// Server errors are logged with their full diagnostic rendering before the
/// client-safe answer is written. Client errors are logged only when
/// [`ResponseConfig::log_client_errors`] is set.
///
/// # Examples
///
/// ```
/// use fail_error::forbidden;
/// use fail_response::{BodyFormat, ResponseConfig, Responder};
///
/// let responder = Responder::new(ResponseConfig::builder().format(BodyFormat::Json).build());
/// let response = responder.response(Some(&forbidden("read only")));
///
/// assert_eq!(response.status(), 403);
/// assert_eq!(response.body(), r#"{"status":403,"message":"read only"}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Responder {
    config: ResponseConfig,
}

impl Responder {
    /// Create a responder with the given configuration.
    pub fn new(config: ResponseConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// Write `err` to `sink` with a single write.
    #[instrument(skip_all, fields(status = field::Empty))]
    pub fn emit<S>(&self, sink: &mut S, err: Option<&(dyn Error + 'static)>)
    where
        S: ResponseSink + ?Sized,
    {
        let (status, message) = say(err);
        Span::current().record("status", status.as_u16());

        if let Some(err) = err {
            self.log(err, status);
        }

        match as_fail(err) {
            Some(fail) if fail.kind().is_some() => sink.write_failure(fail),
            _ => sink.write_error(status, message),
        }
    }

    /// Build a complete response for `err` in the configured body format.
    pub fn response(&self, err: Option<&(dyn Error + 'static)>) -> Response<String> {
        let mut writer = ResponseWriter::new(*self.config.format());
        self.emit(&mut writer, err);
        writer.finish()
    }

    fn log(&self, err: &(dyn Error + 'static), status: StatusCode) {
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %err, "Responding with server error");
        } else if *self.config.log_client_errors() {
            debug!(status = status.as_u16(), error = %err, "Responding with client error");
        }
    }
}

/// Write `err` to `sink` as a plain status and message.
///
/// Uses the default [`Responder`].
///
/// # Examples
///
/// ```
/// use fail_error::bad_request;
/// use fail_response::{ResponseWriter, emit_response};
///
/// let mut writer = ResponseWriter::default();
/// emit_response(&mut writer, Some(&bad_request("missing name")));
///
/// let response = writer.finish();
/// assert_eq!(response.status(), 400);
/// assert_eq!(response.body(), "missing name\n");
/// ```
pub fn emit_response<S>(sink: &mut S, err: Option<&(dyn Error + 'static)>)
where
    S: ResponseSink + ?Sized,
{
    Responder::default().emit(sink, err);
}
