//! Destinations for error responses.

use crate::BodyFormat;
use fail_error::FailError;
use http::{
    HeaderValue, Response, StatusCode,
    header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS},
};

/// Something that accepts one error response.
///
/// Implementations perform a single write of the status and body. Headers
/// beyond the content type are the implementation's business.
pub trait ResponseSink {
    /// Write an error status and client message.
    fn write_error(&mut self, status: StatusCode, message: &str);

    /// Write a classified failure.
    ///
    /// Defaults to [`write_error`](Self::write_error) with the failure's
    /// status and message.
    fn write_failure(&mut self, fail: &FailError) {
        let (status, message) = fail.say();
        self.write_error(status, message);
    }
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn write_error(&mut self, status: StatusCode, message: &str) {
        (**self).write_error(status, message);
    }

    fn write_failure(&mut self, fail: &FailError) {
        (**self).write_failure(fail);
    }
}

/// Build a plain-text error response.
///
/// The body is the message followed by a newline, served as
/// `text/plain; charset=utf-8` with `X-Content-Type-Options: nosniff`.
///
/// # Examples
///
/// ```
/// use fail_response::plain_text_error;
/// use http::StatusCode;
///
/// let response = plain_text_error(StatusCode::NOT_FOUND, "object not found");
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// assert_eq!(response.body(), "object not found\n");
/// ```
pub fn plain_text_error(status: StatusCode, message: &str) -> Response<String> {
    let mut response = Response::new(format!("{message}\n"));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    response
}

/// Build a JSON error response from an already serialized body.
pub fn json_error(status: StatusCode, body: String) -> Response<String> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// A sink that builds an [`http::Response`] in the configured format.
///
/// # Examples
///
/// ```
/// use fail_error::bad_request_with;
/// use fail_response::{BodyFormat, ResponseSink, ResponseWriter};
///
/// let mut writer = ResponseWriter::new(BodyFormat::Json);
/// writer.write_failure(&bad_request_with("bad input", ["name required"]));
///
/// let response = writer.finish();
/// assert_eq!(response.status(), 400);
/// assert_eq!(
///     response.body(),
///     r#"{"status":400,"message":"bad input","details":["name required"]}"#,
/// );
/// ```
#[derive(Debug, Default)]
pub struct ResponseWriter {
    format: BodyFormat,
    response: Option<Response<String>>,
}

impl ResponseWriter {
    /// Create a writer for the given body format.
    pub fn new(format: BodyFormat) -> Self {
        Self {
            format,
            response: None,
        }
    }

    /// The response written so far, if any.
    pub fn response(&self) -> Option<&Response<String>> {
        self.response.as_ref()
    }

    /// The written response, or an empty `200 OK` if nothing was written.
    pub fn finish(self) -> Response<String> {
        self.response.unwrap_or_default()
    }
}

impl ResponseSink for ResponseWriter {
    fn write_error(&mut self, status: StatusCode, message: &str) {
        let response = match self.format {
            BodyFormat::PlainText => plain_text_error(status, message),
            BodyFormat::Json => json_error(
                status,
                serde_json::json!({ "status": status.as_u16(), "message": message }).to_string(),
            ),
        };
        self.response = Some(response);
    }

    fn write_failure(&mut self, fail: &FailError) {
        let (status, message) = fail.say();
        let body = match self.format {
            BodyFormat::Json if fail.kind().is_some() => serde_json::to_string(fail).ok(),
            _ => None,
        };
        match body {
            Some(body) => self.response = Some(json_error(status, body)),
            None => self.write_error(status, message),
        }
    }
}
