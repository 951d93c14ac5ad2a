//! axum handler integration.

use crate::Responder;
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use fail_error::{BoxError, FailError};
use std::error::Error;

/// Error type for axum handlers.
///
/// Any error converts into `HttpFail` with `?`. A [`FailError`] keeps its
/// classification; anything else becomes an unexpected failure located at the
/// conversion site.
///
/// # Examples
///
/// ```
/// use axum::response::IntoResponse;
/// use fail_error::not_found;
/// use fail_response::HttpFail;
///
/// fn lookup(id: &str) -> Result<&'static str, HttpFail> {
///     let id: u32 = id.parse()?;
///     if id != 1 {
///         return Err(not_found().into());
///     }
///     Ok("the one")
/// }
///
/// assert_eq!(lookup("2").unwrap_err().into_response().status(), 404);
/// assert_eq!(lookup("two").unwrap_err().into_response().status(), 500);
/// ```
#[derive(Debug)]
pub struct HttpFail(pub FailError);

impl HttpFail {
    /// The failure carried by this response.
    pub fn into_inner(self) -> FailError {
        self.0
    }
}

impl<E> From<E> for HttpFail
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(err: E) -> Self {
        let boxed: BoxError = Box::new(err);
        match boxed.downcast::<FailError>() {
            Ok(fail) => Self(*fail),
            Err(other) => Self(FailError::wrap(other).unexpected()),
        }
    }
}

impl IntoResponse for HttpFail {
    fn into_response(self) -> Response {
        Responder::default().axum_response(Some(&self.0))
    }
}

impl Responder {
    /// Build an axum response for `err` in the configured body format.
    pub fn axum_response(&self, err: Option<&(dyn Error + 'static)>) -> Response {
        self.response(err).map(Body::from)
    }
}
