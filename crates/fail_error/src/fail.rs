//! The classified failure type.

use crate::{FailKind, MESSAGE_NOT_FOUND, MESSAGE_UNEXPECTED, UNSPECIFIED};
use http::StatusCode;
use std::{error::Error, fmt, panic::Location, sync::Arc};

/// Boxed error accepted by [`FailError::wrap`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Debug, Clone)]
enum Cause {
    Unspecified,
    Wrapped(Arc<dyn Error + Send + Sync + 'static>),
}

/// An error that can be sent as an HTTP response.
///
/// A `FailError` is created by wrapping a cause, which records the source
/// location of the caller, and is then classified by exactly one of the
/// classification methods. Classification sets the HTTP status, the message
/// safe to show clients, and optional details. The cause and location never
/// change afterwards.
///
/// `Display` renders the long diagnostic form `file:line: cause`, meant for
/// logs. The alternate form (`{:#}`) renders only the client message.
///
/// # Examples
///
/// ```
/// use fail_error::FailError;
///
/// let io = std::io::Error::other("disk on fire");
/// let fail = FailError::wrap(io).unexpected();
///
/// assert_eq!(fail.status(), 500);
/// assert_eq!(format!("{:#}", fail), "an unexpected error has occurred");
/// assert!(fail.to_string().ends_with(": disk on fire"));
/// ```
#[derive(Debug, Clone, serde::Serialize)]
pub struct FailError {
    status: u16,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
    #[serde(skip)]
    cause: Cause,
    #[serde(skip)]
    location: &'static Location<'static>,
}

impl FailError {
    fn new(cause: Cause, location: &'static Location<'static>) -> Self {
        Self {
            status: 0,
            message: String::new(),
            details: Vec::new(),
            cause,
            location,
        }
    }

    /// Wrap an error, recording the caller's location.
    ///
    /// The result is unclassified and must be classified before use.
    #[track_caller]
    pub fn wrap<E>(cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::wrap_at(cause, Location::caller())
    }

    /// Wrap an error that may be absent.
    ///
    /// `None` records the [`UNSPECIFIED`] sentinel as the cause.
    #[track_caller]
    pub fn wrap_optional<E>(cause: Option<E>) -> Self
    where
        E: Into<BoxError>,
    {
        match cause {
            Some(cause) => Self::wrap_at(cause, Location::caller()),
            None => Self::new(Cause::Unspecified, Location::caller()),
        }
    }

    /// Start a failure with no underlying error.
    #[track_caller]
    pub fn unspecified() -> Self {
        Self::new(Cause::Unspecified, Location::caller())
    }

    /// Wrap an error at an explicit location.
    ///
    /// Use this when the location cannot be propagated with `#[track_caller]`.
    pub fn wrap_at<E>(cause: E, location: &'static Location<'static>) -> Self
    where
        E: Into<BoxError>,
    {
        let cause: BoxError = cause.into();
        Self::new(Cause::Wrapped(Arc::from(cause)), location)
    }

    /// Copy this failure's classification and cause, stamped with the
    /// caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fail_error::FailError;
    ///
    /// let first = FailError::unspecified().forbidden("read only");
    /// let second = first.recapture();
    ///
    /// assert_eq!(second.message(), "read only");
    /// assert_ne!(first.line(), second.line());
    /// ```
    #[track_caller]
    pub fn recapture(&self) -> Self {
        Self {
            location: Location::caller(),
            ..self.clone()
        }
    }

    fn classify(mut self, kind: FailKind, message: String, details: Vec<String>) -> Self {
        self.status = kind.status().as_u16();
        self.message = message;
        self.details = details;
        self
    }

    /// Classify as 400 Bad Request.
    pub fn bad_request(self, message: impl Into<String>) -> Self {
        self.classify(FailKind::BadRequest, message.into(), Vec::new())
    }

    /// Classify as 400 Bad Request, explained by `details`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fail_error::FailError;
    ///
    /// let fail = FailError::unspecified()
    ///     .bad_request_with("bad input", ["field1 required", "field2 invalid"]);
    /// assert_eq!(fail.details(), ["field1 required", "field2 invalid"]);
    /// ```
    pub fn bad_request_with<I, S>(self, message: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let details = details.into_iter().map(Into::into).collect();
        self.classify(FailKind::BadRequest, message.into(), details)
    }

    /// Classify as 409 Conflict.
    pub fn conflict(self, message: impl Into<String>) -> Self {
        self.classify(FailKind::Conflict, message.into(), Vec::new())
    }

    /// Classify as 409 Conflict, explained by `details`.
    pub fn conflict_with<I, S>(self, message: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let details = details.into_iter().map(Into::into).collect();
        self.classify(FailKind::Conflict, message.into(), details)
    }

    /// Classify as 403 Forbidden.
    pub fn forbidden(self, message: impl Into<String>) -> Self {
        self.classify(FailKind::Forbidden, message.into(), Vec::new())
    }

    /// Classify as 404 Not Found with the default message.
    pub fn not_found(self) -> Self {
        self.classify(FailKind::NotFound, MESSAGE_NOT_FOUND.to_string(), Vec::new())
    }

    /// Classify as 404 Not Found.
    pub fn not_found_with(self, message: impl Into<String>) -> Self {
        self.classify(FailKind::NotFound, message.into(), Vec::new())
    }

    /// Classify as 401 Unauthorized.
    pub fn unauthorized(self, message: impl Into<String>) -> Self {
        self.classify(FailKind::Unauthorized, message.into(), Vec::new())
    }

    /// Classify as 500 Internal Server Error with the generic message.
    pub fn unexpected(self) -> Self {
        self.classify(FailKind::Unexpected, MESSAGE_UNEXPECTED.to_string(), Vec::new())
    }

    /// Raw status code, `0` while unclassified.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Status code, or `None` while unclassified.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.kind().map(FailKind::status)
    }

    /// Current classification, or `None` while unclassified.
    pub fn kind(&self) -> Option<FailKind> {
        FailKind::from_status(self.status)
    }

    /// True if classified as `kind`.
    pub fn is(&self, kind: FailKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Message safe to send to clients.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Details attached by a bad request or conflict classification.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// The wrapped error, or [`UNSPECIFIED`] when there is none.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        match &self.cause {
            Cause::Unspecified => &UNSPECIFIED,
            Cause::Wrapped(cause) => &**cause,
        }
    }

    /// True if this failure was created without an underlying error.
    pub fn is_unspecified(&self) -> bool {
        matches!(self.cause, Cause::Unspecified)
    }

    /// File name, without its directories, where this failure was wrapped.
    pub fn file(&self) -> &'static str {
        let path = self.location.file();
        path.rsplit(['/', '\\']).next().unwrap_or(path)
    }

    /// Line where this failure was wrapped.
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Full source location where this failure was wrapped.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Status and client message for a response.
    ///
    /// An unclassified failure answers as unexpected.
    pub fn say(&self) -> (StatusCode, &str) {
        match self.kind() {
            Some(kind) => (kind.status(), &self.message),
            None => (StatusCode::INTERNAL_SERVER_ERROR, MESSAGE_UNEXPECTED),
        }
    }
}

impl fmt::Display for FailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.message);
        }
        write!(f, "{}:{}: {}", self.file(), self.line(), self.cause())
    }
}

impl Error for FailError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Cause::Unspecified => None,
            Cause::Wrapped(cause) => Some(&**cause),
        }
    }
}

/// Result alias for operations that fail with a [`FailError`].
pub type FailResult<T> = std::result::Result<T, FailError>;
