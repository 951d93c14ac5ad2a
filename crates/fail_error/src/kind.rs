//! Classification taxonomy.

use http::StatusCode;

/// Client message used when a request succeeded.
pub const MESSAGE_OK: &str = "OK";

/// Default client message for [`FailKind::NotFound`].
pub const MESSAGE_NOT_FOUND: &str = "object not found";

/// Client message for [`FailKind::Unexpected`] and for any unclassified error.
pub const MESSAGE_UNEXPECTED: &str = "an unexpected error has occurred";

/// The six classifications a [`FailError`](crate::FailError) can carry.
///
/// # Examples
///
/// ```
/// use fail_error::FailKind;
/// use http::StatusCode;
///
/// assert_eq!(FailKind::Conflict.status(), StatusCode::CONFLICT);
/// assert_eq!(FailKind::from_status(404), Some(FailKind::NotFound));
/// assert_eq!(FailKind::from_status(418), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum FailKind {
    /// 400 Bad Request
    #[display("Bad Request")]
    BadRequest,
    /// 401 Unauthorized
    #[display("Unauthorized")]
    Unauthorized,
    /// 403 Forbidden
    #[display("Forbidden")]
    Forbidden,
    /// 404 Not Found
    #[display("Not Found")]
    NotFound,
    /// 409 Conflict
    #[display("Conflict")]
    Conflict,
    /// 500 Internal Server Error
    #[display("Unexpected")]
    Unexpected,
}

impl FailKind {
    /// HTTP status code for this classification.
    pub fn status(self) -> StatusCode {
        match self {
            FailKind::BadRequest => StatusCode::BAD_REQUEST,
            FailKind::Unauthorized => StatusCode::UNAUTHORIZED,
            FailKind::Forbidden => StatusCode::FORBIDDEN,
            FailKind::NotFound => StatusCode::NOT_FOUND,
            FailKind::Conflict => StatusCode::CONFLICT,
            FailKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Look up the classification for a raw status code.
    ///
    /// Returns `None` for codes outside the taxonomy, including `0`.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(FailKind::BadRequest),
            401 => Some(FailKind::Unauthorized),
            403 => Some(FailKind::Forbidden),
            404 => Some(FailKind::NotFound),
            409 => Some(FailKind::Conflict),
            500 => Some(FailKind::Unexpected),
            _ => None,
        }
    }
}
