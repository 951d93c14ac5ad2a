//! Placeholder cause for failures created without an underlying error.

/// Cause recorded when a failure was created without an underlying error.
///
/// There is exactly one meaningful value, [`UNSPECIFIED`]. A
/// [`FailError`](crate::FailError) tells the sentinel apart from a real cause
/// by identity, so a user error that happens to print the same text is never
/// mistaken for it.
///
/// # Examples
///
/// ```
/// use fail_error::UNSPECIFIED;
///
/// assert_eq!(UNSPECIFIED.to_string(), "unspecified error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
#[display("unspecified error")]
pub struct UnspecifiedError;

/// The shared unspecified-error sentinel.
pub static UNSPECIFIED: UnspecifiedError = UnspecifiedError;
