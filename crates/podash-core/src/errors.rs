//! Application error type shared across the workspace.
//!
//! [`AppError`] pairs a coarse [`ErrorKind`] with an [`anyhow::Error`] carrying the
//! human-readable cause. Any error convertible into `anyhow::Error` converts into an
//! `AppError` with [`ErrorKind::Internal`], so `?` works on library errors without
//! ceremony; use the named constructors to classify errors that callers act on.

use anyhow::Error;
use std::fmt;
use validator::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced role, permission, or module does not exist.
    NotFound,
    /// Malformed caller input.
    BadRequest,
    /// Well-formed input that violates a domain rule.
    Unprocessable,
    /// The operation collides with existing state (e.g. a duplicate id).
    Conflict,
    /// The persistence boundary failed to load or commit.
    Storage,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::BadRequest => "bad_request",
            Self::Unprocessable => "unprocessable",
            Self::Conflict => "conflict",
            Self::Storage => "storage",
            Self::Internal => "internal",
        }
    }

    /// Storage failures leave in-memory state intact, so the same operation may be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Unprocessable, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::BadRequest, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Conflict, err)
    }

    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Storage, err)
    }

    /// Flattens `validator` errors into a single unprocessable error.
    pub fn validation(errors: &ValidationErrors) -> Self {
        Self::unprocessable(anyhow::anyhow!(format_errors(errors)))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    // field_errors() is a HashMap, keep the message stable
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use validator::ValidationError;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(AppError::not_found(anyhow!("x")).kind(), ErrorKind::NotFound);
        assert_eq!(AppError::bad_request(anyhow!("x")).kind(), ErrorKind::BadRequest);
        assert_eq!(
            AppError::unprocessable(anyhow!("x")).kind(),
            ErrorKind::Unprocessable
        );
        assert_eq!(AppError::conflict(anyhow!("x")).kind(), ErrorKind::Conflict);
        assert_eq!(AppError::storage(anyhow!("x")).kind(), ErrorKind::Storage);
        assert_eq!(AppError::internal(anyhow!("x")).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_only_storage_is_retryable() {
        assert!(AppError::storage(anyhow!("disk full")).is_retryable());
        assert!(!AppError::not_found(anyhow!("missing")).is_retryable());
        assert!(!AppError::internal(anyhow!("bug")).is_retryable());
    }

    #[test]
    fn test_from_io_error_is_internal() {
        let io = std::io::Error::other("boom");
        let err: AppError = io.into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_validation_message() {
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("length");
        error.message = Some("Name must not be blank".into());
        errors.add("name", error);
        errors.add("color", ValidationError::new("length"));

        let err = AppError::validation(&errors);
        assert_eq!(err.kind(), ErrorKind::Unprocessable);
        assert_eq!(err.to_string(), "Name must not be blank, color is invalid");
    }
}
