//! Error types for formlet.
//!
//! Two families live here. [`FieldError`] is the per-field validation outcome
//! produced while filling a form; it is ordinary data, never propagated as a
//! failure. [`FormletError`] covers the fallible ambient surface (loading
//! settings from disk or strings) and is never produced by form evaluation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::ErrorMessages;

/// Default text for [`FieldError::RequiredFieldIsEmpty`].
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// The reason a single field did not produce an output.
///
/// Emptiness is checked before parsing, so a parser never sees a value that
/// the field considers empty.
///
/// # Examples
///
/// ```
/// use formlet_core::error::FieldError;
///
/// let err = FieldError::validation("Invalid email");
/// assert_eq!(err.to_string(), "Invalid email");
/// assert!(FieldError::RequiredFieldIsEmpty.is_required_field_is_empty());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldError {
    /// The field's emptiness predicate matched its raw value.
    #[error("{}", REQUIRED_MESSAGE)]
    RequiredFieldIsEmpty,

    /// The parser rejected a non-empty value.
    #[error("{0}")]
    ValidationFailed(String),
}

impl FieldError {
    /// Creates a [`FieldError::ValidationFailed`] from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed(message.into())
    }

    /// Returns `true` for [`FieldError::RequiredFieldIsEmpty`].
    pub const fn is_required_field_is_empty(&self) -> bool {
        matches!(self, Self::RequiredFieldIsEmpty)
    }

    /// Renders the user-facing message, using the configured text for
    /// required fields. Validation messages are returned verbatim.
    pub fn message(&self, messages: &ErrorMessages) -> String {
        match self {
            Self::RequiredFieldIsEmpty => messages.required.clone(),
            Self::ValidationFailed(msg) => msg.clone(),
        }
    }
}

/// The crate-level error type for configuration and I/O failures.
#[derive(Error, Debug)]
pub enum FormletError {
    /// A configuration value is missing or could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, FormletError>`.
pub type FormletResult<T> = Result<T, FormletError>;
