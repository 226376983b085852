//! Settings for hosts embedding formlet.
//!
//! The form engines themselves take no configuration: `fill` is a pure
//! function of the form definition and the values. [`Settings`] carries what
//! surrounds them, namely the log level used by [`crate::logging`] and the
//! user-facing text rendered for field errors.
//!
//! There is no global settings instance. Hosts load a [`Settings`] value with
//! [`crate::settings_loader`] and pass it where it is needed.

use serde::{Deserialize, Serialize};

use crate::error::REQUIRED_MESSAGE;

/// User-facing text for field errors.
///
/// Only [`FieldError::RequiredFieldIsEmpty`](crate::error::FieldError) has
/// configurable text; validation failures carry their own message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    /// Text shown for a required field left empty.
    pub required: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            required: REQUIRED_MESSAGE.to_string(),
        }
    }
}

/// Host-level configuration.
///
/// # Examples
///
/// ```
/// use formlet_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The log level filter (e.g. "info", "debug", "formlet_forms=trace").
    pub log_level: String,
    /// Error message text.
    pub messages: ErrorMessages,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            messages: ErrorMessages::default(),
        }
    }
}
