//! # formlet-core
//!
//! Core types for the formlet form combinators. This crate has no dependency
//! on the form engines and provides the foundation they build on.
//!
//! ## Modules
//!
//! - [`error`] - Field errors and the crate-level error type
//! - [`settings`] - Host-facing configuration (log level, error message text)
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{FieldError, FormletError, FormletResult};
pub use settings::{ErrorMessages, Settings};
