//! # formlet
//!
//! Composable, typed form definitions for Rust.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient access.
//! You can depend on `formlet` to get everything, or depend on individual
//! crates for finer-grained control.
//!
//! ```
//! use formlet::prelude::*;
//!
//! #[derive(Clone)]
//! struct Values {
//!     query: String,
//! }
//!
//! let form = classic::succeed(())
//!     .append(classic::text_field(
//!         classic::Attributes::new("Search"),
//!         EditableConfig::new(
//!             validators::min_length(3),
//!             |v: &Values| v.query.clone(),
//!             |_v: &Values, query| Values { query },
//!         ),
//!     ))
//!     .map(|(query,)| query);
//!
//! let filled = form.fill(&Values { query: "rust".into() });
//! assert_eq!(filled.submit.as_deref(), Some("rust"));
//!
//! let filled = form.fill(&Values { query: String::new() });
//! assert_eq!(filled.errors(), vec![FieldError::RequiredFieldIsEmpty]);
//! ```

/// Field errors, settings, settings loading, and logging setup.
pub use formlet_core as core;

/// The in-place editable and classic form engines.
#[cfg(feature = "forms")]
pub use formlet_forms as forms;

// Third-party re-exports for user convenience.
pub use serde;
pub use tracing;
pub use tracing_subscriber;

/// Commonly used items.
pub mod prelude {
    pub use formlet_core::logging::{form_span, setup_logging};
    pub use formlet_core::{ErrorMessages, FieldError, FormletError, FormletResult, Settings};

    #[cfg(feature = "forms")]
    pub use formlet_forms::{classic, config::EditableConfig, inplace, validators};
}
