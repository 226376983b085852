//! # formlet-forms
//!
//! Composable, typed form definitions that keep validation separate from
//! presentation. Fields of different raw and parsed types are combined into a
//! single form which yields a typed output only when every field validates,
//! while still reporting per-field state for the view layer.
//!
//! Two engines share one design:
//!
//! - [`inplace`] - every field toggles between displaying and editing; used to
//!   edit existing entities.
//! - [`classic`] - every field is always editable (or disabled); used to create
//!   new entities. Fields are collected into an ordered list.
//!
//! Filling a form is a pure function of the form definition and the host's
//! `Values`. Nothing is cached between calls.

pub mod classic;
pub mod config;
pub mod inplace;
pub mod tuple;
pub mod validators;

use std::sync::Arc;

pub use formlet_core::FieldError;

/// A pre-bound update closure: given a new raw value, returns the new `Values`.
pub type Update<V, Values> = Arc<dyn Fn(V) -> Values + Send + Sync>;

/// Evaluates a field's raw value: empty values never reach the parser.
pub(crate) fn parse_raw<V, O>(
    raw: &V,
    is_empty: impl Fn(&V) -> bool,
    parser: impl Fn(&V) -> Result<O, String>,
) -> Result<O, FieldError> {
    if is_empty(raw) {
        Err(FieldError::RequiredFieldIsEmpty)
    } else {
        parser(raw).map_err(FieldError::ValidationFailed)
    }
}
