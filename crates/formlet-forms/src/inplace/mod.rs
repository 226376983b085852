//! The in-place editable form engine.
//!
//! Each field independently toggles between [`FieldState::Editing`] and
//! [`FieldState::Displaying`]. The toggle state lives in the host's `Values`
//! next to the raw value, so filling a form never loses UI state.
//!
//! - [`field`] - field definitions and the `optional` / `dynamic_field` combinators
//! - [`form`] - composition with `succeed` / `append` and evaluation with `fill`
//! - [`base`] - always-editable helpers (`text_field`, `checkbox_field`)
//! - [`view`] - dispatch to the host's render callbacks

pub mod base;
pub mod field;
pub mod form;
pub mod view;

pub use base::{checkbox_field, editable_field, text_field};
pub use field::{dynamic_field, field, optional, Field, FieldConfig, FieldState, FormField};
pub use form::{append, fill, succeed, FilledForm, Form};
pub use view::{view_field, DisplayingView, EditingView, ViewConfig};
