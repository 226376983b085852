//! The classic form engine.
//!
//! Every field is always editable (or explicitly disabled). Fields of a form
//! share one descriptor type, usually [`FieldKind`], and are collected into an
//! ordered list; the parsed values combine into a single `submit` value.
//!
//! - [`field`] - raw fields, filled fields, and their states
//! - [`form`] - composition (`succeed`, `append`, `optional`, `disabled`,
//!   `read_only`, `dependent`) and introspection (`errors`, `is_empty`)
//! - [`kinds`] - the built-in descriptor and its constructors
//! - [`view`] - hands a field's value and update closure to a renderer

pub mod field;
pub mod form;
pub mod kinds;
pub mod view;

pub use field::{Field, FieldState, FilledField};
pub use form::{
    append, dependent, disabled, errors, field, fill, is_empty, optional, read_only, succeed,
    FilledForm, Form,
};
pub use kinds::{
    checkbox_field, email_field, password_field, select_field, text_field, textarea_field,
    Attributes, FieldKind, TextKind,
};
pub use view::{view_field, FieldView};
