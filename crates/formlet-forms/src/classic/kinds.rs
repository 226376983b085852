//! The built-in classic field descriptor.
//!
//! Classic forms hold one descriptor type for all their fields. [`FieldKind`]
//! covers the common inputs (text-like inputs, checkboxes, selects) so that a
//! form mixing them still yields a single `Vec<FilledField<FieldKind<_>>>` the
//! view layer can match on.

use std::fmt;

use crate::classic::field::Field;
use crate::classic::form::{field, Form};
use crate::config::EditableConfig;

/// The flavour of a text-like input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// A plain single-line input.
    Text,
    /// An email input.
    Email,
    /// A password input.
    Password,
    /// A multi-line input.
    TextArea,
}

/// Presentation attributes shared by every field kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Human-readable label.
    pub label: String,
    /// Placeholder shown while the input is empty.
    pub placeholder: String,
}

impl Attributes {
    /// Creates attributes with a label and no placeholder.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: String::new(),
        }
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// A classic field of one of the built-in kinds.
pub enum FieldKind<Values> {
    /// A text-like input.
    Text {
        /// The input flavour.
        kind: TextKind,
        /// Label and placeholder.
        attributes: Attributes,
        /// The value and its update closure.
        field: Field<String, Values>,
    },
    /// A checkbox.
    Checkbox {
        /// Label.
        attributes: Attributes,
        /// The value and its update closure.
        field: Field<bool, Values>,
    },
    /// A single choice among `(value, label)` options.
    Select {
        /// Label and placeholder.
        attributes: Attributes,
        /// The available `(value, label)` pairs.
        options: Vec<(String, String)>,
        /// The value and its update closure.
        field: Field<String, Values>,
    },
}

impl<Values> FieldKind<Values> {
    /// Returns the field's attributes.
    pub const fn attributes(&self) -> &Attributes {
        match self {
            Self::Text { attributes, .. }
            | Self::Checkbox { attributes, .. }
            | Self::Select { attributes, .. } => attributes,
        }
    }
}

impl<Values> Clone for FieldKind<Values> {
    fn clone(&self) -> Self {
        match self {
            Self::Text {
                kind,
                attributes,
                field,
            } => Self::Text {
                kind: *kind,
                attributes: attributes.clone(),
                field: field.clone(),
            },
            Self::Checkbox { attributes, field } => Self::Checkbox {
                attributes: attributes.clone(),
                field: field.clone(),
            },
            Self::Select {
                attributes,
                options,
                field,
            } => Self::Select {
                attributes: attributes.clone(),
                options: options.clone(),
                field: field.clone(),
            },
        }
    }
}

impl<Values> fmt::Debug for FieldKind<Values> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text {
                kind,
                attributes,
                field,
            } => f
                .debug_struct("Text")
                .field("kind", kind)
                .field("attributes", attributes)
                .field("field", field)
                .finish(),
            Self::Checkbox { attributes, field } => f
                .debug_struct("Checkbox")
                .field("attributes", attributes)
                .field("field", field)
                .finish(),
            Self::Select {
                attributes,
                options,
                field,
            } => f
                .debug_struct("Select")
                .field("attributes", attributes)
                .field("options", options)
                .field("field", field)
                .finish(),
        }
    }
}

fn text_like<O, Values>(
    kind: TextKind,
    attributes: Attributes,
    config: EditableConfig<String, O, Values>,
) -> Form<FieldKind<Values>, O, Values>
where
    O: 'static,
    Values: Clone + Send + Sync + 'static,
{
    field(
        String::is_empty,
        move |field| FieldKind::Text {
            kind,
            attributes: attributes.clone(),
            field,
        },
        config,
    )
}

/// A plain text input; the empty string counts as empty.
pub fn text_field<O, Values>(
    attributes: Attributes,
    config: EditableConfig<String, O, Values>,
) -> Form<FieldKind<Values>, O, Values>
where
    O: 'static,
    Values: Clone + Send + Sync + 'static,
{
    text_like(TextKind::Text, attributes, config)
}

/// An email input; the empty string counts as empty.
pub fn email_field<O, Values>(
    attributes: Attributes,
    config: EditableConfig<String, O, Values>,
) -> Form<FieldKind<Values>, O, Values>
where
    O: 'static,
    Values: Clone + Send + Sync + 'static,
{
    text_like(TextKind::Email, attributes, config)
}

/// A password input; the empty string counts as empty.
pub fn password_field<O, Values>(
    attributes: Attributes,
    config: EditableConfig<String, O, Values>,
) -> Form<FieldKind<Values>, O, Values>
where
    O: 'static,
    Values: Clone + Send + Sync + 'static,
{
    text_like(TextKind::Password, attributes, config)
}

/// A multi-line input; the empty string counts as empty.
pub fn textarea_field<O, Values>(
    attributes: Attributes,
    config: EditableConfig<String, O, Values>,
) -> Form<FieldKind<Values>, O, Values>
where
    O: 'static,
    Values: Clone + Send + Sync + 'static,
{
    text_like(TextKind::TextArea, attributes, config)
}

/// A checkbox. Never empty; the parser decides whether `false` is accepted.
pub fn checkbox_field<O, Values>(
    attributes: Attributes,
    config: EditableConfig<bool, O, Values>,
) -> Form<FieldKind<Values>, O, Values>
where
    O: 'static,
    Values: Clone + Send + Sync + 'static,
{
    field(
        |_: &bool| false,
        move |field| FieldKind::Checkbox {
            attributes: attributes.clone(),
            field,
        },
        config,
    )
}

/// A select among `(value, label)` options; the empty string counts as
/// "nothing selected".
pub fn select_field<O, Values>(
    attributes: Attributes,
    options: Vec<(String, String)>,
    config: EditableConfig<String, O, Values>,
) -> Form<FieldKind<Values>, O, Values>
where
    O: 'static,
    Values: Clone + Send + Sync + 'static,
{
    field(
        String::is_empty,
        move |field| FieldKind::Select {
            attributes: attributes.clone(),
            options: options.clone(),
            field,
        },
        config,
    )
}
