//! Fields of the classic engine.
//!
//! A classic [`Field`] is just a raw value and a closure writing a new raw
//! value back into `Values`; there is no editing/displaying duality. After a
//! fill, each field sits in a [`FilledField`] together with its error and its
//! [`FieldState`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{FieldError, Update};

/// How a filled classic field may be interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldState {
    /// The field accepts input.
    #[default]
    CanBeEdited,
    /// The field is shown read-only.
    CanBeViewed,
    /// The field is shown but inert.
    Disabled,
}

impl FieldState {
    /// Returns `true` for [`FieldState::Disabled`].
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// A raw value together with its update closure.
pub struct Field<V, Values> {
    /// The current raw value.
    pub value: V,
    update: Update<V, Values>,
}

impl<V, Values> Field<V, Values> {
    pub(crate) fn new(value: V, update: Update<V, Values>) -> Self {
        Self { value, update }
    }

    /// Returns the `Values` with this field's raw value replaced by `value`.
    pub fn update(&self, value: V) -> Values {
        (self.update)(value)
    }

    /// Returns a shareable handle to the update closure.
    pub fn updater(&self) -> Update<V, Values> {
        Arc::clone(&self.update)
    }
}

impl<V: Clone, Values> Clone for Field<V, Values> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            update: Arc::clone(&self.update),
        }
    }
}

impl<V: fmt::Debug, Values> fmt::Debug for Field<V, Values> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// One field of a filled classic form.
///
/// `F` is the form's field descriptor type, usually
/// [`FieldKind`](crate::classic::FieldKind).
#[derive(Debug, Clone)]
pub struct FilledField<F> {
    /// The field descriptor.
    pub field: F,
    /// The field's error, if any.
    pub error: Option<FieldError>,
    /// How the field may be interacted with.
    pub state: FieldState,
}

impl<F> FilledField<F> {
    /// Returns `true` if the field's error is
    /// [`FieldError::RequiredFieldIsEmpty`].
    pub fn is_empty(&self) -> bool {
        matches!(self.error, Some(FieldError::RequiredFieldIsEmpty))
    }
}
