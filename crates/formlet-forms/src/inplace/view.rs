//! View adapters for in-place fields.
//!
//! The engine does not render anything. [`view_field`] only decides which of
//! the host's two render callbacks to call for a field, and hands it the
//! pre-bound `Values` updates it needs to wire up events.

use crate::inplace::field::{Field, FieldState};
use crate::{FieldError, Update};

/// What a displaying field hands to the host's renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayingView<V, Values> {
    /// The current raw value.
    pub value: V,
    /// The `Values` that switches this field to editing.
    pub make_editable: Values,
}

/// What an editing field hands to the host's renderer.
pub struct EditingView<V, Values> {
    /// The current raw value.
    pub value: V,
    /// Produces the `Values` for a new raw value.
    pub update_value: Update<V, Values>,
    /// The `Values` that switches this field back to displaying.
    pub finish_editing: Values,
    /// The field's current error, if any.
    pub error: Option<FieldError>,
}

impl<V, Values> EditingView<V, Values> {
    /// Returns the `Values` for a new raw value.
    pub fn update(&self, value: V) -> Values {
        (self.update_value)(value)
    }
}

/// The host's pair of render callbacks.
///
/// Annotate the closure parameters when building one; the callbacks are
/// stored before the field types are known.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig<D, E> {
    /// Renders a field in [`FieldState::Displaying`].
    pub view_when_displaying: D,
    /// Renders a field in [`FieldState::Editing`].
    pub view_when_editing: E,
}

impl<D, E> ViewConfig<D, E> {
    /// Pairs the two render callbacks.
    pub const fn new(view_when_displaying: D, view_when_editing: E) -> Self {
        Self {
            view_when_displaying,
            view_when_editing,
        }
    }
}

/// Renders `field` with the callback matching its state.
pub fn view_field<V, O, Values, Element, D, E>(config: &ViewConfig<D, E>, field: &Field<V, O, Values>) -> Element
where
    V: Clone,
    Values: Clone,
    D: Fn(DisplayingView<V, Values>) -> Element,
    E: Fn(EditingView<V, Values>) -> Element,
{
    match field.state {
        FieldState::Displaying => (config.view_when_displaying)(DisplayingView {
            value: field.value.clone(),
            make_editable: field.update_state.clone(),
        }),
        FieldState::Editing => (config.view_when_editing)(EditingView {
            value: field.value.clone(),
            update_value: field.updater(),
            finish_editing: field.update_state.clone(),
            error: field.error().cloned(),
        }),
    }
}
