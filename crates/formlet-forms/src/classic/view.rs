//! View adapter for classic fields.
//!
//! Classic fields are always editable, so [`view_field`] has only one
//! callback to call. It hands the renderer the raw value and the pre-bound
//! update closure.

use crate::classic::field::Field;
use crate::Update;

/// What a classic field hands to the host's renderer.
pub struct FieldView<V, Values> {
    /// The current raw value.
    pub value: V,
    /// Produces the `Values` for a new raw value.
    pub update: Update<V, Values>,
}

impl<V, Values> FieldView<V, Values> {
    /// Returns the `Values` for a new raw value.
    pub fn on_input(&self, value: V) -> Values {
        (self.update)(value)
    }
}

/// Renders `field` with `render`.
pub fn view_field<V, Values, Element, R>(render: R, field: &Field<V, Values>) -> Element
where
    V: Clone,
    R: FnOnce(FieldView<V, Values>) -> Element,
{
    render(FieldView {
        value: field.value.clone(),
        update: field.updater(),
    })
}
