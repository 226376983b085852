//! Always-editable field helpers built on the in-place engine.
//!
//! These constructors take an [`EditableConfig`] (no state slot in `Values`)
//! and produce ordinary in-place [`FormField`]s whose state is always
//! [`FieldState::Editing`]. Toggling such a field's state is a no-op: the
//! config has nowhere to store it.

use crate::config::EditableConfig;
use crate::inplace::field::{field, FieldConfig, FieldState, FormField};

/// An always-editable field with a caller-supplied emptiness predicate.
pub fn editable_field<V, O, Values, E>(
    is_empty: E,
    config: EditableConfig<V, O, Values>,
) -> FormField<V, O, Values>
where
    V: Clone + Send + Sync + 'static,
    O: 'static,
    Values: Clone + Send + Sync + 'static,
    E: Fn(&V) -> bool + Send + Sync + 'static,
{
    let EditableConfig {
        parser,
        value,
        update,
    } = config;

    field(
        is_empty,
        FieldConfig::new(
            move |raw: &V| parser(raw),
            move |values: &Values| (value(values), FieldState::Editing),
            move |values: &Values, raw: V, _state: FieldState| update(values, raw),
        ),
    )
}

/// An always-editable text field; the empty string counts as empty.
pub fn text_field<O, Values>(config: EditableConfig<String, O, Values>) -> FormField<String, O, Values>
where
    O: 'static,
    Values: Clone + Send + Sync + 'static,
{
    editable_field(String::is_empty, config)
}

/// An always-editable checkbox. A checkbox is never empty, so its parser
/// decides whether `false` is acceptable.
pub fn checkbox_field<O, Values>(config: EditableConfig<bool, O, Values>) -> FormField<bool, O, Values>
where
    O: 'static,
    Values: Clone + Send + Sync + 'static,
{
    editable_field(|_: &bool| false, config)
}
