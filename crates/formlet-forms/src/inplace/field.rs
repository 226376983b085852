//! Field definitions for the in-place editable engine.
//!
//! A [`FormField`] is a definition: it knows how to read one input out of the
//! host's `Values`, how to write it back, when it is empty, and how to parse
//! it. Evaluating a definition against a concrete `Values` yields a [`Field`],
//! which carries the raw value, the editing/displaying state, the parsed
//! output, and pre-bound closures that produce the next `Values`.
//!
//! A field's `output` depends only on its raw value, never on its state.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{parse_raw, FieldError, Update};

/// Whether an in-place field is currently being edited or displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldState {
    /// The field shows an input and accepts changes.
    Editing,
    /// The field shows its value read-only.
    #[default]
    Displaying,
}

impl FieldState {
    /// Returns the other state.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Editing => Self::Displaying,
            Self::Displaying => Self::Editing,
        }
    }

    /// Returns `true` for [`FieldState::Editing`].
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// One evaluated input slot.
pub struct Field<V, O, Values> {
    /// The current raw value.
    pub value: V,
    /// Whether the field is being edited or displayed.
    pub state: FieldState,
    /// The parsed result of `value`.
    pub output: Result<O, FieldError>,
    /// The `Values` with this field's state flipped and its raw value kept.
    pub update_state: Values,
    update_value: Update<V, Values>,
}

impl<V, O, Values> Field<V, O, Values> {
    /// Returns the `Values` with this field's raw value replaced by `value`.
    /// The field's state is preserved.
    pub fn update_value(&self, value: V) -> Values {
        (self.update_value)(value)
    }

    /// Returns a shareable handle to the value update closure.
    pub fn updater(&self) -> Update<V, Values> {
        Arc::clone(&self.update_value)
    }

    /// Returns the field's error, if parsing failed or the field is empty.
    pub fn error(&self) -> Option<&FieldError> {
        self.output.as_ref().err()
    }

    /// Returns `true` if the field is being edited.
    pub const fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    /// Replaces the output, keeping everything else.
    pub(crate) fn with_output<O2>(
        self,
        f: impl FnOnce(Result<O, FieldError>) -> Result<O2, FieldError>,
    ) -> Field<V, O2, Values> {
        Field {
            value: self.value,
            state: self.state,
            output: f(self.output),
            update_state: self.update_state,
            update_value: self.update_value,
        }
    }
}

impl<V: Clone, O: Clone, Values: Clone> Clone for Field<V, O, Values> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            state: self.state,
            output: self.output.clone(),
            update_state: self.update_state.clone(),
            update_value: Arc::clone(&self.update_value),
        }
    }
}

impl<V: fmt::Debug, O: fmt::Debug, Values> fmt::Debug for Field<V, O, Values> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("value", &self.value)
            .field("state", &self.state)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

type Parser<V, O> = Arc<dyn Fn(&V) -> Result<O, String> + Send + Sync>;
type Reader<V, Values> = Arc<dyn Fn(&Values) -> (V, FieldState) + Send + Sync>;
type Writer<V, Values> = Arc<dyn Fn(&Values, V, FieldState) -> Values + Send + Sync>;

/// How an in-place field reads, writes, and parses its slot in `Values`.
pub struct FieldConfig<V, O, Values> {
    parser: Parser<V, O>,
    value: Reader<V, Values>,
    update_value: Writer<V, Values>,
}

impl<V, O, Values> FieldConfig<V, O, Values> {
    /// Creates a config.
    ///
    /// - `parser` turns a non-empty raw value into the output, or a message.
    /// - `value` reads the raw value and the current state out of `Values`.
    /// - `update_value` writes a raw value and a state into a copy of `Values`.
    pub fn new<P, R, W>(parser: P, value: R, update_value: W) -> Self
    where
        P: Fn(&V) -> Result<O, String> + Send + Sync + 'static,
        R: Fn(&Values) -> (V, FieldState) + Send + Sync + 'static,
        W: Fn(&Values, V, FieldState) -> Values + Send + Sync + 'static,
    {
        Self {
            parser: Arc::new(parser),
            value: Arc::new(value),
            update_value: Arc::new(update_value),
        }
    }
}

impl<V, O, Values> Clone for FieldConfig<V, O, Values> {
    fn clone(&self) -> Self {
        Self {
            parser: Arc::clone(&self.parser),
            value: Arc::clone(&self.value),
            update_value: Arc::clone(&self.update_value),
        }
    }
}

type Evaluate<V, O, Values> = Arc<dyn Fn(&Values) -> Field<V, O, Values> + Send + Sync>;

/// A field definition, evaluated against `Values` on every fill.
pub struct FormField<V, O, Values> {
    eval: Evaluate<V, O, Values>,
}

impl<V, O, Values> Clone for FormField<V, O, Values> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<V, O, Values> fmt::Debug for FormField<V, O, Values> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField").finish_non_exhaustive()
    }
}

impl<V: 'static, O: 'static, Values: 'static> FormField<V, O, Values> {
    /// Wraps an arbitrary evaluation function.
    pub fn from_fn<F>(eval: F) -> Self
    where
        F: Fn(&Values) -> Field<V, O, Values> + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(eval),
        }
    }

    /// Evaluates this definition against `values`.
    pub fn evaluate(&self, values: &Values) -> Field<V, O, Values> {
        (self.eval)(values)
    }

    /// Transforms a successful output. Errors pass through unchanged.
    #[must_use]
    pub fn map_output<O2: 'static>(
        self,
        f: impl Fn(O) -> O2 + Send + Sync + 'static,
    ) -> FormField<V, O2, Values> {
        self.map_result(move |output| output.map(&f))
    }

    fn map_result<O2: 'static>(
        self,
        f: impl Fn(Result<O, FieldError>) -> Result<O2, FieldError> + Send + Sync + 'static,
    ) -> FormField<V, O2, Values> {
        FormField::from_fn(move |values: &Values| self.evaluate(values).with_output(&f))
    }
}

/// Builds a field definition from an emptiness predicate and a config.
///
/// Evaluation reads `(raw, state)` out of `Values`. If `is_empty(raw)` holds
/// the output is [`FieldError::RequiredFieldIsEmpty`] and the parser is not
/// called; otherwise the parser's message, if any, becomes
/// [`FieldError::ValidationFailed`].
pub fn field<V, O, Values, E>(is_empty: E, config: FieldConfig<V, O, Values>) -> FormField<V, O, Values>
where
    V: Clone + Send + Sync + 'static,
    O: 'static,
    Values: Clone + Send + Sync + 'static,
    E: Fn(&V) -> bool + Send + Sync + 'static,
{
    FormField::from_fn(move |values: &Values| {
        let (raw, state) = (config.value)(values);
        let output = parse_raw(&raw, &is_empty, &*config.parser);
        let update_state = (config.update_value)(values, raw.clone(), state.flip());

        let snapshot = values.clone();
        let write = Arc::clone(&config.update_value);
        let update_value: Update<V, Values> =
            Arc::new(move |new_raw: V| write(&snapshot, new_raw, state));

        Field {
            value: raw,
            state,
            output,
            update_state,
            update_value,
        }
    })
}

/// Makes a field optional: an empty value yields `Ok(None)` instead of
/// [`FieldError::RequiredFieldIsEmpty`]. A non-empty value that fails to parse
/// is still an error.
pub fn optional<V, O, Values>(field: FormField<V, O, Values>) -> FormField<V, Option<O>, Values>
where
    V: 'static,
    O: 'static,
    Values: 'static,
{
    field.map_result(|output| match output {
        Ok(o) => Ok(Some(o)),
        Err(FieldError::RequiredFieldIsEmpty) => Ok(None),
        Err(err) => Err(err),
    })
}

/// Defers building a field until evaluation, handing `build` the current
/// `Values`. Used for fields whose parser depends on other fields, such as a
/// password confirmation. `build` runs again on every evaluation.
pub fn dynamic_field<V, O, Values, F>(build: F) -> FormField<V, O, Values>
where
    V: 'static,
    O: 'static,
    Values: 'static,
    F: Fn(&Values) -> FormField<V, O, Values> + Send + Sync + 'static,
{
    FormField::from_fn(move |values: &Values| build(values).evaluate(values))
}
