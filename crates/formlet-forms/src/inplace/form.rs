//! Form composition for the in-place editable engine.
//!
//! A [`Form`] maps a `Values` instance to a [`FilledForm`]: the evaluated
//! fields plus an output that is present only when every field parsed. Forms
//! are built once with [`succeed`] and [`append`], then filled as often as the
//! host likes.
//!
//! Fields and outputs accumulate as flat tuples (see [`crate::tuple`]). The
//! final [`Form::map`] turns them into the application's record types:
//!
//! ```
//! use formlet_forms::inplace::{field, succeed, FieldConfig, FieldState, Form};
//!
//! #[derive(Clone)]
//! struct Values {
//!     first: String,
//!     last: String,
//! }
//!
//! fn name(get: fn(&Values) -> String, set: fn(&Values, String) -> Values)
//!     -> formlet_forms::inplace::FormField<String, String, Values>
//! {
//!     field(
//!         String::is_empty,
//!         FieldConfig::new(
//!             |raw: &String| Ok(raw.clone()),
//!             move |v: &Values| (get(v), FieldState::Editing),
//!             move |v: &Values, raw, _state| set(v, raw),
//!         ),
//!     )
//! }
//!
//! let form = succeed((), ())
//!     .append(name(|v| v.first.clone(), |v, first| Values { first, ..v.clone() }))
//!     .append(name(|v| v.last.clone(), |v, last| Values { last, ..v.clone() }))
//!     .map(|fields| fields, |(first, last)| format!("{first} {last}"));
//!
//! let filled = form.fill(&Values { first: "John".into(), last: "Doe".into() });
//! assert_eq!(filled.output.as_deref(), Some("John Doe"));
//!
//! let filled = form.fill(&Values { first: "John".into(), last: String::new() });
//! assert!(filled.output.is_none());
//! assert!(filled.fields.1.error().is_some());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::inplace::field::{Field, FormField};
use crate::tuple::Push;

/// The result of filling a form.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledForm<Fields, Output> {
    /// The evaluated fields, in whatever shape the form accumulated or mapped
    /// them into.
    pub fields: Fields,
    /// The aggregate output, present only if every field produced one.
    pub output: Option<Output>,
}

type Evaluate<Values, Fields, Output> =
    Arc<dyn Fn(&Values) -> FilledForm<Fields, Output> + Send + Sync>;

/// A reusable form definition.
///
/// Building never mutates an existing form: [`append`] and [`Form::map`]
/// return new forms that share the old one's closures.
pub struct Form<Values, Fields, Output> {
    eval: Evaluate<Values, Fields, Output>,
}

impl<Values, Fields, Output> Clone for Form<Values, Fields, Output> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<Values, Fields, Output> fmt::Debug for Form<Values, Fields, Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form").finish_non_exhaustive()
    }
}

impl<Values, Fields, Output> Form<Values, Fields, Output>
where
    Values: 'static,
    Fields: 'static,
    Output: 'static,
{
    fn from_fn<F>(eval: F) -> Self
    where
        F: Fn(&Values) -> FilledForm<Fields, Output> + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(eval),
        }
    }

    fn evaluate(&self, values: &Values) -> FilledForm<Fields, Output> {
        (self.eval)(values)
    }

    /// Fills the form with `values`.
    pub fn fill(&self, values: &Values) -> FilledForm<Fields, Output> {
        let filled = self.evaluate(values);
        tracing::trace!(
            target: "formlet_forms::inplace",
            has_output = filled.output.is_some(),
            "filled in-place form"
        );
        filled
    }

    /// Appends a field. Equivalent to [`append`]`(field, self)`.
    #[must_use]
    pub fn append<V, O>(
        self,
        field: FormField<V, O, Values>,
    ) -> Form<Values, <Fields as Push<Field<V, O, Values>>>::Output, <Output as Push<O>>::Output>
    where
        V: 'static,
        O: Clone + 'static,
        Fields: Push<Field<V, O, Values>>,
        Output: Push<O>,
        <Fields as Push<Field<V, O, Values>>>::Output: 'static,
        <Output as Push<O>>::Output: 'static,
    {
        append(field, self)
    }

    /// Turns the accumulated fields and output into their final shapes.
    #[must_use]
    pub fn map<F2, O2, FF, FO>(self, fields: FF, output: FO) -> Form<Values, F2, O2>
    where
        F2: 'static,
        O2: 'static,
        FF: Fn(Fields) -> F2 + Send + Sync + 'static,
        FO: Fn(Output) -> O2 + Send + Sync + 'static,
    {
        Form::from_fn(move |values: &Values| {
            let filled = self.evaluate(values);
            FilledForm {
                fields: fields(filled.fields),
                output: filled.output.map(&output),
            }
        })
    }

    /// Transforms only the output.
    #[must_use]
    pub fn map_output<O2, FO>(self, output: FO) -> Form<Values, Fields, O2>
    where
        O2: 'static,
        FO: Fn(Output) -> O2 + Send + Sync + 'static,
    {
        self.map(|fields| fields, output)
    }
}

/// The empty form: ignores `Values` and always yields `fields` and `output`.
///
/// Start a form with `succeed((), ())` and [`append`] fields onto it.
pub fn succeed<Values, Fields, Output>(fields: Fields, output: Output) -> Form<Values, Fields, Output>
where
    Values: 'static,
    Fields: Clone + Send + Sync + 'static,
    Output: Clone + Send + Sync + 'static,
{
    Form::from_fn(move |_values: &Values| FilledForm {
        fields: fields.clone(),
        output: Some(output.clone()),
    })
}

/// Appends `field` to `form`.
///
/// Both the field and the form are always evaluated, so every field reports
/// its state even when another one failed. The output is present only if the
/// field parsed and the form so far had an output.
pub fn append<Values, Fields, Output, V, O>(
    field: FormField<V, O, Values>,
    form: Form<Values, Fields, Output>,
) -> Form<Values, <Fields as Push<Field<V, O, Values>>>::Output, <Output as Push<O>>::Output>
where
    Values: 'static,
    Fields: Push<Field<V, O, Values>> + 'static,
    Output: Push<O> + 'static,
    <Fields as Push<Field<V, O, Values>>>::Output: 'static,
    <Output as Push<O>>::Output: 'static,
    V: 'static,
    O: Clone + 'static,
{
    Form::from_fn(move |values: &Values| {
        let filled_field = field.evaluate(values);
        let filled_form = form.evaluate(values);

        let output = match (&filled_field.output, filled_form.output) {
            (Ok(parsed), Some(so_far)) => Some(so_far.push(parsed.clone())),
            _ => None,
        };

        FilledForm {
            fields: filled_form.fields.push(filled_field),
            output,
        }
    })
}

/// Fills `form` with `values`. Equivalent to [`Form::fill`].
pub fn fill<Values, Fields, Output>(
    form: &Form<Values, Fields, Output>,
    values: &Values,
) -> FilledForm<Fields, Output>
where
    Values: 'static,
    Fields: 'static,
    Output: 'static,
{
    form.fill(values)
}
