//! Form composition for the classic engine.
//!
//! Classic forms collect their fields into an ordered list of
//! [`FilledField`]s, in declaration order, and combine the parsed values into
//! a single `submit` value. `submit` is present only when every field parsed.
//!
//! Unlike the in-place engine, a classic form is itself the unit of
//! composition: [`field`] builds a one-field form, [`append`] concatenates two
//! forms, and [`optional`], [`disabled`], [`read_only`], and [`dependent`]
//! wrap whole (possibly multi-field) subforms.

use std::fmt;
use std::sync::Arc;

use crate::classic::field::{Field, FieldState, FilledField};
use crate::config::EditableConfig;
use crate::tuple::Push;
use crate::{parse_raw, FieldError, Update};

/// The result of filling a classic form.
#[derive(Debug, Clone)]
pub struct FilledForm<F, Output> {
    /// The filled fields, in declaration order.
    pub fields: Vec<FilledField<F>>,
    /// The aggregate value, present only if every field parsed.
    pub submit: Option<Output>,
}

impl<F, Output> FilledForm<F, Output> {
    /// All field errors, in declaration order.
    pub fn errors(&self) -> Vec<FieldError> {
        self.fields
            .iter()
            .filter_map(|filled| filled.error.clone())
            .collect()
    }

    /// Returns `true` if every field is
    /// [`FieldError::RequiredFieldIsEmpty`].
    ///
    /// A form with no fields counts as empty.
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(FilledField::is_empty)
    }

    /// Returns `true` if any field has an error.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|filled| filled.error.is_some())
    }
}

/// All field errors of `filled`, in declaration order.
pub fn errors<F, Output>(filled: &FilledForm<F, Output>) -> Vec<FieldError> {
    filled.errors()
}

/// Returns `true` if every field of `filled` is empty.
pub fn is_empty<F, Output>(filled: &FilledForm<F, Output>) -> bool {
    filled.is_empty()
}

type Evaluate<F, Output, Values> = Arc<dyn Fn(&Values) -> FilledForm<F, Output> + Send + Sync>;

/// A reusable classic form definition.
///
/// `F` is the field descriptor type, `Output` the submit value, and `Values`
/// the host's value record.
pub struct Form<F, Output, Values> {
    eval: Evaluate<F, Output, Values>,
}

impl<F, Output, Values> Clone for Form<F, Output, Values> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<F, Output, Values> fmt::Debug for Form<F, Output, Values> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form").finish_non_exhaustive()
    }
}

impl<F, Output, Values> Form<F, Output, Values>
where
    F: 'static,
    Output: 'static,
    Values: 'static,
{
    /// Wraps an arbitrary evaluation function.
    pub fn from_fn<E>(eval: E) -> Self
    where
        E: Fn(&Values) -> FilledForm<F, Output> + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(eval),
        }
    }

    fn evaluate(&self, values: &Values) -> FilledForm<F, Output> {
        (self.eval)(values)
    }

    /// Fills the form with `values`.
    pub fn fill(&self, values: &Values) -> FilledForm<F, Output> {
        let filled = self.evaluate(values);
        tracing::trace!(
            target: "formlet_forms::classic",
            fields = filled.fields.len(),
            errors = filled.fields.iter().filter(|f| f.error.is_some()).count(),
            has_submit = filled.submit.is_some(),
            "filled classic form"
        );
        filled
    }

    /// Appends `other` after this form's fields. Equivalent to
    /// [`append`]`(other, self)`.
    #[must_use]
    pub fn append<O>(self, other: Form<F, O, Values>) -> Form<F, <Output as Push<O>>::Output, Values>
    where
        O: 'static,
        Output: Push<O>,
        <Output as Push<O>>::Output: 'static,
    {
        append(other, self)
    }

    /// Transforms the submit value.
    #[must_use]
    pub fn map<O2, M>(self, f: M) -> Form<F, O2, Values>
    where
        O2: 'static,
        M: Fn(Output) -> O2 + Send + Sync + 'static,
    {
        Form::from_fn(move |values: &Values| {
            let filled = self.evaluate(values);
            FilledForm {
                fields: filled.fields,
                submit: filled.submit.map(&f),
            }
        })
    }
}

/// A form with no fields that always submits `output`.
///
/// Start a form with `succeed(())` and [`append`] fields onto it.
pub fn succeed<F, Output, Values>(output: Output) -> Form<F, Output, Values>
where
    F: 'static,
    Output: Clone + Send + Sync + 'static,
    Values: 'static,
{
    Form::from_fn(move |_values: &Values| FilledForm {
        fields: Vec::new(),
        submit: Some(output.clone()),
    })
}

/// A one-field form.
///
/// `build` wraps the evaluated [`Field`] into the form's descriptor type `F`.
/// Emptiness is checked before parsing; the field always starts in
/// [`FieldState::CanBeEdited`].
pub fn field<V, O, F, Values, E, B>(
    is_empty: E,
    build: B,
    config: EditableConfig<V, O, Values>,
) -> Form<F, O, Values>
where
    V: Send + Sync + 'static,
    O: 'static,
    F: 'static,
    Values: Clone + Send + Sync + 'static,
    E: Fn(&V) -> bool + Send + Sync + 'static,
    B: Fn(Field<V, Values>) -> F + Send + Sync + 'static,
{
    Form::from_fn(move |values: &Values| {
        let raw = config.read(values);
        let result = parse_raw(&raw, &is_empty, &*config.parser);

        let snapshot = values.clone();
        let write = Arc::clone(&config.update);
        let update: Update<V, Values> = Arc::new(move |new_raw: V| write(&snapshot, new_raw));

        let (submit, error) = match result {
            Ok(parsed) => (Some(parsed), None),
            Err(err) => (None, Some(err)),
        };

        FilledForm {
            fields: vec![FilledField {
                field: build(Field::new(raw, update)),
                error,
                state: FieldState::CanBeEdited,
            }],
            submit,
        }
    })
}

/// Appends `new` after the fields of `form`.
///
/// Both forms are always evaluated. `submit` is present only if both forms
/// submitted.
pub fn append<F, Acc, O, Values>(
    new: Form<F, O, Values>,
    form: Form<F, Acc, Values>,
) -> Form<F, <Acc as Push<O>>::Output, Values>
where
    F: 'static,
    Acc: Push<O> + 'static,
    <Acc as Push<O>>::Output: 'static,
    O: 'static,
    Values: 'static,
{
    Form::from_fn(move |values: &Values| {
        let mut filled = form.evaluate(values);
        let filled_new = new.evaluate(values);

        filled.fields.extend(filled_new.fields);
        let submit = match (filled.submit, filled_new.submit) {
            (Some(so_far), Some(next)) => Some(so_far.push(next)),
            _ => None,
        };

        FilledForm {
            fields: filled.fields,
            submit,
        }
    })
}

/// Suppresses errors on a subform the user has not touched yet.
///
/// If every field of the inner form is empty, all field errors are cleared.
/// `submit` is left exactly as the inner form computed it. Since emptiness is
/// read from the errors, a cleared subform no longer reports
/// [`FilledForm::is_empty`].
pub fn optional<F, Output, Values>(form: Form<F, Output, Values>) -> Form<F, Output, Values>
where
    F: 'static,
    Output: 'static,
    Values: 'static,
{
    Form::from_fn(move |values: &Values| {
        let mut filled = form.evaluate(values);
        if filled.is_empty() {
            for field in &mut filled.fields {
                field.error = None;
            }
        }
        filled
    })
}

/// Marks every field of the inner form as [`FieldState::Disabled`].
pub fn disabled<F, Output, Values>(form: Form<F, Output, Values>) -> Form<F, Output, Values>
where
    F: 'static,
    Output: 'static,
    Values: 'static,
{
    Form::from_fn(move |values: &Values| {
        let mut filled = form.evaluate(values);
        for field in &mut filled.fields {
            field.state = FieldState::Disabled;
        }
        filled
    })
}

/// Marks every field of the inner form that is not disabled as
/// [`FieldState::CanBeViewed`].
pub fn read_only<F, Output, Values>(form: Form<F, Output, Values>) -> Form<F, Output, Values>
where
    F: 'static,
    Output: 'static,
    Values: 'static,
{
    Form::from_fn(move |values: &Values| {
        let mut filled = form.evaluate(values);
        for field in &mut filled.fields {
            if !field.state.is_disabled() {
                field.state = FieldState::CanBeViewed;
            }
        }
        filled
    })
}

/// Chooses the subform from the current `Values` on every evaluation.
pub fn dependent<F, Output, Values, B>(build: B) -> Form<F, Output, Values>
where
    F: 'static,
    Output: 'static,
    Values: 'static,
    B: Fn(&Values) -> Form<F, Output, Values> + Send + Sync + 'static,
{
    Form::from_fn(move |values: &Values| build(values).evaluate(values))
}

/// Fills `form` with `values`. Equivalent to [`Form::fill`].
pub fn fill<F, Output, Values>(form: &Form<F, Output, Values>, values: &Values) -> FilledForm<F, Output>
where
    F: 'static,
    Output: 'static,
    Values: 'static,
{
    form.fill(values)
}
