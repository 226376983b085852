//! Integration tests for the in-place editable engine.
//!
//! These tests exercise a complete sign-up form built from independently
//! defined fields, covering:
//! 1. Filling with good and bad values
//! 2. Per-field state toggling and value updates
//! 3. Dependent fields observing the current values
//! 4. View dispatch
//! 5. Property tests for determinism, ordering, and composition

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use formlet_forms::inplace::{
    dynamic_field, field, optional, succeed, view_field, DisplayingView, EditingView, Field,
    FieldConfig, FieldState, Form, FormField, ViewConfig,
};
use formlet_forms::validators;
use formlet_forms::FieldError;
use proptest::prelude::*;

// ============================================================================
// Shared helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Input<V> {
    value: V,
    state: FieldState,
}

impl<V> Input<V> {
    fn editing(value: V) -> Self {
        Self {
            value,
            state: FieldState::Editing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SignUpValues {
    name: Input<String>,
    email: Input<String>,
    password: Input<String>,
    repeated_password: Input<String>,
    plan: Input<String>,
    agreed_to_terms: Input<bool>,
}

#[derive(Debug, Clone, PartialEq)]
struct Email(String);

#[derive(Debug, Clone, PartialEq)]
struct Password(String);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Plan {
    Basic,
    Pro,
}

#[derive(Debug, Clone, PartialEq)]
struct SignUp {
    name: Option<String>,
    email: Email,
    password: Password,
    plan: Plan,
}

type V = SignUpValues;

struct SignUpFields {
    name: Field<String, Option<String>, V>,
    email: Field<String, Email, V>,
    password: Field<String, Password, V>,
    repeated_password: Field<String, String, V>,
    plan: Field<String, Plan, V>,
    agreed_to_terms: Field<bool, bool, V>,
}

/// Wires a field config to one `Input` slot of the values.
fn slot<T, O, P>(
    parser: P,
    get: fn(&V) -> &Input<T>,
    get_mut: fn(&mut V) -> &mut Input<T>,
) -> FieldConfig<T, O, V>
where
    T: Clone + Send + Sync + 'static,
    P: Fn(&T) -> Result<O, String> + Send + Sync + 'static,
{
    FieldConfig::new(
        parser,
        move |values: &V| {
            let input = get(values);
            (input.value.clone(), input.state)
        },
        move |values: &V, value: T, state: FieldState| {
            let mut next = values.clone();
            *get_mut(&mut next) = Input { value, state };
            next
        },
    )
}

fn name_field() -> FormField<String, Option<String>, V> {
    optional(field(
        String::is_empty,
        slot(|raw: &String| Ok(raw.clone()), |v| &v.name, |v| &mut v.name),
    ))
}

fn email_field() -> FormField<String, Email, V> {
    field(
        String::is_empty,
        slot(
            |raw: &String| {
                if raw.contains('@') {
                    Ok(Email(raw.clone()))
                } else {
                    Err("Invalid email".to_string())
                }
            },
            |v| &v.email,
            |v| &mut v.email,
        ),
    )
}

fn password_field() -> FormField<String, Password, V> {
    field(
        String::is_empty,
        slot(
            |raw: &String| {
                if raw.len() >= 6 {
                    Ok(Password(raw.clone()))
                } else {
                    Err("Your password should be at least 6 characters long".to_string())
                }
            },
            |v| &v.password,
            |v| &mut v.password,
        ),
    )
}

fn repeated_password_field() -> FormField<String, String, V> {
    dynamic_field(|values: &V| {
        field(
            String::is_empty,
            slot(
                validators::equals(values.password.value.clone(), "The passwords should match"),
                |v| &v.repeated_password,
                |v| &mut v.repeated_password,
            ),
        )
    })
}

fn plan_field() -> FormField<String, Plan, V> {
    field(
        String::is_empty,
        slot(
            |raw: &String| match raw.as_str() {
                "Basic" => Ok(Plan::Basic),
                "Pro" => Ok(Plan::Pro),
                _ => Err("Wrong plan".to_string()),
            },
            |v| &v.plan,
            |v| &mut v.plan,
        ),
    )
}

fn agreed_to_terms_field() -> FormField<bool, bool, V> {
    field(
        |_: &bool| false,
        slot(
            |agreed: &bool| {
                if *agreed {
                    Ok(true)
                } else {
                    Err("You must accept the terms".to_string())
                }
            },
            |v| &v.agreed_to_terms,
            |v| &mut v.agreed_to_terms,
        ),
    )
}

fn sign_up_form() -> Form<V, SignUpFields, SignUp> {
    succeed((), ())
        .append(name_field())
        .append(email_field())
        .append(password_field())
        .append(repeated_password_field())
        .append(plan_field())
        .append(agreed_to_terms_field())
        .map(
            |(name, email, password, repeated_password, plan, agreed_to_terms)| SignUpFields {
                name,
                email,
                password,
                repeated_password,
                plan,
                agreed_to_terms,
            },
            |(name, email, password, _repeated, plan, _agreed)| SignUp {
                name,
                email,
                password,
                plan,
            },
        )
}

fn good_values() -> V {
    SignUpValues {
        name: Input::editing("John Doe".to_string()),
        email: Input::editing("john@doe.com".to_string()),
        password: Input::editing("VerySecure".to_string()),
        repeated_password: Input::editing("VerySecure".to_string()),
        plan: Input::editing("Basic".to_string()),
        agreed_to_terms: Input::editing(true),
    }
}

fn bad_values() -> V {
    SignUpValues {
        name: Input::editing(String::new()),
        email: Input::editing("noway".to_string()),
        password: Input::editing(String::new()),
        repeated_password: Input::editing("VerySecure".to_string()),
        plan: Input::editing("SuperDuper".to_string()),
        agreed_to_terms: Input::editing(false),
    }
}

// ============================================================================
// Category 1: Filling
// ============================================================================

#[test]
fn test_sign_up_good_values() {
    let filled = sign_up_form().fill(&good_values());
    assert_eq!(
        filled.output,
        Some(SignUp {
            name: Some("John Doe".to_string()),
            email: Email("john@doe.com".to_string()),
            password: Password("VerySecure".to_string()),
            plan: Plan::Basic,
        })
    );
}

#[test]
fn test_sign_up_bad_values() {
    let filled = sign_up_form().fill(&bad_values());
    assert!(filled.output.is_none());

    let fields = &filled.fields;
    assert_eq!(fields.name.output, Ok(None));
    assert_eq!(
        fields.email.output,
        Err(FieldError::validation("Invalid email"))
    );
    assert_eq!(fields.password.output, Err(FieldError::RequiredFieldIsEmpty));
    assert_eq!(
        fields.repeated_password.output,
        Err(FieldError::validation("The passwords should match"))
    );
    assert_eq!(fields.plan.output, Err(FieldError::validation("Wrong plan")));
    assert_eq!(
        fields.agreed_to_terms.output,
        Err(FieldError::validation("You must accept the terms"))
    );
}

#[test]
fn test_sign_up_single_bad_field_drops_output() {
    let mut values = good_values();
    values.plan.value = "Enterprise".to_string();
    let filled = sign_up_form().fill(&values);
    assert!(filled.output.is_none());
    assert!(filled.fields.email.output.is_ok());
    assert_eq!(filled.fields.plan.output, Err(FieldError::validation("Wrong plan")));
}

#[test]
fn test_sign_up_optional_name_absent() {
    let mut values = good_values();
    values.name.value = String::new();
    let filled = sign_up_form().fill(&values);
    assert_eq!(filled.output.map(|s| s.name), Some(None));
}

#[test]
fn test_sign_up_short_password() {
    let mut values = good_values();
    values.password.value = "short".to_string();
    values.repeated_password.value = "short".to_string();
    let filled = sign_up_form().fill(&values);
    assert!(filled.output.is_none());
    assert_eq!(
        filled.fields.password.output,
        Err(FieldError::validation(
            "Your password should be at least 6 characters long"
        ))
    );
    assert!(filled.fields.repeated_password.output.is_ok());
}

// ============================================================================
// Category 2: State and value updates
// ============================================================================

#[test]
fn test_update_value_round_trip() {
    let form = sign_up_form();
    let filled = form.fill(&bad_values());
    let next = filled.fields.email.update_value("jane@doe.com".to_string());
    assert_eq!(next.email, Input::editing("jane@doe.com".to_string()));
    // Other fields are untouched.
    assert_eq!(next.plan, bad_values().plan);

    let refilled = form.fill(&next);
    assert_eq!(
        refilled.fields.email.output,
        Ok(Email("jane@doe.com".to_string()))
    );
}

#[test]
fn test_toggle_state_round_trip() {
    let form = sign_up_form();
    let filled = form.fill(&good_values());
    assert_eq!(filled.fields.plan.state, FieldState::Editing);

    let toggled = form.fill(&filled.fields.plan.update_state);
    assert_eq!(toggled.fields.plan.state, FieldState::Displaying);
    assert_eq!(toggled.fields.plan.value, filled.fields.plan.value);
    assert_eq!(toggled.fields.plan.output, filled.fields.plan.output);
    assert_eq!(toggled.fields.email.state, FieldState::Editing);
    assert_eq!(toggled.output, filled.output);

    let back = form.fill(&toggled.fields.plan.update_state);
    assert_eq!(back.fields.plan.state, FieldState::Editing);
}

#[test]
fn test_update_value_keeps_displaying_state() {
    let mut values = good_values();
    values.name.state = FieldState::Displaying;
    let filled = sign_up_form().fill(&values);
    let next = filled.fields.name.update_value("Jane".to_string());
    assert_eq!(next.name.state, FieldState::Displaying);
    assert_eq!(next.name.value, "Jane");
}

// ============================================================================
// Category 3: Dependent fields
// ============================================================================

#[test]
fn test_dependent_field_sees_current_password() {
    let form = sign_up_form();
    let values = good_values();
    assert!(form.fill(&values).fields.repeated_password.output.is_ok());

    let filled = form.fill(&values);
    let changed = filled.fields.password.update_value("AnotherSecret".to_string());
    assert_eq!(
        form.fill(&changed).fields.repeated_password.output,
        Err(FieldError::validation("The passwords should match"))
    );
}

#[test]
fn test_dependent_field_rebuilt_on_every_fill() {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&builds);
    let dependent = dynamic_field(move |values: &V| {
        counter.fetch_add(1, Ordering::SeqCst);
        field(
            String::is_empty,
            slot(
                validators::equals(values.password.value.clone(), "mismatch"),
                |v| &v.repeated_password,
                |v| &mut v.repeated_password,
            ),
        )
    });
    let form = succeed((), ()).append(dependent);

    form.fill(&good_values());
    form.fill(&good_values());
    form.fill(&bad_values());
    assert_eq!(builds.load(Ordering::SeqCst), 3);
}

// ============================================================================
// Category 4: Views
// ============================================================================

#[derive(Debug, PartialEq)]
enum Node {
    Label(String),
    Input(String, Option<String>),
}

#[test]
fn test_view_dispatch_by_state() {
    let config = ViewConfig::new(
        |view: DisplayingView<String, V>| Node::Label(view.value),
        |view: EditingView<String, V>| Node::Input(view.value, view.error.map(|e| e.to_string())),
    );

    let mut values = bad_values();
    values.email.state = FieldState::Displaying;
    let filled = sign_up_form().fill(&values);

    assert_eq!(
        view_field(&config, &filled.fields.email),
        Node::Label("noway".to_string())
    );
    assert_eq!(
        view_field(&config, &filled.fields.plan),
        Node::Input("SuperDuper".to_string(), Some("Wrong plan".to_string()))
    );
}

// ============================================================================
// Category 5: Properties
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Triple {
    a: Input<String>,
    b: Input<String>,
    c: Input<String>,
}

fn accept_ok(
    get: fn(&Triple) -> &Input<String>,
    get_mut: fn(&mut Triple) -> &mut Input<String>,
) -> FormField<String, String, Triple> {
    field(
        String::is_empty,
        FieldConfig::new(
            |raw: &String| {
                if raw == "ok" {
                    Ok(raw.clone())
                } else {
                    Err(format!("{raw} is not ok"))
                }
            },
            move |t: &Triple| {
                let input = get(t);
                (input.value.clone(), input.state)
            },
            move |t: &Triple, value: String, state: FieldState| {
                let mut next = t.clone();
                *get_mut(&mut next) = Input { value, state };
                next
            },
        ),
    )
}

type TripleField = Field<String, String, Triple>;

fn triple_form() -> Form<Triple, (TripleField, TripleField, TripleField), (String, String, String)> {
    succeed((), ())
        .append(accept_ok(|t| &t.a, |t| &mut t.a))
        .append(accept_ok(|t| &t.b, |t| &mut t.b))
        .append(accept_ok(|t| &t.c, |t| &mut t.c))
}

fn raw_value() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["ok".to_string(), "bad".to_string(), String::new()])
}

fn any_state() -> impl Strategy<Value = FieldState> {
    prop::sample::select(vec![FieldState::Editing, FieldState::Displaying])
}

fn triple() -> impl Strategy<Value = Triple> {
    (raw_value(), raw_value(), raw_value(), any_state(), any_state(), any_state()).prop_map(
        |(a, b, c, sa, sb, sc)| Triple {
            a: Input { value: a, state: sa },
            b: Input { value: b, state: sb },
            c: Input { value: c, state: sc },
        },
    )
}

proptest! {
    #[test]
    fn prop_fill_is_deterministic(values in triple()) {
        let form = triple_form();
        let first = form.fill(&values);
        let second = form.fill(&values);
        prop_assert_eq!(&first.output, &second.output);
        prop_assert_eq!(&first.fields.0.output, &second.fields.0.output);
        prop_assert_eq!(&first.fields.1.value, &second.fields.1.value);
        prop_assert_eq!(first.fields.2.state, second.fields.2.state);
        prop_assert_eq!(&first.fields.2.update_state, &second.fields.2.update_state);
    }

    #[test]
    fn prop_output_present_iff_all_fields_ok(values in triple()) {
        let filled = triple_form().fill(&values);
        let all_ok = filled.fields.0.output.is_ok()
            && filled.fields.1.output.is_ok()
            && filled.fields.2.output.is_ok();
        prop_assert_eq!(filled.output.is_some(), all_ok);
        prop_assert_eq!(
            all_ok,
            [&values.a, &values.b, &values.c].iter().all(|i| i.value == "ok")
        );
    }

    #[test]
    fn prop_empty_value_never_parsed(raw in "[a-z]{0,4}") {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let single = field(
            String::is_empty,
            FieldConfig::new(
                move |raw: &String| -> Result<usize, String> {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err(format!("rejected {raw}"))
                },
                |v: &String| (v.clone(), FieldState::Editing),
                |_v: &String, value: String, _state: FieldState| value,
            ),
        );
        let evaluated = single.evaluate(&raw);
        if raw.is_empty() {
            prop_assert_eq!(evaluated.output, Err(FieldError::RequiredFieldIsEmpty));
            prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
        } else {
            prop_assert!(matches!(evaluated.output, Err(FieldError::ValidationFailed(_))));
            prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn prop_optional_absorbs_only_empty(raw in "[0-9a-z]{0,3}") {
        let number = optional(field(
            String::is_empty,
            FieldConfig::new(
                |raw: &String| raw.parse::<u32>().map_err(|_| "Not a number".to_string()),
                |v: &String| (v.clone(), FieldState::Editing),
                |_v: &String, value: String, _state: FieldState| value,
            ),
        ));
        let output = number.evaluate(&raw).output;
        match raw.parse::<u32>() {
            _ if raw.is_empty() => prop_assert_eq!(output, Ok(None)),
            Ok(n) => prop_assert_eq!(output, Ok(Some(n))),
            Err(_) => prop_assert_eq!(output, Err(FieldError::validation("Not a number"))),
        }
    }

    #[test]
    fn prop_toggle_flips_state_only(values in triple()) {
        let form = triple_form();
        let filled = form.fill(&values);
        let toggled = form.fill(&filled.fields.1.update_state);
        prop_assert_eq!(toggled.fields.1.state, filled.fields.1.state.flip());
        prop_assert_eq!(&toggled.fields.1.value, &filled.fields.1.value);
        prop_assert_eq!(&toggled.fields.1.output, &filled.fields.1.output);
        prop_assert_eq!(toggled.fields.0.state, filled.fields.0.state);
    }
}
