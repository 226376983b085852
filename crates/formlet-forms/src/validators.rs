//! Reusable parsers for text fields.
//!
//! Every function here returns a parser suitable for
//! [`EditableConfig::new`](crate::config::EditableConfig::new) or
//! [`FieldConfig::new`](crate::inplace::FieldConfig::new): a closure from the
//! raw string to either the parsed value or a human-readable message. Parsers
//! only see non-empty values; emptiness is the field's concern.
//!
//! ```
//! use formlet_forms::validators::{chain, email, max_length};
//!
//! let parse = chain(max_length(20), email());
//! assert_eq!(parse(&"ada@example.com".to_string()), Ok("ada@example.com".to_string()));
//! assert!(parse(&"not an email".to_string()).is_err());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

static SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("valid regex"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("valid regex"));

/// Accepts strings of at least `min` characters.
pub fn min_length(min: usize) -> impl Fn(&String) -> Result<String, String> + Clone + Send + Sync + 'static {
    move |raw: &String| {
        let len = raw.chars().count();
        if len < min {
            Err(format!(
                "Ensure this value has at least {min} characters (it has {len})."
            ))
        } else {
            Ok(raw.clone())
        }
    }
}

/// Accepts strings of at most `max` characters.
pub fn max_length(max: usize) -> impl Fn(&String) -> Result<String, String> + Clone + Send + Sync + 'static {
    move |raw: &String| {
        let len = raw.chars().count();
        if len > max {
            Err(format!(
                "Ensure this value has at most {max} characters (it has {len})."
            ))
        } else {
            Ok(raw.clone())
        }
    }
}

/// Parses a whole number within optional bounds.
pub fn integer(
    min: Option<i64>,
    max: Option<i64>,
) -> impl Fn(&String) -> Result<i64, String> + Clone + Send + Sync + 'static {
    move |raw: &String| {
        let n = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| "Enter a whole number.".to_string())?;
        if let Some(min) = min {
            if n < min {
                return Err(format!("Ensure this value is greater than or equal to {min}."));
            }
        }
        if let Some(max) = max {
            if n > max {
                return Err(format!("Ensure this value is less than or equal to {max}."));
            }
        }
        Ok(n)
    }
}

/// Accepts a plausible email address.
pub fn email() -> impl Fn(&String) -> Result<String, String> + Clone + Send + Sync + 'static {
    |raw: &String| {
        if EMAIL_RE.is_match(raw) {
            Ok(raw.clone())
        } else {
            Err("Enter a valid email address.".to_string())
        }
    }
}

/// Accepts letters, numbers, underscores, and hyphens.
pub fn slug() -> impl Fn(&String) -> Result<String, String> + Clone + Send + Sync + 'static {
    |raw: &String| {
        if SLUG_RE.is_match(raw) {
            Ok(raw.clone())
        } else {
            Err(
                "Enter a valid \"slug\" consisting of letters, numbers, underscores or hyphens."
                    .to_string(),
            )
        }
    }
}

/// Accepts an `http` or `https` URL.
pub fn url() -> impl Fn(&String) -> Result<String, String> + Clone + Send + Sync + 'static {
    |raw: &String| {
        if URL_RE.is_match(raw) {
            Ok(raw.clone())
        } else {
            Err("Enter a valid URL.".to_string())
        }
    }
}

/// Accepts strings matching `pattern`, rejecting others with `message`.
///
/// Fails if `pattern` is not a valid regular expression.
pub fn matches(
    pattern: &str,
    message: impl Into<String>,
) -> Result<impl Fn(&String) -> Result<String, String> + Clone + Send + Sync + 'static, regex::Error> {
    let re = Regex::new(pattern)?;
    let message = message.into();
    Ok(move |raw: &String| {
        if re.is_match(raw) {
            Ok(raw.clone())
        } else {
            Err(message.clone())
        }
    })
}

/// Accepts one of `choices`, rejecting others with `message`.
pub fn one_of(
    choices: &[&str],
    message: impl Into<String>,
) -> impl Fn(&String) -> Result<String, String> + Clone + Send + Sync + 'static {
    let choices: Vec<String> = choices.iter().map(|c| (*c).to_string()).collect();
    let message = message.into();
    move |raw: &String| {
        if choices.iter().any(|c| c == raw) {
            Ok(raw.clone())
        } else {
            Err(message.clone())
        }
    }
}

/// Accepts only `expected`, e.g. for a confirmation field.
pub fn equals(
    expected: impl Into<String>,
    message: impl Into<String>,
) -> impl Fn(&String) -> Result<String, String> + Clone + Send + Sync + 'static {
    let expected = expected.into();
    let message = message.into();
    move |raw: &String| {
        if *raw == expected {
            Ok(raw.clone())
        } else {
            Err(message.clone())
        }
    }
}

/// Runs `first`, then feeds its result to `second`.
pub fn chain<O, A, B>(first: A, second: B) -> impl Fn(&String) -> Result<O, String> + Clone + Send + Sync + 'static
where
    A: Fn(&String) -> Result<String, String> + Clone + Send + Sync + 'static,
    B: Fn(&String) -> Result<O, String> + Clone + Send + Sync + 'static,
{
    move |raw: &String| first(raw).and_then(|checked| second(&checked))
}
