//! Configuration for always-editable fields.
//!
//! An [`EditableConfig`] says how to read a raw value out of `Values`, how to
//! write a new raw value back, and how to parse it. It is shared by the classic
//! engine and by the always-editable helpers in [`crate::inplace::base`].

use std::fmt;
use std::sync::Arc;

type Parser<V, O> = Arc<dyn Fn(&V) -> Result<O, String> + Send + Sync>;
type Getter<V, Values> = Arc<dyn Fn(&Values) -> V + Send + Sync>;
type Setter<V, Values> = Arc<dyn Fn(&Values, V) -> Values + Send + Sync>;

/// Reads, writes, and parses the raw value of a field that has no
/// displaying/editing state.
///
/// # Examples
///
/// ```
/// use formlet_forms::config::EditableConfig;
///
/// #[derive(Clone)]
/// struct Values {
///     age: String,
/// }
///
/// let config = EditableConfig::new(
///     |raw: &String| raw.parse::<u8>().map_err(|_| "Enter a whole number".to_string()),
///     |values: &Values| values.age.clone(),
///     |_values: &Values, age| Values { age },
/// );
/// let values = Values { age: "42".into() };
/// assert_eq!(config.parse(&config.read(&values)), Ok(42));
/// ```
pub struct EditableConfig<V, O, Values> {
    pub(crate) parser: Parser<V, O>,
    pub(crate) value: Getter<V, Values>,
    pub(crate) update: Setter<V, Values>,
}

impl<V, O, Values> EditableConfig<V, O, Values> {
    /// Creates a config from a parser, a getter, and a setter.
    pub fn new<P, G, S>(parser: P, value: G, update: S) -> Self
    where
        P: Fn(&V) -> Result<O, String> + Send + Sync + 'static,
        G: Fn(&Values) -> V + Send + Sync + 'static,
        S: Fn(&Values, V) -> Values + Send + Sync + 'static,
    {
        Self {
            parser: Arc::new(parser),
            value: Arc::new(value),
            update: Arc::new(update),
        }
    }

    /// Reads the raw value out of `values`.
    pub fn read(&self, values: &Values) -> V {
        (self.value)(values)
    }

    /// Writes `raw` into a copy of `values`.
    pub fn write(&self, values: &Values, raw: V) -> Values {
        (self.update)(values, raw)
    }

    /// Runs the parser on a raw value. Emptiness is not checked here.
    pub fn parse(&self, raw: &V) -> Result<O, String> {
        (self.parser)(raw)
    }
}

impl<V, O, Values> Clone for EditableConfig<V, O, Values> {
    fn clone(&self) -> Self {
        Self {
            parser: Arc::clone(&self.parser),
            value: Arc::clone(&self.value),
            update: Arc::clone(&self.update),
        }
    }
}

impl<V, O, Values> fmt::Debug for EditableConfig<V, O, Values> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditableConfig").finish_non_exhaustive()
    }
}
