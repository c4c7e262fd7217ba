//! crates/message/src/value.rs
//! Typed arguments substituted into message templates.

use std::fmt;

/// A single argument substituted into a template placeholder.
///
/// Values keep their type so that format specs such as `{:.2}` or `{:d}` can
/// be validated against the argument instead of being applied to an already
/// stringified value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Text argument.
    Str(String),
    /// Signed integer argument.
    Int(i64),
    /// Unsigned integer argument.
    UInt(u64),
    /// Floating-point argument.
    Float(f64),
    /// Boolean argument.
    Bool(bool),
}

impl Value {
    /// Captures any [`Display`](fmt::Display) value as text.
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Str(value.to_string())
    }

    /// Short name of the argument type, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }

    pub(crate) const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::UInt(_) | Self::Float(_))
    }

    pub(crate) fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(value) => Some(value as f64),
            Self::UInt(value) => Some(value as f64),
            Self::Float(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            // Whole floats keep one decimal so `2.0` does not read as an integer.
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 => {
                write!(f, "{value:.1}")
            }
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
        }
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

value_from!(Int as i64: i8, i16, i32, i64);
value_from!(UInt as u64: u8, u16, u32, u64);
value_from!(Float as f64: f32, f64);

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<&std::path::Path> for Value {
    fn from(value: &std::path::Path) -> Self {
        Self::Str(value.display().to_string())
    }
}

/// Positional and named arguments for one render call.
///
/// ```
/// use message::{FormatArgs, Value};
///
/// let args = FormatArgs::new().with("/etc/hosts").with(42).with_named("limit", 10);
/// assert_eq!(args.positional(0), Some(&Value::from("/etc/hosts")));
/// assert_eq!(args.named("limit"), Some(&Value::Int(10)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormatArgs {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl FormatArgs {
    /// Creates an empty argument list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    /// Adds or replaces a named argument.
    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Appends a positional argument in place.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Adds or replaces a named argument in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.named.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.named.push((name, value)),
        }
    }

    /// Returns the positional argument at `index`.
    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Returns the named argument called `name`.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&Value> {
        self.named
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Number of positional arguments.
    #[must_use]
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Reports whether no arguments were supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

impl<V: Into<Value>> FromIterator<V> for FormatArgs {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut args = Self::new();
        for value in iter {
            args.push(value);
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_keep_a_decimal() {
        assert_eq!(Value::from(2.0_f64).to_string(), "2.0");
        assert_eq!(Value::from(2.5_f64).to_string(), "2.5");
        assert_eq!(Value::from(-3_i32).to_string(), "-3");
    }

    #[test]
    fn booleans_are_capitalised() {
        assert_eq!(Value::from(true).to_string(), "True");
        assert_eq!(Value::from(false).to_string(), "False");
    }

    #[test]
    fn insert_replaces_existing_name() {
        let mut args = FormatArgs::new().with_named("value", 1);
        args.insert("value", 2);
        assert_eq!(args.named("value"), Some(&Value::Int(2)));
        assert_eq!(args.positional_len(), 0);
    }

    #[test]
    fn collects_positional_arguments() {
        let args: FormatArgs = ["a", "b"].into_iter().collect();
        assert_eq!(args.positional_len(), 2);
        assert_eq!(args.positional(1), Some(&Value::from("b")));
        assert!(!args.is_empty());
    }
}
