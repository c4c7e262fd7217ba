//! crates/message/src/error.rs

use thiserror::Error;

/// Error produced while parsing a format template or rendering it with arguments.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormatError {
    /// A `{` or `}` is not part of a placeholder or an escaped pair.
    #[error("unbalanced brace at byte {offset} of format template")]
    UnbalancedBrace {
        /// Byte offset of the offending brace.
        offset: usize,
    },
    /// The template mixes `{}` with explicit `{0}` style placeholders.
    #[error("cannot switch between automatic and manual field numbering")]
    MixedNumbering,
    /// The placeholder names neither an index nor an identifier.
    #[error("invalid placeholder field '{field}'")]
    InvalidField {
        /// The text between the braces, before any `:`.
        field: String,
    },
    /// The text after `:` is not a supported format spec.
    #[error("invalid format spec '{spec}'")]
    InvalidSpec {
        /// The spec text after the `:`.
        spec: String,
    },
    /// Fewer positional arguments were supplied than the template references.
    #[error("missing positional argument {index}")]
    MissingPositional {
        /// Zero-based index of the first missing argument.
        index: usize,
    },
    /// A named placeholder has no matching argument.
    #[error("missing named argument '{name}'")]
    MissingNamed {
        /// Placeholder name.
        name: String,
    },
    /// The spec's type conversion does not accept the argument.
    #[error("format type '{conversion}' cannot render a {kind} argument")]
    TypeMismatch {
        /// The requested conversion character.
        conversion: char,
        /// The argument's type name.
        kind: &'static str,
    },
    /// A precision was requested for an integer argument.
    #[error("precision not allowed for integer arguments")]
    PrecisionOnInteger,
}
