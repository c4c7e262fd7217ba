//! crates/message/src/format/mod.rs
//! Brace-style format templates parsed once and rendered per call.
//!
//! Templates use the familiar brace syntax: `{}` takes the next positional
//! argument, `{0}` a specific one, `{name}` a named argument, and `{{`/`}}`
//! produce literal braces. A placeholder may carry a spec after `:` of the
//! form `[[fill]align][width][.precision][type]` where `align` is one of
//! `<`, `>` or `^` and `type` is one of `s`, `d` or `f`.
//!
//! Parsing happens when a template is registered so that malformed templates
//! are rejected up front. Rendering only has to resolve arguments and can
//! therefore fail solely on missing or mistyped arguments.

mod parse;
mod render;

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;
use crate::value::FormatArgs;

/// A parsed format template.
///
/// ```
/// use message::{FormatArgs, FormatTemplate};
///
/// let template = FormatTemplate::parse("Syntax error on line {}:{}")?;
/// let rendered = template.render(&FormatArgs::new().with("/etc/fstab").with(42))?;
/// assert_eq!(rendered, "Syntax error on line /etc/fstab:42");
/// # Ok::<(), message::FormatError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormatTemplate {
    source: String,
    tokens: Vec<Token>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Token {
    Literal(String),
    Placeholder(Placeholder),
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Placeholder {
    key: ArgKey,
    spec: FormatSpec,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum ArgKey {
    Index(usize),
    Name(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Align {
    Left,
    Right,
    Center,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct FormatSpec {
    fill: char,
    align: Option<Align>,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Option<char>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            width: None,
            precision: None,
            conversion: None,
        }
    }
}

impl FormatTemplate {
    /// Parses `source` into a template.
    pub fn parse(source: impl Into<String>) -> Result<Self, FormatError> {
        let source = source.into();
        let tokens = parse::tokenize(&source)?;
        Ok(Self { source, tokens })
    }

    /// Returns the template text exactly as registered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of placeholders in the template.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| matches!(token, Token::Placeholder(_)))
            .count()
    }

    /// Number of positional arguments the template needs.
    #[must_use]
    pub fn required_positional(&self) -> usize {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Placeholder(Placeholder {
                    key: ArgKey::Index(index),
                    ..
                }) => Some(index + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Names of the named arguments the template references, in order of first use.
    pub fn named_fields(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = Vec::new();
        self.tokens.iter().filter_map(move |token| match token {
            Token::Placeholder(Placeholder {
                key: ArgKey::Name(name),
                ..
            }) if !seen.contains(&name.as_str()) => {
                seen.push(name);
                Some(name.as_str())
            }
            _ => None,
        })
    }

    /// Renders the template with `args`.
    ///
    /// Arguments that no placeholder references are ignored. Nothing is
    /// returned unless every placeholder resolved.
    pub fn render(&self, args: &FormatArgs) -> Result<String, FormatError> {
        let mut rendered = String::with_capacity(self.source.len());
        for token in &self.tokens {
            match token {
                Token::Literal(text) => rendered.push_str(text),
                Token::Placeholder(placeholder) => {
                    render::placeholder(placeholder, args, &mut rendered)?;
                }
            }
        }
        Ok(rendered)
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self {
            source: "{}".to_owned(),
            tokens: vec![Token::Placeholder(Placeholder {
                key: ArgKey::Index(0),
                spec: FormatSpec::default(),
            })],
        }
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for FormatTemplate {
    type Err = FormatError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::parse(source)
    }
}

#[cfg(test)]
mod tests;
