//! crates/message/src/format/parse.rs
//! Tokenizer for brace-style templates.

use std::mem;

use super::{Align, ArgKey, FormatSpec, Placeholder, Token};
use crate::error::FormatError;

#[derive(Clone, Copy, Eq, PartialEq)]
enum Numbering {
    Unset,
    Automatic,
    Manual,
}

/// Splits a template into literal runs and placeholders.
pub(super) fn tokenize(source: &str) -> Result<Vec<Token>, FormatError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut numbering = Numbering::Unset;
    let mut next_automatic = 0usize;
    let mut chars = source.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    literal.push('{');
                    continue;
                }

                let mut field = String::new();
                let mut closed = false;
                for (inner_offset, inner) in chars.by_ref() {
                    match inner {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(FormatError::UnbalancedBrace { offset: inner_offset }),
                        _ => field.push(inner),
                    }
                }
                if !closed {
                    return Err(FormatError::UnbalancedBrace { offset });
                }

                if !literal.is_empty() {
                    tokens.push(Token::Literal(mem::take(&mut literal)));
                }

                let (name, spec) = match field.split_once(':') {
                    Some((name, spec)) => (name, Some(spec)),
                    None => (field.as_str(), None),
                };
                let key = parse_key(name, &mut numbering, &mut next_automatic)?;
                let spec = match spec {
                    Some(spec) => parse_spec(spec)?,
                    None => FormatSpec::default(),
                };
                tokens.push(Token::Placeholder(Placeholder { key, spec }));
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_some() {
                    literal.push('}');
                } else {
                    return Err(FormatError::UnbalancedBrace { offset });
                }
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    Ok(tokens)
}

fn parse_key(
    name: &str,
    numbering: &mut Numbering,
    next_automatic: &mut usize,
) -> Result<ArgKey, FormatError> {
    if name.is_empty() {
        if *numbering == Numbering::Manual {
            return Err(FormatError::MixedNumbering);
        }
        *numbering = Numbering::Automatic;
        let index = *next_automatic;
        *next_automatic += 1;
        return Ok(ArgKey::Index(index));
    }

    if name.bytes().all(|byte| byte.is_ascii_digit()) {
        if *numbering == Numbering::Automatic {
            return Err(FormatError::MixedNumbering);
        }
        *numbering = Numbering::Manual;
        let index = name.parse().map_err(|_| FormatError::InvalidField {
            field: name.to_owned(),
        })?;
        return Ok(ArgKey::Index(index));
    }

    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_');
    if valid_start && chars.all(|rest| rest.is_alphanumeric() || rest == '_') {
        Ok(ArgKey::Name(name.to_owned()))
    } else {
        Err(FormatError::InvalidField {
            field: name.to_owned(),
        })
    }
}

fn parse_spec(spec: &str) -> Result<FormatSpec, FormatError> {
    let invalid = || FormatError::InvalidSpec {
        spec: spec.to_owned(),
    };
    let chars: Vec<char> = spec.chars().collect();
    let mut parsed = FormatSpec::default();
    let mut position = 0;

    if let Some(align) = chars.get(1).copied().and_then(align_from) {
        parsed.fill = chars[0];
        parsed.align = Some(align);
        position = 2;
    } else if let Some(align) = chars.first().copied().and_then(align_from) {
        parsed.align = Some(align);
        position = 1;
    }

    let (width, consumed) = take_number(&chars[position..]);
    parsed.width = width;
    position += consumed;

    if chars.get(position) == Some(&'.') {
        position += 1;
        let (precision, consumed) = take_number(&chars[position..]);
        if precision.is_none() {
            return Err(invalid());
        }
        parsed.precision = precision;
        position += consumed;
    }

    if let Some(&conversion) = chars.get(position) {
        if !matches!(conversion, 's' | 'd' | 'f') {
            return Err(invalid());
        }
        parsed.conversion = Some(conversion);
        position += 1;
    }

    if position == chars.len() {
        Ok(parsed)
    } else {
        Err(invalid())
    }
}

const fn align_from(ch: char) -> Option<Align> {
    match ch {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    }
}

fn take_number(chars: &[char]) -> (Option<usize>, usize) {
    let digits = chars.iter().take_while(|ch| ch.is_ascii_digit()).count();
    if digits == 0 {
        return (None, 0);
    }
    let number = chars[..digits]
        .iter()
        .fold(0usize, |acc, ch| {
            acc.saturating_mul(10)
                .saturating_add(ch.to_digit(10).unwrap_or(0) as usize)
        });
    (Some(number), digits)
}
