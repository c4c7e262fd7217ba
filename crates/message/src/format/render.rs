//! crates/message/src/format/render.rs

use super::{Align, ArgKey, FormatSpec, Placeholder};
use crate::error::FormatError;
use crate::value::{FormatArgs, Value};

pub(super) fn placeholder(
    placeholder: &Placeholder,
    args: &FormatArgs,
    out: &mut String,
) -> Result<(), FormatError> {
    let value = match &placeholder.key {
        ArgKey::Index(index) => args
            .positional(*index)
            .ok_or(FormatError::MissingPositional { index: *index })?,
        ArgKey::Name(name) => args
            .named(name)
            .ok_or_else(|| FormatError::MissingNamed { name: name.clone() })?,
    };

    let spec = &placeholder.spec;
    let body = convert(value, spec)?;
    let align = spec.align.unwrap_or(
        if value.is_numeric() && spec.conversion != Some('s') {
            Align::Right
        } else {
            Align::Left
        },
    );
    pad(out, &body, spec, align);
    Ok(())
}

fn convert(value: &Value, spec: &FormatSpec) -> Result<String, FormatError> {
    let mismatch = |conversion| FormatError::TypeMismatch {
        conversion,
        kind: value.kind(),
    };

    match spec.conversion {
        Some('d') => match value {
            Value::Int(_) | Value::UInt(_) if spec.precision.is_some() => {
                Err(FormatError::PrecisionOnInteger)
            }
            Value::Int(_) | Value::UInt(_) => Ok(value.to_string()),
            _ => Err(mismatch('d')),
        },
        Some('f') => {
            let number = value.as_f64().ok_or_else(|| mismatch('f'))?;
            let precision = spec.precision.unwrap_or(6);
            Ok(format!("{number:.precision$}"))
        }
        Some('s') => match value {
            Value::Str(text) => Ok(truncate(text, spec.precision)),
            _ => Err(mismatch('s')),
        },
        _ => match value {
            Value::Int(_) | Value::UInt(_) if spec.precision.is_some() => {
                Err(FormatError::PrecisionOnInteger)
            }
            Value::Float(number) => Ok(match spec.precision {
                Some(precision) => format!("{number:.precision$}"),
                None => value.to_string(),
            }),
            Value::Str(text) => Ok(truncate(text, spec.precision)),
            other => Ok(truncate(&other.to_string(), spec.precision)),
        },
    }
}

fn truncate(text: &str, precision: Option<usize>) -> String {
    match precision {
        Some(limit) => text.chars().take(limit).collect(),
        None => text.to_owned(),
    }
}

fn pad(out: &mut String, body: &str, spec: &FormatSpec, align: Align) {
    let length = body.chars().count();
    let padding = spec.width.map_or(0, |width| width.saturating_sub(length));
    let (before, after) = match align {
        Align::Left => (0, padding),
        Align::Right => (padding, 0),
        Align::Center => (padding / 2, padding - padding / 2),
    };
    out.extend(std::iter::repeat_n(spec.fill, before));
    out.push_str(body);
    out.extend(std::iter::repeat_n(spec.fill, after));
}
