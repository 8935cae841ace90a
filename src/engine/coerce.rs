// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Permissive coercion of untyped JSON into typed fields.
//!
//! Strings accept numbers and booleans (stringified); numbers accept numeric
//! strings. `null` and missing keys are both "absent". Containers where a
//! scalar is expected are always a shape error.

use serde_json::{Map, Value};

use super::error::ValidationError;

pub(crate) type Object = Map<String, Value>;

/// Join a parent path and a field name: `articles[0]` + `title`.
pub(crate) fn field_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

/// Interpret `value` as a JSON object.
pub(crate) fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Object, ValidationError> {
    value.as_object().ok_or_else(|| ValidationError::WrongShape {
        field: if path.is_empty() { "<root>".to_string() } else { path.to_string() },
        expected: "an object",
    })
}

fn present<'a>(object: &'a Object, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|v| !v.is_null())
}

/// Stringify a scalar; `None` for `null`.
pub(crate) fn string_value(value: &Value, path: &str) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(ValidationError::WrongShape {
            field: path.to_string(),
            expected: "a string",
        }),
    }
}

/// A string that must be present and non-empty.
pub(crate) fn required_string(
    object: &Object,
    parent: &str,
    field: &str,
) -> Result<String, ValidationError> {
    let path = field_path(parent, field);
    let value = present(object, field).ok_or_else(|| ValidationError::Missing(path.clone()))?;
    match string_value(value, &path)? {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::WrongShape {
            field: path,
            expected: "a non-empty string",
        }),
    }
}

/// A string that must be present but may be empty.
pub(crate) fn emptiable_string(
    object: &Object,
    parent: &str,
    field: &str,
) -> Result<String, ValidationError> {
    let path = field_path(parent, field);
    let value = present(object, field).ok_or_else(|| ValidationError::Missing(path.clone()))?;
    Ok(string_value(value, &path)?.unwrap_or_default())
}

/// An optional string. Only an absent value maps to `None`; an empty string
/// is kept so it is written back unchanged.
pub(crate) fn optional_string(
    object: &Object,
    parent: &str,
    field: &str,
) -> Result<Option<String>, ValidationError> {
    let path = field_path(parent, field);
    match present(object, field) {
        None => Ok(None),
        Some(value) => string_value(value, &path),
    }
}

fn number_value(value: &Value, path: &str) -> Result<i64, ValidationError> {
    let wrong_shape = || ValidationError::WrongShape {
        field: path.to_string(),
        expected: "a number",
    };
    let float_to_int = |f: f64| {
        if f.is_finite() {
            Ok(f.trunc() as i64)
        } else {
            Err(wrong_shape())
        }
    };

    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(i),
            None => float_to_int(n.as_f64().ok_or_else(wrong_shape)?),
        },
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<i64>() {
                Ok(i) => Ok(i),
                Err(_) => float_to_int(trimmed.parse::<f64>().map_err(|_| wrong_shape())?),
            }
        }
        _ => Err(wrong_shape()),
    }
}

/// A number that must be present.
pub(crate) fn required_number(
    object: &Object,
    parent: &str,
    field: &str,
) -> Result<i64, ValidationError> {
    let path = field_path(parent, field);
    let value = present(object, field).ok_or_else(|| ValidationError::Missing(path.clone()))?;
    number_value(value, &path)
}

/// A number where any falsy value (`0`, `""`, `false`, `null`, missing) is absent.
pub(crate) fn optional_number(
    object: &Object,
    parent: &str,
    field: &str,
) -> Result<Option<i64>, ValidationError> {
    let path = field_path(parent, field);
    match present(object, field) {
        None | Some(Value::Bool(false)) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => {
            let n = number_value(value, &path)?;
            Ok((n != 0).then_some(n))
        }
    }
}

/// An array defaulting to empty when absent.
pub(crate) fn array<'a>(
    object: &'a Object,
    parent: &str,
    field: &str,
) -> Result<&'a [Value], ValidationError> {
    match present(object, field) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(ValidationError::WrongShape {
            field: field_path(parent, field),
            expected: "an array",
        }),
    }
}
