//! Accepted input shapes for building a path.

use indexmap::IndexMap;
use itertools::Itertools;
use serde_json::Value;

use crate::error::{PathError, Result};
use crate::path::PathValue;

/// Key of an associative path entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapKey {
    /// Entry contributes only its value, as a list element would.
    Positional,
    /// Entry contributes `key` then `value` as two segments.
    Named(String),
}

/// Anything a [`PathValue`] can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// No path at all; builds the null path.
    Null,
    /// A delimiter-separated string.
    Text(String),
    /// Ordered segment values.
    Segments(Vec<String>),
    /// Ordered associative entries, flattened in insertion order.
    Mapping(Vec<(MapKey, String)>),
    /// An existing path; navigation applies its segments as they are.
    Path(PathValue),
}

impl PathInput {
    /// Collapse the input into a single raw string joined by `delimiter`.
    ///
    /// The result is not normalized yet.
    pub(crate) fn flatten(self, delimiter: char) -> String {
        match self {
            Self::Null => String::new(),
            Self::Text(text) => text,
            Self::Segments(segments) => segments.iter().join(&delimiter.to_string()),
            Self::Mapping(entries) => entries
                .into_iter()
                .map(|(key, value)| match key {
                    MapKey::Positional => value,
                    MapKey::Named(key) => format!("{key}{delimiter}{value}"),
                })
                .join(&delimiter.to_string()),
            Self::Path(path) => path.segments().iter().join(&delimiter.to_string()),
        }
    }

    /// Interpret a JSON value as path input.
    ///
    /// Strings are paths, arrays are segment lists and objects are
    /// associative entries (keys made only of ASCII digits are positional).
    /// Array elements and object values must be strings or numbers.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidArgument`] for top-level numbers and
    /// booleans, and for nested collections, booleans or nulls inside a
    /// collection.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(json_segment)
                .collect::<Result<Vec<_>>>()
                .map(Self::Segments),
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| {
                    let key = if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
                        MapKey::Positional
                    } else {
                        MapKey::Named(key.clone())
                    };
                    json_segment(value).map(|value| (key, value))
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Mapping),
            other => Err(invalid(other)),
        }
    }
}

fn json_segment(value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(invalid(other)),
    }
}

fn invalid(value: &Value) -> PathError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    PathError::InvalidArgument {
        found: format!("{kind} `{value}`"),
    }
}

impl From<&str> for PathInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PathInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for PathInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<PathInput>> From<Option<T>> for PathInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Vec<String>> for PathInput {
    fn from(value: Vec<String>) -> Self {
        Self::Segments(value)
    }
}

impl From<Vec<&str>> for PathInput {
    fn from(value: Vec<&str>) -> Self {
        Self::Segments(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PathInput {
    fn from(value: &[&str]) -> Self {
        Self::Segments(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathInput {
    fn from(value: [&str; N]) -> Self {
        Self::Segments(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<Vec<(MapKey, String)>> for PathInput {
    fn from(value: Vec<(MapKey, String)>) -> Self {
        Self::Mapping(value)
    }
}

impl From<IndexMap<String, String>> for PathInput {
    fn from(value: IndexMap<String, String>) -> Self {
        Self::Mapping(
            value
                .into_iter()
                .map(|(key, value)| (MapKey::Named(key), value))
                .collect(),
        )
    }
}

impl From<&PathValue> for PathInput {
    fn from(value: &PathValue) -> Self {
        Self::Path(value.clone())
    }
}

impl From<PathValue> for PathInput {
    fn from(value: PathValue) -> Self {
        Self::Path(value)
    }
}
