//! The [`PathValue`] type: construction, normalization, access and slicing.

use std::fmt::{self, Display};
use std::ops::Index;
use std::str::FromStr;

use contracts::*;
use itertools::Itertools;
use serde_json::Value;

use crate::config::NavConfig;
use crate::error::{PathError, Result};
use crate::input::PathInput;
use crate::iter::Iter;

/// An immutable, normalized sequence of path segments and the delimiter that
/// joins them.
///
/// Two paths are equal when both the delimiter and every segment match, so
/// the null path built with `/` differs from the one built with `\`.
///
/// ```
/// use pathnav_core::PathValue;
/// let p = PathValue::new("/the/golden/path", '/');
/// assert_eq!(p.get(2).value(), Some("path"));
/// assert_eq!(p.get("golden").value(), Some("path"));
/// assert_eq!(p.slice(1, None).to_string(), "golden/path");
/// assert_eq!(p.slice(-2, Some(1)).to_string(), "golden");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathValue {
    delimiter: char,
    segments: Vec<String>,
}

impl PathValue {
    /// Builds a path from `input`, split on `delimiter`.
    ///
    /// Both `/` and `\` in the input are treated as the delimiter.
    pub fn new<I: Into<PathInput>>(input: I, delimiter: char) -> Self {
        Self::with_config(input, &NavConfig::with_delimiter(delimiter))
    }

    /// Builds a path using the separators in `config`.
    pub fn with_config<I: Into<PathInput>>(input: I, config: &NavConfig) -> Self {
        let raw = input.into().flatten(config.delimiter);
        Self {
            delimiter: config.delimiter,
            segments: normalize(&raw, config),
        }
    }

    /// Builds a path from a dynamically typed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidArgument`] when `value` is not null, a
    /// string, an array of scalars or an object of scalars.
    pub fn from_json(value: &Value, delimiter: char) -> Result<Self> {
        PathInput::from_json(value).map(|input| Self::new(input, delimiter))
    }

    /// The path with no segments.
    #[must_use]
    pub const fn null(delimiter: char) -> Self {
        Self {
            delimiter,
            segments: Vec::new(),
        }
    }

    /// Wraps segments that already contain no delimiter, dropping empty
    /// segments at either end.
    pub(crate) fn from_segments(delimiter: char, mut segments: Vec<String>) -> Self {
        match segments.iter().rposition(|s| !s.is_empty()) {
            Some(last) => {
                segments.truncate(last + 1);
                let first = segments.iter().position(|s| !s.is_empty()).unwrap_or(0);
                segments.drain(..first);
                Self {
                    delimiter,
                    segments,
                }
            }
            None => Self::null(delimiter),
        }
    }

    /// Re-splits a fragment of a canonical string on `delimiter`.
    pub(crate) fn from_canonical(delimiter: char, text: &str) -> Self {
        Self {
            delimiter,
            segments: split_trimmed(text, delimiter),
        }
    }

    /// Builds `input` with this path's delimiter.
    ///
    /// A [`PathInput::Path`] is taken segment for segment, without another
    /// normalization pass.
    pub(crate) fn coerce<I: Into<PathInput>>(&self, input: I) -> Self {
        match input.into() {
            PathInput::Path(path) => Self {
                delimiter: self.delimiter,
                segments: path.segments,
            },
            other => Self::new(other, self.delimiter),
        }
    }

    /// The delimiter segments are joined with.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// All segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the null path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The canonical delimiter-joined form; empty for the null path.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Reads the segment at `index`.
    ///
    /// Unlike [`get`](Self::get), a missing position is an error.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::IndexOutOfBounds`] when `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&str> {
        self.segments
            .get(index)
            .map(String::as_str)
            .ok_or(PathError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Paths are read-only; this always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`PathError::Immutable`].
    pub fn set_segment(&self, index: usize, value: &str) -> Result<()> {
        tracing::event!(
            tracing::Level::DEBUG,
            "Rejected write of {:?} to segment {} of {}",
            value,
            index,
            self
        );
        Err(PathError::Immutable)
    }

    /// Paths are read-only; this always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`PathError::Immutable`].
    pub fn remove_segment(&self, index: usize) -> Result<()> {
        tracing::event!(
            tracing::Level::DEBUG,
            "Rejected removal of segment {} of {}",
            index,
            self
        );
        Err(PathError::Immutable)
    }

    /// Returns a sub-path.
    ///
    /// A negative `offset` counts from the end. With `length` omitted the
    /// slice runs to the end; a non-negative `length` is a segment count and
    /// a negative one stops that many segments before the end. Ranges past
    /// either end are clamped, so an offset beyond the last segment yields the
    /// null path.
    #[must_use]
    #[debug_ensures(ret.len() <= self.len())]
    #[debug_ensures(ret.delimiter == self.delimiter)]
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Self {
        let (start, end) = self.slice_bounds(offset, length);
        Self::from_segments(self.delimiter, self.segments[start..end].to_vec())
    }

    /// Clamped `start..end` segment range selected by `slice(offset, length)`.
    pub(crate) fn slice_bounds(&self, offset: isize, length: Option<isize>) -> (usize, usize) {
        let len = isize::try_from(self.len()).unwrap_or(isize::MAX);
        let start = if offset < 0 {
            len.saturating_add(offset).max(0)
        } else {
            offset.min(len)
        };
        let end = match length {
            None => len,
            Some(count) if count >= 0 => start.saturating_add(count).min(len),
            Some(back) => len.saturating_add(back).max(start),
        };
        (start.unsigned_abs(), end.unsigned_abs())
    }

    /// Iterates `(position, segment)` pairs from the first segment.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.segments, 0)
    }

    /// Iterates `(position, segment)` pairs starting at `offset`.
    ///
    /// Positions are absolute within the path.
    pub fn iter_from(&self, offset: usize) -> Iter<'_> {
        Iter::new(&self.segments, offset)
    }
}

#[debug_ensures(ret.iter().all(|segment| !segment.contains(config.delimiter)))]
fn normalize(raw: &str, config: &NavConfig) -> Vec<String> {
    let replaced: String = raw
        .chars()
        .map(|c| if config.is_separator(c) { config.delimiter } else { c })
        .collect();
    let segments = split_trimmed(&replaced, config.delimiter);
    tracing::event!(
        tracing::Level::TRACE,
        "Normalized {:?} into {} segments",
        raw,
        segments.len()
    );
    segments
}

fn split_trimmed(text: &str, delimiter: char) -> Vec<String> {
    let trimmed = text.trim_matches(delimiter);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split(delimiter).map(str::to_string).collect()
    }
}

impl Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delimiter = self.delimiter.to_string();
        write!(f, "{}", self.segments.iter().format(&delimiter))
    }
}

impl Default for PathValue {
    /// The null path with the host directory separator.
    fn default() -> Self {
        Self::null(std::path::MAIN_SEPARATOR)
    }
}

impl FromStr for PathValue {
    type Err = std::convert::Infallible;

    /// Parses with the default [`NavConfig`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::with_config(s, &NavConfig::default()))
    }
}

impl Index<usize> for PathValue {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.segments[index]
    }
}

impl<'a> IntoIterator for &'a PathValue {
    type Item = (usize, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_boundaries() {
        let p = PathValue::new("///path/sub//", '/');
        assert_eq!(p.to_string(), "path/sub");
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_interior_empty_segments_survive() {
        let p = PathValue::new("/a//b/", '/');
        assert_eq!(p.segments(), ["a", "", "b"]);
        assert_eq!(p.to_string(), "a//b");
    }

    #[test]
    fn test_alternate_separators_rewritten() {
        let p = PathValue::new("\\test\\ok\\2\\3\\", '/');
        assert_eq!(p.to_string(), "test/ok/2/3");
        let p = PathValue::new("a/b\\c", ':');
        assert_eq!(p.to_string(), "a:b:c");
    }

    #[test]
    fn test_strict_config_keeps_other_slashes() {
        let p = PathValue::with_config("a/b.c.d", &NavConfig::strict('.'));
        assert_eq!(p.segments(), ["a/b", "c", "d"]);
    }

    #[test]
    fn test_null_path() {
        let p = PathValue::new(None::<&str>, '/');
        assert!(p.is_empty());
        assert_eq!(p.to_string(), "");
        assert_eq!(p, PathValue::null('/'));
        assert_ne!(p, PathValue::null('\\'));
    }

    #[test]
    fn test_at_and_index() {
        let p = PathValue::new("two/segments", '/');
        assert_eq!(p.at(1).unwrap(), "segments");
        assert_eq!(&p[0], "two");
        assert!(matches!(
            p.at(2),
            Err(PathError::IndexOutOfBounds { index: 2, len: 2 })
        ));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let p = PathValue::null('/');
        let _ = &p[0];
    }

    #[test]
    fn test_mutation_rejected() {
        let p = PathValue::new("a/b", '/');
        assert!(matches!(p.set_segment(0, "x"), Err(PathError::Immutable)));
        assert!(matches!(p.remove_segment(0), Err(PathError::Immutable)));
        assert_eq!(p.to_string(), "a/b");
    }

    #[test]
    fn test_slice_negative_length() {
        let p = PathValue::new("a/b/c/d", '/');
        assert_eq!(p.slice(1, Some(-1)).to_string(), "b/c");
        assert_eq!(p.slice(0, Some(-10)).to_string(), "");
        assert_eq!(p.slice(1, Some(0)).to_string(), "");
    }

    #[test]
    fn test_slice_clamps() {
        let p = PathValue::new("a/b/c", '/');
        assert_eq!(p.slice(10, None), PathValue::null('/'));
        assert_eq!(p.slice(-10, Some(1)).to_string(), "a");
        assert_eq!(p.slice(1, Some(10)).to_string(), "b/c");
    }

    #[test]
    fn test_slice_drops_exposed_empty_boundary() {
        let p = PathValue::new("a//b", '/');
        assert_eq!(p.slice(1, None).segments(), ["b"]);
    }

    #[test]
    fn test_from_str_uses_platform_separator() {
        let p: PathValue = "/x/y/".parse().unwrap();
        assert_eq!(p.delimiter(), std::path::MAIN_SEPARATOR);
        assert_eq!(p.len(), 2);
    }
}
