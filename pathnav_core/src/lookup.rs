//! Keyed and positional lookup returning sentinels instead of errors.

use crate::path::PathValue;

/// Key accepted by [`PathValue::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKey<'k> {
    /// Position of a segment; negative values count from the end.
    Index(isize),
    /// A segment whose successor is the wanted value.
    Name(&'k str),
}

impl From<isize> for SegmentKey<'_> {
    fn from(value: isize) -> Self {
        Self::Index(value)
    }
}

impl From<i32> for SegmentKey<'_> {
    fn from(value: i32) -> Self {
        Self::Index(isize::try_from(value).unwrap_or(isize::MAX))
    }
}

impl From<usize> for SegmentKey<'_> {
    fn from(value: usize) -> Self {
        Self::Index(isize::try_from(value).unwrap_or(isize::MAX))
    }
}

impl<'k> From<&'k str> for SegmentKey<'k> {
    fn from(value: &'k str) -> Self {
        Self::Name(value)
    }
}

impl<'k> From<&'k String> for SegmentKey<'k> {
    fn from(value: &'k String) -> Self {
        Self::Name(value)
    }
}

/// Outcome of [`PathValue::get`].
///
/// `Missing` and `NotFound` are kept apart: the former means the key exists
/// as the last segment, the latter that it does not occur at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The requested segment.
    Found(&'a str),
    /// The key was found but nothing follows it.
    Missing,
    /// The key never occurs, or the index lies past the last segment.
    NotFound,
}

impl<'a> Lookup<'a> {
    /// The found segment, if any.
    #[must_use]
    pub const fn value(self) -> Option<&'a str> {
        match self {
            Self::Found(segment) => Some(segment),
            Self::Missing | Self::NotFound => None,
        }
    }

    /// True for [`Lookup::Found`].
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// True for [`Lookup::Missing`].
    #[must_use]
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }

    /// True for [`Lookup::NotFound`].
    #[must_use]
    pub const fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl PathValue {
    /// Looks up a segment by position or by name.
    ///
    /// An integer key reads the segment [`slice(key, Some(1))`](Self::slice)
    /// would select: negative keys count from the end and stop at the first
    /// segment, keys past the last segment are not found. A string key finds
    /// the first segment equal to it and reads the segment that follows.
    ///
    /// ```
    /// use pathnav_core::{Lookup, PathValue};
    /// let p = PathValue::new("/pages/id/1", '/');
    /// assert_eq!(p.get("id"), Lookup::Found("1"));
    /// assert_eq!(p.get("1"), Lookup::Missing);
    /// assert_eq!(p.get("nope"), Lookup::NotFound);
    /// assert_eq!(p.get(-1), Lookup::Found("1"));
    /// ```
    pub fn get<'k, K: Into<SegmentKey<'k>>>(&self, key: K) -> Lookup<'_> {
        let segments = self.segments();
        match key.into() {
            SegmentKey::Index(index) => {
                let (start, end) = self.slice_bounds(index, Some(1));
                segments[start..end]
                    .first()
                    .map_or(Lookup::NotFound, |segment| Lookup::Found(segment.as_str()))
            }
            SegmentKey::Name(name) => match segments.iter().position(|s| s == name) {
                Some(position) => segments
                    .get(position + 1)
                    .map_or(Lookup::Missing, |segment| Lookup::Found(segment.as_str())),
                None => Lookup::NotFound,
            },
        }
    }
}
