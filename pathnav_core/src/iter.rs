//! Enumeration over a path's segments.

use std::iter::FusedIterator;

/// Iterator over `(position, segment)` pairs of a [`PathValue`](crate::PathValue).
///
/// Each call to [`PathValue::iter`](crate::PathValue::iter) starts a fresh
/// traversal; dropping one early leaves nothing behind.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    segments: &'a [String],
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(segments: &'a [String], offset: usize) -> Self {
        Self {
            segments,
            front: offset.min(segments.len()),
            back: segments.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let position = self.front;
        self.front += 1;
        Some((position, self.segments[position].as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some((self.back, self.segments[self.back].as_str()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
