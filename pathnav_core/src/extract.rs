//! Regex-based extraction of sub-paths.
//!
//! Patterns are matched against the canonical string with leftmost-first
//! semantics, so `f.*s` is greedy and `f.*?s` lazy. The matched text itself
//! is never part of the result, and the remainder is re-normalized, so a
//! delimiter left at the cut is trimmed away.

use regex::Regex;

use crate::error::Result;
use crate::path::PathValue;

impl PathValue {
    /// The part of the path after the first match of `pattern`.
    ///
    /// ```
    /// use pathnav_core::PathValue;
    /// let p = PathValue::new("files/client1/files/woot", '/');
    /// assert_eq!(p.after("f.*s")?.to_string(), "woot");
    /// assert_eq!(p.after("f.*?s")?.to_string(), "client1/files/woot");
    /// # Ok::<(), pathnav_core::PathError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidPattern`](crate::PathError::InvalidPattern)
    /// if `pattern` does not compile.
    pub fn after(&self, pattern: &str) -> Result<Self> {
        Ok(self.after_regex(&Regex::new(pattern)?))
    }

    /// The part of the path before the first match of `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidPattern`](crate::PathError::InvalidPattern)
    /// if `pattern` does not compile.
    pub fn before(&self, pattern: &str) -> Result<Self> {
        Ok(self.before_regex(&Regex::new(pattern)?))
    }

    /// `self.after(start)?.before(end)`: `end` is searched only in what
    /// follows the match of `start`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidPattern`](crate::PathError::InvalidPattern)
    /// if either pattern does not compile.
    pub fn between(&self, start: &str, end: &str) -> Result<Self> {
        self.after(start)?.before(end)
    }

    /// [`after`](Self::after) with a precompiled pattern.
    #[must_use]
    pub fn after_regex(&self, pattern: &Regex) -> Self {
        let text = self.to_string();
        match pattern.find(&text) {
            Some(m) => Self::from_canonical(self.delimiter(), &text[m.end()..]),
            None => self.no_match(pattern),
        }
    }

    /// [`before`](Self::before) with a precompiled pattern.
    #[must_use]
    pub fn before_regex(&self, pattern: &Regex) -> Self {
        let text = self.to_string();
        match pattern.find(&text) {
            Some(m) => Self::from_canonical(self.delimiter(), &text[..m.start()]),
            None => self.no_match(pattern),
        }
    }

    /// [`between`](Self::between) with precompiled patterns.
    #[must_use]
    pub fn between_regex(&self, start: &Regex, end: &Regex) -> Self {
        self.after_regex(start).before_regex(end)
    }

    fn no_match(&self, pattern: &Regex) -> Self {
        tracing::event!(
            tracing::Level::TRACE,
            "Pattern {:?} did not match {:?}",
            pattern.as_str(),
            self.to_string()
        );
        Self::null(self.delimiter())
    }
}
