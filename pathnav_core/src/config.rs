//! Configuration for path normalization.
//!
//! A [`NavConfig`] fixes the delimiter a path is split on and the set of
//! alternate separators that get rewritten to it before splitting.
//!
//! Quick examples
//!
//! Platform default (the host's directory separator):
//! ```
//! use pathnav_core::NavConfig;
//! let cfg = NavConfig::default();
//! assert_eq!(cfg.delimiter, std::path::MAIN_SEPARATOR);
//! ```
//!
//! Route/URL style paths:
//! ```
//! use pathnav_core::NavConfig;
//! let cfg = NavConfig::url();
//! assert_eq!(cfg.delimiter, '/');
//! ```

use serde::{Deserialize, Serialize};

/// Separators rewritten to the delimiter unless configured otherwise.
pub const DEFAULT_ALTERNATE_SEPARATORS: [char; 2] = ['\\', '/'];

/// Normalization settings shared by every path built from them.
///
/// - delimiter: the character segments are split on and joined with.
/// - alternate_separators: characters replaced by `delimiter` before the
///   boundary trim. The delimiter itself may appear here; replacing it with
///   itself is harmless.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Character used to split and join segments.
    pub delimiter: char,
    /// Characters treated as equivalent to `delimiter` on input.
    pub alternate_separators: Vec<char>,
}

impl NavConfig {
    /// Create a new configuration.
    pub const fn new(delimiter: char, alternate_separators: Vec<char>) -> Self {
        Self {
            delimiter,
            alternate_separators,
        }
    }

    /// Convenience: the given delimiter with the default alternate separators.
    pub fn with_delimiter(delimiter: char) -> Self {
        Self::new(delimiter, DEFAULT_ALTERNATE_SEPARATORS.to_vec())
    }

    /// Convenience: forward-slash paths (URLs, routes).
    pub fn url() -> Self {
        Self::with_delimiter('/')
    }

    /// Convenience: the delimiter only, no separator rewriting.
    pub fn strict(delimiter: char) -> Self {
        Self::new(delimiter, Vec::new())
    }

    pub(crate) fn is_separator(&self, c: char) -> bool {
        c == self.delimiter || self.alternate_separators.contains(&c)
    }
}

impl Default for NavConfig {
    /// Host directory separator, rewriting both slash styles.
    fn default() -> Self {
        Self::with_delimiter(std::path::MAIN_SEPARATOR)
    }
}
