//! Relative-path computation and navigation.

use contracts::*;

use crate::input::PathInput;
use crate::path::PathValue;

/// The segment that steps up one level.
pub const PARENT: &str = "..";

impl PathValue {
    /// The path that leads from `other` to `self`.
    ///
    /// Both paths are taken as absolute. Leading segments they share are
    /// dropped; from the first difference on, every remaining segment of
    /// `other` becomes a [`PARENT`] step, even if a later one happens to
    /// coincide. The rest of `self` follows. If that rest would begin with
    /// an empty segment, the last shared segment is left and re-entered
    /// instead, so the empty segment stays interior.
    ///
    /// ```
    /// use pathnav_core::PathValue;
    /// let p1 = PathValue::new("/files/client1/files/woot", '/');
    /// let p2 = PathValue::new("/files/client2/files/woot", '/');
    /// assert_eq!(p1.relative_to(&p2).to_string(), "../../../client1/files/woot");
    /// ```
    #[must_use]
    #[debug_ensures(ret.delimiter() == self.delimiter())]
    pub fn relative_to<I: Into<PathInput>>(&self, other: I) -> Self {
        let other = self.coerce(other);
        let mine = self.segments();

        let mut shared = 0;
        let mut diverged = false;
        let mut segments = Vec::with_capacity(other.len() + mine.len());
        for (position, segment) in other.iter() {
            if !diverged && mine.get(position).is_some_and(|s| s == segment) {
                shared += 1;
            } else {
                diverged = true;
                segments.push(PARENT.to_string());
            }
        }
        if segments.is_empty() && mine.get(shared).is_some_and(String::is_empty) {
            // a bare remainder would start with an empty segment; step back over the last shared one
            if let Some(back) = shared.checked_sub(1) {
                shared = back;
                segments.push(PARENT.to_string());
            }
        }
        segments.extend_from_slice(&mine[shared..]);

        tracing::event!(
            tracing::Level::DEBUG,
            "Path {} relative to {} shares {} segments",
            self,
            other,
            shared
        );
        Self::from_segments(self.delimiter(), segments)
    }

    /// Applies `relative` to this path: [`PARENT`] drops the last segment
    /// (nothing happens at the root), anything else is appended.
    ///
    /// ```
    /// use pathnav_core::PathValue;
    /// let p = PathValue::new("/files/client1/files/woot", '/');
    /// assert_eq!(p.cd("..").to_string(), "files/client1/files");
    /// assert!(p.cd("../../../../..").is_empty());
    /// ```
    #[must_use]
    #[debug_ensures(ret.delimiter() == self.delimiter())]
    pub fn cd<I: Into<PathInput>>(&self, relative: I) -> Self {
        let relative = self.coerce(relative);
        let mut segments = self.segments().to_vec();
        for (_, segment) in &relative {
            if segment == PARENT {
                segments.pop();
            } else {
                segments.push(segment.to_string());
            }
        }

        tracing::event!(
            tracing::Level::TRACE,
            "cd {} from {} gives {} segments",
            relative,
            self,
            segments.len()
        );
        Self::from_segments(self.delimiter(), segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NavConfig;

    fn p1() -> PathValue {
        PathValue::new("/files/client1/files/woot", '/')
    }

    fn p2() -> PathValue {
        PathValue::new("/files/client2/files/woot", '/')
    }

    #[test]
    fn test_relative_to_sibling() {
        assert_eq!(p1().relative_to(&p2()).to_string(), "../../../client1/files/woot");
    }

    #[test]
    fn test_relative_to_no_resync_after_divergence() {
        let p = PathValue::new("a/x/c", '/');
        assert_eq!(p.relative_to("a/y/c").to_string(), "../../x/c");
    }

    #[test]
    fn test_relative_to_ancestor_and_descendant() {
        let deep = PathValue::new("a/b/c", '/');
        assert_eq!(deep.relative_to("a").to_string(), "b/c");
        assert_eq!(PathValue::new("a", '/').relative_to(&deep).to_string(), "../..");
        assert!(deep.relative_to(&deep).is_empty());
    }

    #[test]
    fn test_relative_to_accepts_segments() {
        assert_eq!(p1().relative_to(vec!["files", "client1"]).to_string(), "files/woot");
    }

    #[test]
    fn test_cd_parent() {
        assert_eq!(p1().cd("..").to_string(), "files/client1/files");
    }

    #[test]
    fn test_cd_beyond_root_is_null() {
        assert_eq!(p1().cd("../../../.."), PathValue::null('/'));
        assert_eq!(p1().cd("../../../../../.."), PathValue::null('/'));
    }

    #[test]
    fn test_cd_appends() {
        assert_eq!(p1().cd(&p2()).to_string(), format!("{}/{}", p1(), p2()));
        assert_eq!(p1().cd("../x").to_string(), "files/client1/files/x");
    }

    #[test]
    fn test_relative_to_keeps_interior_empty_segment() {
        let q = PathValue::new("a//b", '/');
        let p = PathValue::new("a", '/');
        let rel = q.relative_to(&p);
        assert_eq!(rel.segments(), ["..", "a", "", "b"]);
        assert_eq!(p.cd(&rel), q);
    }

    #[test]
    fn test_strict_paths_round_trip() {
        let strict = NavConfig::strict('.');
        let q = PathValue::with_config("root.a/b.c", &strict);
        let p = PathValue::with_config("root", &strict);
        let rel = q.relative_to(&p);
        assert_eq!(rel.segments(), ["a/b", "c"]);
        assert_eq!(p.cd(&rel).segments(), ["root", "a/b", "c"]);
        assert_eq!(p.cd(&rel), q);
    }

    #[test]
    fn test_cd_round_trip() {
        let rel = p2().relative_to(&p1());
        assert_eq!(p1().cd(&rel), p2());
    }
}
