//! Associative views of a path.

use indexmap::IndexMap;

use crate::path::PathValue;

impl PathValue {
    /// Names segments by position using a template split on the delimiter.
    ///
    /// The template is not trimmed: a leading delimiter gives an empty first
    /// key, which claims position 0 and so skips it. When a key repeats, its
    /// first position wins. Keys beyond the end of the path map to `None`.
    ///
    /// ```
    /// use pathnav_core::PathValue;
    /// let uri = PathValue::new("/base/accounts/users/edit/1", '/');
    /// let vars = uri.map("//controller/method/id");
    /// assert_eq!(vars["controller"].as_deref(), Some("users"));
    /// assert_eq!(vars[""].as_deref(), Some("base"));
    /// ```
    #[must_use]
    pub fn map(&self, template: &str) -> IndexMap<String, Option<String>> {
        let mut vars = IndexMap::new();
        for (position, key) in template.split(self.delimiter()).enumerate() {
            vars.entry(key.to_string())
                .or_insert_with(|| self.segments().get(position).cloned());
        }
        vars
    }

    /// Reads the path from `offset` as alternating keys and values.
    ///
    /// `test/ok/2/3` gives `{test: ok, 2: 3}`. A trailing key with no value
    /// maps to `None`; a repeated key keeps its last value. `offset` follows
    /// [`slice`](Self::slice) rules.
    ///
    /// Every segment takes part: empty segments and `0` are ordinary keys
    /// and values, and reading never stops before the end of the path.
    #[must_use]
    pub fn pairs(&self, offset: isize) -> IndexMap<String, Option<String>> {
        let rest = self.slice(offset, None);
        rest.segments()
            .chunks(2)
            .map(|pair| (pair[0].clone(), pair.get(1).cloned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_skips_with_empty_keys() {
        let uri = PathValue::new("/base/accounts/users/edit/1", '/');
        let vars = uri.map("//controller/method/id");
        let expected: IndexMap<String, Option<String>> = [
            ("", Some("base")),
            ("controller", Some("users")),
            ("method", Some("edit")),
            ("id", Some("1")),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
        .collect();
        assert_eq!(vars, expected);
    }

    #[test]
    fn test_map_short_path() {
        let vars = PathValue::new("users", '/').map("controller/method");
        assert_eq!(vars["controller"].as_deref(), Some("users"));
        assert_eq!(vars["method"], None);
    }

    #[test]
    fn test_pairs() {
        let p = PathValue::new("test/ok/2/3", '/');
        let all = p.pairs(0);
        assert_eq!(all.len(), 2);
        assert_eq!(all["test"].as_deref(), Some("ok"));
        assert_eq!(all["2"].as_deref(), Some("3"));

        let shifted = p.pairs(1);
        assert_eq!(shifted.keys().collect::<Vec<_>>(), ["ok", "3"]);
        assert_eq!(shifted["3"], None);
    }

    #[test]
    fn test_pairs_reads_zero_and_empty_segments() {
        let zero = PathValue::new("a/0/b/c", '/').pairs(0);
        assert_eq!(zero.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(zero["a"].as_deref(), Some("0"));
        assert_eq!(zero["b"].as_deref(), Some("c"));

        let empty = PathValue::new("a//b", '/').pairs(0);
        assert_eq!(empty["a"].as_deref(), Some(""));
        assert_eq!(empty["b"], None);
    }

    #[test]
    fn test_pairs_null_path() {
        assert!(PathValue::null('/').pairs(0).is_empty());
    }
}
