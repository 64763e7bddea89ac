//! Wildcard expression compiler.
//!
//! An expression is a comma-separated list of path patterns. `*` matches any
//! sequence of characters, including `/`. Every other regex metacharacter is
//! treated literally, so a malformed pattern degrades to an exact match (or
//! no match) instead of an error.

use regex::Regex;

/// A compiled wildcard expression: the OR of its sub-expression predicates.
#[derive(Debug, Default)]
pub struct PatternSet {
    alternatives: Vec<Regex>,
}

impl PatternSet {
    /// Compile a comma-separated wildcard expression.
    ///
    /// Whitespace inside tokens is stripped; empty tokens (e.g. a trailing
    /// comma) contribute no alternative.
    pub fn compile(expr: &str) -> Self {
        Self::compile_with(expr, false)
    }

    /// Like `compile`, but every token also matches anything nested under it
    /// (token plus an optional `/...` tail). Used by the exclude filter so
    /// that excluding `src` hides `src/app.rs` too.
    pub fn compile_subtree(expr: &str) -> Self {
        Self::compile_with(expr, true)
    }

    fn compile_with(expr: &str, subtree: bool) -> Self {
        let alternatives = expr
            .split(',')
            .filter_map(|token| {
                let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
                if token.is_empty() {
                    return None;
                }
                let mut pattern = String::from("^");
                for c in token.chars() {
                    if c == '*' {
                        pattern.push_str(".*");
                    } else {
                        pattern.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4])));
                    }
                }
                if subtree {
                    pattern.push_str("(/.*)?");
                }
                pattern.push('$');
                // Everything except `*` is escaped, so compilation cannot
                // realistically fail; a failure drops the alternative.
                Regex::new(&pattern).ok()
            })
            .collect();
        Self { alternatives }
    }

    /// True when the expression produced no alternatives at all.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Whole-string match against any alternative.
    pub fn matches(&self, path: &str) -> bool {
        self.alternatives.iter().any(|re| re.is_match(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_crosses_path_separators() {
        let p = PatternSet::compile("src/*.js");
        assert!(p.matches("src/app.js"));
        assert!(p.matches("src/utils/foo.js"));
        assert!(!p.matches("other/app.js"));
    }

    #[test]
    fn comma_is_logical_or() {
        let p = PatternSet::compile("a/*,b/*");
        assert!(p.matches("a/x.txt"));
        assert!(p.matches("b/deep/y.txt"));
        assert!(!p.matches("c/z.txt"));
    }

    #[test]
    fn match_is_anchored_not_substring() {
        let p = PatternSet::compile("app");
        assert!(p.matches("app"));
        assert!(!p.matches("src/app"));
        assert!(!p.matches("application"));
    }

    #[test]
    fn empty_tokens_contribute_nothing() {
        let p = PatternSet::compile("a/*,");
        assert!(p.matches("a/x"));
        assert!(!p.matches("anything-else"));

        let empty = PatternSet::compile(",,");
        assert!(empty.is_empty());
        assert!(!empty.matches("a"));
    }

    #[test]
    fn whitespace_inside_tokens_is_stripped() {
        let p = PatternSet::compile(" src /*. js ");
        assert!(p.matches("src/app.js"));
    }

    #[test]
    fn metacharacters_are_literal() {
        let p = PatternSet::compile("a.b+c");
        assert!(p.matches("a.b+c"));
        assert!(!p.matches("axb+c"));
        assert!(!p.matches("a.bbc"));
    }

    #[test]
    fn question_mark_is_not_a_wildcard() {
        let p = PatternSet::compile("a?c");
        assert!(p.matches("a?c"));
        assert!(!p.matches("abc"));
    }

    #[test]
    fn subtree_variant_matches_nested_paths() {
        let p = PatternSet::compile_subtree("src");
        assert!(p.matches("src"));
        assert!(p.matches("src/app.rs"));
        assert!(p.matches("src/a/b.rs"));
        assert!(!p.matches("srcx"));
        assert!(!p.matches("other/src"));
    }

    #[test]
    fn subtree_variant_keeps_wildcards() {
        let p = PatternSet::compile_subtree("*.lock");
        assert!(p.matches("Cargo.lock"));
        assert!(p.matches("sub/Cargo.lock"));
    }
}
