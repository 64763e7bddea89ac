//! Stable comparator for presenting diff panels in tree order.
//!
//! The directory rule is a substring-containment test inherited from the
//! page this mirrors: when one directory string contains the other, the
//! contained (shallower) one sorts after the containing one, so nested paths
//! come first. Being a substring test rather than a prefix test, it can
//! misorder unrelated directories that happen to share text. That behavior
//! is intentional and pinned by tests; do not "fix" it.

use std::cmp::Ordering;

use crate::model::entry::FileEntry;

/// Compare two entries for diff-panel order.
pub fn compare(a: &FileEntry, b: &FileEntry) -> Ordering {
    let (a_dir, a_file) = split_dir_file(&a.full_path);
    let (b_dir, b_file) = split_dir_file(&b.full_path);

    if a_dir == b_dir {
        return caseless_cmp(a_file, b_file);
    }
    if b_dir.contains(a_dir) {
        return Ordering::Greater;
    }
    if a_dir.contains(b_dir) {
        return Ordering::Less;
    }
    a_dir.cmp(b_dir)
}

/// Split a path into (directory, basename). Root-level files get `""`.
fn split_dir_file(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(i) => (&path[..i], &path[i + 1..]),
        None => ("", path),
    }
}

/// Case-insensitive comparison with a case-sensitive tiebreak, standing in
/// for locale-aware collation.
fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::ChangeType;

    fn e(path: &str) -> FileEntry {
        FileEntry::new(path, "", ChangeType::Modified)
    }

    #[test]
    fn same_dir_compares_filenames_caselessly() {
        assert_eq!(compare(&e("src/Alpha.rs"), &e("src/beta.rs")), Ordering::Less);
        assert_eq!(compare(&e("src/a.rs"), &e("src/a.rs")), Ordering::Equal);
    }

    #[test]
    fn nested_dir_sorts_before_its_parent() {
        // "src" is a substring of "src/ui", so src files sort after.
        assert_eq!(compare(&e("src/main.rs"), &e("src/ui/tree.rs")), Ordering::Greater);
        assert_eq!(compare(&e("src/ui/tree.rs"), &e("src/main.rs")), Ordering::Less);
    }

    #[test]
    fn root_level_files_sort_last() {
        // "" is a substring of every directory.
        assert_eq!(compare(&e("README.md"), &e("src/main.rs")), Ordering::Greater);
    }

    #[test]
    fn unrelated_dirs_compare_lexicographically() {
        assert_eq!(compare(&e("alpha/x.rs"), &e("beta/y.rs")), Ordering::Less);
    }

    #[test]
    fn substring_rule_misorders_unrelated_dirs_by_design() {
        // "li" is a plain substring of "zlib" even though the directories
        // are unrelated, so zlib/ sorts before li/ where lexicographic
        // order would put it after. Documented quirk, kept as is.
        assert_eq!(compare(&e("zlib/a.rs"), &e("li/b.rs")), Ordering::Less);
        assert_eq!(compare(&e("li/b.rs"), &e("zlib/a.rs")), Ordering::Greater);
    }

    #[test]
    fn sorting_a_list_matches_tree_order() {
        let mut files = vec![
            e("README.md"),
            e("src/main.rs"),
            e("src/ui/tree.rs"),
            e("src/ui/list.rs"),
        ];
        files.sort_by(compare);
        let paths: Vec<&str> = files.iter().map(|f| f.full_path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["src/ui/list.rs", "src/ui/tree.rs", "src/main.rs", "README.md"]
        );
    }
}
