//! Logical path tree built from the flat list of changed-file paths.
//!
//! The tree is plain data, built once from the entry arena and immutable
//! afterwards; the rendered widget tree is a derived view produced by
//! `TreeViewState::rebuild`. Rebuilding the tree itself means a fresh
//! `PathTree::build` pass over the full entry list.

use std::collections::HashSet;

use crate::model::entry::{EntryId, EntrySet};

/// One path segment. `full_path` is the true composed path from the root
/// (used for matching), distinct from any compressed display label.
#[derive(Debug)]
pub struct DirectoryNode {
    pub full_path: String,
    pub name: String,
    /// Files directly in this directory, in input order.
    pub files: Vec<EntryId>,
    /// Child directories, in first-seen order.
    pub dirs: Vec<DirectoryNode>,
}

impl DirectoryNode {
    fn new(full_path: String, name: String) -> Self {
        Self {
            full_path,
            name,
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// Child directory named `name`, created if not yet present.
    fn ensure_child(&mut self, name: &str) -> &mut DirectoryNode {
        let i = match self.dirs.iter().position(|d| d.name == name) {
            Some(i) => i,
            None => {
                let full_path = if self.full_path.is_empty() {
                    name.to_string()
                } else {
                    format!("{}/{}", self.full_path, name)
                };
                self.dirs.push(DirectoryNode::new(full_path, name.to_string()));
                self.dirs.len() - 1
            }
        };
        &mut self.dirs[i]
    }

    /// Collect every file id reachable under this node, depth-first.
    pub fn file_ids(&self) -> Vec<EntryId> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files(&self, out: &mut Vec<EntryId>) {
        out.extend_from_slice(&self.files);
        for dir in &self.dirs {
            dir.collect_files(out);
        }
    }
}

/// The root directory node. Root `full_path` is the empty string.
#[derive(Debug)]
pub struct PathTree {
    pub root: DirectoryNode,
}

impl PathTree {
    /// Build the tree from all entries in the arena.
    ///
    /// Each path is split on `/`; a directory node is created per folder
    /// segment not yet present and the entry lands in the terminal
    /// directory's file list. Input order of files is preserved.
    pub fn build(entries: &EntrySet) -> Self {
        let mut root = DirectoryNode::new(String::new(), String::new());
        for (id, entry) in entries.iter() {
            let mut segments: Vec<&str> = entry.full_path.split('/').collect();
            let _basename = segments.pop();
            let mut node = &mut root;
            for segment in segments {
                node = node.ensure_child(segment);
            }
            node.files.push(id);
        }
        Self { root }
    }

    /// Find a directory node by its full path. The empty path is the root.
    pub fn find(&self, path: &str) -> Option<&DirectoryNode> {
        if path.is_empty() {
            return Some(&self.root);
        }
        let mut node = &self.root;
        for segment in path.split('/') {
            node = node.dirs.iter().find(|d| d.name == segment)?;
        }
        Some(node)
    }
}

/// Every ancestor directory path of `path`, nearest first, ending at the
/// root (`""`). `"a/b/c"` yields `["a/b", "a", ""]`.
pub fn ancestor_paths(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = path;
    while let Some(i) = rest.rfind('/') {
        rest = &rest[..i];
        out.push(rest.to_string());
    }
    out.push(String::new());
    out
}

/// The directory portion of a file path (`""` for root-level files).
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..i],
        None => "",
    }
}

// ── Display flattening ───────────────────────────────────────────────────────

/// What a rendered tree row represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Dir { expanded: bool },
    File { entry: EntryId },
}

/// A flattened row for rendering.
///
/// For directory rows, `path` is the true `full_path` of the (possibly
/// chain-compressed) node while `label` may span several merged segments.
#[derive(Debug, Clone)]
pub struct TreeRow {
    pub path: String,
    pub label: String,
    pub depth: usize,
    pub is_last_sibling: bool,
    pub kind: RowKind,
}

/// Derived, regenerable view of the logical tree: flat rows plus disclosure
/// and cursor state.
pub struct TreeViewState {
    pub rows: Vec<TreeRow>,
    pub expanded: HashSet<String>,
    pub selected_index: usize,
    pub scroll_offset: usize,
}

impl TreeViewState {
    /// Create the view with every directory expanded.
    pub fn new(tree: &PathTree, entries: &EntrySet) -> Self {
        let mut view = Self {
            rows: Vec::new(),
            expanded: HashSet::new(),
            selected_index: 0,
            scroll_offset: 0,
        };
        view.expand_all(&tree.root);
        view.rebuild(tree, entries);
        view
    }

    fn expand_all(&mut self, node: &DirectoryNode) {
        self.expanded.insert(node.full_path.clone());
        for dir in &node.dirs {
            self.expand_all(dir);
        }
    }

    /// Rebuild the flat rows from the tree, respecting the expanded set.
    pub fn rebuild(&mut self, tree: &PathTree, entries: &EntrySet) {
        self.rows.clear();
        self.push_dir_row(&tree.root, entries, 0, true);
        if !self.rows.is_empty() && self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len() - 1;
        }
    }

    fn push_dir_row(
        &mut self,
        node: &DirectoryNode,
        entries: &EntrySet,
        depth: usize,
        is_last: bool,
    ) {
        // Chain compression: a directory with no files and exactly one child
        // directory merges into the child's row. Label only; the row keeps
        // the deepest node's true full path for matching and toggling. The
        // root is exempt — it is the all-files toggle row.
        let mut node = node;
        let mut label = if depth == 0 {
            ".".to_string()
        } else {
            node.name.clone()
        };
        if depth > 0 {
            while node.files.is_empty() && node.dirs.len() == 1 {
                node = &node.dirs[0];
                label.push('/');
                label.push_str(&node.name);
            }
        }

        let expanded = self.expanded.contains(&node.full_path);
        self.rows.push(TreeRow {
            path: node.full_path.clone(),
            label,
            depth,
            is_last_sibling: is_last,
            kind: RowKind::Dir { expanded },
        });

        if !expanded {
            return;
        }
        let child_count = node.dirs.len() + node.files.len();
        for (i, dir) in node.dirs.iter().enumerate() {
            self.push_dir_row(dir, entries, depth + 1, i + 1 == child_count);
        }
        for (j, &id) in node.files.iter().enumerate() {
            let entry = entries.get(id);
            self.rows.push(TreeRow {
                path: entry.full_path.clone(),
                label: entry.file_name.clone(),
                depth: depth + 1,
                is_last_sibling: node.dirs.len() + j + 1 == child_count,
                kind: RowKind::File { entry: id },
            });
        }
    }

    /// Expand a directory by path. Unknown paths are tolerated (the rebuild
    /// simply never visits them).
    pub fn expand(&mut self, path: &str) {
        self.expanded.insert(path.to_string());
    }

    /// Collapse a directory by path. A no-op if already collapsed.
    pub fn collapse(&mut self, path: &str) {
        self.expanded.remove(path);
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Keep the selected row inside the visible window.
    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected_index - visible_height + 1;
        }
    }

    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.selected_index)
    }
}
