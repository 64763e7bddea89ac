//! Tri-state checkbox selection over the path tree.
//!
//! Ground truth is one checked boolean per file. Directory states are
//! derived: checked iff all descendant files are checked, unchecked iff none
//! are, indeterminate otherwise. The derived states are cached per directory
//! path and refreshed along the ancestor chain of each toggle; there is no
//! way to set a node to indeterminate directly.

use std::collections::HashMap;

use crate::model::entry::{EntryId, EntrySet};
use crate::model::tree::{parent_dir, DirectoryNode, PathTree, TreeViewState};
use crate::model::visibility::VisibilityEngine;

/// Display state of a checkbox node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    Checked,
    Unchecked,
    Indeterminate,
}

/// Token proving a propagation run is in progress. At most one exists at a
/// time; a toggle arriving while one is live is dropped rather than run
/// re-entrantly.
#[must_use]
struct PropagationGuard;

pub struct SelectionState {
    file_checked: Vec<bool>,
    dir_states: HashMap<String, TriState>,
    propagating: bool,
}

impl SelectionState {
    /// All files start checked (visible), so every directory starts checked.
    pub fn new(entries: &EntrySet, tree: &PathTree) -> Self {
        let mut state = Self {
            file_checked: vec![true; entries.len()],
            dir_states: HashMap::new(),
            propagating: false,
        };
        state.init_dir_states(&tree.root);
        state
    }

    fn init_dir_states(&mut self, node: &DirectoryNode) {
        self.dir_states
            .insert(node.full_path.clone(), TriState::Checked);
        for dir in &node.dirs {
            self.init_dir_states(dir);
        }
    }

    pub fn is_file_checked(&self, id: EntryId) -> bool {
        self.file_checked[id]
    }

    pub fn file_state(&self, id: EntryId) -> TriState {
        if self.file_checked[id] {
            TriState::Checked
        } else {
            TriState::Unchecked
        }
    }

    /// Derived state of a directory row. Unknown paths read as checked.
    pub fn dir_state(&self, path: &str) -> TriState {
        self.dir_states
            .get(path)
            .copied()
            .unwrap_or(TriState::Checked)
    }

    fn begin_propagation(&mut self) -> Option<PropagationGuard> {
        if self.propagating {
            return None;
        }
        self.propagating = true;
        Some(PropagationGuard)
    }

    fn end_propagation(&mut self, _guard: PropagationGuard) {
        self.propagating = false;
    }

    /// User toggled a single file checkbox.
    ///
    /// Commits the file's checked state, mirrors it into the visibility
    /// engine's manual set, then refreshes every ancestor directory state up
    /// to the root.
    pub fn toggle_file(
        &mut self,
        tree: &PathTree,
        entries: &EntrySet,
        engine: &mut VisibilityEngine,
        id: EntryId,
        checked: bool,
    ) {
        let Some(guard) = self.begin_propagation() else {
            return;
        };
        self.file_checked[id] = checked;
        engine.set_manual(id, checked);
        self.refresh_up_from(tree, parent_dir(&entries.get(id).full_path));
        self.end_propagation(guard);
    }

    /// User toggled a directory checkbox.
    ///
    /// Force-commits the whole subtree (overriding any indeterminate state),
    /// mirrors every reachable file into the manual set, folds the toggled
    /// directory's disclosure on uncheck, then refreshes ancestors.
    pub fn toggle_dir(
        &mut self,
        tree: &PathTree,
        engine: &mut VisibilityEngine,
        view: &mut TreeViewState,
        path: &str,
        checked: bool,
    ) {
        let Some(guard) = self.begin_propagation() else {
            return;
        };
        let Some(node) = tree.find(path) else {
            // Referencing a directory not present in the tree is a no-op.
            self.end_propagation(guard);
            return;
        };

        for id in node.file_ids() {
            self.file_checked[id] = checked;
            engine.set_manual(id, checked);
        }
        let state = if checked {
            TriState::Checked
        } else {
            TriState::Unchecked
        };
        Self::commit_subtree(&mut self.dir_states, node, state);
        if !checked {
            // Cosmetic fold; a no-op if already collapsed.
            view.collapse(path);
        }
        if !path.is_empty() {
            self.refresh_up_from(tree, parent_dir(path));
        }
        self.end_propagation(guard);
    }

    fn commit_subtree(
        dir_states: &mut HashMap<String, TriState>,
        node: &DirectoryNode,
        state: TriState,
    ) {
        dir_states.insert(node.full_path.clone(), state);
        for dir in &node.dirs {
            Self::commit_subtree(dir_states, dir, state);
        }
    }

    /// Recompute directory states from `dir` upward, stopping at the root.
    fn refresh_up_from(&mut self, tree: &PathTree, dir: &str) {
        let mut current = dir.to_string();
        loop {
            self.recompute_dir(tree, &current);
            if current.is_empty() {
                break;
            }
            current = parent_dir(&current).to_string();
        }
    }

    fn recompute_dir(&mut self, tree: &PathTree, path: &str) {
        let Some(node) = tree.find(path) else {
            return;
        };
        let files = node.file_ids();
        let checked = files.iter().filter(|&&id| self.file_checked[id]).count();
        let state = if checked == files.len() {
            TriState::Checked
        } else if checked == 0 {
            TriState::Unchecked
        } else {
            TriState::Indeterminate
        };
        self.dir_states.insert(path.to_string(), state);
    }
}
