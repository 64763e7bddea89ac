//! Central application state.
//!
//! `App` owns the entry arena, the logical path tree and its rendered view,
//! the tri-state selection, the visibility engine, and the two debounced
//! filter fields. No ratatui rendering logic lives here — the render module
//! reads this state and the key handler mutates it.

use std::time::Instant;

use crate::config::AppConfig;
use crate::model::debounce::{Debouncer, FILTER_DEBOUNCE};
use crate::model::entry::{EntryId, EntrySet, FileEntry};
use crate::model::order;
use crate::model::selection::{SelectionState, TriState};
use crate::model::tree::{ancestor_paths, PathTree, RowKind, TreeViewState};
use crate::model::visibility::VisibilityEngine;

/// Which panel currently has keyboard focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The file tree with its checkboxes.
    #[default]
    Tree,
    /// The diff-order file list.
    Diff,
    /// The include filter text field.
    IncludeField,
    /// The exclude filter text field.
    ExcludeField,
}

impl Focus {
    /// Cycle order: Tree → Diff → Include → Exclude → Tree.
    pub fn next(self) -> Self {
        match self {
            Focus::Tree => Focus::Diff,
            Focus::Diff => Focus::IncludeField,
            Focus::IncludeField => Focus::ExcludeField,
            Focus::ExcludeField => Focus::Tree,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Tree => Focus::ExcludeField,
            Focus::Diff => Focus::Tree,
            Focus::IncludeField => Focus::Diff,
            Focus::ExcludeField => Focus::IncludeField,
        }
    }
}

/// A one-line text input with a byte-indexed cursor.
#[derive(Debug, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Insert a character at the current cursor position.
    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if let Some(prev_char) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= prev_char.len_utf8();
            self.value.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev_char) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= prev_char.len_utf8();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(next_char) = self.value[self.cursor..].chars().next() {
            self.cursor += next_char.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.len();
    }
}

/// Main application state.
pub struct App {
    pub entries: EntrySet,
    pub tree: PathTree,
    pub view: TreeViewState,
    pub selection: SelectionState,
    pub engine: VisibilityEngine,

    pub include_field: InputField,
    pub exclude_field: InputField,
    include_debounce: Debouncer<String>,
    exclude_debounce: Debouncer<String>,

    /// Entry ids in diff-panel order, computed once at setup.
    pub diff_order: Vec<EntryId>,
    pub diff_scroll: usize,

    pub focus: Focus,
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: Option<(String, Instant)>,
    pub config: AppConfig,
}

impl App {
    /// Build the application from the manifest entries and initial filter
    /// expressions. Non-empty startup filters apply immediately, without
    /// the debounce that gates interactive edits.
    pub fn new(entry_list: Vec<FileEntry>, config: AppConfig, include: String, exclude: String) -> Self {
        let entries = EntrySet::new(entry_list);
        let tree = PathTree::build(&entries);
        let view = TreeViewState::new(&tree, &entries);
        let selection = SelectionState::new(&entries, &tree);

        let mut diff_order: Vec<EntryId> = entries.ids().collect();
        diff_order.sort_by(|&a, &b| order::compare(entries.get(a), entries.get(b)));

        let mut app = Self {
            entries,
            tree,
            view,
            selection,
            engine: VisibilityEngine::new(),
            include_field: InputField::with_value(include),
            exclude_field: InputField::with_value(exclude),
            include_debounce: Debouncer::new(FILTER_DEBOUNCE),
            exclude_debounce: Debouncer::new(FILTER_DEBOUNCE),
            diff_order,
            diff_scroll: 0,
            focus: Focus::default(),
            show_help: false,
            should_quit: false,
            status_message: None,
            config,
        };
        let include = app.include_field.value.clone();
        let exclude = app.exclude_field.value.clone();
        if !exclude.is_empty() {
            app.engine.apply_exclude(&exclude, &app.entries);
        }
        if !include.is_empty() {
            app.engine.apply_include(&include, &app.entries);
        }
        app.refresh_visibility();
        app
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ── Tick / debounce ─────────────────────────────────────────────────────

    /// Periodic tick: expire the status message and resolve any quiescent
    /// filter field. The two fields debounce independently; full-set
    /// re-derivation makes the outcome order-independent.
    pub fn on_tick(&mut self, now: Instant) {
        self.clear_expired_status();
        if let Some(expr) = self.exclude_debounce.poll(now) {
            self.engine.apply_exclude(&expr, &self.entries);
            self.refresh_visibility();
        }
        if let Some(expr) = self.include_debounce.poll(now) {
            self.engine.apply_include(&expr, &self.entries);
            self.refresh_visibility();
        }
    }

    /// Record an edit to the focused filter field, restarting its debounce.
    pub fn filter_edited(&mut self, now: Instant) {
        match self.focus {
            Focus::IncludeField => self
                .include_debounce
                .trigger(self.include_field.value.clone(), now),
            Focus::ExcludeField => self
                .exclude_debounce
                .trigger(self.exclude_field.value.clone(), now),
            _ => {}
        }
    }

    /// The filter field currently focused, if any.
    pub fn focused_field_mut(&mut self) -> Option<&mut InputField> {
        match self.focus {
            Focus::IncludeField => Some(&mut self.include_field),
            Focus::ExcludeField => Some(&mut self.exclude_field),
            _ => None,
        }
    }

    /// Push the effective visibility of every entry into the arena.
    fn refresh_visibility(&mut self) {
        let ids = self.entries.ids();
        self.engine.apply(ids, &mut self.entries);
    }

    // ── Tree interaction ────────────────────────────────────────────────────

    /// Toggle the checkbox of the selected tree row. Checking an
    /// indeterminate directory commits it to checked, like a form checkbox.
    pub fn toggle_selected(&mut self) {
        let Some(row) = self.view.selected_row().cloned() else {
            return;
        };
        match row.kind {
            RowKind::File { entry } => {
                let target = !self.selection.is_file_checked(entry);
                self.selection
                    .toggle_file(&self.tree, &self.entries, &mut self.engine, entry, target);
            }
            RowKind::Dir { .. } => {
                let target = self.selection.dir_state(&row.path) != TriState::Checked;
                self.selection
                    .toggle_dir(&self.tree, &mut self.engine, &mut self.view, &row.path, target);
                self.view.rebuild(&self.tree, &self.entries);
            }
        }
        self.refresh_visibility();
    }

    /// Expand the selected directory row.
    pub fn expand_selected(&mut self) {
        if let Some(row) = self.view.selected_row().cloned() {
            if matches!(row.kind, RowKind::Dir { .. }) {
                self.view.expand(&row.path);
                self.view.rebuild(&self.tree, &self.entries);
            }
        }
    }

    /// Collapse the selected directory, or jump to the nearest ancestor row
    /// when on a file or an already-collapsed directory.
    pub fn collapse_selected(&mut self) {
        let Some(row) = self.view.selected_row().cloned() else {
            return;
        };
        if matches!(row.kind, RowKind::Dir { expanded: true }) {
            self.view.collapse(&row.path);
            self.view.rebuild(&self.tree, &self.entries);
            return;
        }
        // Compressed chains mean the literal parent may have no row; walk
        // the ancestor paths until one does.
        for ancestor in ancestor_paths(&row.path) {
            if let Some(i) = self
                .view
                .rows
                .iter()
                .position(|r| matches!(r.kind, RowKind::Dir { .. }) && r.path == ancestor)
            {
                self.view.selected_index = i;
                return;
            }
        }
    }

    /// Move tree selection down by one row.
    pub fn select_next(&mut self) {
        let len = self.view.rows.len();
        if len > 0 && self.view.selected_index < len - 1 {
            self.view.selected_index += 1;
        }
    }

    /// Move tree selection up by one row.
    pub fn select_previous(&mut self) {
        if self.view.selected_index > 0 {
            self.view.selected_index -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.view.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        let len = self.view.rows.len();
        if len > 0 {
            self.view.selected_index = len - 1;
        }
    }

    // ── Diff list ───────────────────────────────────────────────────────────

    /// Entries currently visible, in diff-panel order.
    pub fn visible_diff(&self) -> Vec<EntryId> {
        self.diff_order
            .iter()
            .copied()
            .filter(|&id| !self.entries.is_hidden(id))
            .collect()
    }

    pub fn hidden_count(&self) -> usize {
        self.entries.ids().filter(|&id| self.entries.is_hidden(id)).count()
    }

    pub fn diff_scroll_down(&mut self, lines: usize) {
        self.diff_scroll = self.diff_scroll.saturating_add(lines);
    }

    pub fn diff_scroll_up(&mut self, lines: usize) {
        self.diff_scroll = self.diff_scroll.saturating_sub(lines);
    }

    // ── Defaults / status ───────────────────────────────────────────────────

    /// Persist the current filter field values as the startup defaults.
    pub fn save_defaults(&mut self) {
        self.config.filters.include_default = Some(self.include_field.value.clone());
        self.config.filters.exclude_default = Some(self.exclude_field.value.clone());
        match self.config.save() {
            Ok(()) => self.set_status_message("Saved filter defaults".to_string()),
            Err(e) => self.set_status_message(format!("Could not save defaults: {}", e)),
        }
    }

    /// Set a status message with current timestamp.
    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    /// Clear the status message if it has been displayed for more than 3 seconds.
    pub fn clear_expired_status(&mut self) {
        if let Some((_, ref created)) = self.status_message {
            if created.elapsed().as_secs() > 3 {
                self.status_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::ChangeType;
    use std::time::Duration;

    fn make_app(paths: &[&str]) -> App {
        let entries = paths
            .iter()
            .map(|p| FileEntry::new(*p, "", ChangeType::Modified))
            .collect();
        App::new(entries, AppConfig::default(), String::new(), String::new())
    }

    fn select_row_with_label(app: &mut App, label: &str) {
        let i = app
            .view
            .rows
            .iter()
            .position(|r| r.label == label)
            .expect("row exists");
        app.view.selected_index = i;
    }

    #[test]
    fn diff_order_is_computed_at_setup() {
        let app = make_app(&["README.md", "src/main.rs", "src/ui/tree.rs"]);
        let paths: Vec<&str> = app
            .diff_order
            .iter()
            .map(|&id| app.entries.get(id).full_path.as_str())
            .collect();
        assert_eq!(paths, vec!["src/ui/tree.rs", "src/main.rs", "README.md"]);
    }

    #[test]
    fn startup_filters_apply_without_debounce() {
        let entries = vec![
            FileEntry::new("src/a.rs", "", ChangeType::Modified),
            FileEntry::new("docs/b.md", "", ChangeType::Modified),
        ];
        let app = App::new(
            entries,
            AppConfig::default(),
            "src/*".to_string(),
            String::new(),
        );
        assert!(!app.entries.is_hidden(0));
        assert!(app.entries.is_hidden(1));
    }

    #[test]
    fn filter_edit_applies_only_after_quiet_period() {
        let mut app = make_app(&["src/a.rs", "docs/b.md"]);
        app.focus = Focus::ExcludeField;
        let t0 = Instant::now();
        for c in "docs".chars() {
            app.exclude_field.insert_char(c);
            app.filter_edited(t0);
        }
        app.on_tick(t0 + Duration::from_millis(100));
        assert!(!app.entries.is_hidden(1));
        app.on_tick(t0 + Duration::from_millis(250));
        assert!(app.entries.is_hidden(1));
        assert!(!app.entries.is_hidden(0));
    }

    #[test]
    fn latest_field_value_wins_at_quiescence() {
        let mut app = make_app(&["src/a.rs", "docs/b.md"]);
        app.focus = Focus::ExcludeField;
        let t0 = Instant::now();
        app.exclude_field = InputField::with_value("src");
        app.filter_edited(t0);
        let t1 = t0 + Duration::from_millis(100);
        app.exclude_field = InputField::with_value("docs");
        app.filter_edited(t1);
        app.on_tick(t1 + Duration::from_millis(250));
        assert!(!app.entries.is_hidden(0));
        assert!(app.entries.is_hidden(1));
    }

    #[test]
    fn toggling_a_file_row_hides_exactly_that_file() {
        let mut app = make_app(&["a/x.txt", "a/y.txt"]);
        select_row_with_label(&mut app, "x.txt");
        app.toggle_selected();
        assert!(app.entries.is_hidden(0));
        assert!(!app.entries.is_hidden(1));
        assert_eq!(app.selection.dir_state("a"), TriState::Indeterminate);
        assert_eq!(app.selection.dir_state(""), TriState::Indeterminate);
    }

    #[test]
    fn toggling_root_row_hides_and_restores_everything() {
        let mut app = make_app(&["a/x.txt", "b/y.txt", "z.txt"]);
        app.select_first(); // root row
        app.toggle_selected();
        assert_eq!(app.hidden_count(), 3);
        app.select_first();
        app.toggle_selected();
        assert_eq!(app.hidden_count(), 0);
        assert_eq!(app.selection.dir_state(""), TriState::Checked);
    }

    #[test]
    fn unchecking_a_dir_folds_its_row() {
        let mut app = make_app(&["a/x.txt", "a/y.txt", "b/z.txt"]);
        select_row_with_label(&mut app, "a");
        let rows_before = app.view.rows.len();
        app.toggle_selected();
        assert!(!app.view.is_expanded("a"));
        assert_eq!(app.view.rows.len(), rows_before - 2);
    }

    #[test]
    fn checkbox_and_filters_compose() {
        let mut app = make_app(&["src/a.rs", "src/b.rs", "docs/c.md"]);
        // Manually hide src/a.rs, then exclude docs.
        select_row_with_label(&mut app, "a.rs");
        app.toggle_selected();
        app.focus = Focus::ExcludeField;
        app.exclude_field = InputField::with_value("docs");
        let t0 = Instant::now();
        app.filter_edited(t0);
        app.on_tick(t0 + Duration::from_millis(250));

        let visible: Vec<&str> = app
            .visible_diff()
            .iter()
            .map(|&id| app.entries.get(id).full_path.as_str())
            .collect();
        assert_eq!(visible, vec!["src/b.rs"]);
    }

    #[test]
    fn clearing_exclude_restores_only_filter_hidden_entries() {
        let mut app = make_app(&["src/a.rs", "docs/b.md"]);
        select_row_with_label(&mut app, "a.rs");
        app.toggle_selected();
        app.focus = Focus::ExcludeField;
        app.exclude_field = InputField::with_value("docs");
        let t0 = Instant::now();
        app.filter_edited(t0);
        app.on_tick(t0 + Duration::from_millis(250));
        assert_eq!(app.hidden_count(), 2);

        app.exclude_field = InputField::with_value("");
        app.filter_edited(t0 + Duration::from_millis(300));
        app.on_tick(t0 + Duration::from_millis(600));
        // The manual hide survives; the excluded one is restored.
        assert!(app.entries.is_hidden(0));
        assert!(!app.entries.is_hidden(1));
    }

    #[test]
    fn collapse_on_file_jumps_to_parent_row() {
        let mut app = make_app(&["a/b/x.txt", "a/b/y.txt"]);
        select_row_with_label(&mut app, "x.txt");
        app.collapse_selected();
        let row = app.view.selected_row().expect("row");
        assert_eq!(row.path, "a/b");
        assert!(matches!(row.kind, RowKind::Dir { .. }));
    }

    #[test]
    fn selection_navigation_clamps() {
        let mut app = make_app(&["a.txt"]);
        app.select_previous();
        assert_eq!(app.view.selected_index, 0);
        app.select_last();
        app.select_next();
        assert_eq!(app.view.selected_index, app.view.rows.len() - 1);
    }

    #[test]
    fn input_field_editing() {
        let mut f = InputField::default();
        f.insert_char('a');
        f.insert_char('b');
        f.move_cursor_left();
        f.insert_char('x');
        assert_eq!(f.value, "axb");
        f.delete_char();
        assert_eq!(f.value, "ab");
        f.cursor_home();
        assert_eq!(f.cursor, 0);
        f.cursor_end();
        assert_eq!(f.cursor, 2);
    }
}
