//! Visibility engine: composes three independent hide criteria into one
//! effective show/hide decision per entry.
//!
//! The three sets are membership of *hidden* entries: `manual` (checkbox and
//! legacy toggles), `excluded` (deny-list filter), `not_included`
//! (default-deny allow-list, populated only while an include expression is
//! active). Effective hidden is always re-derived from full membership, so a
//! "show" on one set never reveals an entry still held by another, and the
//! result is independent of the order the two filters resolve in.

use std::collections::HashSet;

use crate::model::entry::{EntryId, EntrySet, VisibilitySink};
use crate::model::pattern::PatternSet;

/// The three independent hidden-entry sets.
#[derive(Debug, Default)]
pub struct VisibilitySets {
    pub manual: HashSet<EntryId>,
    pub excluded: HashSet<EntryId>,
    pub not_included: HashSet<EntryId>,
}

/// Sole owner and mutator of the `VisibilitySets`.
#[derive(Debug, Default)]
pub struct VisibilityEngine {
    sets: VisibilitySets,
    include_active: bool,
}

impl VisibilityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn sets(&self) -> &VisibilitySets {
        &self.sets
    }

    /// Apply a deny-list expression. Each token also covers anything nested
    /// under it. The excluded set is recomputed from scratch, so entries
    /// matched only by the prior expression drop out and repeating the same
    /// expression is a no-op. An empty expression clears the set.
    pub fn apply_exclude(&mut self, expr: &str, entries: &EntrySet) {
        let matcher = PatternSet::compile_subtree(expr);
        self.sets.excluded = entries
            .iter()
            .filter(|(_, e)| matcher.matches(&e.full_path))
            .map(|(id, _)| id)
            .collect();
    }

    /// Apply an allow-list expression: default-deny with a carve-out for
    /// matching paths. An empty expression restores default-allow.
    pub fn apply_include(&mut self, expr: &str, entries: &EntrySet) {
        if expr.trim().is_empty() {
            if self.include_active {
                self.sets.not_included.clear();
                self.include_active = false;
            }
            return;
        }
        let matcher = PatternSet::compile(expr);
        self.include_active = true;
        self.sets.not_included = entries
            .iter()
            .filter(|(_, e)| !matcher.matches(&e.full_path))
            .map(|(id, _)| id)
            .collect();
    }

    /// Add or remove a single entry from the manual set.
    pub fn set_manual(&mut self, id: EntryId, visible: bool) {
        if visible {
            self.sets.manual.remove(&id);
        } else {
            self.sets.manual.insert(id);
        }
    }

    /// Effective hidden: membership in the union of all three sets.
    pub fn effective_hidden(&self, id: EntryId) -> bool {
        self.sets.manual.contains(&id)
            || self.sets.excluded.contains(&id)
            || self.sets.not_included.contains(&id)
    }

    /// Push the effective decision for every given entry into the sink.
    pub fn apply<S: VisibilitySink>(&self, ids: impl Iterator<Item = EntryId>, sink: &mut S) {
        for id in ids {
            sink.set_entry_hidden(id, self.effective_hidden(id));
        }
    }
}
