use std::collections::HashMap;

/// Index of a `FileEntry` inside an `EntrySet` arena.
pub type EntryId = usize;

/// How a file changed in the review change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    /// Present for manifest completeness only: the upstream listing carries
    /// no marker for added files, so classification never produces this.
    Added,
    Deleted,
    Renamed,
    Modified,
}

impl ChangeType {
    /// Single-letter badge shown next to a file.
    pub fn badge(self) -> char {
        match self {
            ChangeType::Added => 'A',
            ChangeType::Deleted => 'D',
            ChangeType::Renamed => 'R',
            ChangeType::Modified => 'M',
        }
    }
}

/// One changed file. `full_path` is the unique key; `href` is an opaque
/// locator to the file's diff panel and is never interpreted here.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub full_path: String,
    pub file_name: String,
    pub href: String,
    pub change_type: ChangeType,
}

impl FileEntry {
    /// Create an entry, deriving `file_name` from the last path segment.
    pub fn new(full_path: impl Into<String>, href: impl Into<String>, change_type: ChangeType) -> Self {
        let full_path = full_path.into();
        let file_name = full_path
            .rsplit('/')
            .next()
            .unwrap_or(full_path.as_str())
            .to_string();
        Self {
            full_path,
            file_name,
            href: href.into(),
            change_type,
        }
    }
}

/// Receiver for the final effective show/hide decision per entry.
///
/// The visibility engine computes; a sink applies. Splitting the two keeps
/// the engine testable against a plain recording sink.
pub trait VisibilitySink {
    fn set_entry_hidden(&mut self, id: EntryId, hidden: bool);
}

/// Arena of all entries in the change set, indexable by id and by path.
///
/// Built once at setup and never resized during a session. Duplicate paths
/// are a caller contract violation; the path index keeps the last one.
pub struct EntrySet {
    entries: Vec<FileEntry>,
    by_path: HashMap<String, EntryId>,
    hidden: Vec<bool>,
}

impl EntrySet {
    pub fn new(entries: Vec<FileEntry>) -> Self {
        let by_path = entries
            .iter()
            .enumerate()
            .map(|(id, e)| (e.full_path.clone(), id))
            .collect();
        let hidden = vec![false; entries.len()];
        Self {
            entries,
            by_path,
            hidden,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entry ids, in input order. Returns an owned range so callers can
    /// iterate ids while mutating the set.
    pub fn ids(&self) -> std::ops::Range<EntryId> {
        0..self.entries.len()
    }

    pub fn get(&self, id: EntryId) -> &FileEntry {
        &self.entries[id]
    }

    /// Look up an entry by its full path. Unknown paths resolve to `None`,
    /// which callers treat as a no-op.
    #[allow(dead_code)]
    pub fn lookup(&self, path: &str) -> Option<EntryId> {
        self.by_path.get(path).copied()
    }

    pub fn is_hidden(&self, id: EntryId) -> bool {
        self.hidden[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &FileEntry)> {
        self.entries.iter().enumerate()
    }
}

impl VisibilitySink for EntrySet {
    fn set_entry_hidden(&mut self, id: EntryId, hidden: bool) {
        self.hidden[id] = hidden;
    }
}
