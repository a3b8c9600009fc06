//! Most-recently-used bookkeeping for relocatable references.

use recent_paths::{NamedRoot, RelocatablePath};
use serde::{Deserialize, Serialize};

/// Ordered recent-file list, most recent first.
///
/// Serializes transparently as the plain sequence of references, so the
/// persisted form is exactly the ordered list of path triples. Deduplication
/// keys on the reference's structural equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentFiles {
    entries: Vec<RelocatablePath>,
    #[serde(skip)]
    capacity: Option<usize>,
}

impl RecentFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty list that `add` truncates to at most `limit` entries.
    /// The limit is a session policy and is not persisted.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: Some(limit),
        }
    }

    /// Put `entry` at the front, removing any structurally equal entry first.
    pub fn add(&mut self, entry: RelocatablePath) {
        if let Some(pos) = self.entries.iter().position(|e| *e == entry) {
            self.entries.remove(pos);
        }
        self.entries.insert(0, entry);
        if let Some(limit) = self.capacity {
            self.entries.truncate(limit);
        }
    }

    /// Move the entry at `index` to the front. Returns false if `index` is
    /// out of bounds.
    pub fn promote(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        let entry = self.entries.remove(index);
        self.entries.insert(0, entry);
        true
    }

    /// Re-anchor every entry against `roots`, dropping entries that no
    /// longer resolve to a live path. Returns the number dropped.
    pub fn relocate(&mut self, roots: &[NamedRoot]) -> usize {
        let before = self.entries.len();
        self.entries = std::mem::take(&mut self.entries)
            .into_iter()
            .filter_map(|entry| entry.resolve(roots))
            .collect();
        let dropped = before - self.entries.len();
        if dropped > 0 {
            tracing::debug!(dropped, "pruned unresolvable recent files");
        }
        dropped
    }

    /// Most recently used entry.
    pub fn front(&self) -> Option<&RelocatablePath> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RelocatablePath> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RelocatablePath] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecentFiles {
    type Item = &'a RelocatablePath;
    type IntoIter = std::slice::Iter<'a, RelocatablePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<RelocatablePath> for RecentFiles {
    fn from_iter<I: IntoIterator<Item = RelocatablePath>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            capacity: None,
        }
    }
}
