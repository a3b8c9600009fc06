//! Logical roots used as relocation anchors.

use serde::{Deserialize, Serialize};

use crate::NormalizedPath;

/// A named directory whose physical location may change between sessions or
/// machines, e.g. a workflow's base directory. Callers supply the current
/// list of roots on every call; nothing is cached here, so staleness is
/// entirely the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRoot {
    /// Logical name recorded in references anchored to this root.
    pub name: String,
    /// Current physical location of the root.
    pub directory: NormalizedPath,
}

impl NamedRoot {
    pub fn new(name: impl Into<String>, directory: impl Into<NormalizedPath>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
        }
    }

    /// Test whether `path` lies under this root's directory, yielding the
    /// relative part on a match. Both sides are already separator-normalized
    /// and lexically cleaned, so this is a pure prefix computation.
    pub fn contains(&self, path: &NormalizedPath) -> Option<NormalizedPath> {
        path.relative_to(&self.directory)
    }

    /// The root's current directory joined with `rel` — a relocation
    /// candidate whose existence the caller still has to check.
    pub fn candidate(&self, rel: &NormalizedPath) -> NormalizedPath {
        self.directory.join(rel.as_str())
    }
}
