//! The relocatable reference value type.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{NamedRoot, NormalizedPath};

/// A recorded file path that can be re-found after the file, or the logical
/// root it lived under, has moved.
///
/// Created once when a file is opened and never mutated afterwards;
/// [`RelocatablePath::resolve`] returns a fresh value instead. The persisted
/// shape is the triple `(abs_path, root_name, rel_path)` where the last two
/// are present exactly when the file was under one of the caller's roots at
/// creation time. Equality is structural on all three fields, which is what
/// recent-list deduplication keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelocatablePath {
    abs_path: NormalizedPath,
    root_name: Option<String>,
    rel_path: Option<NormalizedPath>,
}

impl RelocatablePath {
    /// Record `path`, anchoring it to the first root in `roots` that
    /// contains it.
    ///
    /// The input is made absolute and lexically cleaned but the filesystem is
    /// never consulted, so a reference to a not-yet-existing file is valid.
    /// Root order is caller-significant: the first containing root wins even
    /// when a later one is more specific. `path` must be non-empty.
    pub fn create(path: impl AsRef<Path>, roots: &[NamedRoot]) -> Self {
        let abs_path = NormalizedPath::new(path).absolutize();
        for root in roots {
            if let Some(rel_path) = root.contains(&abs_path) {
                tracing::debug!(root = %root.name, path = %abs_path, "anchored recent file");
                return Self {
                    abs_path,
                    root_name: Some(root.name.clone()),
                    rel_path: Some(rel_path),
                };
            }
        }
        Self {
            abs_path,
            root_name: None,
            rel_path: None,
        }
    }

    /// Return a currently existing filesystem path for this reference.
    ///
    /// The recorded absolute path wins whenever it still exists, even if a
    /// root would also yield a (different) live candidate. Otherwise every
    /// same-named root is tried in order and the first candidate that exists
    /// is returned; a stale root does not shadow a later one with the same
    /// name. `None` when nothing can be found.
    pub fn locate(&self, roots: &[NamedRoot]) -> Option<NormalizedPath> {
        if self.abs_path.exists() {
            return Some(self.abs_path.clone());
        }
        let (name, rel) = self.anchor()?;
        roots
            .iter()
            .filter(|root| root.name == name)
            .map(|root| root.candidate(rel))
            .find(NormalizedPath::exists)
    }

    /// Re-anchor this reference against the current root list.
    ///
    /// An unanchored reference whose absolute path still exists is returned
    /// as-is. An anchored one is rebuilt from the first same-named root whose
    /// joined candidate exists, keeping the anchor and updating the absolute
    /// path. `None` when no live path remains.
    pub fn resolve(&self, roots: &[NamedRoot]) -> Option<Self> {
        match self.anchor() {
            None if self.abs_path.exists() => Some(self.clone()),
            None => None,
            Some((name, rel)) => roots
                .iter()
                .filter(|root| root.name == name)
                .map(|root| root.candidate(rel))
                .find(NormalizedPath::exists)
                .map(|abs_path| Self {
                    abs_path,
                    root_name: self.root_name.clone(),
                    rel_path: self.rel_path.clone(),
                }),
        }
    }

    /// The normalized absolute path recorded at creation or last resolve.
    pub fn abs_path(&self) -> &NormalizedPath {
        &self.abs_path
    }

    /// Name of the root this reference is anchored to, if any.
    pub fn root_name(&self) -> Option<&str> {
        self.root_name.as_deref()
    }

    /// Path relative to the anchoring root, if any.
    pub fn rel_path(&self) -> Option<&NormalizedPath> {
        self.rel_path.as_ref()
    }

    /// Whether this reference was recorded under a named root.
    pub fn is_anchored(&self) -> bool {
        self.root_name.is_some()
    }

    /// Final component of the recorded path. Pure string derivation.
    pub fn base_name(&self) -> &str {
        self.abs_path.file_name().unwrap_or("")
    }

    /// Parent directory of the recorded path. Pure string derivation.
    pub fn dir_name(&self) -> NormalizedPath {
        self.abs_path
            .parent()
            .unwrap_or_else(|| NormalizedPath::new("."))
    }

    fn anchor(&self) -> Option<(&str, &NormalizedPath)> {
        Some((self.root_name.as_deref()?, self.rel_path.as_ref()?))
    }
}

impl std::fmt::Display for RelocatablePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.root_name, &self.rel_path) {
            (Some(name), Some(rel)) => write!(f, "{} ({name}/{rel})", self.abs_path),
            _ => write!(f, "{}", self.abs_path),
        }
    }
}
