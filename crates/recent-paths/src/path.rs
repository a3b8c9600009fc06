//! Normalized path handling for cross-platform compatibility

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A path stored with forward slashes regardless of the host platform.
///
/// Construction is purely lexical: separators are canonicalized to `/`,
/// duplicate separators collapsed (a leading `//` network marker survives),
/// `.` segments dropped and `..` segments resolved against a preceding
/// component. The same input therefore yields the same stored string on every
/// platform. Conversion to the platform-native form happens only at I/O
/// boundaries via [`NormalizedPath::to_native`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a normalized path from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        Self { inner: clean(&raw) }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native `PathBuf` for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Resolve this path against the current working directory if it is
    /// relative. Apart from the working-directory lookup this is lexical;
    /// no existence check is performed and symlinks are not followed.
    pub fn absolutize(&self) -> Self {
        if self.is_absolute() {
            return self.clone();
        }
        match env::current_dir() {
            Ok(cwd) => Self::new(dunce::simplified(&cwd)).join(&self.inner),
            Err(_) => self.clone(),
        }
    }

    /// Whether this path is anchored to a filesystem root (`/...`, `//server`
    /// or a `C:/` drive prefix).
    pub fn is_absolute(&self) -> bool {
        if self.inner.starts_with('/') {
            return true;
        }
        match drive_prefix(&self.inner) {
            Some(len) => self.inner[len..].starts_with('/'),
            None => false,
        }
    }

    /// Join a segment onto this path. The result is re-cleaned, so `.` and
    /// `..` inside `segment` are resolved.
    pub fn join(&self, segment: &str) -> Self {
        Self::new(format!("{}/{}", self.inner, segment))
    }

    /// Parent directory, or `None` for a bare file name or a root.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        let idx = trimmed.rfind('/')?;
        if idx == 0 {
            return Some(Self {
                inner: "/".to_string(),
            });
        }
        Some(Self {
            inner: trimmed[..idx].to_string(),
        })
    }

    /// Final path component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Extension of the final component, without the dot.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    /// Path of `self` relative to `base`, when `base` lexically contains it.
    ///
    /// The comparison ignores ASCII case, matching the loosest native
    /// filesystem this code runs against; the returned path keeps the
    /// casing of `self`. `None` when `self` is not strictly under `base`.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<Self> {
        let mut prefix = base.inner.trim_end_matches('/').to_string();
        prefix.push('/');

        if self.inner.len() <= prefix.len() || !self.inner.is_char_boundary(prefix.len()) {
            return None;
        }
        if !self.inner[..prefix.len()].eq_ignore_ascii_case(&prefix) {
            return None;
        }
        Some(Self::new(&self.inner[prefix.len()..]))
    }

    /// Check whether this path currently exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<NormalizedPath> for String {
    fn from(p: NormalizedPath) -> Self {
        p.inner
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

/// Length of a leading `X:` drive prefix, if present.
fn drive_prefix(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        Some(2)
    } else {
        None
    }
}

/// Lexically clean a separator-normalized path string. Idempotent.
fn clean(raw: &str) -> String {
    // Exactly two leading slashes mark a UNC/network root and are preserved.
    let network = raw.starts_with("//") && !raw.starts_with("///");
    let drive_len = drive_prefix(raw).unwrap_or(0);
    let (drive, body) = raw.split_at(drive_len);
    let rooted = body.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for comp in body.split('/') {
        match comp {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&prev) if prev != ".." => {
                    parts.pop();
                }
                // A rooted path cannot climb above its root.
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let mut out = String::with_capacity(raw.len());
    out.push_str(drive);
    if network {
        out.push_str("//");
    } else if rooted {
        out.push('/');
    }
    out.push_str(&parts.join("/"));
    if out.is_empty() {
        out.push('.');
    }
    out
}
