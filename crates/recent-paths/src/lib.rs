//! Relocatable recent-file references for dataset-import components.
//!
//! An application that remembers which files it has opened cannot rely on
//! absolute paths staying valid: projects move between directories and
//! machines, and a workflow's base directory can be reconfigured. This crate
//! records each opened file as a [`RelocatablePath`] — the absolute path plus,
//! when the file lived under one of the caller's [`NamedRoot`]s, that root's
//! name and the path relative to it — so the file can be re-found later by
//! re-anchoring the relative part against the root's current location.

pub mod path;
pub mod reference;
pub mod root;

pub use path::NormalizedPath;
pub use reference::RelocatablePath;
pub use root::NamedRoot;
