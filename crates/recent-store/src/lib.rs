//! Host-side bookkeeping for relocatable recent-file references.
//!
//! `recent-paths` defines the reference value itself; this crate carries the
//! two concerns the hosting application needs around it: the most-recently-
//! used list discipline (dedup, move-to-front, truncation) and an atomic,
//! format-agnostic settings store that round-trips the list across restarts.

pub mod error;
pub mod list;
pub mod settings;

pub use error::{Error, Result};
pub use list::RecentFiles;
pub use settings::SettingsStore;
