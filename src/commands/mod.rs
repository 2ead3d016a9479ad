//! Command implementations
//!
//! All commands are methods on `Repository`, organized into two categories:
//!
//! - `plumbing`: low-level object operations (hash-object, cat-file,
//!   write-tree, read-tree)
//! - `porcelain`: user-facing workflow commands (init, commit, log,
//!   checkout)
//!
//! Plumbing commands expose the store directly, while porcelain commands
//! compose them into snapshot-record-restore workflows.

pub mod plumbing;
pub mod porcelain;
