//! etch is a minimal content-addressable version store. Every file, directory
//! listing and snapshot record is an immutable object addressed by the SHA-1
//! of its framed content, and history is a chain of snapshot records linked
//! through parent ids.
//!
//! The crate is split into three layers:
//! - `areas`: the physical places state lives in (object store, HEAD
//!   reference, working directory)
//! - `artifacts`: the object types, their codecs and the engines built on
//!   top of them (snapshots, history, checkout)
//! - `commands`: the CLI surface, implemented as methods on `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
