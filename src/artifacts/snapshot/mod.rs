//! Directory snapshots
//!
//! Two one-way trips between the working directory and the store:
//!
//! - `builder`: walk a directory bottom-up and store it as tree objects
//! - `walk`: flatten a stored tree back into blob ids keyed by path
//!
//! Neither side touches HEAD; they only move content between the file
//! system and the object store.

pub mod builder;
pub mod walk;
