//! Domain types and engines
//!
//! This module contains the object model and the operations built on it:
//!
//! - `checkout`: materializing stored snapshots into the working area
//! - `log`: commit history traversal
//! - `objects`: object types and codecs (blobs, trees, commits)
//! - `snapshot`: building directory snapshots and flattening them back

pub mod checkout;
pub mod log;
pub mod objects;
pub mod snapshot;
