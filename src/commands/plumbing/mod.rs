//! Plumbing commands (low-level object operations)
//!
//! Plumbing commands expose the object store directly. They are building
//! blocks for the porcelain commands and keep no state of their own beyond
//! the store; only `read-tree` touches the working area, and none of them
//! move HEAD.
//!
//! ## Commands
//!
//! - `hash-object`: store a file as a blob and print its id
//! - `cat-file`: print an object's raw payload
//! - `write-tree`: snapshot a directory and print the root tree id
//! - `read-tree`: materialize a stored tree into the working area

pub mod cat_file;
pub mod hash_object;
pub mod read_tree;
pub mod write_tree;
