//! Core repository components
//!
//! This module contains the physical places state lives in:
//!
//! - `database`: flat content-addressed object store
//! - `refs`: HEAD reference management
//! - `repository`: high-level coordination and command output
//! - `workspace`: working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
