//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands compose the plumbing and the engines into the
//! everyday snapshot-record-restore workflow.
//!
//! ## Commands
//!
//! - `init`: initialize a new repository
//! - `commit`: snapshot the working area and record it on top of HEAD
//! - `log`: show commit history, newest first
//! - `checkout`: restore a recorded snapshot and move HEAD to it

pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
