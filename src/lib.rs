//! hop - fuzzy directory jumping for multi-project workspaces.
//!
//! The ranking engine lives in [`fuzzy`] and is pure: candidates in, ranked
//! [`fuzzy::Choice`]s out. Everything else (directory discovery, workspace
//! and config resolution, the CLI) feeds it.

pub mod args;
pub mod cmd;
pub mod config;
pub mod discover;
pub mod error;
pub mod fuzzy;
pub mod input;
pub mod output;
pub mod workspace;

pub use error::{Error, Result};
