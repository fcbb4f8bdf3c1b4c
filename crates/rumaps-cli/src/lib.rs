//! RU Maps CLI library.
//!
//! This crate provides the command handlers and output formatting used by
//! the `rumaps` binary, kept in a library so they can be unit tested.

pub mod commands;
pub mod output;
pub mod terminal;
