//! Configurable command-line tokenizer.
//!
//! Given a tree of commands and flags, [`args::parse`] turns raw tokens into
//! ordered [`args::Object`]s, and [`args::Objects::assemble`] turns them back.

pub mod args;
pub mod config;
pub mod logging;
