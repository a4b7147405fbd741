//! Configuration tree: which commands and flags exist, and how to parse them.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ConfigCommand, ConfigFlag};
