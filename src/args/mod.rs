//! Argument tokenizer.
//!
//! ```text
//! Raw tokens → Resolve (commands) → Disambiguate (flags) → Objects → Assemble → Raw tokens
//! ```
//!
//! Every stage is a pure function over the config and its input, so a
//! [`Config`](crate::config::Config) can be shared freely between parses.

mod assembler;
mod disambiguator;
mod error;
mod object;
mod path;
mod resolver;

pub use assembler::assemble;
pub use disambiguator::{is_flag_shaped, Disambiguated, Disambiguator};
pub use error::{ArgsError, Result};
pub use object::{Argument, Command, Flag, Object, Objects};
pub use path::CommandPath;
pub use resolver::parse;
