//! Object model — the typed form of a parsed command line.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::args::error::{ArgsError, Result};

/// A resolved command, flag or positional argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Object {
    Command(Command),
    Flag(Flag),
    Argument(Argument),
}

/// A command or subcommand name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
}

/// One flag occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    /// Name including dashes (e.g. `--level`, `-v`).
    pub name: String,
    /// `None` for bool flags, which never take a value.
    #[serde(default)]
    pub value: Option<String>,
    /// First flag of a cluster such as `-abc`.
    #[serde(default)]
    pub multiple_start: bool,
    /// Last flag of a cluster; the only member that may carry a value.
    #[serde(default)]
    pub multiple_end: bool,
    /// The value arrived as `name=value` in a single token.
    #[serde(default)]
    pub combined_value: bool,
}

/// A positional argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub value: String,
}

impl Flag {
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn starting_cluster(mut self) -> Self {
        self.multiple_start = true;
        self
    }

    pub fn ending_cluster(mut self) -> Self {
        self.multiple_end = true;
        self
    }

    pub fn combined(mut self) -> Self {
        self.combined_value = true;
        self
    }

    pub fn is_bool(&self) -> bool {
        self.value.is_none()
    }
}

impl Object {
    pub fn command(name: impl Into<String>) -> Self {
        Object::Command(Command { name: name.into() })
    }

    pub fn argument(value: impl Into<String>) -> Self {
        Object::Argument(Argument {
            value: value.into(),
        })
    }
}

impl From<Flag> for Object {
    fn from(flag: Flag) -> Self {
        Object::Flag(flag)
    }
}

/// Ordered objects produced by one parse.
///
/// The first object of a parsed sequence is always the root [`Command`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Objects(Vec<Object>);

impl Objects {
    pub fn new(objects: Vec<Object>) -> Self {
        Self(objects)
    }

    pub fn into_inner(self) -> Vec<Object> {
        self.0
    }

    /// All flags with the given name, in order.
    pub fn flags(&self, name: &str) -> Vec<&Flag> {
        self.0
            .iter()
            .filter_map(|obj| match obj {
                Object::Flag(flag) if flag.name == name => Some(flag),
                _ => None,
            })
            .collect()
    }

    /// The single flag with the given name.
    ///
    /// Fails if the flag is absent or was given more than once.
    pub fn flag(&self, name: &str) -> Result<&Flag> {
        match self.flags(name).as_slice() {
            [] => Err(ArgsError::FlagNotFound(name.to_string())),
            [flag] => Ok(*flag),
            _ => Err(ArgsError::TooManyFlags(name.to_string())),
        }
    }

    /// The `index`-th positional argument, counting arguments only.
    pub fn argument(&self, index: usize) -> Result<&Argument> {
        self.0
            .iter()
            .filter_map(|obj| match obj {
                Object::Argument(arg) => Some(arg),
                _ => None,
            })
            .nth(index)
            .ok_or(ArgsError::ArgumentNotFound(index))
    }

    /// Command chain, root first.
    pub fn commands(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter_map(|obj| match obj {
                Object::Command(cmd) => Some(cmd.name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All positional argument values, in order.
    pub fn arguments(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter_map(|obj| match obj {
                Object::Argument(arg) => Some(arg.value.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Deref for Objects {
    type Target = [Object];

    fn deref(&self) -> &[Object] {
        &self.0
    }
}

impl From<Vec<Object>> for Objects {
    fn from(objects: Vec<Object>) -> Self {
        Self(objects)
    }
}

impl IntoIterator for Objects {
    type Item = Object;
    type IntoIter = std::vec::IntoIter<Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Objects {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
