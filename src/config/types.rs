use serde::{Deserialize, Serialize};

/// Root configuration container: the command tree plus parsing switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root command definition (e.g. `git`).
    pub root: ConfigCommand,

    /// Unknown flags are tolerated instead of rejected.
    ///
    /// An unconfigured flag takes the following token as its value when one
    /// is available, and is a bool flag otherwise.
    pub allow_unconfigured_flags: bool,

    /// Clustered short flags (e.g. `ls -al`) are expanded into one flag per
    /// character, with only the last one able to take a value.
    ///
    /// When off, `-al` is looked up as a single flag named `-al`.
    pub allow_multiple_flags: bool,

    /// `--flag=value` is taken literally, as a flag named `--flag=value`.
    pub disallow_combined_flag_values: bool,

    /// A bare `--` is rejected instead of being kept as an argument.
    pub disallow_double_dash: bool,
}

/// A command or subcommand definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigCommand {
    pub name: String,
    #[serde(default)]
    pub commands: Vec<ConfigCommand>,
    #[serde(default)]
    pub flags: Vec<ConfigFlag>,
}

/// A flag definition, named with its dashes (e.g. `--level`, `-v`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFlag {
    pub name: String,
    /// Bool flags never take a value token.
    #[serde(default, rename = "bool")]
    pub is_bool: bool,
}

impl Config {
    pub fn new(root: ConfigCommand) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    pub fn allow_unconfigured_flags(mut self) -> Self {
        self.allow_unconfigured_flags = true;
        self
    }

    pub fn allow_multiple_flags(mut self) -> Self {
        self.allow_multiple_flags = true;
        self
    }

    pub fn disallow_combined_flag_values(mut self) -> Self {
        self.disallow_combined_flag_values = true;
        self
    }

    pub fn disallow_double_dash(mut self) -> Self {
        self.disallow_double_dash = true;
        self
    }
}

impl ConfigCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_command(mut self, command: ConfigCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn with_flag(mut self, flag: ConfigFlag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Direct child command with the given name, first match.
    pub fn command(&self, name: &str) -> Option<&ConfigCommand> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Flag declared directly on this command, first match.
    pub fn flag(&self, name: &str) -> Option<&ConfigFlag> {
        self.flags.iter().find(|f| f.name == name)
    }
}

impl ConfigFlag {
    /// A flag that never takes a value (e.g. `--verbose`).
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_bool: true,
        }
    }

    /// A flag that requires a value (e.g. `--level 5`).
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_bool: false,
        }
    }
}
