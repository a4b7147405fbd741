use thiserror::Error;

/// Errors produced while parsing, assembling or querying objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// No tokens at all; the first token must name the root command.
    #[error("empty input")]
    EmptyInput,

    /// Value-taking flag without a value, or a rejected `--`.
    #[error("invalid flag: {0}")]
    InvalidFlag(String),

    #[error("unconfigured flag: {0}")]
    UnconfiguredFlag(String),

    /// A flag cluster with a malformed member or no terminal member.
    #[error("incomplete multiple flag")]
    IncompleteMultipleFlag,

    #[error("flag not found: {0}")]
    FlagNotFound(String),

    #[error("too many flags: {0}")]
    TooManyFlags(String),

    #[error("argument not found: {0}")]
    ArgumentNotFound(usize),
}

pub type Result<T> = std::result::Result<T, ArgsError>;
