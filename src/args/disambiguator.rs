//! Flag disambiguator — one flag-shaped token (plus lookahead) → flags.
//!
//! Handles, in order: `name=value` splitting, clustered short flags
//! (`-abc`), and bool vs. value-taking resolution against the config.

use crate::args::error::{ArgsError, Result};
use crate::args::object::Flag;
use crate::args::path::CommandPath;
use crate::config::Config;

/// A token is flag-shaped when it starts with `-` (this includes `--`).
pub fn is_flag_shaped(token: &str) -> bool {
    token.starts_with('-')
}

/// Outcome of disambiguating one flag-shaped token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disambiguated {
    /// Flags produced, in order.
    pub flags: Vec<Flag>,
    /// Raw tokens consumed: the flag token, plus the next one if it was taken
    /// as the value.
    pub consumed: usize,
    /// Value part of a `name=value` token that a bool flag did not take. It
    /// has to be handled as the next token.
    pub leftover: Option<String>,
}

/// Resolves flags against the config, scoped to the active command path.
pub struct Disambiguator<'a> {
    config: &'a Config,
    path: &'a CommandPath<'a>,
}

impl<'a> Disambiguator<'a> {
    pub fn new(config: &'a Config, path: &'a CommandPath<'a>) -> Self {
        Self { config, path }
    }

    /// Disambiguate `token`, with `next` being the raw token after it.
    pub fn disambiguate(&self, token: &str, next: Option<&str>) -> Result<Disambiguated> {
        let (name, attached) = match token.split_once('=') {
            Some((name, value)) if !self.config.disallow_combined_flag_values => {
                tracing::trace!(token, name, "splitting combined flag value");
                (name, Some(value))
            }
            _ => (token, None),
        };

        let mut flags = Vec::new();
        let mut terminal = name.to_string();

        let clustered = self.config.allow_multiple_flags
            && !name.starts_with("--")
            && name.chars().count() > 2;
        if clustered {
            let chars: Vec<char> = name.chars().skip(1).collect();
            if let Some((last, interior)) = chars.split_last() {
                for (i, c) in interior.iter().enumerate() {
                    let mut flag = self.resolve_cluster_member(&format!("-{c}"))?;
                    flag.multiple_start = i == 0;
                    flags.push(flag);
                }
                terminal = format!("-{last}");
            }
            tracing::trace!(token, members = chars.len(), "expanded flag cluster");
        }

        // An attached value stands in for the next raw token.
        let lookahead = attached.or(next);
        let candidate = lookahead.filter(|value| !is_flag_shaped(value));

        let mut flag = self.resolve(&terminal, candidate)?;
        flag.multiple_end = clustered;
        let took_value = !flag.is_bool();

        let (consumed, leftover) = match attached {
            Some(_) if took_value => {
                flag.combined_value = true;
                (1, None)
            }
            Some(value) => (1, Some(value.to_string())),
            None if took_value => (2, None),
            None => (1, None),
        };
        flags.push(flag);

        Ok(Disambiguated {
            flags,
            consumed,
            leftover,
        })
    }

    /// Resolve one flag name, offering `candidate` as its value.
    ///
    /// A bool flag leaves the candidate untouched; the caller sees that from
    /// [`Flag::is_bool`].
    pub fn resolve(&self, name: &str, candidate: Option<&str>) -> Result<Flag> {
        match self.path.flag(name) {
            Some(def) if def.is_bool => Ok(Flag::boolean(name)),
            Some(_) => candidate
                .map(|value| Flag::with_value(name, value))
                .ok_or_else(|| ArgsError::InvalidFlag(name.to_string())),
            None if !self.config.allow_unconfigured_flags => {
                Err(ArgsError::UnconfiguredFlag(name.to_string()))
            }
            None => Ok(match candidate {
                Some(value) => Flag::with_value(name, value),
                None => Flag::boolean(name),
            }),
        }
    }

    /// Non-terminal cluster members must resolve as bool flags.
    fn resolve_cluster_member(&self, name: &str) -> Result<Flag> {
        self.resolve(name, None).map_err(|err| {
            tracing::debug!(name, %err, "cluster member cannot be a bool flag");
            ArgsError::IncompleteMultipleFlag
        })
    }
}
