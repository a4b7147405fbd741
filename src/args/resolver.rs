//! Resolver — raw tokens → objects, walking the command tree in lock-step.

use crate::args::disambiguator::{is_flag_shaped, Disambiguator};
use crate::args::error::{ArgsError, Result};
use crate::args::object::{Object, Objects};
use crate::args::path::CommandPath;
use crate::config::Config;

/// Parse raw tokens into objects.
///
/// The first token names the root command (e.g. `git`) and is taken as-is.
/// A plain token naming a subcommand of the current command hands every
/// remaining token to that subcommand.
pub fn parse<I, S>(config: &Config, tokens: I) -> Result<Objects>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let owned: Vec<S> = tokens.into_iter().collect();
    if owned.is_empty() {
        return Err(ArgsError::EmptyInput);
    }

    let tokens: Vec<&str> = owned.iter().map(AsRef::as_ref).collect();
    let mut cursor = Cursor::new(&tokens);
    let objects = resolve_command(config, CommandPath::new(&config.root), &mut cursor)?;
    Ok(Objects::new(objects))
}

/// Resolve one command level. The cursor sits on the command's own token.
fn resolve_command<'c>(
    config: &'c Config,
    path: CommandPath<'c>,
    cursor: &mut Cursor<'_>,
) -> Result<Vec<Object>> {
    let Some(name) = cursor.current().map(str::to_owned) else {
        return Err(ArgsError::EmptyInput);
    };
    tracing::trace!(command = %name, depth = path.depth(), "resolving command");
    let mut objects = vec![Object::command(name)];
    cursor.advance(1);

    while let Some(token) = cursor.current().map(str::to_owned) {
        if !is_flag_shaped(&token) {
            if let Some(child) = path.child(&token) {
                // Everything left belongs to the subcommand.
                objects.extend(resolve_command(config, path.descend(child), cursor)?);
                break;
            }
            objects.push(Object::argument(token));
            cursor.advance(1);
            continue;
        }

        if token == "--" {
            if config.disallow_double_dash {
                return Err(ArgsError::InvalidFlag(token));
            }
            objects.push(Object::argument(token));
            cursor.advance(1);
            continue;
        }

        let resolved =
            Disambiguator::new(config, &path).disambiguate(&token, cursor.lookahead())?;
        objects.extend(resolved.flags.into_iter().map(Object::Flag));
        cursor.advance(resolved.consumed);
        if let Some(rest) = resolved.leftover {
            cursor.requeue(rest);
        }
    }

    Ok(objects)
}

/// Read position over the raw tokens, shared by every recursion level.
///
/// A re-queued token (the unused value half of `name=value`) sits in front
/// of the remaining raw tokens.
struct Cursor<'t> {
    tokens: &'t [&'t str],
    pos: usize,
    requeued: Option<String>,
}

impl<'t> Cursor<'t> {
    fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            tokens,
            pos: 0,
            requeued: None,
        }
    }

    fn current(&self) -> Option<&str> {
        self.requeued
            .as_deref()
            .or_else(|| self.tokens.get(self.pos).copied())
    }

    fn lookahead(&self) -> Option<&str> {
        let offset = if self.requeued.is_some() { 0 } else { 1 };
        self.tokens.get(self.pos + offset).copied()
    }

    fn advance(&mut self, count: usize) {
        for _ in 0..count {
            if self.requeued.take().is_none() {
                self.pos += 1;
            }
        }
    }

    fn requeue(&mut self, token: String) {
        self.requeued = Some(token);
    }
}
