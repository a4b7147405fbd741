//! Assembler — objects back into raw tokens.

use crate::args::error::{ArgsError, Result};
use crate::args::object::{Flag, Object, Objects};

impl Objects {
    /// Rebuild the tokens these objects were parsed from.
    ///
    /// Parsing the result with the same config yields the same objects.
    pub fn assemble(&self) -> Result<Vec<String>> {
        assemble(self)
    }
}

/// Rebuild raw tokens from a sequence of objects.
pub fn assemble(objects: &[Object]) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut rest = objects;

    while let Some((first, tail)) = rest.split_first() {
        rest = match first {
            Object::Command(cmd) => {
                tokens.push(cmd.name.clone());
                tail
            }
            Object::Argument(arg) => {
                tokens.push(arg.value.clone());
                tail
            }
            Object::Flag(flag) => {
                let used = assemble_flag(flag, tail, &mut tokens)?;
                &tail[used..]
            }
        };
    }

    Ok(tokens)
}

/// Push the tokens for `flag` and return how many objects from `tail` were
/// folded into it (the rest of its cluster).
fn assemble_flag<'a>(flag: &'a Flag, tail: &'a [Object], tokens: &mut Vec<String>) -> Result<usize> {
    let mut name = flag.name.clone();
    let mut terminal = flag;
    let mut used = 0;

    if flag.multiple_start {
        loop {
            let Some(Object::Flag(member)) = tail.get(used) else {
                return Err(ArgsError::IncompleteMultipleFlag);
            };
            name.push_str(member.name.strip_prefix('-').unwrap_or(&member.name));
            used += 1;
            if member.multiple_end {
                terminal = member;
                break;
            }
        }
        tracing::trace!(cluster = %name, members = used + 1, "assembled flag cluster");
    }

    match &terminal.value {
        Some(value) if terminal.combined_value => {
            name.push('=');
            name.push_str(value);
            tokens.push(name);
        }
        Some(value) => {
            tokens.push(name);
            tokens.push(value.clone());
        }
        None => tokens.push(name),
    }

    Ok(used)
}
