//! Active command path — root to current subcommand, for scoped lookups.

use crate::config::{ConfigCommand, ConfigFlag};

/// Config nodes from the root command down to the command being resolved.
#[derive(Debug, Clone)]
pub struct CommandPath<'c> {
    nodes: Vec<&'c ConfigCommand>,
}

impl<'c> CommandPath<'c> {
    pub fn new(root: &'c ConfigCommand) -> Self {
        Self { nodes: vec![root] }
    }

    /// Path one level deeper, into an already-confirmed child.
    pub fn descend(&self, child: &'c ConfigCommand) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.push(child);
        Self { nodes }
    }

    pub fn depth(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Subcommand of the current command.
    pub fn child(&self, name: &str) -> Option<&'c ConfigCommand> {
        self.nodes.last().and_then(|node| node.command(name))
    }

    /// Flag definition, searching the deepest command first.
    pub fn flag(&self, name: &str) -> Option<&'c ConfigFlag> {
        self.nodes.iter().rev().find_map(|node| node.flag(name))
    }
}
