//! Command table.
//!
//! Each command word maps to an action and the number of parameters it
//! declares. Actions receive the whole word list and check their own arity,
//! so `look` can accept zero or one parameter while declaring one.

mod actions;

use std::fmt;

use strsim::jaro_winkler;

use crate::error::FictionResult;
use crate::game::Game;

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Signature of a command action: game, full word list, declared parameter
/// count.
pub type Action = fn(&mut Game, &[&str], usize) -> FictionResult<()>;

/// A registered command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Word typed by the player.
    pub word: &'static str,
    /// Usage shown by `help`, e.g. `go <direction>`.
    pub usage: &'static str,
    /// One-line description.
    pub help: &'static str,
    /// Declared number of parameters.
    pub params: usize,
    /// What the command does.
    pub action: Action,
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<16} {}", self.usage, self.help)
    }
}

/// Commands in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full player command set.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for spec in actions::STANDARD {
            registry.register(spec);
        }
        registry
    }

    /// Register a command, replacing one with the same word.
    pub fn register(&mut self, spec: CommandSpec) {
        match self.commands.iter_mut().find(|c| c.word == spec.word) {
            Some(existing) => *existing = spec,
            None => self.commands.push(spec),
        }
    }

    /// Look up a command by word, ignoring case.
    pub fn get(&self, word: &str) -> Option<&CommandSpec> {
        self.commands
            .iter()
            .find(|c| c.word.eq_ignore_ascii_case(word))
    }

    /// All commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Closest registered word to an unknown one.
    pub fn suggest(&self, word: &str) -> Option<&'static str> {
        let word = word.to_lowercase();
        self.commands
            .iter()
            .map(|c| (c.word, jaro_winkler(&word, c.word)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(w, _)| w)
    }

    /// `help` listing.
    pub fn help_text(&self) -> String {
        let mut out = String::from("Available commands:");
        for spec in &self.commands {
            out.push_str(&format!("\n    {spec}"));
        }
        out
    }
}
