//! Error types for the fiction engine.

use std::path::PathBuf;

use atlas_core::CoreError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while playing.
///
/// Most variants are player mistakes: the dispatcher renders them as an
/// alert and the game state is left untouched.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A command that takes no parameter was given some.
    #[error("The command '{0}' takes no parameter.")]
    NoParameter(String),

    /// A command that takes one parameter was given another count.
    #[error("The command '{0}' takes exactly one parameter.")]
    OneParameter(String),

    /// A command that takes an optional parameter was given several.
    #[error("The command '{0}' takes at most one parameter.")]
    AtMostOneParameter(String),

    /// The first word is not a registered command.
    #[error("Unknown command '{word}'.{hint} Type 'help' for the list.", hint = did_you_mean(.suggestion))]
    UnknownCommand {
        /// The word typed.
        word: String,
        /// Closest registered command, if any is close enough.
        suggestion: Option<String>,
    },

    /// Not a direction, or not an exit of the current room.
    #[error("Unknown direction '{0}'.")]
    UnknownDirection(String),

    /// No item with this name lies in the room.
    #[error("'{0}' is not here.")]
    ItemNotHere(String),

    /// No item with this name is carried.
    #[error("'{0}' is not in your inventory.")]
    NotInInventory(String),

    /// Nothing with this name can be looked at.
    #[error("You don't see '{0}' here.")]
    NothingToSee(String),

    /// No character with this name is in the room.
    #[error("Nobody called '{0}' is here.")]
    NobodyHere(String),

    /// `back` with an empty movement history.
    #[error("There is nowhere to go back to.")]
    NoHistory,

    /// No quest with this id.
    #[error("Quest '{0}' not found.")]
    QuestNotFound(String),

    /// A dilemma answer outside the allowed set.
    #[error("Invalid choice '{0}'.")]
    InvalidChoice(String),

    /// Configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    ConfigIo {
        /// The file path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Core model error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(word) => format!(" Did you mean '{word}'?"),
        None => String::new(),
    }
}
