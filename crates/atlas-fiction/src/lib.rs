//! Narrative engine for ATLAS 2160.
//!
//! Wraps the [`atlas_core`] data model in a turn-based game: a command
//! registry, a dispatcher that switches between free commands and
//! constrained dilemma answers, and the scripted scenes of the three
//! chapters. The engine never prints: it records narration beats that a
//! shell drains and renders.

/// Command table and the player actions behind it.
pub mod command;
/// Engine configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// The game orchestrator and its input dispatcher.
pub mod game;
/// Maps, flags, quests and scripted scenes.
pub mod story;
/// Buffered narration output.
pub mod transcript;

pub use command::{CommandRegistry, CommandSpec};
pub use config::EngineConfig;
pub use error::{FictionError, FictionResult};
pub use game::{Choice, ChoiceHandler, Game, InputMode};
pub use story::{Chapter, StoryFlags, StoryMode};
pub use transcript::{Beat, Transcript};
