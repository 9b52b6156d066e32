//! Core types for ATLAS 2160: the room graph, the player, items, characters
//! and the quest tracker.
//!
//! This crate knows nothing about commands, dilemmas or chapters. It is the
//! data model that the fiction engine drives, and it can be built and
//! exercised on its own.

/// Characters that live in rooms and can be talked to.
pub mod character;
/// Canonical exit directions and their synonyms.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// The arena owning every room.
pub mod graph;
/// Carried and dropped items.
pub mod item;
/// The player cursor, inventory and movement history.
pub mod player;
/// Quests, objectives and the quest manager.
pub mod quest;
/// Rooms and room identifiers.
pub mod room;

/// Re-export character types.
pub use character::{Character, CharacterKind};
/// Re-export direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the room graph.
pub use graph::RoomGraph;
/// Re-export item type.
pub use item::Item;
/// Re-export player type.
pub use player::Player;
/// Re-export quest types.
pub use quest::{Quest, QuestManager, QuestStatus};
/// Re-export room types.
pub use room::{Room, RoomId};
