use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical exit direction.
///
/// Exits are keyed by the one-letter codes `N, S, E, O, U, D`, where `O`
/// (ouest) is west. The variant order is the order exits are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North (`N`).
    North,
    /// South (`S`).
    South,
    /// East (`E`).
    East,
    /// West (`O`).
    West,
    /// Up (`U`).
    Up,
    /// Down (`D`).
    Down,
}

impl Direction {
    /// Every direction, in listing order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Normalize a word to a canonical direction.
    ///
    /// Accepts the code itself and its synonyms, case-insensitively. Whether
    /// the direction is usable from a given room is a separate question, see
    /// [`RoomGraph::resolve_direction`](crate::RoomGraph::resolve_direction).
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim().to_uppercase().as_str() {
            "N" | "NORD" | "NORTH" => Some(Self::North),
            "S" | "SUD" | "SOUTH" => Some(Self::South),
            "E" | "EST" | "EAST" => Some(Self::East),
            "O" | "OUEST" | "W" | "WEST" => Some(Self::West),
            "U" | "UP" | "HAUT" => Some(Self::Up),
            "D" | "DOWN" | "BAS" => Some(Self::Down),
            _ => None,
        }
    }

    /// The one-letter code used on exits and in dilemma answers.
    pub fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "O",
            Self::Up => "U",
            Self::Down => "D",
        }
    }

    /// A lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
