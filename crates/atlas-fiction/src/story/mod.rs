//! Story content: the chapter maps, typed progression flags, quest rules
//! and the scripted scenes that drive the dilemmas.

pub mod maps;
pub(crate) mod quests;
pub(crate) mod scenes;

use std::fmt;

use serde::Deserialize;

pub use maps::{AtlasMap, SubMap, Trap};

/// The three chapters, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(try_from = "u8")]
pub enum Chapter {
    /// The ATLAS fortress, 2160.
    #[default]
    One,
    /// Verdun, 1916.
    Two,
    /// Operation Barbarossa, 1941.
    Three,
}

impl Chapter {
    /// Ordinal, starting at 1.
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Chapter heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::One => "CHAPTER 1 - THE ATLAS FORTRESS, 2160",
            Self::Two => "CHAPTER 2 - VERDUN, 1916",
            Self::Three => "CHAPTER 3 - OPERATION BARBAROSSA, 1941",
        }
    }
}

impl TryFrom<u8> for Chapter {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(format!("chapter must be 1, 2 or 3, got {n}")),
        }
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chapter {}", self.number())
    }
}

/// Which part of the map the player is walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryMode {
    /// The chapter's own rooms.
    #[default]
    MainMap,
    /// The purge labyrinth, entered after neutralizing Argos.
    Labyrinth,
    /// The intratemporal conduits, entered with Argos as an ally.
    SoftConduits,
}

/// Every progression flag of the story.
///
/// `Option<bool>` flags record the answer to a dilemma and stay `None` until
/// it has been answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFlags {
    /// Chapter 1 has begun.
    pub story_started: bool,
    /// The drone scene has fired.
    pub drone_choice_done: bool,
    /// Shot while grabbing the badge.
    pub player_injured: bool,
    /// The badge opens the vault.
    pub has_vault_access: bool,
    /// Argos has been dealt with.
    pub argos_choice_done: bool,
    /// Argos spared (`true`) or neutralized (`false`).
    pub argos_ally: Option<bool>,
    /// The Cassian scene has fired.
    pub cassian_choice_done: bool,
    /// Cassian saved (`true`) or neutralized (`false`).
    pub cassian_saved: Option<bool>,
    /// Deaths in the labyrinth. Never penalized.
    pub labyrinth_deaths: u32,
    /// The Verdun briefing has been shown.
    pub verdun_brief_done: bool,
    /// The Verdun dilemma has fired.
    pub verdun_choice_done: bool,
    /// Orders modified (`true`) or transmitted as is (`false`).
    pub verdun_message_modified: Option<bool>,
    /// The Barbarossa briefing has been shown.
    pub barbarossa_brief_done: bool,
    /// The command dilemma has fired.
    pub barbarossa_command_done: bool,
    /// Fast assault (`true`) or flanking (`false`).
    pub barbarossa_route_fast: Option<bool>,
    /// The final dilemma has fired.
    pub barbarossa_final_done: bool,
    /// Sample kept (`true`) or destroyed (`false`).
    pub barbarossa_kept_sample: Option<bool>,
}
