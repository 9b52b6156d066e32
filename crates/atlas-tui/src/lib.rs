//! Windowed terminal shell for ATLAS 2160.
//!
//! A ratatui front end over the same engine as the console shell: an output
//! panel, a room-art panel, an input line and a clickable keypad that shows
//! the exits of the current room, or the accepted answers while a dilemma
//! is open.

pub mod app;
pub mod keypad;
pub mod shared;
pub mod terminal;
