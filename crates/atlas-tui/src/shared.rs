//! Shared utilities for the views: output types, layout helpers, room art
//! and popups.

use std::path::Path;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Visual style for an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// A line the player entered (yellow, "> " prefix).
    Command,
    /// Narration and command results (white).
    Result,
    /// Errors and danger lines (red).
    Error,
    /// Quest notices and shell messages (cyan).
    System,
}

/// A single line in the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Visual style of this line.
    pub style: OutputStyle,
    /// The text content.
    pub text: String,
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Load the ASCII art for a room from `<assets>/<room name>.txt`.
///
/// A missing or unreadable file is not an error: the panel shows a
/// placeholder instead.
pub fn load_room_art(assets: &Path, room: &str) -> Option<String> {
    let path = assets.join(format!("{room}.txt"));
    match std::fs::read_to_string(&path) {
        Ok(art) => Some(art),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no room art");
            None
        }
    }
}

/// Draw the modal shown while narration waits for the player.
pub fn draw_pause_popup(frame: &mut Frame) {
    let area = centered_rect(40, 20, frame.area());

    let popup = Paragraph::new(vec![
        Line::from(""),
        Line::from("Press Enter to continue").style(Style::default().bold()),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" ATLAS 2160 ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
