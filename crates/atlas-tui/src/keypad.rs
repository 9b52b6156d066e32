//! The clickable keypad under the input line.
//!
//! In normal mode it offers one button per exit of the current room; while
//! a dilemma is open it offers the accepted answers plus `back`.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use atlas_fiction::Game;

/// A keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Display label.
    pub label: String,
    /// Line sent to the engine when pressed.
    pub command: String,
}

impl Button {
    fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
        }
    }

    /// Rendered width: " label ".
    fn width(&self) -> u16 {
        self.label.chars().count() as u16 + 2
    }
}

/// Buttons for the current state of `game`.
pub fn buttons(game: &Game) -> Vec<Button> {
    if game.is_finished() {
        return Vec::new();
    }
    if game.is_choice() {
        let mut buttons: Vec<Button> = game
            .allowed_answers()
            .into_iter()
            .map(|answer| Button::new(answer, answer))
            .collect();
        buttons.push(Button::new("back", "back"));
        return buttons;
    }
    game.available_directions()
        .into_iter()
        .map(|d| Button::new(d.code(), format!("go {}", d.code())))
        .collect()
}

/// Draw the keypad on one row.
pub fn draw(frame: &mut Frame, area: Rect, buttons: &[Button], choice: bool) {
    let style = if choice {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };

    let spans: Vec<Span> = buttons
        .iter()
        .flat_map(|btn| {
            vec![
                Span::styled(format!(" {} ", btn.label), style),
                Span::raw(" "),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Check if a click at (col, row) hits a button. Returns its command.
pub fn hit_test(col: u16, row: u16, area: Rect, buttons: &[Button]) -> Option<&str> {
    if row < area.y || row >= area.y + area.height || col < area.x {
        return None;
    }

    let mut x = area.x;
    for btn in buttons {
        let width = btn.width();
        if col >= x && col < x + width {
            return Some(&btn.command);
        }
        x += width + 1; // separator
    }
    None
}
