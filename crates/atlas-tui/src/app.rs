//! Application state: the game, the revealed output and the input line.

use std::collections::VecDeque;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use atlas_fiction::{Beat, EngineConfig, Game};

use crate::keypad::{self, Button};
use crate::shared::{OutputLine, OutputStyle};

const ART_PLACEHOLDER: &str = "(no picture of this place)";

/// Main application state.
pub struct TuiApp {
    /// The running game, created once the player has a name.
    game: Option<Game>,
    /// Configuration for the game still to be created.
    config: EngineConfig,
    /// Directory searched for `<room>.txt` art files.
    assets: PathBuf,
    /// Art of the current room: `(room name, art)`.
    art: Option<(String, Option<String>)>,
    /// Revealed output.
    output_lines: Vec<OutputLine>,
    /// Beats waiting behind a pause.
    pending: VecDeque<Beat>,
    /// Whether a pause is waiting for Enter.
    paused: bool,
    /// Scroll offset from the bottom.
    output_scroll: u16,
    /// Current input text.
    input_text: String,
    /// Cursor position within input text.
    input_cursor: usize,
    /// Where the keypad was last drawn, for mouse hit-testing.
    keypad_area: Rect,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Create the app. With a `name` the game starts at once; without one
    /// the first line typed is taken as the name.
    pub fn new(name: Option<&str>, config: EngineConfig, assets: PathBuf) -> Self {
        let mut app = Self {
            game: None,
            config,
            assets,
            art: None,
            output_lines: Vec::new(),
            pending: VecDeque::new(),
            paused: false,
            output_scroll: 0,
            input_text: String::new(),
            input_cursor: 0,
            keypad_area: Rect::default(),
            should_quit: false,
        };
        match name {
            Some(name) => app.start(name),
            None => app.push_output(OutputStyle::System, "ATLAS 2160\nWhat is your name?"),
        }
        app
    }

    /// The running game, if started.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Revealed output lines.
    pub fn output(&self) -> &[OutputLine] {
        &self.output_lines
    }

    /// Whether a pause is waiting for Enter.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current keypad buttons.
    pub fn buttons(&self) -> Vec<Button> {
        self.game.as_ref().map(keypad::buttons).unwrap_or_default()
    }

    fn start(&mut self, name: &str) {
        match Game::new(name, self.config.clone()) {
            Ok(mut game) => {
                game.trigger();
                let beats = game.drain_output();
                self.game = Some(game);
                self.absorb(beats);
            }
            Err(e) => self.push_output(OutputStyle::Error, &format!("error: {e}")),
        }
    }

    /// Send one line to the engine, as typed or from the keypad.
    pub fn send(&mut self, line: &str) {
        if self.paused {
            return;
        }
        let line = line.trim();
        let Some(game) = self.game.as_mut() else {
            self.start(line);
            return;
        };
        if game.is_finished() {
            self.should_quit = true;
            return;
        }
        if line.is_empty() {
            return;
        }
        game.process_command(line);
        game.trigger();
        let beats = game.drain_output();
        self.push_output(OutputStyle::Command, line);
        self.absorb(beats);
    }

    /// Queue beats and reveal up to the first pause.
    fn absorb(&mut self, beats: Vec<Beat>) {
        self.pending.extend(beats);
        self.reveal();
    }

    fn reveal(&mut self) {
        self.paused = false;
        while let Some(beat) = self.pending.pop_front() {
            match beat {
                Beat::Say(text) => self.push_output(OutputStyle::Result, &text),
                Beat::Alert(text) => self.push_output(OutputStyle::Error, &text),
                Beat::Notice(text) => self.push_output(OutputStyle::System, &text),
                Beat::Clear => self.output_lines.clear(),
                Beat::Pause => {
                    self.paused = true;
                    break;
                }
            }
        }
        if !self.paused {
            self.refresh_art();
            if self.game.as_ref().is_some_and(Game::is_finished) {
                self.push_output(OutputStyle::System, "(The story ends here. Press Enter to leave.)");
            }
        }
    }

    fn refresh_art(&mut self) {
        let Some(game) = &self.game else {
            return;
        };
        let room = &game.current_room().name;
        if self.art.as_ref().is_some_and(|(name, _)| name == room) {
            return;
        }
        let art = crate::shared::load_room_art(&self.assets, room);
        self.art = Some((room.clone(), art));
    }

    fn push_output(&mut self, style: OutputStyle, text: &str) {
        for line in text.lines() {
            self.output_lines.push(OutputLine {
                style,
                text: line.to_string(),
            });
        }
        self.output_lines.push(OutputLine {
            style,
            text: String::new(),
        });
        self.output_scroll = 0;
    }

    fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_text);
        self.input_cursor = 0;
        self.send(&input);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.paused {
            if key.code == KeyCode::Enter {
                self.reveal();
            }
            return;
        }
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                self.input_text.clear();
                self.input_cursor = 0;
            }
            KeyCode::Backspace => {
                if self.input_cursor > 0 {
                    let prev = self.input_text[..self.input_cursor]
                        .char_indices()
                        .next_back()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.input_text.remove(prev);
                    self.input_cursor = prev;
                }
            }
            KeyCode::Left => {
                if self.input_cursor > 0 {
                    let prev = self.input_text[..self.input_cursor]
                        .char_indices()
                        .next_back()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.input_cursor = prev;
                }
            }
            KeyCode::Right => {
                if self.input_cursor < self.input_text.len() {
                    let next = self.input_text[self.input_cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.input_cursor + i)
                        .unwrap_or(self.input_text.len());
                    self.input_cursor = next;
                }
            }
            KeyCode::Home => self.input_cursor = 0,
            KeyCode::End => self.input_cursor = self.input_text.len(),
            KeyCode::Up => self.output_scroll = self.output_scroll.saturating_add(1),
            KeyCode::Down => self.output_scroll = self.output_scroll.saturating_sub(1),
            KeyCode::Char(c) => {
                self.input_text.insert(self.input_cursor, c);
                self.input_cursor += c.len_utf8();
            }
            _ => {}
        }
    }

    /// Handle a mouse event: keypad clicks and scrolling.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                let buttons = self.buttons();
                if let Some(command) =
                    keypad::hit_test(mouse.column, mouse.row, self.keypad_area, &buttons)
                {
                    let command = command.to_string();
                    self.send(&command);
                }
            }
            MouseEventKind::ScrollUp => {
                self.output_scroll = self.output_scroll.saturating_add(1);
            }
            MouseEventKind::ScrollDown => {
                self.output_scroll = self.output_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Draw the whole screen.
    pub fn draw(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Output + art
                Constraint::Length(3), // Input
                Constraint::Length(1), // Keypad
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[0]);

        self.draw_output(frame, body[0]);
        self.draw_art(frame, body[1]);
        self.draw_input(frame, rows[1]);

        self.keypad_area = rows[2];
        let choice = self.game.as_ref().is_some_and(Game::is_choice);
        keypad::draw(frame, rows[2], &self.buttons(), choice);

        let hint = if choice {
            "Answer with the keypad or type it  back:read again  Ctrl+C:quit"
        } else {
            "Enter:send  Esc:clear  \u{2191}\u{2193}:scroll  click:move  Ctrl+C:quit"
        };
        let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
        frame.render_widget(status, rows[3]);

        if self.paused {
            crate::shared::draw_pause_popup(frame);
        }
    }

    fn draw_output(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .output_lines
            .iter()
            .map(|ol| {
                let (prefix, color, modifier) = match ol.style {
                    OutputStyle::Command => ("> ", Color::Yellow, Modifier::BOLD),
                    OutputStyle::Result => ("", Color::White, Modifier::empty()),
                    OutputStyle::Error => ("", Color::Red, Modifier::empty()),
                    OutputStyle::System => ("", Color::Cyan, Modifier::ITALIC),
                };
                Line::from(Span::styled(
                    format!("{prefix}{}", ol.text),
                    Style::default().fg(color).add_modifier(modifier),
                ))
            })
            .collect();

        let inner_width = area.width.saturating_sub(2) as usize;
        let total_wrapped: u16 = lines
            .iter()
            .map(|l| {
                let len = l.width();
                if inner_width == 0 {
                    1
                } else {
                    len.max(1).div_ceil(inner_width) as u16
                }
            })
            .sum();

        let visible_height = area.height.saturating_sub(2);
        let max_scroll = total_wrapped.saturating_sub(visible_height);
        let scroll = max_scroll.saturating_sub(self.output_scroll);

        let title = match &self.game {
            Some(game) => format!(" {} ", game.chapter().title()),
            None => " ATLAS 2160 ".to_string(),
        };
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(paragraph, area);
    }

    fn draw_art(&self, frame: &mut Frame, area: Rect) {
        let (title, art) = match &self.art {
            Some((room, Some(art))) => (room.as_str(), art.as_str()),
            Some((room, None)) => (room.as_str(), ART_PLACEHOLDER),
            None => ("", ART_PLACEHOLDER),
        };
        let panel = Paragraph::new(art).block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(panel, area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let prompt = if self.game.as_ref().is_some_and(Game::is_choice) {
            "? "
        } else {
            "> "
        };
        let input = Paragraph::new(format!("{prompt}{}", self.input_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(input, area);

        if self.paused {
            return;
        }
        let cursor_x = area.x + 1 + 2 + self.input_cursor as u16;
        let cursor_y = area.y + 1;
        if cursor_x < area.x + area.width - 1 {
            frame.set_cursor_position(Position::new(cursor_x, cursor_y));
        }
    }
}
