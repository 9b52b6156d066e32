//! The game orchestrator.
//!
//! [`Game`] owns the room graph, the player, the quests and the story state,
//! and routes every line of input through one of two modes: free commands
//! looked up in the [`CommandRegistry`], or a dilemma that only accepts a
//! fixed set of answers.

use std::collections::BTreeSet;
use std::fmt;

use atlas_core::{Direction, Player, QuestManager, Room, RoomGraph, RoomId};

use crate::command::CommandRegistry;
use crate::config::EngineConfig;
use crate::error::{FictionError, FictionResult};
use crate::story::{self, AtlasMap, Chapter, StoryFlags, StoryMode};
use crate::transcript::{Beat, Transcript};

/// Receives an allowed, upper-cased dilemma answer.
///
/// A handler must leave choice mode, or enter the next dilemma, before it
/// returns.
pub type ChoiceHandler = fn(&mut Game, &str);

/// An open dilemma.
#[derive(Clone)]
pub struct Choice {
    /// Text shown to the player, re-shown after an invalid answer.
    pub prompt: String,
    /// Accepted answers, upper case.
    pub allowed: BTreeSet<String>,
    handler: ChoiceHandler,
}

impl fmt::Debug for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choice")
            .field("prompt", &self.prompt)
            .field("allowed", &self.allowed)
            .finish_non_exhaustive()
    }
}

/// How the next line of input is interpreted.
#[derive(Debug, Clone, Default)]
pub enum InputMode {
    /// Free commands.
    #[default]
    Normal,
    /// Only `back` or an allowed answer.
    Choice(Choice),
}

/// State replayed by `back` while a dilemma is open.
#[derive(Debug, Clone)]
struct Checkpoint {
    chapter: Chapter,
    room: RoomId,
    story_mode: StoryMode,
    choice: Choice,
}

/// A running game.
pub struct Game {
    pub(crate) config: EngineConfig,
    pub(crate) graph: RoomGraph,
    pub(crate) player: Player,
    pub(crate) quests: QuestManager,
    pub(crate) commands: CommandRegistry,
    pub(crate) map: AtlasMap,
    pub(crate) flags: StoryFlags,
    pub(crate) chapter: Chapter,
    pub(crate) story_mode: StoryMode,
    pub(crate) out: Transcript,
    input: InputMode,
    checkpoint: Option<Checkpoint>,
    /// Bumped on every choice mode transition.
    choice_epoch: u64,
    finished: bool,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("player", &self.player.name)
            .field("chapter", &self.chapter)
            .field("story_mode", &self.story_mode)
            .field("input", &self.input)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Build every map, register the quests and play the opening.
    ///
    /// An empty `name` is replaced by the configured fallback name.
    pub fn new(name: &str, config: EngineConfig) -> FictionResult<Self> {
        let name = match name.trim() {
            "" => config.fallback_name.clone(),
            name => name.to_string(),
        };

        let mut graph = RoomGraph::new();
        let map = story::maps::build(&mut graph);
        let mut quests = QuestManager::new();
        story::quests::register(&mut quests)?;
        let player = Player::new(name, map.surface_ruins);
        graph.mark_visited(map.surface_ruins);

        let mut game = Self {
            out: Transcript::new(config.pauses),
            config,
            graph,
            player,
            quests,
            commands: CommandRegistry::standard(),
            map,
            flags: StoryFlags::default(),
            chapter: Chapter::One,
            story_mode: StoryMode::MainMap,
            input: InputMode::Normal,
            checkpoint: None,
            choice_epoch: 0,
            finished: false,
        };
        // Chapter 1 activation notices belong to the opening, not the
        // first turn.
        game.quests.drain_updates();

        tracing::info!(player = %game.player.name, chapter = %game.config.start_chapter, "new game");
        story::scenes::opening(&mut game);
        let spawn = match game.config.start_chapter {
            Chapter::One => None,
            Chapter::Two => Some(game.map.verdun_spawn),
            Chapter::Three => Some(game.map.barbarossa_hq),
        };
        if let Some(spawn) = spawn {
            game.chapter = game.config.start_chapter;
            game.teleport(spawn);
            game.out.clear();
            game.describe_room();
        }
        Ok(game)
    }

    // -----------------------------------------------------------------------
    // Dispatcher
    // -----------------------------------------------------------------------

    /// Handle one line of player input.
    ///
    /// Player mistakes are reported as [`Beat::Alert`]s and never change
    /// state. Does nothing once the game is finished.
    pub fn process_command(&mut self, line: &str) {
        let line = line.trim();
        if self.finished || line.is_empty() {
            return;
        }
        match &self.input {
            InputMode::Choice(choice) => {
                let choice = choice.clone();
                self.answer_choice(&choice, line);
            }
            InputMode::Normal => self.run_command(line),
        }
    }

    fn answer_choice(&mut self, choice: &Choice, line: &str) {
        if line.eq_ignore_ascii_case("back") {
            self.restore_checkpoint();
            return;
        }
        let answer = line.to_uppercase();
        if !choice.allowed.contains(&answer) {
            self.out
                .alert(FictionError::InvalidChoice(line.to_string()).to_string());
            self.out.say(choice.prompt.clone());
            return;
        }

        tracing::debug!(answer = %answer, "choice answered");
        let epoch = self.choice_epoch;
        (choice.handler)(self, &answer);
        assert_ne!(
            epoch, self.choice_epoch,
            "choice handler returned without leaving choice mode"
        );
        self.settle();
    }

    fn run_command(&mut self, line: &str) {
        let words: Vec<&str> = line.split_whitespace().collect();
        let word = words[0].to_lowercase();
        let Some(spec) = self.commands.get(&word) else {
            let suggestion = self.commands.suggest(&word).map(str::to_string);
            tracing::debug!(word = %word, "unknown command");
            self.out
                .alert(FictionError::UnknownCommand { word, suggestion }.to_string());
            return;
        };
        let (action, params) = (spec.action, spec.params);

        tracing::debug!(command = %word, "dispatch");
        match action(self, &words, params) {
            Ok(()) => self.settle(),
            Err(err) => self.out.alert(err.to_string()),
        }
    }

    /// Post-turn bookkeeping: visited flag, objective rules, quest notices.
    fn settle(&mut self) {
        self.graph.mark_visited(self.player.current_room());
        story::quests::apply_objective_rules(self);
        for line in self.quests.drain_updates() {
            self.out.notice(line);
        }
    }

    /// Run the scripted triggers of the current chapter.
    ///
    /// Shells call this each time control returns to the player. Does
    /// nothing while a dilemma is open or once the game is finished.
    pub fn trigger(&mut self) {
        if self.finished || self.is_choice() {
            return;
        }
        story::scenes::run_triggers(self);
        self.settle();
    }

    // -----------------------------------------------------------------------
    // Choice mode
    // -----------------------------------------------------------------------

    /// Open a dilemma: store a checkpoint, show the room and the prompt.
    pub fn set_choice_mode(&mut self, prompt: &str, allowed: &[&str], handler: ChoiceHandler) {
        let choice = Choice {
            prompt: prompt.to_string(),
            allowed: allowed.iter().map(|a| a.to_uppercase()).collect(),
            handler,
        };
        self.checkpoint = Some(Checkpoint {
            chapter: self.chapter,
            room: self.player.current_room(),
            story_mode: self.story_mode,
            choice: choice.clone(),
        });
        self.input = InputMode::Choice(choice);
        self.choice_epoch += 1;
        self.show_choice();
    }

    /// Close the open dilemma.
    pub fn exit_choice_mode(&mut self) {
        self.input = InputMode::Normal;
        self.checkpoint = None;
        self.choice_epoch += 1;
    }

    fn restore_checkpoint(&mut self) {
        let Some(checkpoint) = self.checkpoint.clone() else {
            return;
        };
        self.chapter = checkpoint.chapter;
        self.story_mode = checkpoint.story_mode;
        if self.player.current_room() != checkpoint.room {
            self.teleport(checkpoint.room);
        }
        self.input = InputMode::Choice(checkpoint.choice);
        self.show_choice();
    }

    fn show_choice(&mut self) {
        self.out.clear();
        self.describe_room();
        if let Some(prompt) = self.choice_prompt() {
            let prompt = prompt.to_string();
            self.out.say(prompt);
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Current input mode.
    pub fn input_mode(&self) -> &InputMode {
        &self.input
    }

    /// Whether a dilemma is open.
    pub fn is_choice(&self) -> bool {
        matches!(self.input, InputMode::Choice(_))
    }

    /// Prompt of the open dilemma.
    pub fn choice_prompt(&self) -> Option<&str> {
        match &self.input {
            InputMode::Choice(choice) => Some(&choice.prompt),
            InputMode::Normal => None,
        }
    }

    /// Answers accepted by the open dilemma, sorted. Empty in normal mode.
    pub fn allowed_answers(&self) -> Vec<&str> {
        match &self.input {
            InputMode::Choice(choice) => choice.allowed.iter().map(String::as_str).collect(),
            InputMode::Normal => Vec::new(),
        }
    }

    /// Exits of the current room, for direction buttons.
    pub fn available_directions(&self) -> Vec<Direction> {
        self.current_room().available_exits()
    }

    /// The room the player stands in.
    pub fn current_room(&self) -> &Room {
        &self.graph[self.player.current_room()]
    }

    pub(crate) fn current_room_mut(&mut self) -> &mut Room {
        let id = self.player.current_room();
        &mut self.graph[id]
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Every room of every chapter.
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// Quest registry.
    pub fn quests(&self) -> &QuestManager {
        &self.quests
    }

    /// Story progression flags.
    pub fn flags(&self) -> &StoryFlags {
        &self.flags
    }

    /// Current chapter.
    pub fn chapter(&self) -> Chapter {
        self.chapter
    }

    /// Which part of the map the player walks.
    pub fn story_mode(&self) -> StoryMode {
        self.story_mode
    }

    /// Ids of the story rooms.
    pub fn map(&self) -> &AtlasMap {
        &self.map
    }

    /// The command table.
    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Whether the game is over.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// End the game. Every later input is ignored.
    pub fn finish(&mut self) {
        tracing::info!("game finished");
        self.finished = true;
    }

    /// Take the pending output.
    pub fn drain_output(&mut self) -> Vec<Beat> {
        self.out.drain()
    }

    // -----------------------------------------------------------------------
    // Story helpers
    // -----------------------------------------------------------------------

    /// Move the player without touching the history.
    pub(crate) fn teleport(&mut self, room: RoomId) {
        tracing::debug!(room = %self.graph[room].name, "teleport");
        self.player.teleport(room, &mut self.graph);
    }

    /// Room description, then its items and characters.
    pub(crate) fn describe_room(&mut self) {
        let room = self.current_room();
        let mut text = room.long_description();
        for listing in [room.item_listing(), room.character_listing()]
            .into_iter()
            .flatten()
        {
            text.push_str("\n\n");
            text.push_str(&listing);
        }
        self.out.say(text);
    }
}

#[cfg(test)]
mod tests {
    use atlas_core::QuestStatus;

    use super::*;
    use crate::transcript::plain_text;

    fn quiet() -> EngineConfig {
        EngineConfig::new().with_intro(false).with_pauses(false)
    }

    fn game() -> Game {
        let mut game = Game::new("Ada", quiet()).unwrap();
        game.drain_output();
        game
    }

    fn said(game: &mut Game) -> String {
        plain_text(&game.drain_output())
    }

    fn pick(game: &mut Game, answer: &str) {
        game.out.say(format!("picked {answer}"));
        game.exit_choice_mode();
    }

    fn stay(_game: &mut Game, _answer: &str) {}

    #[test]
    fn opening_welcomes_and_describes() {
        let mut game = Game::new("Ada", quiet()).unwrap();
        let beats = game.drain_output();
        assert_eq!(beats[0], Beat::Clear);
        let text = plain_text(&beats);
        assert!(text.contains("Welcome Ada to ATLAS 2160."));
        assert!(text.contains("You are among the ruins of a destroyed city."));
        assert!(text.contains("You can see:\n    - Flashlight"));
        assert!(text.contains("Exits: N, S"));
        assert!(!beats.contains(&Beat::Pause));
    }

    #[test]
    fn intro_uses_pauses() {
        let mut game = Game::new("Ada", EngineConfig::new()).unwrap();
        let beats = game.drain_output();
        assert_eq!(beats.iter().filter(|b| **b == Beat::Pause).count(), 2);
    }

    #[test]
    fn empty_name_falls_back() {
        let game = Game::new("  ", quiet().with_fallback_name("Nobody")).unwrap();
        assert_eq!(game.player().name, "Nobody");
    }

    #[test]
    fn start_in_later_chapter() {
        let game = Game::new("Ada", quiet().with_start_chapter(Chapter::Two)).unwrap();
        assert_eq!(game.chapter(), Chapter::Two);
        assert_eq!(game.player().current_room(), game.map().verdun_spawn);
        assert!(game.player().history().is_empty());
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut game = game();
        game.process_command("   ");
        assert!(game.drain_output().is_empty());
    }

    #[test]
    fn unknown_command_suggests() {
        let mut game = game();
        game.process_command("histroy");
        assert_eq!(
            game.drain_output(),
            vec![Beat::Alert(
                "Unknown command 'histroy'. Did you mean 'history'? Type 'help' for the list."
                    .into()
            )]
        );
    }

    #[test]
    fn command_words_ignore_case() {
        let mut game = game();
        game.process_command("GO n");
        assert_eq!(game.current_room().name, "BioDome");
    }

    #[test]
    fn failed_command_changes_nothing() {
        let mut game = game();
        game.process_command("go west");
        assert!(said(&mut game).contains("Unknown direction 'west'."));
        assert_eq!(game.player().current_room(), game.map().surface_ruins);
        assert!(game.player().history().is_empty());
    }

    #[test]
    fn taking_a_fragment_reports_progress() {
        let mut game = game();
        game.process_command("go N");
        game.drain_output();
        game.process_command("take fragment_alpha");
        let beats = game.drain_output();
        assert_eq!(beats[0], Beat::Say("You take 'Fragment_Alpha'.".into()));
        assert_eq!(
            beats[1],
            Beat::Notice("Objective done [fragments]: Take Fragment_Alpha".into())
        );
        assert_eq!(game.quests().get("fragments").unwrap().progress(), (1, 3));
    }

    #[test]
    fn choice_accepts_lowercase_and_exits() {
        let mut game = game();
        game.set_choice_mode("Pick one", &["N", "E"], pick);
        assert_eq!(game.allowed_answers(), vec!["E", "N"]);
        game.drain_output();

        game.process_command("e");
        assert!(said(&mut game).contains("picked E"));
        assert!(matches!(game.input_mode(), InputMode::Normal));
        assert_eq!(game.choice_prompt(), None);
    }

    #[test]
    fn invalid_choice_keeps_prompt() {
        let mut game = game();
        game.set_choice_mode("Pick one", &["N", "E"], pick);
        game.drain_output();

        game.process_command("go N");
        assert_eq!(
            game.drain_output(),
            vec![
                Beat::Alert("Invalid choice 'go N'.".into()),
                Beat::Say("Pick one".into()),
            ]
        );
        assert_eq!(game.choice_prompt(), Some("Pick one"));
        assert_eq!(game.player().current_room(), game.map().surface_ruins);
    }

    #[test]
    fn back_replays_the_prompt() {
        let mut game = game();
        game.set_choice_mode("Pick one", &["N", "E"], pick);
        game.drain_output();

        game.process_command("BACK");
        let beats = game.drain_output();
        assert_eq!(beats[0], Beat::Clear);
        assert_eq!(beats.last(), Some(&Beat::Say("Pick one".into())));
        assert!(game.is_choice());
    }

    #[test]
    #[should_panic(expected = "without leaving choice mode")]
    fn dangling_handler_is_fatal() {
        let mut game = game();
        game.set_choice_mode("Pick one", &["N"], stay);
        game.process_command("N");
    }

    #[test]
    fn triggers_wait_for_open_choice() {
        let mut game = game();
        game.set_choice_mode("Pick one", &["N"], pick);
        game.drain_output();
        game.trigger();
        assert!(game.drain_output().is_empty());
        assert!(!game.flags().story_started);
    }

    #[test]
    fn quit_finishes_and_ignores_input() {
        let mut game = game();
        game.process_command("quit");
        assert!(said(&mut game).contains("Thank you Ada for playing. Goodbye."));
        assert!(game.is_finished());

        game.process_command("help");
        game.trigger();
        assert!(game.drain_output().is_empty());
    }

    #[test]
    fn directions_follow_current_room() {
        let mut game = game();
        assert_eq!(
            game.available_directions(),
            vec![Direction::North, Direction::South]
        );
        game.process_command("go S");
        assert_eq!(game.available_directions(), vec![Direction::North]);
    }

    #[test]
    fn activating_side_quest() {
        let mut game = game();
        game.process_command("activate helias");
        assert!(said(&mut game).contains("Quest activated: Helias Shard (helias)"));
        assert_eq!(
            game.quests().get("helias").unwrap().status(),
            QuestStatus::Active
        );
        game.process_command("activate nothing");
        assert!(said(&mut game).contains("Quest 'nothing' not found."));
    }
}
