//! Full playthroughs covering every branch of every dilemma.

use atlas_core::{Direction, QuestStatus};
use atlas_fiction::transcript::plain_text;
use atlas_fiction::{Chapter, EngineConfig, Game, StoryMode};

const FORTRESS_TOUR: &[&str] = &[
    "go N",
    "take Fragment_Alpha",
    "go O",
    "take EMP-Blade",
    "go O",
    "go D",
    "take Fragment_Beta",
    "go U",
    "go N",
    "take Fragment_Gamma",
    "go U",
    "go D",
    "go S",
    "go O",
    "go S",
    "take Fragment_Delta",
    "go N",
    "go E",
    "go E",
    "go E",
    "go S",
    "go S",
];

const LABYRINTH_PATH: &[&str] = &["go N", "go E", "go N", "go E", "go N", "go N", "go E"];

fn new_game() -> Game {
    let config = EngineConfig::new().with_intro(false).with_pauses(false);
    let mut game = Game::new("Ada", config).unwrap();
    game.trigger();
    game.drain_output();
    game
}

/// One turn as a shell plays it: input, then triggers.
fn play(game: &mut Game, line: &str) -> String {
    game.process_command(line);
    game.trigger();
    plain_text(&game.drain_output())
}

fn play_all(game: &mut Game, lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| play(game, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tour the fortress, take the badge with `drone` and deal with Argos with
/// `argos`.
fn through_argos(drone: &str, argos: &str) -> Game {
    let mut game = new_game();
    let tour = play_all(&mut game, FORTRESS_TOUR);
    assert!(tour.contains("SENTINEL-01"));
    assert!(game.is_choice());
    assert_eq!(game.current_room().name, "Nexus Gate");

    let text = play(&mut game, drone);
    assert!(text.contains("ARGOS"));
    assert_eq!(game.current_room().name, "Vault X-09");
    assert!(game.is_choice());

    play(&mut game, argos);
    assert!(!game.is_choice());
    game
}

/// Continue from the Cassian dilemma to the start of chapter 3.
fn through_verdun(game: &mut Game, cassian: &str, verdun: &str) {
    assert!(game.is_choice());
    let text = play(game, cassian);
    assert_eq!(game.chapter(), Chapter::Two);
    assert!(text.contains("CHAPTER 2 - VERDUN, 1916"));
    assert!(text.contains("Objective (Verdun 1916)"));
    assert_eq!(
        game.quests().get("verdun").unwrap().status(),
        QuestStatus::Active
    );

    play_all(game, &["go E", "take Envelope_Orders", "go N", "go E"]);
    assert!(game.is_choice());
    assert_eq!(
        game.quests().get("verdun").unwrap().status(),
        QuestStatus::Completed
    );

    let text = play(game, verdun);
    assert_eq!(game.chapter(), Chapter::Three);
    assert!(text.contains("Operation Barbarossa, 1941"));
    assert!(game.is_choice(), "command dilemma opens at the HQ");
}

fn through_barbarossa(game: &mut Game, command: &str, last: &str) -> String {
    play(game, command);
    assert!(!game.is_choice());
    assert_eq!(game.player().current_room(), game.map().barbarossa_hq);

    play_all(game, &["go E", "go E", "take Relay_Core", "go N"]);
    assert!(game.is_choice());
    let text = play(game, last);
    assert!(game.is_finished());
    text
}

#[test]
fn neutralize_path_through_the_labyrinth() {
    let mut game = through_argos("N", "N");
    assert!(game.flags().player_injured);
    assert!(game.flags().has_vault_access);
    assert_eq!(game.flags().argos_ally, Some(false));
    assert_eq!(game.story_mode(), StoryMode::Labyrinth);
    assert_eq!(game.player().current_room(), game.map().labyrinth.entry);
    let vault = game.map().vault;
    assert!(!game.graph()[vault].character("Argos").unwrap().alive);
    assert_eq!(
        game.quests().get("vault").unwrap().status(),
        QuestStatus::Completed
    );

    let text = play_all(&mut game, LABYRINTH_PATH);
    assert!(text.contains("The final conduit stabilizes."));
    assert_eq!(game.story_mode(), StoryMode::MainMap);
    assert_eq!(game.current_room().name, "Quantum Core Room");
    assert_eq!(game.flags().labyrinth_deaths, 0);
    assert!(text.contains("You think of ARGOS"));

    through_verdun(&mut game, "N", "N");
    assert_eq!(game.flags().cassian_saved, Some(true));
    assert_eq!(game.flags().verdun_message_modified, Some(false));

    let end = through_barbarossa(&mut game, "N", "N");
    assert_eq!(game.flags().barbarossa_route_fast, Some(true));
    assert_eq!(game.flags().barbarossa_kept_sample, Some(false));
    assert!(end.contains("The cold dies out behind you."));
    assert!(end.contains("END OF THE DEMO"));
    assert_eq!(
        game.quests().get("barbarossa").unwrap().status(),
        QuestStatus::Completed
    );
}

#[test]
fn spare_path_through_the_conduits() {
    let mut game = through_argos("E", "E");
    assert!(!game.flags().player_injured);
    assert_eq!(game.flags().argos_ally, Some(true));
    assert_eq!(game.story_mode(), StoryMode::SoftConduits);

    let text = play(&mut game, "go E");
    assert!(text.contains("Unknown direction 'E'."));
    assert_eq!(game.player().current_room(), game.map().conduits.entry);

    // A loop back to the start is not a failure.
    play_all(&mut game, &["go N", "go E"]);
    assert_eq!(game.player().current_room(), game.map().conduits.entry);

    let text = play_all(&mut game, &["go N", "go N"]);
    assert!(text.contains("finally in sync"));
    assert!(text.contains("He is contaminated"));
    assert_eq!(game.current_room().name, "Quantum Core Room");

    through_verdun(&mut game, "E", "E");
    assert_eq!(game.flags().cassian_saved, Some(false));
    assert_eq!(game.flags().verdun_message_modified, Some(true));

    let end = through_barbarossa(&mut game, "E", "E");
    assert_eq!(game.flags().barbarossa_route_fast, Some(false));
    assert_eq!(game.flags().barbarossa_kept_sample, Some(true));
    assert!(end.contains("The Helias sample pulses"));
}

#[test]
fn labyrinth_trap_resets_to_entry() {
    let mut game = through_argos("N", "N");
    play_all(&mut game, &["go N", "go E", "go N"]);

    let text = play(&mut game, "go N");
    assert!(text.contains("ELIMINATION PROTOCOL ACTIVATED."));
    assert!(text.contains("PRISME"));
    assert_eq!(game.player().current_room(), game.map().labyrinth.entry);
    assert!(game.player().history().is_empty());
    assert_eq!(game.flags().labyrinth_deaths, 1);
    assert_eq!(game.story_mode(), StoryMode::Labyrinth);

    play(&mut game, "go E");
    assert_eq!(game.flags().labyrinth_deaths, 2);

    play_all(&mut game, LABYRINTH_PATH);
    assert_eq!(game.current_room().name, "Quantum Core Room");
    assert!(game.is_choice());
}

#[test]
fn drone_scene_waits_for_an_essential_item() {
    let mut game = new_game();
    let tour: Vec<&str> = FORTRESS_TOUR
        .iter()
        .copied()
        .filter(|line| !line.starts_with("take"))
        .collect();
    play_all(&mut game, &tour);
    assert!(!game.flags().drone_choice_done);
    assert!(!game.is_choice());

    // Every room has been seen; the flashlight does not count.
    play_all(&mut game, &["go N", "take Flashlight"]);
    assert!(!game.flags().drone_choice_done);

    let text = play_all(&mut game, &["go N", "take Fragment_Alpha"]);
    assert!(game.flags().drone_choice_done);
    assert_eq!(text.matches("POTENTIAL BIOLOGICAL TARGET").count(), 1);
}

#[test]
fn drone_scene_fires_once() {
    let mut game = new_game();
    let text = play_all(&mut game, FORTRESS_TOUR);
    assert_eq!(text.matches("POTENTIAL BIOLOGICAL TARGET").count(), 1);
    let text = play_all(&mut game, &["N", "E"]);
    assert_eq!(game.story_mode(), StoryMode::SoftConduits);
    assert!(!text.contains("POTENTIAL BIOLOGICAL TARGET"));
}

#[test]
fn vault_opens_from_the_teleport_bay() {
    let mut game = new_game();
    let bay = game.map().teleport_bay;
    assert_eq!(game.graph().get_exit(bay, Direction::East), None);

    play_all(&mut game, FORTRESS_TOUR);
    play(&mut game, "N");
    assert_eq!(
        game.graph().get_exit(bay, Direction::East),
        Some(game.map().vault)
    );
}

#[test]
fn back_inside_a_dilemma_replays_it() {
    let mut game = new_game();
    play_all(&mut game, FORTRESS_TOUR);
    let prompt = game.choice_prompt().unwrap().to_string();

    let text = play(&mut game, "back");
    assert!(text.ends_with(&prompt));
    assert!(game.is_choice());
    assert!(!game.flags().has_vault_access);

    let text = play(&mut game, "S");
    assert!(text.contains("Invalid choice 'S'."));
    assert!(!game.flags().has_vault_access);
}

#[test]
fn talking_to_characters_along_the_way() {
    let mut game = through_argos("E", "E");
    play_all(&mut game, &["go N", "go N"]);
    play(&mut game, "N");

    play(&mut game, "go E");
    let first = play(&mut game, "talk sergeant");
    let second = play(&mut game, "talk Sergeant");
    assert!(first.starts_with("SERGEANT: \"The orders."));
    assert_ne!(first, second);
    assert!(play(&mut game, "talk cassian").contains("Nobody called 'cassian' is here."));
}
