//! Black-box behaviour of the command dispatcher.

use atlas_fiction::transcript::plain_text;
use atlas_fiction::{Beat, EngineConfig, Game};

fn new_game() -> Game {
    let config = EngineConfig::new().with_intro(false).with_pauses(false);
    let mut game = Game::new("Ada", config).unwrap();
    game.drain_output();
    game
}

fn run(game: &mut Game, line: &str) -> String {
    game.process_command(line);
    plain_text(&game.drain_output())
}

#[test]
fn take_moves_the_start_item_into_the_inventory() {
    let mut game = new_game();
    assert!(game.current_room().find_item("Flashlight").is_some());

    assert_eq!(run(&mut game, "take Flashlight"), "You take 'Flashlight'.");
    assert!(game.current_room().find_item("Flashlight").is_none());
    assert!(game.player().has_item("Flashlight"));

    let text = run(&mut game, "check");
    assert!(text.starts_with("You are carrying:"));
    assert!(text.contains("Flashlight (1 kg)"));
}

#[test]
fn shortcut_and_drop() {
    let mut game = new_game();
    run(&mut game, "t flashlight");
    assert_eq!(run(&mut game, "drop FLASHLIGHT"), "You drop 'Flashlight'.");
    assert!(game.current_room().find_item("Flashlight").is_some());
    assert_eq!(
        run(&mut game, "drop Flashlight"),
        "'Flashlight' is not in your inventory."
    );
}

#[test]
fn arity_is_checked_by_each_command() {
    let mut game = new_game();
    assert_eq!(
        run(&mut game, "go"),
        "The command 'go' takes exactly one parameter."
    );
    assert_eq!(
        run(&mut game, "help me"),
        "The command 'help' takes no parameter."
    );
    assert_eq!(
        run(&mut game, "look at it"),
        "The command 'look' takes at most one parameter."
    );
}

#[test]
fn look_covers_room_items_and_characters() {
    let mut game = new_game();
    assert!(run(&mut game, "look").contains("Exits: N, S"));
    assert_eq!(
        run(&mut game, "look flashlight"),
        "Flashlight (1 kg) : Cracked casing, but the beam still works"
    );
    assert_eq!(
        run(&mut game, "look drone"),
        "You don't see 'drone' here."
    );
}

#[test]
fn synonyms_are_accepted_only_for_real_exits() {
    let mut game = new_game();
    run(&mut game, "go NORD");
    assert_eq!(game.current_room().name, "BioDome");

    assert_eq!(run(&mut game, "go EST"), "Unknown direction 'EST'.");
    assert_eq!(game.current_room().name, "BioDome");

    run(&mut game, "go ouest");
    assert_eq!(game.current_room().name, "Storage B7");
}

#[test]
fn back_retraces_moves() {
    let mut game = new_game();
    assert_eq!(run(&mut game, "back"), "There is nowhere to go back to.");

    run(&mut game, "go N");
    run(&mut game, "go O");
    assert!(run(&mut game, "history").contains("BioDome"));

    run(&mut game, "back");
    assert_eq!(game.current_room().name, "BioDome");
    run(&mut game, "back");
    assert_eq!(game.current_room().name, "Surface Ruins");
    assert_eq!(run(&mut game, "history"), "You have not moved yet.");
}

#[test]
fn unknown_words_leave_state_alone() {
    let mut game = new_game();
    let before = game.player().current_room();
    let beats = {
        game.process_command("dance wildly");
        game.drain_output()
    };
    assert_eq!(beats.len(), 1);
    assert!(matches!(&beats[0], Beat::Alert(text) if text.starts_with("Unknown command 'dance'.")));
    assert_eq!(game.player().current_room(), before);
}

#[test]
fn help_lists_every_command() {
    let mut game = new_game();
    let text = run(&mut game, "help");
    assert!(text.starts_with("Available commands:"));
    for usage in ["go <direction>", "look [target]", "talk <name>", "rewards"] {
        assert!(text.contains(usage), "missing {usage}");
    }
}

#[test]
fn quest_commands() {
    let mut game = new_game();
    let listing = run(&mut game, "quests");
    assert!(listing.contains("fragments"));
    assert!(listing.contains("ACTIVE"));
    assert!(listing.contains("INACTIVE"));

    let details = run(&mut game, "quest vault");
    assert!(details.contains("[ ] Reach Nexus Gate"));
    assert_eq!(run(&mut game, "quest atlas"), "Quest 'atlas' not found.");
    assert!(run(&mut game, "rewards").ends_with("(no rewards yet)"));
}

#[test]
fn reaching_a_room_completes_its_objective() {
    let mut game = new_game();
    for line in ["go N", "go O", "go O"] {
        game.process_command(line);
    }
    let beats = game.drain_output();
    assert!(beats.contains(&Beat::Notice(
        "Objective done [vault]: Reach Nexus Gate".into()
    )));
    assert!(run(&mut game, "quest vault").contains("[x] Reach Nexus Gate"));
}
