use super::CommandSpec;
use crate::error::{FictionError, FictionResult};
use crate::game::Game;

pub(super) const STANDARD: [CommandSpec; 15] = [
    CommandSpec {
        word: "help",
        usage: "help",
        help: "show this help",
        params: 0,
        action: help,
    },
    CommandSpec {
        word: "quit",
        usage: "quit",
        help: "leave the game",
        params: 0,
        action: quit,
    },
    CommandSpec {
        word: "go",
        usage: "go <direction>",
        help: "move (N, S, E, O, U, D)",
        params: 1,
        action: go,
    },
    CommandSpec {
        word: "back",
        usage: "back",
        help: "return to the previous room",
        params: 0,
        action: back,
    },
    CommandSpec {
        word: "look",
        usage: "look [target]",
        help: "describe the room, an item or a character",
        params: 1,
        action: look,
    },
    CommandSpec {
        word: "take",
        usage: "take <item>",
        help: "pick up an item",
        params: 1,
        action: take,
    },
    CommandSpec {
        word: "t",
        usage: "t <item>",
        help: "shortcut for take",
        params: 1,
        action: take,
    },
    CommandSpec {
        word: "drop",
        usage: "drop <item>",
        help: "put an item down",
        params: 1,
        action: drop_item,
    },
    CommandSpec {
        word: "check",
        usage: "check",
        help: "show your inventory",
        params: 0,
        action: check,
    },
    CommandSpec {
        word: "history",
        usage: "history",
        help: "list the rooms you came through",
        params: 0,
        action: history,
    },
    CommandSpec {
        word: "talk",
        usage: "talk <name>",
        help: "talk to a character",
        params: 1,
        action: talk,
    },
    CommandSpec {
        word: "quests",
        usage: "quests",
        help: "list every quest",
        params: 0,
        action: quests,
    },
    CommandSpec {
        word: "quest",
        usage: "quest <id>",
        help: "show a quest in detail",
        params: 1,
        action: quest,
    },
    CommandSpec {
        word: "activate",
        usage: "activate <id>",
        help: "follow a quest",
        params: 1,
        action: activate,
    },
    CommandSpec {
        word: "rewards",
        usage: "rewards",
        help: "show rewards of completed quests",
        params: 0,
        action: rewards,
    },
];

/// Reject any word count other than `params + 1`.
fn expect_arity(words: &[&str], params: usize) -> FictionResult<()> {
    if words.len() == params + 1 {
        return Ok(());
    }
    let word = words.first().copied().unwrap_or_default().to_string();
    Err(match params {
        0 => FictionError::NoParameter(word),
        _ => FictionError::OneParameter(word),
    })
}

fn help(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let text = game.commands.help_text();
    game.out.say(text);
    Ok(())
}

fn quit(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let farewell = format!("Thank you {} for playing. Goodbye.", game.player.name);
    game.out.say(farewell);
    game.finish();
    Ok(())
}

fn go(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let here = game.player.current_room();
    let direction = game
        .graph
        .resolve_direction(here, words[1])
        .ok_or_else(|| FictionError::UnknownDirection(words[1].to_string()))?;
    game.player
        .go(direction, &mut game.graph)
        .ok_or_else(|| FictionError::UnknownDirection(words[1].to_string()))?;
    tracing::debug!(direction = direction.code(), room = %game.current_room().name, "moved");
    game.describe_room();
    Ok(())
}

fn back(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    game.player
        .go_back(&mut game.graph)
        .ok_or(FictionError::NoHistory)?;
    game.describe_room();
    Ok(())
}

fn look(game: &mut Game, words: &[&str], _params: usize) -> FictionResult<()> {
    match words {
        [_] => {
            game.describe_room();
            Ok(())
        }
        [_, target] => {
            let room = game.current_room();
            let text = game
                .player
                .find_item(target)
                .or_else(|| room.find_item(target))
                .map(ToString::to_string)
                .or_else(|| room.character(target).map(|c| c.describe()))
                .ok_or_else(|| FictionError::NothingToSee(target.to_string()))?;
            game.out.say(text);
            Ok(())
        }
        _ => Err(FictionError::AtMostOneParameter(
            words.first().copied().unwrap_or("look").to_string(),
        )),
    }
}

fn take(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let item = game
        .current_room_mut()
        .take_item(words[1])
        .ok_or_else(|| FictionError::ItemNotHere(words[1].to_string()))?;
    game.out.say(format!("You take '{}'.", item.name));
    tracing::debug!(item = %item.name, "item taken");
    game.player.add_item(item);
    Ok(())
}

fn drop_item(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let item = game
        .player
        .take_item(words[1])
        .ok_or_else(|| FictionError::NotInInventory(words[1].to_string()))?;
    game.out.say(format!("You drop '{}'.", item.name));
    game.current_room_mut().add_item(item);
    Ok(())
}

fn check(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let listing = game.player.inventory_listing();
    game.out.say(listing);
    Ok(())
}

fn history(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let listing = game.player.history_listing(&game.graph);
    game.out.say(listing);
    Ok(())
}

fn talk(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let line = game
        .current_room_mut()
        .character_mut(words[1])
        .map(|c| c.talk())
        .ok_or_else(|| FictionError::NobodyHere(words[1].to_string()))?;
    game.out.say(line);
    Ok(())
}

fn quests(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let listing = game.quests.list_quests();
    game.out.say(listing);
    Ok(())
}

fn quest(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let details = game
        .quests
        .quest_details(words[1])
        .map_err(|_| FictionError::QuestNotFound(words[1].to_string()))?;
    game.out.say(details);
    Ok(())
}

fn activate(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    game.quests
        .activate(words[1])
        .map_err(|_| FictionError::QuestNotFound(words[1].to_string()))
}

fn rewards(game: &mut Game, words: &[&str], params: usize) -> FictionResult<()> {
    expect_arity(words, params)?;
    let listing = game.quests.rewards();
    game.out.say(listing);
    Ok(())
}
