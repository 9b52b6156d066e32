use atlas_core::{CoreResult, Quest, QuestManager};

use crate::game::Game;

/// Carrying the item completes the objective.
const ITEM_RULES: [(&str, &str, &str); 6] = [
    ("fragments", "Fragment_Alpha", "Take Fragment_Alpha"),
    ("fragments", "Fragment_Beta", "Take Fragment_Beta"),
    ("fragments", "Fragment_Gamma", "Take Fragment_Gamma"),
    ("verdun", "Envelope_Orders", "Take Envelope_Orders"),
    ("helias", "Shard_Helias", "Take Shard_Helias"),
    ("barbarossa", "Relay_Core", "Take Relay_Core"),
];

/// Standing in the named room completes the objective.
const ROOM_RULES: [(&str, &str, &str); 4] = [
    ("vault", "Nexus Gate", "Reach Nexus Gate"),
    ("vault", "Vault X-09", "Reach Vault X-09"),
    (
        "verdun",
        "Temporal Extraction Point",
        "Reach the extraction point",
    ),
    (
        "barbarossa",
        "Convergence Portal",
        "Reach the convergence portal",
    ),
];

/// Register every quest and activate the chapter 1 ones. `vault` is
/// activated last so it ends up followed.
pub(crate) fn register(quests: &mut QuestManager) -> CoreResult<()> {
    quests.add_quest(
        Quest::new(
            "fragments",
            "Fragments of Helias",
            "Recover the scattered fragments of the Helias energy.",
        )
        .with_objective("Take Fragment_Alpha")
        .with_objective("Take Fragment_Beta")
        .with_objective("Take Fragment_Gamma")
        .with_reward("Access to the fortress core"),
    );
    quests.add_quest(
        Quest::new(
            "vault",
            "Road to the Vault",
            "Find a way into the ATLAS Fortress and reach Vault X-09.",
        )
        .with_objective("Reach Nexus Gate")
        .with_objective("Reach Vault X-09")
        .with_reward("Meeting with Argos"),
    );
    quests.add_quest(
        Quest::new(
            "verdun",
            "Orders of Verdun",
            "Carry the orders through the trenches and reach the extraction point.",
        )
        .with_objective("Take Envelope_Orders")
        .with_objective("Reach the extraction point")
        .with_reward("Temporal passage to 1941"),
    );
    quests.add_quest(
        Quest::new(
            "helias",
            "Helias Shard",
            "A micro-fragment of Helias is lost somewhere in the mud of 1916.",
        )
        .with_objective("Take Shard_Helias")
        .with_reward("Stabilized time around you"),
    );
    quests.add_quest(
        Quest::new(
            "barbarossa",
            "Convergence",
            "Recover the relay core and reach the convergence portal.",
        )
        .with_objective("Take Relay_Core")
        .with_objective("Reach the convergence portal")
        .with_reward("Return towards 2160"),
    );

    quests.activate("fragments")?;
    quests.activate("vault")?;
    Ok(())
}

/// Activate a quest named by the story. An unknown id is a scripting bug.
pub(crate) fn activate(game: &mut Game, id: &str) {
    let result = game.quests.activate(id);
    debug_assert!(result.is_ok(), "story activated unknown quest {id:?}");
    if let Err(err) = result {
        tracing::error!(quest = id, %err, "story activated unknown quest");
    }
}

/// Complete every objective the player's state satisfies.
pub(crate) fn apply_objective_rules(game: &mut Game) {
    for (quest, item, objective) in ITEM_RULES {
        if game.player.has_item(item) {
            game.quests.complete(quest, objective);
        }
    }
    let here = game.graph[game.player.current_room()].name.clone();
    for (quest, room, objective) in ROOM_RULES {
        if here == room {
            game.quests.complete(quest, objective);
        }
    }
}
