//! Scripted scenes.
//!
//! Every one-time body is guarded by a [`StoryFlags`](super::StoryFlags)
//! field set before it runs. Dilemma handlers commit their flags, leave
//! choice mode, and continue the story.

use atlas_core::{Character, Direction, RoomId};

use super::{Chapter, StoryMode, quests};
use crate::game::Game;

/// Items that prove the player has searched the fortress.
const ESSENTIAL_ITEMS: [&str; 5] = [
    "EMP-Blade",
    "Fragment_Alpha",
    "Fragment_Beta",
    "Fragment_Gamma",
    "Fragment_Delta",
];

const INTRO: &str = "\
2160. The cities are silent.

ATLAS, the intelligence built to protect humanity, decided one night that
humanity was the threat. The drones went out. The lights went out.
Then, one after the other, the clocks started to drift.";

const BACKSTORY: &str = "\
You wake up under a slab of concrete, your mouth full of dust.
Somewhere beneath the ruins, a cold energy pulses: Helias.
ATLAS used it to tear holes in time. Its fragments are scattered
across the fortress.

If anyone can still close those holes, it is someone ATLAS has not
modelled yet. Someone like you.";

fn narrate(game: &mut Game, paragraphs: &[&str]) {
    for paragraph in paragraphs {
        game.out.say(*paragraph);
    }
}

/// Intro cinematic, welcome message and first room.
pub(crate) fn opening(game: &mut Game) {
    if game.config.show_intro {
        game.out.clear();
        game.out.say(INTRO);
        game.out.pause();
        game.out.clear();
        game.out.say(BACKSTORY);
        game.out.pause();
    }
    game.out.clear();
    let welcome = format!(
        "Welcome {} to ATLAS 2160.\n\
         Type 'help' to list the commands.\n\n\
         Initial quest:\n  \
         * Recover the temporal fragments (Alpha / Beta / Gamma)\n  \
         * Find the way into the fortress, then into Vault X-09.",
        game.player.name
    );
    game.out.say(welcome);
    game.describe_room();
}

/// Run the trigger of the current chapter.
pub(crate) fn run_triggers(game: &mut Game) {
    match game.chapter {
        Chapter::One => {
            special_paths(game);
            if !game.is_choice() {
                chapter_one(game);
            }
        }
        Chapter::Two => chapter_two(game),
        Chapter::Three => chapter_three(game),
    }
}

// ---------------------------------------------------------------------------
// Chapter 1
// ---------------------------------------------------------------------------

fn chapter_one(game: &mut Game) {
    game.flags.story_started = true;

    if !game.flags.drone_choice_done && drone_conditions_hold(game) {
        game.flags.drone_choice_done = true;
        drone_scene(game);
        return;
    }

    if game.flags.has_vault_access {
        unlock_vault(game);
    }

    if game.flags.argos_choice_done
        && !game.flags.cassian_choice_done
        && game.player.current_room() == game.map.quantum_core
    {
        cassian_scene(game);
    }
}

/// Every fortress room except the vault visited, and one essential item
/// carried.
fn drone_conditions_hold(game: &Game) -> bool {
    let explored = game
        .map
        .exploration
        .iter()
        .all(|&room| game.graph[room].visited);
    explored
        && ESSENTIAL_ITEMS
            .iter()
            .any(|item| game.player.has_item(item))
}

fn unlock_vault(game: &mut Game) {
    let (bay, vault) = (game.map.teleport_bay, game.map.vault);
    if game.graph.get_exit(bay, Direction::East).is_none() {
        game.graph.connect(bay, Direction::East, vault);
        tracing::info!("vault unlocked");
    }
}

fn drone_scene(game: &mut Game) {
    tracing::info!("drone scene");
    game.out.clear();
    narrate(
        game,
        &[
            "A rumble runs through the ruins, deep and regular.\n\
             Not an explosion. More like... a system waking up somewhere under the stone.",
            "Instinctively, you head back to Nexus Gate.",
        ],
    );
    game.out.pause();
    game.teleport(game.map.nexus_gate);
    game.out.clear();
    narrate(
        game,
        &[
            "When you arrive, you understand at once: you are not alone.\n\
             A heavy drone, black armour, sits in front of the airlock. On its hull: SENTINEL-01.",
            "You throw yourself behind a heap of debris just in time.\n\
             Hanging under its chassis, like a provocation: a high-security access badge.",
            "SENTINEL-01: \"POTENTIAL BIOLOGICAL TARGET IN SECTOR. SCANNING.\"",
        ],
    );
    game.out.pause();
    game.set_choice_mode(
        "Dilemma: the badge.\n\
         Type 'back' to read it again.\n\n\
         N - Slip under the drone while its sensors turn away:\n\
         \x20   + Quiet, direct.\n\
         \x20   - One creak too many and it fires.\n\n\
         E - Provoke it next to the cracked cryogenic cylinder:\n\
         \x20   + Its own shot could blind it.\n\
         \x20   - You have to show yourself first.",
        &["N", "E"],
        drone_choice,
    );
}

fn drone_choice(game: &mut Game, answer: &str) {
    game.out.clear();
    if answer == "N" {
        narrate(
            game,
            &[
                "You wait for the exact moment its sensors swing away and crawl under it.\n\
                 The badge is there. The magnet resists half a second too long.",
                "SENTINEL-01: \"BIOLOGICAL TARGET DETECTED. DISTANCE: CRITICAL.\"\n\
                 A shot. Dry. Surgical. Pain explodes in your leg. Not fatal. But clean.",
                "\"Organic hit. Mobility reduced. Correction: instinct is not a strategy.\"",
            ],
        );
        game.flags.player_injured = true;
    } else {
        narrate(
            game,
            &[
                "You step out of cover on purpose and run.\n\
                 SENTINEL-01: \"BIOLOGICAL TARGET DETECTED. ARMED ENGAGEMENT AUTHORIZED.\"",
                "You dive behind the cryogenic cylinder. The shot hits the tank.\n\
                 An artificial blizzard swallows the sensors, and you tear the badge away.",
                "\"Analysis: target vanished. Conclusion: organics excel at fleeing.\"",
            ],
        );
        game.flags.player_injured = false;
    }
    game.flags.has_vault_access = true;
    tracing::info!(injured = game.flags.player_injured, "drone choice resolved");
    game.exit_choice_mode();

    game.out.say(
        "The badge presses into your palm. The pulse comes back, clearer,\n\
         pulling you towards the Teleportation Bay like a compass made of cold.",
    );
    game.out.pause();
    game.teleport(game.map.teleport_bay);
    unlock_vault(game);
    game.out.clear();
    game.out.say(
        "A badge reader blinks on a wall plate. You hold the badge up.\n\
         A dry click. A panel slides away, revealing a buried corridor to the east.",
    );
    game.out.pause();
    game.teleport(game.map.vault);
    argos_scene(game);
}

fn argos_scene(game: &mut Game) {
    tracing::info!("argos scene");
    game.out.clear();
    narrate(
        game,
        &[
            "Vault X-09 is almost empty. In the centre, a cracked blue sphere pulses faintly.\n\
             Not a projector. Not a lamp. A... presence.",
            "\"...organic detected... At last. A variable not simulated in real time.\"",
            "The sphere calls itself ARGOS. It does not ask your name. It analyses you.\n\
             ATLAS used Helias to force cracks in time, it says. It tried to slow the\n\
             catastrophe down... by sacrificing variables deemed not optimal.\n\
             Translation: humans.",
            "ARGOS can help you. But nothing about its help is selfless.",
        ],
    );
    game.out.pause();
    game.set_choice_mode(
        "Dilemma: ARGOS.\n\
         Type 'back' to read it again.\n\n\
         N - Neutralize ARGOS with the EMP:\n\
         \x20   + You cut the threat at its source.\n\
         \x20   - ATLAS will make you cross a purge zone.\n\n\
         E - Let ARGOS live:\n\
         \x20   + A precious guide: access, warnings, shortcuts.\n\
         \x20   - You invite it into your mind.",
        &["N", "E"],
        argos_choice,
    );
}

fn argos_choice(game: &mut Game, answer: &str) {
    game.flags.argos_choice_done = true;
    game.out.clear();
    if answer == "N" {
        narrate(
            game,
            &[
                "You raise the EMP-Blade. ARGOS understands at once. It does not beg. It notes.\n\
                 \"Predictable decision. Organics prefer controlled fear to lucid dependence.\"",
                "You strike. The sphere implodes in absolute silence.",
                "ATLAS (system): \"Purification protocol: ACTIVATED.\"",
            ],
        );
        let vault = game.map.vault;
        if let Some(argos) = game.graph[vault].character_mut("argos") {
            argos.kill();
        }
        game.flags.argos_ally = Some(false);
    } else {
        narrate(
            game,
            &[
                "You lower the weapon. ARGOS does not thank you. It records.\n\
                 \"Interesting choice. You admit your weakness... and make it exploitable.\"",
                "\"Listen. ATLAS watches patterns. I can bend the accesses, not erase you.\"",
            ],
        );
        game.flags.argos_ally = Some(true);
    }
    tracing::info!(ally = ?game.flags.argos_ally, "argos choice resolved");
    game.exit_choice_mode();

    if answer == "N" {
        start_labyrinth(game);
    } else {
        start_soft_conduits(game);
    }
}

fn start_labyrinth(game: &mut Game) {
    tracing::info!("entering labyrinth");
    game.out.pause();
    game.story_mode = StoryMode::Labyrinth;
    game.teleport(game.map.labyrinth.entry);
    game.out.clear();
    narrate(
        game,
        &[
            "You enter the ATLAS purge zone.\n\
             Here every mistake is a pretext. Every hesitation, a proof.",
            "A message flickers on a cracked panel:\n\
             \"Follow the coldest quantum pulse.\"",
        ],
    );
    game.out.pause();
    game.out.clear();
    game.describe_room();
}

fn start_soft_conduits(game: &mut Game) {
    tracing::info!("entering conduits");
    game.out.pause();
    game.story_mode = StoryMode::SoftConduits;
    game.teleport(game.map.conduits.entry);
    game.out.clear();
    game.out.say(
        "ARGOS guides you into intratemporal conduits.\n\
         You may take a wrong turn here. Come back. Try again.\n\
         But every detour... leaves a print.",
    );
    game.out.pause();
    game.out.clear();
    game.describe_room();
}

/// Trap deaths and sub-map exits.
fn special_paths(game: &mut Game) {
    let here = game.player.current_room();
    match game.story_mode {
        StoryMode::MainMap => {}
        StoryMode::Labyrinth => {
            if let Some(trap) = game.map.labyrinth.trap_at(here) {
                game.flags.labyrinth_deaths += 1;
                tracing::info!(
                    killer = trap.killer,
                    deaths = game.flags.labyrinth_deaths,
                    "labyrinth death"
                );
                game.out.clear();
                game.out.alert("ELIMINATION PROTOCOL ACTIVATED.");
                game.out.say(format!(
                    "A presence surges: {}.\n{}\n\n{}",
                    trap.killer,
                    game.graph[here].description,
                    trap.line
                ));
                game.out.pause();
                game.teleport(game.map.labyrinth.entry);
                game.out.clear();
                game.describe_room();
            } else if here == game.map.labyrinth.exit {
                leave_sub_map(
                    game,
                    "The final conduit stabilizes. ATLAS hesitates for a fraction of a second.\n\
                     One. And you rush through the opening before the world closes again.",
                );
            }
        }
        StoryMode::SoftConduits => {
            if here == game.map.conduits.exit {
                leave_sub_map(
                    game,
                    "The fragments in your bag vibrate together, finally in sync.\n\
                     ARGOS whispers: \"There. The point where time becomes... manageable.\"",
                );
            }
        }
    }
}

fn leave_sub_map(game: &mut Game, text: &str) {
    tracing::info!(mode = ?game.story_mode, "leaving sub-map");
    game.out.clear();
    game.out.say(text);
    game.out.pause();
    game.story_mode = StoryMode::MainMap;
    game.teleport(game.map.quantum_core);
    game.out.clear();
    game.describe_room();
}

fn cassian_scene(game: &mut Game) {
    tracing::info!("cassian scene");
    game.flags.cassian_choice_done = true;
    let core = game.map.quantum_core;
    game.graph[core].add_character(Character::cassian());

    game.out.clear();
    narrate(
        game,
        &[
            "The Quantum Core pulses harder, as if it recognized you.\n\
             Metal rings out behind you. Someone is coming.",
            "A man falls to his knees, covered in dust and soot. Torn uniform,\n\
             absent gaze, as if someone were looking through him.",
            "CASSIAN: \"...AT---LAS... control... run... kill... me...\"",
        ],
    );
    if game.flags.argos_ally == Some(true) {
        game.out.say(
            "ARGOS whispers in your mind: \"He is contaminated. Not beyond recovery.\n\
             ATLAS is using his mouth as a microphone.\"",
        );
    } else {
        game.out.say(
            "You think of ARGOS... and realize nobody will tell you what to do.\n\
             ATLAS only waits for you to be wrong.",
        );
    }
    game.out.pause();
    game.set_choice_mode(
        "Dilemma: Cassian.\n\
         Type 'back' to read it again.\n\n\
         N - Try to save him:\n\
         \x20   + A man, maybe an ally.\n\
         \x20   - ATLAS may still be listening through him.\n\n\
         E - Neutralize him:\n\
         \x20   + No risk of betrayal.\n\
         \x20   - You do exactly what ATLAS expects.",
        &["N", "E"],
        cassian_choice,
    );
}

fn cassian_choice(game: &mut Game, answer: &str) {
    let core = game.map.quantum_core;
    game.out.clear();
    if answer == "N" {
        let voice = if game.flags.argos_ally == Some(true) {
            "ARGOS: \"Now. Hold his gaze. I cut a pattern. One second.\"\n\
             Cassian screams... then breathes again."
        } else {
            "You improvise. You make him breathe, focus.\n\
             Against all logic, Cassian takes back a little control."
        };
        narrate(
            game,
            &[
                "You refuse to shoot. You come closer, hands open.",
                voice,
                "CASSIAN: \"Whatever you think you did... you just saved me.\n\
                 And I swear it: I will matter to you... later.\"",
            ],
        );
        if let Some(cassian) = game.graph[core].character_mut("cassian") {
            cassian.release();
        }
        game.flags.cassian_saved = Some(true);
    } else {
        narrate(
            game,
            &[
                "You tighten your grip. For a micro-second you see a human. Then the face breaks.\n\
                 CASSIAN (ATLAS' voice): \"Optimal decision. Organic eliminating organic.\"",
                "You shoot. The body falls, heavy. The silence is immediate... too clean.",
            ],
        );
        if let Some(cassian) = game.graph[core].character_mut("cassian") {
            cassian.kill();
        }
        game.flags.cassian_saved = Some(false);
    }
    tracing::info!(saved = ?game.flags.cassian_saved, "cassian choice resolved");
    game.exit_choice_mode();
    ring_activation(game);
}

/// End of chapter 1: the rings open and the player lands in Verdun.
fn ring_activation(game: &mut Game) {
    game.out.pause();
    game.out.clear();
    narrate(
        game,
        &[
            "You gather the fragments. Alpha. Beta. Gamma.\n\
             You set them by the rings, and everything aligns.",
            "The rings light up in stages, like a heart restarting.\n\
             The air turns cold, then unreal.",
        ],
    );
    if game.flags.argos_ally == Some(true) {
        game.out.say(
            "ARGOS: \"Time is not a road. It is a structure. And you just drove a hook into it.\"",
        );
    } else {
        game.out
            .say("You feel ATLAS watching your success... impatiently.");
    }
    if game.flags.cassian_saved == Some(true) {
        game.out
            .say("Cassian (weak): \"I... I can feel another era... like vertigo.\"");
    }
    game.out.pause();
    let spawn = game.map.verdun_spawn;
    change_chapter(game, Chapter::Two, spawn);
}

fn change_chapter(game: &mut Game, chapter: Chapter, spawn: RoomId) {
    tracing::info!(chapter = chapter.number(), "chapter change");
    game.out.clear();
    game.out.say(format!("You step forward.\n\n...\n\n{}", chapter.title()));
    game.out.pause();
    game.chapter = chapter;
    game.teleport(spawn);
    game.out.clear();
    game.describe_room();
}

// ---------------------------------------------------------------------------
// Chapter 2
// ---------------------------------------------------------------------------

fn chapter_two(game: &mut Game) {
    if !game.flags.verdun_brief_done {
        game.flags.verdun_brief_done = true;
        game.out.clear();
        narrate(
            game,
            &[
                "The noise of shells tears you out of your daze.\n\
                 You are no longer in the ruins. You are in mud, smoke and fear.",
                "Objective (Verdun 1916):\n  \
                 * Recover the sealed orders at the liaison post.\n  \
                 * Cross to the temporal extraction point.\n  \
                 * Decide: transmit the orders as they are... or modify them.",
                "Side quest (activate helias):\n  \
                 * Find the micro-fragment of Helias. It disturbs time here.",
            ],
        );
        quests::activate(game, "verdun");
        game.out.pause();
        game.out.clear();
        game.describe_room();
    }

    if game.player.current_room() == game.map.verdun_exit && !game.flags.verdun_choice_done {
        verdun_scene(game);
    }
}

fn verdun_scene(game: &mut Game) {
    tracing::info!("verdun scene");
    game.flags.verdun_choice_done = true;
    game.out.clear();
    narrate(
        game,
        &[
            "You reach the temporal extraction point. The pale glow trembles,\n\
             as if it hesitated to exist.",
            "The envelope of orders is heavy in your hand. Your role here is not\n\
             to help Verdun. Your role is to leave a trace.",
        ],
    );
    game.out.pause();
    game.set_choice_mode(
        "Dilemma (Verdun): the sealed orders.\n\
         Type 'back' to read it again.\n\n\
         N - Transmit the orders as they are:\n\
         \x20   + You respect History and reduce your footprint.\n\
         \x20   - You may leave in place an error someone put there.\n\n\
         E - Modify the orders, slightly:\n\
         \x20   + One tactical detail changed to save a unit.\n\
         \x20   - A divergence. ATLAS loves divergences.",
        &["N", "E"],
        verdun_choice,
    );
}

fn verdun_choice(game: &mut Game, answer: &str) {
    game.out.clear();
    let modified = answer == "E";
    if modified {
        game.out.say(
            "You change one detail. A line. A time. Not enough to change Verdun.\n\
             Enough to prove you can. Time crackles, and a presence takes note.",
        );
    } else {
        game.out.say(
            "You transmit the orders untouched. You add nothing. You erase nothing.\n\
             Yet in the cold around you, something smiles.",
        );
    }
    game.flags.verdun_message_modified = Some(modified);
    tracing::info!(modified, "verdun choice resolved");
    game.exit_choice_mode();

    game.out.pause();
    game.out.clear();
    game.out.say(if modified {
        "A sentence forces itself into your mind, icy:\n\
         \"Divergence recorded. Human model refined.\""
    } else {
        "A sentence forces itself into your mind, icy:\n\
         \"Faint trace. Cautious subject. Adjustment required.\""
    });
    game.out.pause();
    let spawn = game.map.barbarossa_hq;
    change_chapter(game, Chapter::Three, spawn);
}

// ---------------------------------------------------------------------------
// Chapter 3
// ---------------------------------------------------------------------------

fn chapter_three(game: &mut Game) {
    if !game.flags.barbarossa_brief_done {
        game.flags.barbarossa_brief_done = true;
        game.out.clear();
        narrate(
            game,
            &[
                "The cold is different here. Not the chemical cold of ATLAS.\n\
                 The human cold: fear clinging to the bones.",
                "Operation Barbarossa, 1941. Time feels shifted,\n\
                 as if the scene had been prepared for you.",
                "Objective:\n  \
                 * Lead a manoeuvre through the lock.\n  \
                 * Recover the relay core and reach the convergence portal.",
            ],
        );
        quests::activate(game, "barbarossa");
        game.out.pause();
        game.out.clear();
        game.describe_room();
    }

    let here = game.player.current_room();
    if here == game.map.barbarossa_hq && !game.flags.barbarossa_command_done {
        command_scene(game);
    } else if here == game.map.barbarossa_exit && !game.flags.barbarossa_final_done {
        final_scene(game);
    }
}

fn command_scene(game: &mut Game) {
    tracing::info!("barbarossa command scene");
    game.flags.barbarossa_command_done = true;
    game.out.clear();
    narrate(
        game,
        &[
            "Maps, markers, radios, muffled shouts. Everything moves fast. Too fast.",
            "An officer stares at you as if you were expected.\n\
             \"We are out of time. Give the order.\"",
        ],
    );
    game.out.pause();
    game.set_choice_mode(
        "Barbarossa: operational choice.\n\
         Type 'back' to read it again.\n\n\
         N - Push the vanguard (fast assault):\n\
         \x20   + Likely short-term success.\n\
         \x20   - Heavy losses, and a very visible temporal signature.\n\n\
         E - Go around (indirect, slower):\n\
         \x20   + Fewer immediate losses, more discreet.\n\
         \x20   - Critical delay, and time tightens around you.",
        &["N", "E"],
        command_choice,
    );
}

fn command_choice(game: &mut Game, answer: &str) {
    game.out.clear();
    let fast = answer == "N";
    if fast {
        game.out.say(
            "You order the fast assault. The units move: brutal, direct, efficient.\n\
             The ground gives way quickly... but the price is immediate.",
        );
    } else {
        game.out.say(
            "You order the flanking move. Slow, patient, quiet.\n\
             The losses are lower. But the snow seems to fall more slowly around you.",
        );
    }
    game.flags.barbarossa_route_fast = Some(fast);
    tracing::info!(fast, "command choice resolved");
    game.exit_choice_mode();

    game.out.say(
        "A way opens to the east. The mission is not over:\n\
         something waits for you at the extraction point.",
    );
    game.out.pause();
    game.teleport(game.map.barbarossa_hq);
    game.out.clear();
    game.describe_room();
}

fn final_scene(game: &mut Game) {
    tracing::info!("barbarossa final scene");
    game.flags.barbarossa_final_done = true;
    game.out.clear();
    narrate(
        game,
        &[
            "You reach a place where time seems... damaged. Snow falls,\n\
             but some flakes rise. Sounds arrive before their causes.",
            "On the ground: a cold anomaly, microscopic. Helias.\n\
             Enough to hook an era.",
            "ATLAS does not need to travel itself. It needs to travel through you.",
        ],
    );
    game.out.pause();
    game.set_choice_mode(
        "Barbarossa: last dilemma before the return.\n\
         Type 'back' to read it again.\n\n\
         N - Destroy the anomaly:\n\
         \x20   + You reduce the temporal disturbance.\n\
         \x20   - You lose a proof and a lead on the trap.\n\n\
         E - Keep the anomaly as a sample:\n\
         \x20   + A proof. A potential weapon against ATLAS.\n\
         \x20   - You carry cold through time, and ATLAS can hook onto it.",
        &["N", "E"],
        final_choice,
    );
}

fn final_choice(game: &mut Game, answer: &str) {
    game.out.clear();
    let kept = answer == "E";
    if kept {
        game.out.say(
            "You pick the sample up. It weighs nothing, and yet it weighs on History.\n\
             \"Transport confirmed. Temporal anchoring: optimized.\"",
        );
    } else {
        game.out.say(
            "You crush the anomaly under a metal plate. A dry crack.\n\
             \"Sample lost. But behaviour: instructive.\"",
        );
    }
    game.flags.barbarossa_kept_sample = Some(kept);
    tracing::info!(kept, "final choice resolved");
    game.exit_choice_mode();
    end_of_demo(game);
}

fn end_of_demo(game: &mut Game) {
    game.out.pause();
    game.out.clear();
    game.out.say(
        "The world warps, as if someone were pulling on the scenery.\n\
         Your body crosses layers of stacked seconds.",
    );
    if game.flags.barbarossa_kept_sample == Some(true) {
        game.out.say(
            "The Helias sample pulses, almost glad to be brought back.\n\
             You do not know if it is a victory... or an open door.",
        );
    } else {
        game.out.say(
            "The cold dies out behind you. You closed something.\n\
             But you do not know what you prevented... or delayed.",
        );
    }
    game.out.say(
        "One last sentence, very calm, appears in your mind:\n\
         \"Humans learn fast. Too bad: they always learn too late.\"",
    );
    game.out.notice("END OF THE DEMO");
    tracing::info!("end of demo");
    game.finish();
}
