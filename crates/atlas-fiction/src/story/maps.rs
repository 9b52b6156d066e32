//! Map construction for the three chapters and the two chapter 1 sub-maps.
//!
//! Every room lives in one [`RoomGraph`]. The sub-maps are built up front
//! and stay unreachable by walking: the story teleports the player in and
//! out of them.

use atlas_core::{Character, Direction, Item, Room, RoomGraph, RoomId};

use Direction::{Down, East, North, South, Up, West};

/// A trap room of the labyrinth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trap {
    /// The room.
    pub room: RoomId,
    /// Name of the servant that kills the player there.
    pub killer: &'static str,
    /// What it says.
    pub line: &'static str,
}

/// A scripted sub-map: entered at `entry`, left by reaching `exit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubMap {
    /// Where the player is placed on entry and after each death.
    pub entry: RoomId,
    /// Reaching it splices the player back into the main map.
    pub exit: RoomId,
    /// Rooms that kill and reset.
    pub traps: Vec<Trap>,
}

impl SubMap {
    /// The trap at `room`, if any.
    pub fn trap_at(&self, room: RoomId) -> Option<Trap> {
        self.traps.iter().copied().find(|t| t.room == room)
    }
}

/// Ids of every room the story refers to.
#[derive(Debug, Clone)]
pub struct AtlasMap {
    /// Chapter 1 start.
    pub surface_ruins: RoomId,
    /// Fragment Alpha.
    pub biodome: RoomId,
    /// The EMP-Blade.
    pub storage_b7: RoomId,
    /// Fortress entrance, where the drone waits.
    pub nexus_gate: RoomId,
    /// Fragment Beta.
    pub cryolab: RoomId,
    /// Fragment Gamma.
    pub neurolink: RoomId,
    /// Lookout above the NeuroLink chamber.
    pub watchtower: RoomId,
    /// Console room before the core.
    pub drone_hub: RoomId,
    /// Fragment Delta, and where Cassian appears.
    pub quantum_core: RoomId,
    /// The rings; its east exit opens with the badge.
    pub teleport_bay: RoomId,
    /// Argos' room.
    pub vault: RoomId,
    /// Chapter 1 rooms the drone scene requires visited (everything but
    /// the vault).
    pub exploration: Vec<RoomId>,
    /// The purge labyrinth.
    pub labyrinth: SubMap,
    /// The intratemporal conduits.
    pub conduits: SubMap,
    /// Chapter 2 start.
    pub verdun_spawn: RoomId,
    /// Chapter 2 dilemma room.
    pub verdun_exit: RoomId,
    /// Chapter 3 start and command dilemma room.
    pub barbarossa_hq: RoomId,
    /// Chapter 3 final dilemma room.
    pub barbarossa_exit: RoomId,
}

/// Build every map into `graph`.
pub fn build(graph: &mut RoomGraph) -> AtlasMap {
    let ch1 = chapter_one(graph);
    let labyrinth = labyrinth(graph);
    let conduits = conduits(graph);
    let (verdun_spawn, verdun_exit) = chapter_two(graph);
    let (barbarossa_hq, barbarossa_exit) = chapter_three(graph);

    AtlasMap {
        labyrinth,
        conduits,
        verdun_spawn,
        verdun_exit,
        barbarossa_hq,
        barbarossa_exit,
        ..ch1
    }
}

fn chapter_one(graph: &mut RoomGraph) -> AtlasMap {
    let surface_ruins = graph.add_room(
        Room::new(
            "Surface Ruins",
            "among the ruins of a destroyed city. Burnt drones, gutted facades...\n\
             A heavy silence hangs, as if the city were still holding its breath.",
        )
        .with_item(Item::new(
            "Flashlight",
            "Cracked casing, but the beam still works",
            1,
        )),
    );
    let biodome = graph.add_room(
        Room::new(
            "BioDome",
            "in a giant cracked greenhouse. The artificial plants rot in silence...\n\
             Fresh tracks on the floor contradict the abandonment.",
        )
        .with_item(Item::new(
            "Fragment_Alpha",
            "Primary energy (Helias), cold and stable",
            1,
        )),
    );
    let storage_b7 = graph.add_room(
        Room::new(
            "Storage B7",
            "in a fractured military warehouse. Sealed crates, blown padlocks.\n\
             A message painted in a hurry: \"DO NOT TRUST THE AIs ANYMORE.\"",
        )
        .with_item(Item::new(
            "EMP-Blade",
            "Anti-AI weapon, marks its bearer as an authorized threat",
            2,
        )),
    );
    let nexus_gate = graph.add_room(Room::new(
        "Nexus Gate",
        "before a colossal armoured door: the main entrance of the ATLAS Fortress.\n\
         The system is locked. A mute screen reads: \"OPERATOR ACCESS REQUIRED.\"",
    ));
    let cryolab = graph.add_room(
        Room::new(
            "CryoLab 12",
            "in a frozen laboratory. Stasis pods stand open... some are empty.\n\
             A cold mist crawls along the floor, like a presence.",
        )
        .with_item(Item::new(
            "Fragment_Beta",
            "Compressed AI data, pulsing irregularly",
            1,
        )),
    );
    let neurolink = graph.add_room(
        Room::new(
            "NeuroLink Chamber",
            "in a neural chamber. Helmets wired to interfaces that still flicker.\n\
             Now and then a faint hum sounds like... a whisper.",
        )
        .with_item(Item::new(
            "Fragment_Gamma",
            "Temporal memory, touching it makes you nauseous",
            1,
        )),
    );
    let watchtower = graph.add_room(Room::new(
        "Watchtower Omega",
        "at the top of an observation tower. The whole zone spreads under a heavy sky.\n\
         A single instrument still works: it stubbornly points... at the surface.",
    ));
    let drone_hub = graph.add_room(Room::new(
        "Drone Control Hub",
        "in a command centre. The consoles are dead... except one, still warm.\n\
         Someone was here recently. Very recently.",
    ));
    let quantum_core = graph.add_room(
        Room::new(
            "Quantum Core Room",
            "in a hall where an unstable quantum reactor pulses. Frozen alarms blink.\n\
             This place only needs an excuse to... start again.",
        )
        .with_item(Item::new(
            "Fragment_Delta",
            "Unstable sample, vibrating in time with the reactor",
            1,
        )),
    );
    let teleport_bay = graph.add_room(Room::new(
        "Teleportation Bay",
        "in a teleportation bay: three energy rings, half asleep.\n\
         The air is strangely colder... as if time itself struggled to flow.",
    ));
    let vault = graph.add_room(
        Room::new(
            "Vault X-09",
            "before a forbidden room drowned in icy blue light.\n\
             You feel watched before you even step in.",
        )
        .with_character(Character::argos()),
    );

    graph.connect(surface_ruins, North, biodome);
    graph.connect(surface_ruins, South, teleport_bay);
    graph.connect(biodome, South, surface_ruins);
    graph.connect(biodome, West, storage_b7);
    graph.connect(storage_b7, East, biodome);
    graph.connect(storage_b7, West, nexus_gate);
    graph.connect(nexus_gate, East, storage_b7);
    graph.connect(nexus_gate, Down, cryolab);
    graph.connect(nexus_gate, West, drone_hub);
    graph.connect(nexus_gate, North, neurolink);
    graph.connect(cryolab, Up, nexus_gate);
    graph.connect(neurolink, South, nexus_gate);
    graph.connect(neurolink, Up, watchtower);
    graph.connect(watchtower, Down, neurolink);
    graph.connect(drone_hub, East, nexus_gate);
    graph.connect(drone_hub, South, quantum_core);
    graph.connect(quantum_core, North, drone_hub);
    graph.connect(teleport_bay, North, surface_ruins);

    AtlasMap {
        surface_ruins,
        biodome,
        storage_b7,
        nexus_gate,
        cryolab,
        neurolink,
        watchtower,
        drone_hub,
        quantum_core,
        teleport_bay,
        vault,
        exploration: vec![
            surface_ruins,
            biodome,
            storage_b7,
            nexus_gate,
            cryolab,
            neurolink,
            watchtower,
            drone_hub,
            quantum_core,
            teleport_bay,
        ],
        labyrinth: SubMap {
            entry: surface_ruins,
            exit: surface_ruins,
            traps: Vec::new(),
        },
        conduits: SubMap {
            entry: surface_ruins,
            exit: surface_ruins,
            traps: Vec::new(),
        },
        verdun_spawn: surface_ruins,
        verdun_exit: surface_ruins,
        barbarossa_hq: surface_ruins,
        barbarossa_exit: surface_ruins,
    }
}

const LABYRINTH_ROOMS: [(&str, &str); 8] = [
    (
        "Purge Zone - Entrance",
        "in a corridor where the air burns then freezes, as if the fortress were testing your skin.",
    ),
    (
        "Pulse Chamber",
        "in a hall where cold pulses snap like a quantum metronome.",
    ),
    (
        "Drone Gallery",
        "in a dark gallery. Motionless mechanical silhouettes watch you without moving.",
    ),
    (
        "Echo Corridor",
        "in a corridor where your steps come back before you. Time runs a second late.",
    ),
    (
        "Inverted Atrium",
        "in an atrium where the ceiling feels heavier than the floor. Your head spins.",
    ),
    (
        "Cryogenic Node",
        "in a frozen node. The coldest pulse seems to come from a single axis.",
    ),
    (
        "Protocol Hall",
        "in a white hall. Too white. The walls are waiting for a mistake.",
    ),
    (
        "Final Conduit",
        "before an incomplete ring, frozen and silent. The way out is close.",
    ),
];

const ELIMINATED: &str = "\"Result: organic eliminated. Hypothesis confirmed: persistence is useless.\"";

const LABYRINTH_TRAPS: [(&str, &str, &str); 7] = [
    (
        "DRONE-ECHARPE",
        "a thin drone coils around you. Too fast to be seen.",
        ELIMINATED,
    ),
    (
        "CENTAUR",
        "a two-legged turret unfolds. Its shot is punctuation.",
        ELIMINATED,
    ),
    (
        "MOUCHES",
        "a swarm of micro-drones blackens the air. You don't even have time to scream.",
        "\"Organics love to wriggle. Like insects.\"",
    ),
    (
        "PRISME",
        "a prism of light slices space. And you... too.",
        "\"You wanted a way out? You became a line.\"",
    ),
    (
        "ARCHON",
        "a massive shape rises. Not a robot: a sentence.",
        "\"Courage: admirable. Usefulness: none.\"",
    ),
    (
        "ORACLE",
        "a voice predicts you. Then deletes you for being right.",
        "\"Prediction: you lose. Confirmation: deleted.\"",
    ),
    (
        "FROST",
        "an icy breath stops your blood. Clean. Efficient.",
        ELIMINATED,
    ),
];

/// The safe path is `N, E, N, E, N, N, E`; every other exit is a trap.
fn labyrinth(graph: &mut RoomGraph) -> SubMap {
    let path: Vec<RoomId> = LABYRINTH_ROOMS
        .iter()
        .map(|(name, description)| graph.add_room(Room::new(*name, *description)))
        .collect();
    let traps: Vec<Trap> = LABYRINTH_TRAPS
        .iter()
        .map(|(killer, description, line)| Trap {
            room: graph.add_room(Room::new(format!("Trap - {killer}"), *description)),
            killer,
            line,
        })
        .collect();

    let safe = [North, East, North, East, North, North, East];
    for (step, direction) in safe.into_iter().enumerate() {
        let wrong = if direction == North { East } else { North };
        graph.connect(path[step], direction, path[step + 1]);
        graph.connect(path[step], wrong, traps[step].room);
    }

    SubMap {
        entry: path[0],
        exit: path[path.len() - 1],
        traps,
    }
}

/// Three rooms with dead ends and loops back to the start. No traps.
fn conduits(graph: &mut RoomGraph) -> SubMap {
    let start = graph.add_room(Room::new(
        "Intratemporal Conduit",
        "in a conduit where the light smears. Seconds stretch like hot metal.",
    ));
    let junction = graph.add_room(Room::new(
        "Phased Junction",
        "in a junction where the air is cold on the left, lukewarm on the right. \
         Argos whispers: \"Observe.\"",
    ));
    let rings = graph.add_room(Room::new(
        "Ring Hall",
        "in a hall where the three rings wait... as if they recognized your fragments.",
    ));

    graph.connect(start, North, junction);
    graph.dead_end(start, East);
    graph.dead_end(start, West);
    graph.dead_end(start, South);
    graph.connect(junction, South, start);
    graph.connect(junction, North, rings);
    graph.connect(junction, East, start);
    graph.connect(junction, West, start);
    graph.connect(rings, South, junction);

    SubMap {
        entry: start,
        exit: rings,
        traps: Vec::new(),
    }
}

fn chapter_two(graph: &mut RoomGraph) -> (RoomId, RoomId) {
    let spawn = graph.add_room(Room::new(
        "Verdun - Arrival Trench (1916)",
        "in a muddy trench. Explosions shake the earth.\n\
         Time feels... uneven, as if some seconds refused to move on.",
    ));
    let post = graph.add_room(
        Room::new(
            "Liaison Post",
            "in a shelter full of smoke. Maps, messages, stained orders.\n\
             A sergeant stares at you: \"You. You run. Now.\"",
        )
        .with_item(Item::new(
            "Envelope_Orders",
            "Sealed envelope, transmission order",
            1,
        ))
        .with_character(Character::generic(
            "Sergeant",
            "Mud to the knees, eyes that stopped sleeping long ago.",
            [
                "SERGEANT: \"The orders. Get them to the front before the next barrage.\"",
                "SERGEANT: \"Don't look at the sky. Look at your feet and run.\"",
                "SERGEANT: \"Strange... I could swear I've already seen you die here.\"",
            ],
        )),
    );
    let no_mans_land = graph.add_room(Room::new(
        "No Man's Land",
        "between two worlds. Barbed wire, craters, distant cries.\n\
         Every step is a bet, and yet something guides you.",
    ));
    let crater = graph.add_room(
        Room::new(
            "Silent Crater",
            "in a crater where the air is strangely cold, almost neutral.\n\
             The same cold as in the Teleportation Bay... impossible.",
        )
        .with_item(Item::new(
            "Shard_Helias",
            "Micro-fragment of Helias, time slows around it",
            1,
        )),
    );
    let village = graph.add_room(Room::new(
        "Village Ruins",
        "in crushed ruins. A cracked bell hangs, motionless.\n\
         You feel the Helias pulling on time, here more than anywhere.",
    ));
    let extraction = graph.add_room(Room::new(
        "Temporal Extraction Point",
        "before a pale glow, like an incomplete ring searching for its shape.\n\
         You understand: your passage leaves a trace.",
    ));

    graph.connect(spawn, East, post);
    graph.connect(spawn, North, no_mans_land);
    graph.connect(post, West, spawn);
    graph.connect(post, North, village);
    graph.connect(no_mans_land, South, spawn);
    graph.connect(no_mans_land, East, crater);
    graph.connect(crater, West, no_mans_land);
    graph.connect(crater, North, extraction);
    graph.connect(village, South, post);
    graph.connect(village, East, extraction);

    (spawn, extraction)
}

fn chapter_three(graph: &mut RoomGraph) -> (RoomId, RoomId) {
    let hq = graph.add_room(
        Room::new(
            "Barbarossa - Forward HQ (1941)",
            "in a makeshift command post. Radios, maps, hurried voices.\n\
             You quickly understand: here, you survive not by being brave... but by deciding fast.",
        )
        .with_character(Character::generic(
            "Officer",
            "A tired officer who speaks to you as if you had always been expected.",
            [
                "OFFICER: \"We are out of time. Give the order.\"",
                "OFFICER: \"The radio picks up things that shouldn't exist yet.\"",
            ],
        )),
    );
    let map_table = graph.add_room(Room::new(
        "Map Table",
        "before a huge map. Pawns, arrows, lines of attack.\n\
         They are waiting for your order. Without knowing who you are... or where you come from.",
    ));
    let front = graph.add_room(Room::new(
        "Front Line",
        "on ground ploughed by tracks. A dry cold bites the skin.\n\
         Time crackles now and then, like a worn tape.",
    ));
    let farm = graph.add_room(Room::new(
        "Abandoned Farm",
        "in an empty farm. Signs of life... then nothing.\n\
         A radio picks up a strange signal: too clean for 1941.",
    ));
    let bunker = graph.add_room(
        Room::new(
            "Communications Bunker",
            "in a bunker. On the wall, an unknown box, not from this era.\n\
             You recognize it: a relay interface... close to the ATLAS signature.",
        )
        .with_item(Item::new(
            "Relay_Core",
            "Relay core, can trap a signal in time",
            2,
        )),
    );
    let portal = graph.add_room(Room::new(
        "Convergence Portal",
        "before an unstable white halo. As if the Helias were forcing a return.\n\
         Something waits on the other side.",
    ));

    graph.connect(hq, East, map_table);
    graph.connect(hq, North, front);
    graph.connect(map_table, West, hq);
    graph.connect(map_table, East, bunker);
    graph.connect(front, South, hq);
    graph.connect(front, East, farm);
    graph.connect(farm, West, front);
    graph.connect(farm, North, bunker);
    graph.connect(bunker, West, map_table);
    graph.connect(bunker, South, farm);
    graph.connect(bunker, North, portal);

    (hq, portal)
}
