//! Property-based tests for core game types.
use atlas_core::{Direction, Player, Quest, Room, RoomGraph, RoomId};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// A graph of `n` rooms with arbitrary one-way exits, some of them declared
/// without a destination.
fn graph_with_edges(
    n: usize,
    edges: &[(usize, Direction, Option<usize>)],
) -> (RoomGraph, Vec<RoomId>) {
    let mut graph = RoomGraph::new();
    let ids: Vec<RoomId> = (0..n)
        .map(|i| graph.add_room(Room::new(format!("R{i}"), "in a test room.")))
        .collect();
    for &(from, dir, to) in edges {
        match to {
            Some(to) => graph.connect(ids[from % n], dir, ids[to % n]),
            None => graph.dead_end(ids[from % n], dir),
        }
    }
    (graph, ids)
}

fn edges() -> impl Strategy<Value = Vec<(usize, Direction, Option<usize>)>> {
    prop::collection::vec((0..6usize, direction(), prop::option::of(0..6usize)), 0..24)
}

proptest! {
    #[test]
    fn exit_present_iff_last_set_to_destination(edges in edges()) {
        let (graph, ids) = graph_with_edges(6, &edges);
        for (i, id) in ids.iter().enumerate() {
            for dir in Direction::ALL {
                let last = edges
                    .iter()
                    .rev()
                    .find(|(from, d, _)| from % 6 == i && *d == dir)
                    .and_then(|(_, _, to)| to.map(|t| ids[t % 6]));
                prop_assert_eq!(graph.get_exit(*id, dir), last);
            }
        }
    }

    #[test]
    fn go_back_retraces_every_move(edges in edges(), moves in prop::collection::vec(direction(), 0..32)) {
        let (mut graph, ids) = graph_with_edges(6, &edges);
        let mut player = Player::new("Prop", ids[0]);
        let mut visited = vec![player.current_room()];

        for dir in moves {
            if let Some(next) = player.go(dir, &mut graph) {
                visited.push(next);
            }
        }

        while visited.len() > 1 {
            visited.pop();
            let back = player.go_back(&mut graph);
            prop_assert_eq!(back, visited.last().copied());
        }
        let here = player.current_room();
        prop_assert_eq!(player.go_back(&mut graph), None);
        prop_assert_eq!(player.current_room(), here);
    }

    #[test]
    fn synonyms_accepted_only_for_real_exits(edges in edges(), word in prop::sample::select(vec![
        "N", "NORD", "north", "S", "sud", "E", "est", "O", "ouest", "w", "U", "haut", "up", "D", "bas", "down", "x", "left",
    ])) {
        let (graph, ids) = graph_with_edges(6, &edges);
        for id in ids {
            let resolved = graph.resolve_direction(id, word);
            match Direction::parse(word) {
                Some(dir) => prop_assert_eq!(resolved.is_some(), graph.get_exit(id, dir).is_some()),
                None => prop_assert_eq!(resolved, None),
            }
        }
    }

    #[test]
    fn objective_completion_is_idempotent(order in prop::collection::vec(0..5usize, 0..20)) {
        let names = ["a", "b", "c", "d", "e"];
        let mut quest = Quest::new("q", "Q", "test")
            .with_objective("a")
            .with_objective("b")
            .with_objective("c");
        quest.activate();

        let mut seen = std::collections::BTreeSet::new();
        for i in order {
            let name = names[i];
            let changed = quest.complete_objective(name);
            let expected = i < 3 && !seen.contains(name);
            prop_assert_eq!(changed, expected);
            if expected {
                seen.insert(name);
            }
            let (done, total) = quest.progress();
            prop_assert!(done <= total);
            prop_assert_eq!(quest.is_completed(), done == total);
            prop_assert!(!(quest.is_completed() && quest.is_active()));
        }
    }
}
