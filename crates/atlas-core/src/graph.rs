use std::ops::{Index, IndexMut};

use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::room::{Room, RoomId};

/// Arena owning every room of every chapter and sub-map.
///
/// Rooms are never removed, so a [`RoomId`] handed out by a graph stays valid
/// for the lifetime of that graph. Indexing with an id from another graph
/// panics like any out-of-bounds slice access.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its id.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the graph has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Look up a room.
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Look up a room for mutation.
    pub fn get_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// All room ids, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len()).map(RoomId)
    }

    /// Set a one-way exit `from --direction--> to`.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) {
        self[from].set_exit(direction, Some(to));
    }

    /// Declare a direction from `from` that leads nowhere.
    pub fn dead_end(&mut self, from: RoomId, direction: Direction) {
        self[from].set_exit(direction, None);
    }

    /// Where going `direction` from `from` leads.
    pub fn get_exit(&self, from: RoomId, direction: Direction) -> Option<RoomId> {
        self.get(from).and_then(|room| room.get_exit(direction))
    }

    /// Normalize `word` to a direction that is a real exit of `from`.
    ///
    /// Synonyms are only accepted for directions the room actually offers:
    /// `NORD` resolves iff `N` leads somewhere.
    pub fn resolve_direction(&self, from: RoomId, word: &str) -> Option<Direction> {
        let direction = Direction::parse(word)?;
        self.get_exit(from, direction).map(|_| direction)
    }

    /// Find the first room with this exact name.
    pub fn find_by_name(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.name == name).map(RoomId)
    }

    /// Like [`find_by_name`](Self::find_by_name), failing on unknown names.
    pub fn require(&self, name: &str) -> CoreResult<RoomId> {
        self.find_by_name(name)
            .ok_or_else(|| CoreError::UnknownRoom(name.to_string()))
    }

    /// Mark a room as visited.
    pub fn mark_visited(&mut self, id: RoomId) {
        if let Some(room) = self.get_mut(id) {
            room.visited = true;
        }
    }
}

impl Index<RoomId> for RoomGraph {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }
}

impl IndexMut<RoomId> for RoomGraph {
    fn index_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> (RoomGraph, RoomId, RoomId) {
        let mut graph = RoomGraph::new();
        let a = graph.add_room(Room::new("A", "in A."));
        let b = graph.add_room(Room::new("B", "in B."));
        (graph, a, b)
    }

    #[test]
    fn connect_is_one_way() {
        let (mut graph, a, b) = two_rooms();
        graph.connect(a, Direction::North, b);
        assert_eq!(graph.get_exit(a, Direction::North), Some(b));
        assert_eq!(graph.get_exit(b, Direction::South), None);
    }

    #[test]
    fn exits_can_be_added_later() {
        let (mut graph, a, b) = two_rooms();
        assert_eq!(graph.get_exit(a, Direction::East), None);
        graph.connect(a, Direction::East, b);
        assert_eq!(graph.get_exit(a, Direction::East), Some(b));
    }

    #[test]
    fn dead_end_is_not_an_exit() {
        let (mut graph, a, _) = two_rooms();
        graph.dead_end(a, Direction::West);
        assert_eq!(graph.get_exit(a, Direction::West), None);
        assert!(graph[a].available_exits().is_empty());
    }

    #[test]
    fn resolve_direction_is_topology_gated() {
        let (mut graph, a, b) = two_rooms();
        graph.connect(a, Direction::North, b);
        graph.dead_end(a, Direction::East);

        assert_eq!(graph.resolve_direction(a, "nord"), Some(Direction::North));
        assert_eq!(graph.resolve_direction(a, "N"), Some(Direction::North));
        assert_eq!(graph.resolve_direction(a, "est"), None);
        assert_eq!(graph.resolve_direction(a, "sud"), None);
        assert_eq!(graph.resolve_direction(a, "sideways"), None);
    }

    #[test]
    fn find_by_name() {
        let (graph, a, b) = two_rooms();
        assert_eq!(graph.find_by_name("A"), Some(a));
        assert_eq!(graph.require("B").unwrap(), b);
        assert!(matches!(graph.require("C"), Err(CoreError::UnknownRoom(_))));
    }

    #[test]
    fn ids_and_visited() {
        let (mut graph, a, b) = two_rooms();
        assert_eq!(graph.ids().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(graph.len(), 2);
        assert!(!graph[b].visited);
        graph.mark_visited(b);
        assert!(graph[b].visited);
    }
}
