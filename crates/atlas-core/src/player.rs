//! The player: a cursor into the room graph plus an inventory.

use crate::direction::Direction;
use crate::graph::RoomGraph;
use crate::item::Item;
use crate::room::RoomId;

/// The player's state.
///
/// The player always stands in exactly one room. Every successful move
/// pushes the room being left onto the history, which `go_back` pops.
#[derive(Debug, Clone)]
pub struct Player {
    /// Name given at startup.
    pub name: String,
    /// Carried items, in pickup order. Duplicates are not checked.
    pub inventory: Vec<Item>,
    current: RoomId,
    history: Vec<RoomId>,
}

impl Player {
    /// Create a player standing in `start`.
    pub fn new(name: impl Into<String>, start: RoomId) -> Self {
        Self {
            name: name.into(),
            inventory: Vec::new(),
            current: start,
            history: Vec::new(),
        }
    }

    /// The room the player stands in.
    pub fn current_room(&self) -> RoomId {
        self.current
    }

    /// Rooms previously occupied, oldest first.
    pub fn history(&self) -> &[RoomId] {
        &self.history
    }

    /// Walk through an exit.
    ///
    /// Returns the new room, or `None` with no side effect when the exit
    /// does not lead anywhere.
    pub fn go(&mut self, direction: Direction, graph: &mut RoomGraph) -> Option<RoomId> {
        let next = graph.get_exit(self.current, direction)?;
        self.history.push(self.current);
        self.current = next;
        graph.mark_visited(next);
        Some(next)
    }

    /// Return to the previous room. `None` with no side effect when the
    /// history is empty.
    pub fn go_back(&mut self, graph: &mut RoomGraph) -> Option<RoomId> {
        let previous = self.history.pop()?;
        self.current = previous;
        graph.mark_visited(previous);
        Some(previous)
    }

    /// Scripted relocation. Does not record the move and forgets the
    /// history, so `back` cannot cross the jump.
    pub fn teleport(&mut self, room: RoomId, graph: &mut RoomGraph) {
        self.history.clear();
        self.current = room;
        graph.mark_visited(room);
    }

    /// Rooms visited so far, as a printable list.
    pub fn history_listing(&self, graph: &RoomGraph) -> String {
        if self.history.is_empty() {
            return "You have not moved yet.".to_string();
        }
        let mut out = String::from("You have already been to:");
        for id in &self.history {
            if let Some(room) = graph.get(*id) {
                out.push_str(&format!("\n    - {}", room.name));
            }
        }
        out
    }

    // -----------------------------------------------------------------------
    // Inventory
    // -----------------------------------------------------------------------

    /// Pick up an item.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Find a carried item by name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|it| it.matches(name))
    }

    /// Whether an item with this name is carried.
    pub fn has_item(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }

    /// Remove a carried item by name.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.inventory.iter().position(|it| it.matches(name))?;
        Some(self.inventory.remove(pos))
    }

    /// Inventory listing.
    pub fn inventory_listing(&self) -> String {
        if self.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut out = String::from("You are carrying:");
        for item in &self.inventory {
            out.push_str(&format!("\n    - {item}"));
        }
        out
    }
}
