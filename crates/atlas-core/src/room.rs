use std::collections::BTreeMap;
use std::fmt;

use crate::character::Character;
use crate::direction::Direction;
use crate::item::Item;

/// Index of a room inside its [`RoomGraph`](crate::RoomGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A location in the room graph.
///
/// An exit may be declared without a destination; such an exit is not
/// usable and is not listed. Exits need not be symmetric.
#[derive(Debug, Clone)]
pub struct Room {
    /// Room name, also used to look up room art.
    pub name: String,
    /// Description, written to follow "You are ".
    pub description: String,
    /// Whether the player has stood here.
    pub visited: bool,
    exits: BTreeMap<Direction, Option<RoomId>>,
    items: Vec<Item>,
    characters: Vec<Character>,
}

impl Room {
    /// Create an empty, unvisited room with no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            visited: false,
            exits: BTreeMap::new(),
            items: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// Builder: place an item in the room.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Builder: place a character in the room.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// The room reached by going `direction`, if that exit leads somewhere.
    pub fn get_exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied().flatten()
    }

    /// Set or clear an exit. `None` declares the direction as a dead end.
    pub fn set_exit(&mut self, direction: Direction, destination: Option<RoomId>) {
        self.exits.insert(direction, destination);
    }

    /// Directions that lead somewhere, in listing order.
    pub fn available_exits(&self) -> Vec<Direction> {
        self.exits
            .iter()
            .filter_map(|(dir, dest)| dest.map(|_| *dir))
            .collect()
    }

    /// `Exits: N, S` line.
    pub fn exit_string(&self) -> String {
        let codes: Vec<&str> = self.available_exits().into_iter().map(Direction::code).collect();
        format!("Exits: {}", codes.join(", "))
    }

    /// Full description with the exit line.
    pub fn long_description(&self) -> String {
        format!("You are {}\n\n{}", self.description, self.exit_string())
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Items lying here, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|it| it.matches(name))
    }

    /// Put an item down here.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove an item by name and hand it over.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|it| it.matches(name))?;
        Some(self.items.remove(pos))
    }

    /// Listing of the items, or `None` when the room is empty.
    pub fn item_listing(&self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let mut out = String::from("You can see:");
        for item in &self.items {
            out.push_str(&format!("\n    - {item}"));
        }
        Some(out)
    }

    // -----------------------------------------------------------------------
    // Characters
    // -----------------------------------------------------------------------

    /// Characters present, alive or not.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Find a character by name.
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.matches(name))
    }

    /// Find a character by name for mutation.
    pub fn character_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.matches(name))
    }

    /// Add a character unless one with the same name is already here.
    pub fn add_character(&mut self, character: Character) {
        if self.character(&character.name).is_none() {
            self.characters.push(character);
        }
    }

    /// Listing of the characters, or `None` when nobody is here.
    pub fn character_listing(&self) -> Option<String> {
        if self.characters.is_empty() {
            return None;
        }
        let mut out = String::from("Present here:");
        for c in &self.characters {
            let state = if c.alive { "" } else { " (dead)" };
            out.push_str(&format!("\n    - {}{state}", c.describe()));
        }
        Some(out)
    }
}
