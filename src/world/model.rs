use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Room table shared between game states.
///
/// Rooms sit behind their own `Arc` so that replacing one room only copies
/// the table of pointers; every untouched room is shared with the previous
/// state.
pub type RoomMap = Arc<HashMap<String, Arc<Room>>>;

/// Static world: topology plus starting item placement.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub start_room: String,
    pub win_room: String,
    pub rooms: RoomMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub items: Vec<String>,
    pub exits: Vec<Exit>,
}

impl Room {
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// First exit leading in `direction`. Later duplicates are ignored.
    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }

    /// Copy of this room with `item` removed.
    pub fn without_item(&self, item: &str) -> Room {
        Room {
            items: self.items.iter().filter(|i| *i != item).cloned().collect(),
            ..self.clone()
        }
    }

    /// Copy of this room with `item` appended, unless already present.
    pub fn with_item(&self, item: &str) -> Room {
        let mut room = self.clone();
        if !room.has_item(item) {
            room.items.push(item.to_string());
        }
        room
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exit {
    pub direction: Direction,
    pub target: String,
    pub requirement: Requirement,
    /// Line shown when the room's exits are listed.
    pub desc: String,
    /// Shown when the player tries the exit without the required items.
    pub locked_text: String,
}

/// Items a player must hold to pass through a gated exit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Requirement {
    #[default]
    None,
    Single(String),
    All(Vec<String>),
}

impl Requirement {
    /// All listed items must be held; no requirement is always met.
    pub fn is_met(&self, inventory: &[String]) -> bool {
        self.missing(inventory).is_empty()
    }

    /// Whether passing records an unlock. An empty list gates nothing.
    pub fn is_gated(&self) -> bool {
        match self {
            Requirement::None => false,
            Requirement::Single(_) => true,
            Requirement::All(items) => !items.is_empty(),
        }
    }

    /// Items named here that the player does not hold.
    pub fn missing(&self, inventory: &[String]) -> Vec<&str> {
        let held = |item: &String| inventory.iter().any(|i| i == item);
        match self {
            Requirement::None => Vec::new(),
            Requirement::Single(item) => {
                if held(item) {
                    Vec::new()
                } else {
                    vec![item.as_str()]
                }
            }
            Requirement::All(items) => items
                .iter()
                .filter(|i| !held(*i))
                .map(|i| i.as_str())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Parse a direction word or its one-letter abbreviation, ignoring case.
    pub fn parse(word: &str) -> Option<Direction> {
        let word = word.trim().to_ascii_lowercase();
        Direction::ALL.into_iter().find(|d| {
            let name = d.as_str();
            name == word || (word.len() == 1 && name.starts_with(word.as_str()))
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
