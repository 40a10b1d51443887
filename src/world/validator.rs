use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use super::model::{Requirement, World};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Authoring checks for a world. The engine never runs these; the loader does.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    if !world.rooms.contains_key(&world.win_room) {
        errors.push(ValidationError::new(format!(
            "win_room '{}' not found among rooms",
            world.win_room
        )));
    }

    // Sorted so reports are stable across runs
    let mut room_ids: Vec<&String> = world.rooms.keys().collect();
    room_ids.sort();

    let mut item_homes: HashMap<&str, &str> = HashMap::new();

    for room_id in &room_ids {
        let room = &world.rooms[*room_id];

        let mut seen_dirs = HashSet::new();
        for exit in &room.exits {
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }
            if !seen_dirs.insert(exit.direction) {
                errors.push(ValidationError::new(format!(
                    "room '{}' has more than one exit '{}'",
                    room_id, exit.direction
                )));
            }
            match &exit.requirement {
                Requirement::None => {}
                Requirement::Single(item) => {
                    if item.trim().is_empty() {
                        errors.push(ValidationError::new(format!(
                            "room '{}' exit '{}' requires an empty item name",
                            room_id, exit.direction
                        )));
                    }
                }
                Requirement::All(items) => {
                    if items.is_empty() {
                        errors.push(ValidationError::new(format!(
                            "room '{}' exit '{}' has an empty requirement list",
                            room_id, exit.direction
                        )));
                    }
                    if items.iter().any(|i| i.trim().is_empty()) {
                        errors.push(ValidationError::new(format!(
                            "room '{}' exit '{}' requires an empty item name",
                            room_id, exit.direction
                        )));
                    }
                }
            }
        }

        for item in &room.items {
            if item.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an empty item name",
                    room_id
                )));
                continue;
            }
            if let Some(first) = item_homes.insert(item.as_str(), room_id.as_str()) {
                errors.push(ValidationError::new(format!(
                    "item '{}' placed more than once (rooms '{}' and '{}')",
                    item, first, room_id
                )));
            }
        }
    }

    if world.rooms.contains_key(&world.start_room)
        && world.rooms.contains_key(&world.win_room)
        && !reachable(world, &world.start_room, &world.win_room)
    {
        errors.push(ValidationError::new(format!(
            "win_room '{}' is unreachable from start_room '{}'",
            world.win_room, world.start_room
        )));
    }

    errors
}

/// Breadth-first search over exits, ignoring gates.
fn reachable(world: &World, from: &str, to: &str) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    seen.insert(from);
    queue.push_back(from);

    while let Some(id) = queue.pop_front() {
        if id == to {
            return true;
        }
        let Some(room) = world.rooms.get(id) else {
            continue;
        };
        for exit in &room.exits {
            if seen.insert(exit.target.as_str()) {
                queue.push_back(exit.target.as_str());
            }
        }
    }

    false
}
