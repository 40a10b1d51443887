use std::sync::Arc;

use crate::world::{Room, RoomMap};

/// New room table with `room` swapped in. Every other room is shared.
pub fn replace_room(rooms: &RoomMap, room: Room) -> RoomMap {
    let mut table = (**rooms).clone();
    table.insert(room.id.clone(), Arc::new(room));
    Arc::new(table)
}

/// Lowercase and collapse whitespace so "Ski   Mask" matches "ski mask".
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn item_in_inventory(item: &str, inventory: &[String]) -> bool {
    inventory.iter().any(|i| i == item)
}
