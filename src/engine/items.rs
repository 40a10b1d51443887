use log::debug;

use crate::GameState;
use crate::engine::helpers::{item_in_inventory, normalize_name, replace_room};
use crate::engine::outcome::Outcome;

pub const EMPTY_INVENTORY: &str = "You are not carrying anything.";
pub const NOT_CARRIED: &str = "You don't have that.";

pub fn handle_inventory(state: &GameState) -> GameState {
    let message = if state.inventory().is_empty() {
        EMPTY_INVENTORY.to_string()
    } else {
        format!("You are carrying: {}.", state.inventory().join(", "))
    };
    state.respond(Outcome::Inventory, message)
}

/// Move an item from the current room to the front of the inventory.
pub fn handle_take(state: &GameState, item_name: &str) -> GameState {
    let item = normalize_name(item_name);
    if item.is_empty() {
        return state.respond(Outcome::MissingArgument, "Take what?");
    }

    let room = match state.current() {
        Some(room) if room.has_item(&item) => room,
        _ => {
            return state.respond(Outcome::ItemNotInRoom, format!("There is no {} here.", item));
        }
    };

    let rooms = replace_room(state.rooms(), room.without_item(&item));

    let mut inventory = Vec::with_capacity(state.inventory().len() + 1);
    inventory.push(item.clone());
    inventory.extend(state.inventory().iter().filter(|i| **i != item).cloned());

    debug!("took '{}' from '{}'", item, room.id);

    GameState {
        rooms,
        inventory,
        ..state.respond(Outcome::Took, format!("You pick up the {}.", item))
    }
}

/// Move a held item into the current room.
pub fn handle_drop(state: &GameState, item_name: &str) -> GameState {
    let item = normalize_name(item_name);
    if item.is_empty() {
        return state.respond(Outcome::MissingArgument, "Drop what?");
    }

    if !item_in_inventory(&item, state.inventory()) {
        return state.respond(Outcome::ItemNotInInventory, NOT_CARRIED);
    }

    let Some(room) = state.current() else {
        return state.respond(
            Outcome::ItemNotInInventory,
            "There is nowhere to put it down.",
        );
    };

    let rooms = replace_room(state.rooms(), room.with_item(&item));
    let inventory = state
        .inventory()
        .iter()
        .filter(|i| **i != item)
        .cloned()
        .collect();

    debug!("dropped '{}' in '{}'", item, room.id);

    GameState {
        rooms,
        inventory,
        ..state.respond(Outcome::Dropped, format!("You drop the {}.", item))
    }
}
