use crate::GameState;
use crate::engine::outcome::Outcome;
use crate::engine::output::Output;
use crate::world;

pub const NO_ITEMS: &str = "There are no items here.";
pub const NO_EXITS: &str = "There are no exits.";

/// Title, description, items, then every exit line in declared order.
/// Locks are not shown; they are discovered by trying the exit.
pub fn render_room(out: &mut Output, room: &world::Room) {
    out.title(room.name.clone());
    out.say(room.desc.trim());

    if room.items.is_empty() {
        out.say(NO_ITEMS);
    } else {
        out.say(format!("You see: {}.", room.items.join(", ")));
    }

    let exit_lines: Vec<&str> = room
        .exits
        .iter()
        .map(|e| e.desc.trim())
        .filter(|d| !d.is_empty())
        .collect();

    if exit_lines.is_empty() {
        out.set_exits(NO_EXITS);
    } else {
        out.set_exits(exit_lines.join("\n"));
    }
}

pub fn handle_look(state: &GameState) -> GameState {
    let mut out = Output::new();
    match state.current() {
        Some(room) => render_room(&mut out, room),
        None => out.say(format!(
            "You are in an unknown room '{}'.",
            state.current_room()
        )),
    }
    state.respond(Outcome::Described, out.into_message())
}
