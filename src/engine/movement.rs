use log::{debug, info};

use crate::GameState;
use crate::engine::outcome::Outcome;
use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::world;

pub const NO_EXIT: &str = "You can't go that way.";
pub const UNLOCKED: &str = "You unlock the door.";
pub const VICTORY: &str = "You crack the vault and slip away with the loot. You win!";
pub const GAME_OVER: &str = "The game is over.";

/// Follow the first exit leading in `direction`.
///
/// A directed edge that has been unlocked once stays open: the unlock record
/// is consulted before the requirement, whatever the player now carries.
pub fn handle_move(state: &GameState, direction: world::Direction) -> GameState {
    if state.is_game_over() {
        return state.respond(Outcome::GameOver, GAME_OVER);
    }

    let Some(room) = state.current() else {
        return state.respond(
            Outcome::NoSuchExit,
            format!("You are in an unknown room '{}'.", state.current_room()),
        );
    };

    let Some(exit) = room.exit(direction) else {
        return state.respond(Outcome::NoSuchExit, NO_EXIT);
    };

    let Some(target) = state.room(&exit.target) else {
        return state.respond(
            Outcome::NoSuchExit,
            format!(
                "You try to go {}, but something feels wrong (room not found).",
                direction
            ),
        );
    };

    let mut out = Output::new();
    let mut unlocked_exits = state.unlocked_exits().to_vec();

    if !state.is_unlocked(&room.id, &exit.target) {
        if !exit.requirement.is_met(state.inventory()) {
            debug!(
                "exit {} from '{}' locked, missing {:?}",
                direction,
                room.id,
                exit.requirement.missing(state.inventory())
            );
            return state.respond(Outcome::ExitLocked, locked_text(exit));
        }

        if exit.requirement.is_gated() {
            info!("unlocked '{}' -> '{}'", room.id, exit.target);
            unlocked_exits.push((room.id.clone(), exit.target.clone()));
            out.say(UNLOCKED);
        }
    }

    out.say(format!("You move {}.", direction));
    render_room(&mut out, target);

    let won = target.id == state.win_room;
    if won {
        info!("player reached win room '{}'", target.id);
        out.event(VICTORY);
    }

    let outcome = if won { Outcome::Won } else { Outcome::Moved };

    GameState {
        current_room: target.id.clone(),
        unlocked_exits,
        game_over: won,
        ..state.respond(outcome, out.into_message())
    }
}

fn locked_text(exit: &world::Exit) -> String {
    let text = exit.locked_text.trim();
    if text.is_empty() {
        format!("The way {} is locked.", exit.direction)
    } else {
        text.to_string()
    }
}
