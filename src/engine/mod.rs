mod helpers;
mod items;
mod movement;
mod outcome;
mod output;
mod render;

pub use items::{EMPTY_INVENTORY, NOT_CARRIED, handle_drop, handle_inventory, handle_take};

pub use movement::{GAME_OVER, NO_EXIT, UNLOCKED, VICTORY, handle_move};
pub use outcome::Outcome;
pub use render::{NO_ITEMS, handle_look};
