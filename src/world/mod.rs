mod bank;
mod loader;
mod model;
mod validator;

pub use bank::bank_heist;
pub use loader::{WorldError, load_world_from_file, load_world_from_str};

pub use model::{Direction, Exit, Requirement, Room, RoomMap, World};
pub use validator::{ValidationError, validate_world};
