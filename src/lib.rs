pub mod command;
pub mod engine;
pub mod world;

use engine::{Outcome, handle_look};
use world::{Room, RoomMap, World};

pub use command::{Command, apply, interpret};
pub use world::{bank_heist, load_world_from_file, load_world_from_str};

/// Complete snapshot of a game in progress.
///
/// Transitions never modify a state; they build a new one. The room table is
/// shared between snapshots and only the rooms an item moved through are
/// replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    current_room: String,
    inventory: Vec<String>,
    rooms: RoomMap,
    win_room: String,
    /// Directed `(from, to)` edges opened at least once. Never shrinks.
    unlocked_exits: Vec<(String, String)>,
    game_over: bool,
    message: String,
    outcome: Outcome,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        message: String,
        game_over: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Start the built-in world.
        #[wasm_bindgen(constructor)]
        pub fn new() -> WasmGame {
            WasmGame { state: new_game() }
        }

        /// Start a game from a TOML world string.
        #[wasm_bindgen(js_name = fromToml)]
        pub fn from_toml(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world =
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state: GameState::new(world),
            })
        }

        /// Current message and game-over flag, without advancing.
        #[wasm_bindgen]
        pub fn current(&self) -> JsValue {
            self.result()
        }

        /// Process a player command and return the resulting message and game-over flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            self.state = interpret(&self.state, input);
            self.result()
        }
    }

    impl WasmGame {
        fn result(&self) -> JsValue {
            to_value(&WasmStepResult {
                message: self.state.message().to_string(),
                game_over: self.state.is_game_over(),
            })
            .unwrap_or(JsValue::NULL)
        }
    }

    impl Default for WasmGame {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// Fresh game in the built-in bank world.
pub fn new_game() -> GameState {
    GameState::new(world::bank_heist())
}

impl GameState {
    /// Starting state for `world`; the message describes the start room.
    pub fn new(world: World) -> Self {
        let state = GameState {
            current_room: world.start_room,
            inventory: Vec::new(),
            rooms: world.rooms,
            win_room: world.win_room,
            unlocked_exits: Vec::new(),
            game_over: false,
            message: String::new(),
            outcome: Outcome::Described,
        };
        handle_look(&state)
    }

    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    pub fn current(&self) -> Option<&Room> {
        self.room(&self.current_room)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id).map(|r| r.as_ref())
    }

    pub fn rooms(&self) -> &RoomMap {
        &self.rooms
    }

    /// Held items, most recently taken first.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn unlocked_exits(&self) -> &[(String, String)] {
        &self.unlocked_exits
    }

    pub fn is_unlocked(&self, from: &str, to: &str) -> bool {
        self.unlocked_exits
            .iter()
            .any(|(f, t)| f == from && t == to)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Copy of this state carrying a new message and outcome.
    pub(crate) fn respond(&self, outcome: Outcome, message: impl Into<String>) -> GameState {
        GameState {
            message: message.into(),
            outcome,
            ..self.clone()
        }
    }
}
