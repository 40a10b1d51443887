use std::collections::HashMap;
use std::sync::Arc;

use super::model::{Direction, Exit, Requirement, Room, World};

const OUTSIDE: &str = "outside";
const ENTRANCE: &str = "entrance";
const LOBBY: &str = "lobby";
const SECURITY: &str = "security";
const OFFICE: &str = "office";
const CORRIDOR: &str = "corridor";
const VAULT: &str = "vault";

fn room(id: &str, name: &str, desc: &str, items: &[&str], exits: Vec<Exit>) -> Room {
    Room {
        id: id.to_string(),
        name: name.to_string(),
        desc: desc.to_string(),
        items: items.iter().map(|i| i.to_string()).collect(),
        exits,
    }
}

fn open(direction: Direction, target: &str, desc: &str) -> Exit {
    Exit {
        direction,
        target: target.to_string(),
        requirement: Requirement::None,
        desc: desc.to_string(),
        locked_text: String::new(),
    }
}

fn gated(
    direction: Direction,
    target: &str,
    requirement: Requirement,
    desc: &str,
    locked_text: &str,
) -> Exit {
    Exit {
        requirement,
        locked_text: locked_text.to_string(),
        ..open(direction, target, desc)
    }
}

/// The built-in world: break into the bank and reach the vault.
pub fn bank_heist() -> World {
    let rooms = vec![
        room(
            OUTSIDE,
            "Outside the Bank",
            "You stand on the pavement across from the First National Bank.\nThe street is empty at this hour, and a lone streetlight flickers.",
            &["ski mask", "lockpick"],
            vec![gated(
                Direction::East,
                ENTRANCE,
                Requirement::All(vec!["ski mask".to_string(), "lockpick".to_string()]),
                "To the east, the bank's front door.",
                "The front door is locked, and the camera above it would see your face. You need a disguise and a way past the lock.",
            )],
        ),
        room(
            ENTRANCE,
            "Bank Entrance",
            "A marble vestibule smelling of floor polish.\nA velvet rope guides the way toward the lobby.",
            &[],
            vec![
                open(Direction::West, OUTSIDE, "To the west, the street."),
                open(Direction::North, LOBBY, "To the north, the main lobby."),
            ],
        ),
        room(
            LOBBY,
            "Main Lobby",
            "Teller windows line the far wall behind thick glass.\nA staircase descends into darkness.",
            &[],
            vec![
                open(Direction::South, ENTRANCE, "To the south, the entrance."),
                open(Direction::East, SECURITY, "To the east, a door marked SECURITY."),
                gated(
                    Direction::North,
                    OFFICE,
                    Requirement::Single("keycard".to_string()),
                    "To the north, the manager's office.",
                    "The office door has a card reader. Its light stays red.",
                ),
                open(Direction::Down, CORRIDOR, "Down the stairs, the basement."),
            ],
        ),
        room(
            SECURITY,
            "Security Room",
            "Banks of monitors show grainy footage of empty hallways.\nThe guard's chair is still warm.",
            &["keycard", "vault code"],
            vec![open(Direction::West, LOBBY, "To the west, the lobby.")],
        ),
        room(
            OFFICE,
            "Manager's Office",
            "A mahogany desk dominates the room.\nFramed certificates hang crooked on the walls.",
            &["vault key"],
            vec![open(Direction::South, LOBBY, "To the south, the lobby.")],
        ),
        room(
            CORRIDOR,
            "Basement Corridor",
            "A narrow concrete corridor hums with fluorescent light.\nAt its end stands a round steel door.",
            &[],
            vec![
                open(Direction::Up, LOBBY, "Up the stairs, the lobby."),
                gated(
                    Direction::East,
                    VAULT,
                    Requirement::All(vec!["vault code".to_string(), "vault key".to_string()]),
                    "To the east, the vault door.",
                    "The vault door needs both a combination and a key.",
                ),
            ],
        ),
        room(
            VAULT,
            "The Vault",
            "Shelves of banknotes and gold bars glitter under the lights.",
            &[],
            vec![open(Direction::West, CORRIDOR, "To the west, the corridor.")],
        ),
    ];

    let rooms: HashMap<String, Arc<Room>> = rooms
        .into_iter()
        .map(|r| (r.id.clone(), Arc::new(r)))
        .collect();

    World {
        id: "bank_heist".to_string(),
        name: "The Bank Job".to_string(),
        desc: "Tonight is the night. Get inside the bank and crack the vault.".to_string(),
        start_room: OUTSIDE.to_string(),
        win_room: VAULT.to_string(),
        rooms: Arc::new(rooms),
    }
}
