use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Direction, Exit, Requirement, Room, World};
use super::validator::{ValidationError, validate_world};

/// Errors raised while loading a world file.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    #[error("{} validation error(s), first: {}", .0.len(), first_message(.0))]
    Invalid(Vec<ValidationError>),
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("")
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: String,
    win_room: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: Direction,
    target: String,
    #[serde(default)]
    requires: Option<RequiresConfig>,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    locked_text: String,
}

/// `requires = "key"` or `requires = ["code", "key"]`
#[derive(Deserialize)]
#[serde(untagged)]
enum RequiresConfig {
    One(String),
    Many(Vec<String>),
}

impl From<Option<RequiresConfig>> for Requirement {
    fn from(cfg: Option<RequiresConfig>) -> Self {
        match cfg {
            None => Requirement::None,
            Some(RequiresConfig::One(item)) => Requirement::Single(normalize_item_name(&item)),
            Some(RequiresConfig::Many(items)) => {
                Requirement::All(items.iter().map(|i| normalize_item_name(i)).collect())
            }
        }
    }
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    debug!("loading world file {}", path.display());
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Parse and validate a world from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let mut rooms: HashMap<String, Arc<Room>> = HashMap::new();

    for room_cfg in world_file.room {
        if rooms.contains_key(&room_cfg.id) {
            return Err(WorldError::DuplicateRoom(room_cfg.id));
        }

        let exits = room_cfg
            .exit
            .into_iter()
            .map(|e| Exit {
                direction: e.direction,
                target: e.target,
                requirement: e.requires.into(),
                desc: normalize_multiline_desc(&e.desc),
                locked_text: normalize_multiline_desc(&e.locked_text),
            })
            .collect();

        rooms.insert(
            room_cfg.id.clone(),
            Arc::new(Room {
                id: room_cfg.id,
                name: room_cfg.name,
                desc: normalize_multiline_desc(&room_cfg.desc),
                items: room_cfg
                    .items
                    .iter()
                    .map(|i| normalize_item_name(i))
                    .collect(),
                exits,
            }),
        );
    }

    let world = World {
        id: world_file.world.id,
        name: world_file.world.name,
        desc: normalize_multiline_desc(&world_file.world.desc),
        start_room: world_file.world.start_room,
        win_room: world_file.world.win_room,
        rooms: Arc::new(rooms),
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        for e in &errors {
            warn!("world '{}': {}", world.id, e);
        }
        return Err(WorldError::Invalid(errors));
    }

    debug!("loaded world '{}' with {} rooms", world.id, world.rooms.len());
    Ok(world)
}

/// Commands are matched case-insensitively, so item names are stored lowercase.
fn normalize_item_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Collapse TOML multi-line text: a single newline wraps into a space,
/// one blank line is a newline, two or more are a paragraph break.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !first_text_seen {
            result.push_str(trimmed);
            first_text_seen = true;
        } else {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
            result.push_str(trimmed);
        }

        pending_blank_lines = 0;
    }

    result
}
