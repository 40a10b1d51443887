use log::debug;

use crate::GameState;
use crate::engine::{
    GAME_OVER, NO_EXIT, Outcome, handle_drop, handle_inventory, handle_look, handle_move,
    handle_take,
};
use crate::world::Direction;

pub const HELP: &str = "Commands:
  look (l)               describe where you are
  inventory (i)          list what you are carrying
  take <item> (get)      pick something up
  drop <item>            put something down
  go <direction> (move)  walk north, south, east, west, up or down
  n, s, e, w, u, d       shorthand for go
  help                   show this text
  quit (exit)            give up";

pub const FAREWELL: &str = "Goodbye.";
pub const EMPTY_INPUT: &str = "Please enter a command.";
pub const UNKNOWN: &str = "I don't understand that command.";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    Inventory,
    Take(String),
    Drop(String),
    Go(Direction),
    Help,
    Quit,
    Empty,
    /// A verb that needs an argument arrived without one; holds the prompt.
    MissingArgument(&'static str),
    /// A verb that takes no argument arrived with one; holds the verb.
    ExtraArgument(String),
    /// `go` followed by something that is not a direction.
    BadDirection(String),
    Unknown(String),
}

impl Command {
    /// Tokenize case-insensitively on whitespace. Item names are the
    /// remaining tokens joined with single spaces.
    pub fn parse(line: &str) -> Command {
        let lower = line.to_lowercase();
        let mut words = lower.split_whitespace();

        let Some(verb) = words.next() else {
            return Command::Empty;
        };
        let rest = words.collect::<Vec<&str>>().join(" ");

        match verb {
            "look" | "l" => no_argument(verb, &rest, Command::Look),
            "inventory" | "i" => no_argument(verb, &rest, Command::Inventory),
            "take" | "get" => {
                if rest.is_empty() {
                    Command::MissingArgument("Take what?")
                } else {
                    Command::Take(rest)
                }
            }
            "drop" => {
                if rest.is_empty() {
                    Command::MissingArgument("Drop what?")
                } else {
                    Command::Drop(rest)
                }
            }
            "go" | "move" => {
                if rest.is_empty() {
                    Command::MissingArgument("Go where?")
                } else if rest.contains(' ') {
                    Command::ExtraArgument(verb.to_string())
                } else {
                    match Direction::parse(&rest) {
                        Some(d) => Command::Go(d),
                        None => Command::BadDirection(rest),
                    }
                }
            }
            "help" => no_argument(verb, &rest, Command::Help),
            "quit" | "exit" => no_argument(verb, &rest, Command::Quit),
            other => match Direction::parse(other) {
                Some(d) => no_argument(other, &rest, Command::Go(d)),
                None => Command::Unknown(other.to_string()),
            },
        }
    }
}

fn no_argument(verb: &str, rest: &str, command: Command) -> Command {
    if rest.is_empty() {
        command
    } else {
        Command::ExtraArgument(verb.to_string())
    }
}

/// Apply a parsed command. Every path yields a renderable state.
pub fn apply(state: &GameState, command: Command) -> GameState {
    if state.is_game_over() {
        return state.respond(Outcome::GameOver, GAME_OVER);
    }

    debug!("applying {:?} in '{}'", command, state.current_room());

    let next = match command {
        Command::Look => handle_look(state),
        Command::Inventory => handle_inventory(state),
        Command::Take(item) => handle_take(state, &item),
        Command::Drop(item) => handle_drop(state, &item),
        Command::Go(direction) => handle_move(state, direction),
        Command::Help => state.respond(Outcome::Help, HELP),
        Command::Quit => GameState {
            game_over: true,
            ..state.respond(Outcome::Quit, FAREWELL)
        },
        Command::Empty => state.respond(Outcome::Empty, EMPTY_INPUT),
        Command::MissingArgument(prompt) => state.respond(Outcome::MissingArgument, prompt),
        Command::ExtraArgument(verb) => state.respond(
            Outcome::ExtraArgument,
            format!("'{}' doesn't take anything after it.", verb),
        ),
        Command::BadDirection(word) => {
            debug!("'{}' is not a direction", word);
            state.respond(Outcome::NoSuchExit, NO_EXIT)
        }
        Command::Unknown(_) => state.respond(Outcome::UnknownVerb, UNKNOWN),
    };

    debug!("-> {:?}, now in '{}'", next.outcome(), next.current_room());
    next
}

/// The single entry point for a session driver: one raw line in, one new state out.
pub fn interpret(state: &GameState, line: &str) -> GameState {
    apply(state, Command::parse(line))
}
