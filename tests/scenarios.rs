//! Play-throughs of the built-in bank world through the public entry point.

use heist::engine::{
    EMPTY_INVENTORY, GAME_OVER, NO_EXIT, NOT_CARRIED, Outcome, UNLOCKED, VICTORY, handle_drop,
    handle_look, handle_move, handle_take,
};
use heist::world::Direction;
use heist::{GameState, interpret, new_game};

const FRONT_DOOR_LOCKED: &str = "The front door is locked, and the camera above it would see your face. You need a disguise and a way past the lock.";
const VAULT_LOCKED: &str = "The vault door needs both a combination and a key.";

fn run(state: &GameState, commands: &[&str]) -> GameState {
    commands
        .iter()
        .fold(state.clone(), |s, cmd| interpret(&s, cmd))
}

fn edge(from: &str, to: &str) -> (String, String) {
    (from.to_string(), to.to_string())
}

/// From a fresh game to the basement corridor holding both vault items.
fn at_vault_door() -> GameState {
    run(
        &new_game(),
        &[
            "take ski mask",
            "take lockpick",
            "go east",
            "north",
            "east",
            "take keycard",
            "take vault code",
            "west",
            "north",
            "take vault key",
            "south",
            "down",
        ],
    )
}

#[test]
fn new_game_describes_the_start_room() {
    let state = new_game();
    assert_eq!(state.current_room(), "outside");
    assert!(state.message().contains("== Outside the Bank =="));
    assert!(state.message().contains("You see: ski mask, lockpick."));
    assert!(!state.is_game_over());
    assert!(state.unlocked_exits().is_empty());
}

#[test]
fn inventory_on_fresh_game_is_empty() {
    let state = interpret(&new_game(), "inventory");
    assert_eq!(state.message(), EMPTY_INVENTORY);
    assert_eq!(state.outcome(), Outcome::Inventory);
}

#[test]
fn masked_and_equipped_player_enters_the_bank() {
    let state = run(&new_game(), &["take ski mask", "take lockpick", "go east"]);

    assert_eq!(state.current_room(), "entrance");
    assert!(state.message().contains("Bank Entrance"));
    assert!(state.message().starts_with(UNLOCKED));
    assert!(state.message().contains("You move east."));
    assert_eq!(state.unlocked_exits(), &[edge("outside", "entrance")]);
    assert_eq!(state.outcome(), Outcome::Moved);
}

#[test]
fn front_door_refuses_an_empty_handed_player() {
    let start = new_game();
    let state = interpret(&start, "go east");

    assert_eq!(state.message(), FRONT_DOOR_LOCKED);
    assert_eq!(state.current_room(), "outside");
    assert_eq!(state.outcome(), Outcome::ExitLocked);
    assert_eq!(state.inventory(), start.inventory());
    assert!(state.unlocked_exits().is_empty());
}

#[test]
fn front_door_refuses_partial_credit() {
    let state = run(&new_game(), &["take lockpick", "east"]);
    assert_eq!(state.message(), FRONT_DOOR_LOCKED);
    assert_eq!(state.current_room(), "outside");
}

#[test]
fn unlock_is_permanent_after_dropping_the_keys() {
    let state = run(
        &new_game(),
        &[
            "take ski mask",
            "take lockpick",
            "east",
            "drop ski mask",
            "drop lockpick",
            "west",
        ],
    );
    assert_eq!(state.current_room(), "outside");
    assert!(state.inventory().is_empty());

    let state = interpret(&state, "east");
    assert_eq!(state.current_room(), "entrance");
    assert_eq!(state.outcome(), Outcome::Moved);
    assert!(!state.message().contains(UNLOCKED));
    assert_eq!(state.unlocked_exits(), &[edge("outside", "entrance")]);
}

#[test]
fn unlock_covers_only_the_directed_edge() {
    let state = run(&new_game(), &["take ski mask", "take lockpick", "east"]);
    assert!(state.is_unlocked("outside", "entrance"));
    assert!(!state.is_unlocked("entrance", "outside"));

    // The way back is ungated, so it records nothing.
    let state = interpret(&state, "west");
    assert_eq!(state.unlocked_exits().len(), 1);
}

#[test]
fn vault_needs_both_code_and_key() {
    let ready = at_vault_door();
    assert_eq!(ready.current_room(), "corridor");

    let without_code = run(&ready, &["drop vault code", "east"]);
    assert_eq!(without_code.message(), VAULT_LOCKED);
    assert_eq!(without_code.current_room(), "corridor");
    assert!(!without_code.is_unlocked("corridor", "vault"));

    let without_key = run(&ready, &["drop vault key", "east"]);
    assert_eq!(without_key.message(), VAULT_LOCKED);
    assert!(!without_key.is_unlocked("corridor", "vault"));

    let both = interpret(&ready, "east");
    assert!(both.is_unlocked("corridor", "vault"));
}

#[test]
fn reaching_the_vault_wins() {
    let state = interpret(&at_vault_door(), "go east");

    assert_eq!(state.current_room(), "vault");
    assert!(state.is_game_over());
    assert_eq!(state.outcome(), Outcome::Won);

    let message = state.message();
    let description = message.find("== The Vault ==").expect("vault described");
    let victory = message.find(VICTORY).expect("victory announced");
    assert!(description < victory);
}

#[test]
fn finished_game_ignores_further_moves() {
    let won = interpret(&at_vault_door(), "east");

    let again = handle_move(&won, Direction::West);
    assert_eq!(again.current_room(), "vault");
    assert!(again.is_game_over());
    assert_eq!(again.message(), GAME_OVER);

    let via_interpreter = interpret(&won, "west");
    assert_eq!(via_interpreter.current_room(), "vault");
    assert_eq!(via_interpreter.outcome(), Outcome::GameOver);
    assert_eq!(via_interpreter.unlocked_exits(), won.unlocked_exits());
}

#[test]
fn office_opens_with_the_keycard_alone() {
    let state = run(&new_game(), &["take ski mask", "take lockpick", "e", "n", "n"]);
    assert_eq!(state.current_room(), "lobby");
    assert_eq!(
        state.message(),
        "The office door has a card reader. Its light stays red."
    );

    let state = run(&state, &["e", "take keycard", "w", "n"]);
    assert_eq!(state.current_room(), "office");
    assert!(state.is_unlocked("lobby", "office"));
}

#[test]
fn take_and_drop_move_items_between_room_and_inventory() {
    let start = new_game();

    let taken = handle_take(&start, "lockpick");
    assert_eq!(taken.inventory(), &["lockpick".to_string()]);
    assert!(!taken.current().expect("room").has_item("lockpick"));
    assert_eq!(taken.message(), "You pick up the lockpick.");

    let both = handle_take(&taken, "ski mask");
    assert_eq!(
        both.inventory(),
        &["ski mask".to_string(), "lockpick".to_string()]
    );

    // The earlier state is untouched.
    assert!(start.current().expect("room").has_item("lockpick"));
    assert!(start.inventory().is_empty());

    let dropped = handle_drop(&both, "lockpick");
    assert_eq!(dropped.inventory(), &["ski mask".to_string()]);
    assert!(dropped.current().expect("room").has_item("lockpick"));
    assert_eq!(dropped.outcome(), Outcome::Dropped);
}

#[test]
fn take_then_drop_restores_room_and_inventory() {
    let start = new_game();
    let restored = handle_drop(&handle_take(&start, "ski mask"), "ski mask");

    let mut before = start.current().expect("room").items.clone();
    let mut after = restored.current().expect("room").items.clone();
    before.sort();
    after.sort();
    assert_eq!(before, after);
    assert_eq!(restored.inventory(), start.inventory());
}

#[test]
fn absent_items_are_reported() {
    let state = interpret(&new_game(), "take vault key");
    assert_eq!(state.message(), "There is no vault key here.");
    assert_eq!(state.outcome(), Outcome::ItemNotInRoom);

    let state = interpret(&new_game(), "drop lockpick");
    assert_eq!(state.message(), NOT_CARRIED);
    assert_eq!(state.outcome(), Outcome::ItemNotInInventory);
}

#[test]
fn items_never_exist_in_two_places() {
    let state = run(&new_game(), &["take ski mask", "take ski mask"]);
    assert_eq!(state.inventory(), &["ski mask".to_string()]);
    assert_eq!(state.outcome(), Outcome::ItemNotInRoom);

    let state = run(&state, &["drop ski mask", "drop ski mask"]);
    assert!(state.inventory().is_empty());
    let room = state.current().expect("room");
    assert_eq!(room.items.iter().filter(|i| *i == "ski mask").count(), 1);
}

#[test]
fn look_lists_every_exit_regardless_of_locks() {
    let state = run(&new_game(), &["take ski mask", "take lockpick", "e", "n"]);
    let look = handle_look(&state);
    let message = look.message();

    assert!(message.contains("There are no items here."));
    let south = message.find("To the south, the entrance.").expect("south");
    let east = message.find("To the east, a door marked SECURITY.").expect("east");
    let north = message.find("To the north, the manager's office.").expect("north");
    let down = message.find("Down the stairs, the basement.").expect("down");
    assert!(south < east && east < north && north < down);
}

#[test]
fn interpreter_errors_leave_the_state_alone() {
    let start = new_game();

    for (line, outcome) in [
        ("", Outcome::Empty),
        ("dance", Outcome::UnknownVerb),
        ("take", Outcome::MissingArgument),
        ("go", Outcome::MissingArgument),
        ("go sideways", Outcome::NoSuchExit),
        ("north", Outcome::NoSuchExit),
        ("look around", Outcome::ExtraArgument),
        ("help me", Outcome::ExtraArgument),
        ("quit now", Outcome::ExtraArgument),
    ] {
        let state = interpret(&start, line);
        assert_eq!(state.outcome(), outcome, "for {line:?}");
        assert_eq!(state.current_room(), start.current_room());
        assert_eq!(state.inventory(), start.inventory());
        assert_eq!(state.rooms(), start.rooms());
        assert!(!state.is_game_over());
    }

    assert_eq!(interpret(&start, "north").message(), NO_EXIT);
    assert_eq!(
        interpret(&start, "look around").message(),
        "'look' doesn't take anything after it."
    );
    assert_eq!(interpret(&start, "  ").message(), "Please enter a command.");
    assert_eq!(
        interpret(&start, "xyzzy").message(),
        "I don't understand that command."
    );
}

#[test]
fn surplus_tokens_do_not_move_the_player() {
    let equipped = run(&new_game(), &["take ski mask", "take lockpick"]);
    let state = interpret(&equipped, "east now");

    assert_eq!(state.outcome(), Outcome::ExtraArgument);
    assert_eq!(state.current_room(), "outside");
    assert!(state.unlocked_exits().is_empty());
}

#[test]
fn quit_ends_the_game() {
    for line in ["quit", "EXIT"] {
        let state = interpret(&new_game(), line);
        assert!(state.is_game_over());
        assert_eq!(state.outcome(), Outcome::Quit);
        assert_eq!(state.message(), "Goodbye.");
        assert_eq!(state.current_room(), "outside");
    }
}

#[test]
fn help_lists_the_verbs() {
    let state = interpret(&new_game(), "help");
    assert_eq!(state.outcome(), Outcome::Help);
    for verb in ["look", "inventory", "take", "drop", "go", "quit"] {
        assert!(state.message().contains(verb), "help mentions {verb}");
    }
}
