/// What the last transition did. Failures are ordinary outcomes; the message
/// carries the explanation and every other field is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Described,
    Inventory,
    Took,
    Dropped,
    Moved,
    Won,
    Help,
    Quit,
    Empty,
    GameOver,
    UnknownVerb,
    MissingArgument,
    ExtraArgument,
    ItemNotInRoom,
    ItemNotInInventory,
    NoSuchExit,
    ExitLocked,
}
