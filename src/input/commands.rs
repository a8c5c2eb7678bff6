/// What the player asked for on one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// A sequence of direction characters, applied all-or-nothing.
    Move(String),
    Exit,
}
