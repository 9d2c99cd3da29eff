//! Commands understood by the rover

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A single rover command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move one cell in the direction the rover is facing
    MoveForward,
    /// Move one cell away from the direction the rover is facing
    MoveBackward,
    /// Turn 90 degrees anticlockwise in place
    TurnLeft,
    /// Turn 90 degrees clockwise in place
    TurnRight,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Command {
    pub const ALL: [Command; 4] = [
        Command::MoveForward,
        Command::MoveBackward,
        Command::TurnLeft,
        Command::TurnRight,
    ];

    /// The character used to issue this command.
    pub fn code(&self) -> char {
        match self {
            Command::MoveForward => 'f',
            Command::MoveBackward => 'b',
            Command::TurnLeft => 'l',
            Command::TurnRight => 'r',
        }
    }

    /// Look up a command by its character, or `None` if it isn't recognised.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Whether the command changes the rover's position (rather than its heading).
    pub fn is_move(&self) -> bool {
        matches!(self, Command::MoveForward | Command::MoveBackward)
    }
}
