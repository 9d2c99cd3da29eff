//! Results produced by executing commands

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;

use super::Rover;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The result of executing a command sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecResult {
    /// Outcome of the sequence. Anything other than `CommandExecuted` means the rover stopped
    /// early.
    pub result: ResultCode,

    /// Human readable description of why the rover stopped, `None` if it didn't.
    pub message: Option<String>,

    /// The command the rover stopped on and its index in the sequence.
    pub stopped_at: Option<StopPoint>,
}

/// Where in a sequence the rover stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StopPoint {
    /// Zero based index of the command within the sequence.
    pub index: usize,

    /// The command character as it was received.
    pub command: char,
}

/// A single row of the execution archive.
#[derive(Clone, Debug, Serialize)]
pub struct ExecRecord {
    pub seq_index: usize,
    pub commands: String,
    pub result: ResultCode,
    pub stop_index: Option<usize>,
    pub x: i64,
    pub y: i64,
    pub direction: &'static str,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Outcome of a single command or of a whole sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ResultCode {
    CommandExecuted,
    CommandNotRecognized,
    ObstacleFound,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ExecResult {
    /// A sequence which ran to completion.
    pub fn executed() -> Self {
        Self {
            result: ResultCode::CommandExecuted,
            message: None,
            stopped_at: None,
        }
    }

    /// A sequence which stopped at `command` (index `index`) with the given outcome.
    ///
    /// `CommandExecuted` is not a stopping outcome, so it gives the same value as
    /// [`ExecResult::executed`].
    pub fn stopped(result: ResultCode, index: usize, command: char) -> Self {
        let message = match result {
            ResultCode::CommandExecuted => return Self::executed(),
            ResultCode::CommandNotRecognized => format!(
                "Command '{}' at position {} was not recognized as valid, \
                 the rover stopped processing other commands",
                command, index
            ),
            ResultCode::ObstacleFound => format!(
                "An obstacle was detected trying to execute command '{}' at position {}, \
                 the rover stopped processing other commands",
                command, index
            ),
        };

        Self {
            result,
            message: Some(message),
            stopped_at: Some(StopPoint { index, command }),
        }
    }

    /// `true` if every command in the sequence was executed.
    pub fn is_complete(&self) -> bool {
        self.result == ResultCode::CommandExecuted
    }
}

impl ExecRecord {
    /// Build an archive row from a result and the rover's state after the sequence.
    pub fn new(seq_index: usize, commands: &str, result: &ExecResult, rover: &Rover) -> Self {
        Self {
            seq_index,
            commands: commands.to_string(),
            result: result.result,
            stop_index: result.stopped_at.map(|s| s.index),
            x: rover.position().x(),
            y: rover.position().y(),
            direction: rover.direction().code(),
        }
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResultCode::CommandExecuted => "CommandExecuted",
            ResultCode::CommandNotRecognized => "CommandNotRecognized",
            ResultCode::ObstacleFound => "ObstacleFound",
        };

        f.write_str(s)
    }
}
