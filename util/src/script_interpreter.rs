//! # Rover script interpreter module
//!
//! This module provides an interpreter for rover command scripts. A script is
//! a list of command sequences, each terminated by a `;`. Anything after a `#`
//! on a line is a comment. Whitespace is ignored, so a sequence may be spread
//! over several lines. For example:
//!
//! ```text
//! # Knight move
//! ffrf;
//! # Back up into the start cell
//! bbb;
//! ```

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::fs;
use regex::Regex;
use thiserror::Error;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A script interpreter.
///
/// After initialising with the path to the script use `.next_sequence` to
/// pull the command sequences out in file order.
pub struct ScriptInterpreter {
    script_path: Option<PathBuf>,
    seqs: VecDeque<String>
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Could not find the script at {0:?}")]
    ScriptNotFound(PathBuf),

    #[error("Could not load the script: {0}")]
    ScriptLoadError(std::io::Error),

    #[error("The script is empty (or is so bad it can't be read)")]
    ScriptEmpty,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ScriptInterpreter {

    /// Create a new interpreter from the given script path.
    pub fn new<P: AsRef<Path>>(script_path: P) -> Result<Self, ScriptError> {

        let path = PathBuf::from(script_path.as_ref());
        
        if !path.exists() {
            return Err(ScriptError::ScriptNotFound(path));
        }

        let script = fs::read_to_string(&path)
            .map_err(ScriptError::ScriptLoadError)?;

        let mut si = Self::from_script(&script)?;
        si.script_path = Some(path);

        Ok(si)
    }

    /// Create a new interpreter from the contents of a script.
    pub fn from_script(script: &str) -> Result<Self, ScriptError> {
        // Strip comments before matching so a `;` inside a comment doesn't
        // terminate a sequence
        let stripped: String = script
            .lines()
            .map(|l| match l.find('#') {
                Some(i) => &l[..i],
                None => l
            })
            .collect::<Vec<&str>>()
            .join("\n");

        // The pattern is a constant so building it cannot fail
        let re = Regex::new(r"([^;]*);").unwrap();

        let seqs: VecDeque<String> = re
            .captures_iter(&stripped)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().chars().filter(|c| !c.is_whitespace()).collect())
            .collect();

        if seqs.is_empty() {
            return Err(ScriptError::ScriptEmpty)
        }

        Ok(ScriptInterpreter {
            script_path: None,
            seqs
        })
    }

    /// Pop the next command sequence, or `None` at the end of the script.
    pub fn next_sequence(&mut self) -> Option<String> {
        self.seqs.pop_front()
    }

    /// Get the number of sequences remaining in the script
    pub fn get_num_seqs(&self) -> usize {
        self.seqs.len()
    }

    /// Path the script was loaded from, if it was loaded from a file.
    pub fn script_path(&self) -> Option<&Path> {
        self.script_path.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_script() {
        let mut si = ScriptInterpreter::from_script(
            "# Knight move\n\
             ffrf;\n\
             \n\
               bb ; rZ;  # trailing ; comment\n\
             ;\n"
        ).unwrap();

        assert_eq!(si.get_num_seqs(), 4);
        assert_eq!(si.next_sequence().as_deref(), Some("ffrf"));
        assert_eq!(si.next_sequence().as_deref(), Some("bb"));
        assert_eq!(si.next_sequence().as_deref(), Some("rZ"));
        assert_eq!(si.next_sequence().as_deref(), Some(""));
        assert_eq!(si.next_sequence(), None);
        assert!(si.script_path().is_none());
    }

    #[test]
    fn test_whitespace_inside_sequence() {
        let mut si = ScriptInterpreter::from_script(
            "ff\nrf;\n f f # split\n  r\tb ;\n"
        ).unwrap();

        assert_eq!(si.get_num_seqs(), 2);
        assert_eq!(si.next_sequence().as_deref(), Some("ffrf"));
        assert_eq!(si.next_sequence().as_deref(), Some("ffrb"));
        assert_eq!(si.next_sequence(), None);
    }

    #[test]
    fn test_empty_script() {
        assert!(matches!(
            ScriptInterpreter::from_script("# nothing here\nffrf\n"),
            Err(ScriptError::ScriptEmpty)
        ));
    }

    #[test]
    fn test_missing_script() {
        assert!(matches!(
            ScriptInterpreter::new("no/such/script.rs"),
            Err(ScriptError::ScriptNotFound(_))
        ));
    }
}
