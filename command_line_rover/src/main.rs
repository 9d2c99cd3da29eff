//! Interactive command line for driving the rover.
//!
//! Each line typed at the prompt is sent to the rover as a command sequence, one command per
//! character. Typing `Quit` exits.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::path::PathBuf;
use std::sync::Arc;

use color_eyre::{Report, eyre::WrapErr};
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use structopt::StructOpt;

use rov_lib::{params::Params, rover::Rover};
use util::{
    logger::{logger_init, LevelFilter},
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

const PROMPT: &str = "Rover $ ";
const HISTORY_PATH: &str = "data/history.txt";

/// Input line which ends the session rather than being sent to the rover.
const QUIT: &str = "Quit";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(name = "command_line_rover", about = "Drive the rover from the command line")]
struct Opts {
    /// Landing site parameter file, the default landing site is used if not given
    #[structopt(short, long, parse(from_os_str))]
    params: Option<PathBuf>,

    /// Log to a new session at this level (info, debug or trace)
    #[structopt(short, long)]
    log_level: Option<LevelFilter>,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    if let Some(level) = opts.log_level {
        let session = Session::new("command_line_rover", "sessions")
            .wrap_err("Failed to create the session")?;
        logger_init(level, &session)
            .wrap_err("Failed to initialise logging")?;
    }

    let params: Params = match opts.params {
        Some(ref path) => util::params::load_from_path(path)
            .wrap_err_with(|| format!("Could not load parameters from {:?}", path))?,
        None => Params::default(),
    };

    let obstacles = Arc::new(params.build_registry().wrap_err("Invalid obstacle map")?);
    let mut rover = params.build_rover(obstacles).wrap_err("Failed to land the rover")?;

    println!("Welcome to Mars, you landed in {}", pose_str(&rover));
    println!("Please insert commands:");

    let mut rl = DefaultEditor::new().wrap_err("Failed to start the line editor")?;
    if rl.load_history(HISTORY_PATH).is_err() {
        println!("No history detected");
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                match process_line(&mut rover, &line) {
                    Some(output) => println!("{}", output),
                    None => break,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Unhandled Error: {:?}", err);
                break
            }
        }
    }

    if let Some(parent) = PathBuf::from(HISTORY_PATH).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = rl.save_history(HISTORY_PATH) {
        println!("Could not save history: {}", e);
    }

    shutdown(&rover);

    Ok(())
}

/// Send one line of input to the rover and build the text to show the user.
///
/// Returns `None` if the line was the quit sentinel, in which case nothing is sent to the rover.
fn process_line(rover: &mut Rover, line: &str) -> Option<String> {
    if line == QUIT {
        return None;
    }

    let result = rover.execute_sequence(line.chars());

    info!("\"{}\" -> {}", line, result.result);

    let mut output = format!(
        "{}\nYour actual position is {}",
        result.result,
        pose_str(rover)
    );

    if let Some(msg) = result.message {
        output.push('\n');
        output.push_str(&msg);
    }

    Some(output)
}

fn pose_str(rover: &Rover) -> String {
    format!(
        "{} and your direction is {}",
        rover.position(),
        rover.direction().code()
    )
}

fn shutdown(rover: &Rover) {
    info!("Shell closed with the rover at {}", pose_str(rover));
    println!("Exiting...");
}

#[cfg(test)]
mod test {
    use super::*;

    fn rover() -> Rover {
        let params = Params::default();
        params
            .build_rover(Arc::new(params.build_registry().unwrap()))
            .unwrap()
    }

    #[test]
    fn test_quit_is_not_sent() {
        let mut r = rover();
        let before = r.pose();

        assert_eq!(process_line(&mut r, "Quit"), None);
        assert_eq!(r.pose(), before);
    }

    #[test]
    fn test_quit_must_match_exactly() {
        let mut r = rover();

        // 'Q' is not a command, so this stops straight away
        let out = process_line(&mut r, "quit").unwrap();
        assert!(out.starts_with("CommandNotRecognized\n"));
    }

    #[test]
    fn test_output() {
        let mut r = rover();

        assert_eq!(
            process_line(&mut r, "ffrf").unwrap(),
            "CommandExecuted\nYour actual position is x: 2 y: 3 and your direction is E"
        );

        // Obstacle at (6, 4) blocks the fifth move east
        assert_eq!(
            process_line(&mut r, "lfrffff").unwrap(),
            "ObstacleFound\n\
             Your actual position is x: 5 y: 4 and your direction is E\n\
             An obstacle was detected trying to execute command 'f' at position 6, \
             the rover stopped processing other commands"
        );
    }
}
