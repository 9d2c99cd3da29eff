//! Rover executable entry point.
//! 
//! # Architecture
//! 
//! The executable runs a rover script against a single rover:
//! 
//!     - Start the session and logging
//!     - Load the landing site parameters
//!     - Build the obstacle registry and land the rover
//!     - For each command sequence in the script:
//!         - Execute the sequence
//!         - Log and archive the result
//!     - Save the final pose into the session
//!
//! # Usage
//!
//! ```text
//! rov_exec <script_path>
//! ```

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, warn};
use std::env;
use std::sync::Arc;
use color_eyre::{Report, eyre::{WrapErr, eyre}};

// Internal
use rov_lib::{
    params::{Params, PARAMS_FILE},
    rover::ExecRecord,
};
use util::{
    archive::Archiver,
    logger::{logger_init, LevelFilter},
    script_interpreter::ScriptInterpreter,
    session::{self, Session},
};

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "rov_exec", 
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session)
        .wrap_err("Failed to initialise logging")?;

    info!("Mars Rover Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params: Params = match util::params::load(PARAMS_FILE) {
        Ok(p) => p,
        Err(e) => {
            warn!("Could not load {} ({}), using the default landing site", PARAMS_FILE, e);
            Params::default()
        }
    };

    debug!("Landing site parameters: {:#?}", params);

    // ---- LOAD SCRIPT ----

    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    let script_path = script_path_arg(&args)?;

    info!("Loading script from \"{}\"", script_path);

    let mut si = ScriptInterpreter::new(script_path)
        .wrap_err("Failed to load script")?;

    info!("Loaded script contains {} command sequences\n", si.get_num_seqs());

    // ---- LAND THE ROVER ----

    let obstacles = Arc::new(
        params.build_registry()
            .wrap_err("Invalid obstacle map")?
    );

    let mut rover = params.build_rover(obstacles)
        .wrap_err("Failed to land the rover")?;

    info!(
        "Rover landed at {} facing {}",
        rover.position(),
        rover.direction()
    );

    let mut archiver = Archiver::from_path(&session, "exec_results.csv")
        .wrap_err("Failed to create the results archive")?;

    // ---- MAIN LOOP ----

    let mut seq_index = 0;
    let mut num_stopped = 0;

    while let Some(seq) = si.next_sequence() {
        let result = rover.execute_sequence(seq.chars());

        info!(
            "[{}] \"{}\": {} - now at {} facing {}",
            seq_index, seq, result.result, rover.position(), rover.direction()
        );

        if let Some(ref msg) = result.message {
            info!("    {}", msg);
            num_stopped += 1;
        }

        if let Err(e) = archiver.serialise(ExecRecord::new(seq_index, &seq, &result, &rover)) {
            warn!("Could not archive the result of sequence {}: {}", seq_index, e);
        }

        seq_index += 1;
    }

    // ---- SHUTDOWN ----

    session::save_or_warn(&session, "final_pose.json", &rover.pose());

    info!(
        "Executed {} sequences ({} stopped early), final position {} facing {}",
        seq_index, num_stopped, rover.position(), rover.direction()
    );
    info!("End of execution");

    Ok(())
}

/// Get the script path from the CLI arguments, which must be the only argument after the
/// executable name.
fn script_path_arg(args: &[String]) -> Result<&str, Report> {
    match args {
        [_, path] => Ok(path.as_str()),
        _ => Err(eyre!(
            "Expected the path to a rover script as the only argument, found {} arguments",
            args.len().saturating_sub(1)
        )),
    }
}
