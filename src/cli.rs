use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Compute distance, speed and calories from workout sensor packages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// JSON file the computed records are appended to.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DATA_FILE, global = true)]
    pub data: PathBuf,

    /// Print the messages but leave the data file untouched.
    #[arg(long, global = true)]
    pub no_save: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Process the built-in demo workouts (the default).
    Samples,

    /// Process one sensor package, e.g. `record SWM 720 1 80 25 40`.
    Record {
        /// Workout type tag: RUN, WLK or SWM.
        tag: String,

        /// Positional values: action, duration (h), weight (kg),
        /// then height (cm) for WLK or pool length (m) and pool count for SWM.
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Print every record stored in the data file.
    Show,
}
