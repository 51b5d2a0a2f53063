use clap::Parser;
use std::env;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Manage the DSF melt-curve SQLite database",
    long_about = "Owns the relational schema for Differential Scanning Fluorimetry data: \
                  experiment metadata, sample definitions, well-level measurements, and raw \
                  melt-curve arrays stored one row per well."
)]
pub struct Cli {
    #[arg(
        long,
        env = "DSFDB_DATA_DIR",
        default_value = ".dsfdb/",
        value_name = "DIR",
        help = "Directory to store the SQLite database"
    )]
    pub data_dir: String,

    #[arg(
        long,
        default_value_t = false,
        help = "Delete the existing database file before running the command"
    )]
    pub reset: bool,

    #[arg(
        long = "log-file",
        env = "DSFDB_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}
