use anyhow::Result;
use clap::Subcommand;

use crate::commands;
use crate::configuration::Configuration;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Create the database and apply the schema",
        long_about = "Create the data directory if needed, open (or create) the SQLite \
                      database, and apply the DSF schema. A database already at the current \
                      schema version is left untouched."
    )]
    Init,
    #[command(about = "Report the schema version and per-table row counts")]
    Status,
}

impl Command {
    pub fn run(&self, cfg: &Configuration) -> Result<()> {
        match self {
            Command::Init => commands::db::init(cfg),
            Command::Status => commands::db::status(cfg),
        }
    }
}
