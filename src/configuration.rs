use std::path::PathBuf;

use crate::cli::Cli;

pub const DB_FILE_NAME: &str = "dsfdb.db";

#[derive(Clone)]
pub struct Configuration {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub reset: bool,
}

impl Configuration {
    pub fn from_cli(cli: &Cli) -> Self {
        let data_dir = PathBuf::from(&cli.data_dir);
        let db_path = data_dir.join(DB_FILE_NAME);

        Self {
            data_dir,
            db_path,
            log_file: cli.log_file.as_ref().map(PathBuf::from),
            reset: cli.reset,
        }
    }
}
