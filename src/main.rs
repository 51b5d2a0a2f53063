use anyhow::{Context, Result};

use dsfdb::cli;
use dsfdb::configuration::Configuration;
use dsfdb::db::SqliteRepo;

fn main() -> Result<()> {
    let cli = cli::parse();
    let cfg = Configuration::from_cli(&cli);

    dsfdb::tracing::init(cfg.log_file.as_deref());
    log::info!("🚀 Starting dsfdb");
    log::info!("📂 Data dir: {}", cfg.data_dir.display());

    if cfg.reset {
        SqliteRepo::new(&cfg.db_path)
            .reset_all()
            .context("resetting database file")?;
        log::info!("🧹 Reset database at {}", cfg.db_path.display());
    }

    cli.cmd.run(&cfg)
}
