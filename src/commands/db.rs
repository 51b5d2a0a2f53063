use anyhow::{Context, Result};

use crate::configuration::Configuration;
use crate::db::{Repository, SqliteRepo};

/// Create the data directory and apply (or verify) the schema.
pub fn init(cfg: &Configuration) -> Result<()> {
    std::fs::create_dir_all(&cfg.data_dir).context("creating data dir")?;

    let repo = SqliteRepo::new(&cfg.db_path);
    repo.init().context("applying schema")?;

    log::info!("✅ Database ready at {}", cfg.db_path.display());
    Ok(())
}

/// Print the schema version and per-table row counts.
pub fn status(cfg: &Configuration) -> Result<()> {
    let repo = SqliteRepo::new(&cfg.db_path);
    let counts = repo.counts().context("reading table counts")?;

    println!("database:       {}", cfg.db_path.display());
    println!("schema version: {}", counts.schema_version);
    println!("experiments:    {}", counts.experiments);
    println!("samples:        {}", counts.samples);
    println!("wells:          {}", counts.wells);
    println!("melt curves:    {}", counts.melt_curves);
    Ok(())
}
