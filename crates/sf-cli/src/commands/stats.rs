//! Stats command implementation

use anyhow::{Context, Result};
use sf_core::Config;
use sf_store::StoreDb;
use std::path::Path;

use crate::cli::GlobalArgs;

/// The five star-schema tables, fact table first.
const TABLES: &[&str] = &["songplays", "users", "songs", "artists", "time"];

/// Execute the stats command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let root = Path::new(&global.project_dir);
    let config = Config::load_from_dir(root).context("Failed to load songflow.yml")?;

    let db_path = global
        .database
        .as_ref()
        .unwrap_or(&config.database.path)
        .clone();
    let db = StoreDb::new(&db_path).context("Failed to open database")?;

    println!("Row counts in {}:\n", db_path);
    for table in TABLES {
        let count: i64 = db
            .conn()
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .with_context(|| format!("Failed to count {table}"))?;
        println!("  {:<10} {:>10}", table, count);
    }

    Ok(())
}
