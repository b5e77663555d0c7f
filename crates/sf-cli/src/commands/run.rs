//! Run command implementation: the iterate-transform-write loop.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use sf_core::{discover_files, Config};
use sf_store::{load_event_file, load_song_file, FileCounts, StoreDb};
use std::path::{Path, PathBuf};

use crate::cli::{GlobalArgs, RunArgs};

/// Which transformer a directory's files go through.
#[derive(Debug, Clone, Copy)]
enum FileKind {
    Songs,
    Events,
}

impl FileKind {
    fn label(&self) -> &'static str {
        match self {
            FileKind::Songs => "song files",
            FileKind::Events => "event files",
        }
    }
}

/// Execute the run command
pub fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let root = Path::new(&global.project_dir);
    let config = Config::load_from_dir(root).context("Failed to load songflow.yml")?;

    let db_path = global
        .database
        .as_ref()
        .unwrap_or(&config.database.path)
        .clone();
    let db = StoreDb::new(&db_path).context("Failed to open database")?;

    let song_dirs = data_dirs(&args.song_data, &config.song_paths_absolute(root), root);
    let log_dirs = data_dirs(&args.log_data, &config.log_paths_absolute(root), root);

    let mut totals = FileCounts::default();

    // Song metadata first so the event lookup can resolve against it
    if !args.events_only {
        for dir in &song_dirs {
            let counts = process_dir(&db, dir, FileKind::Songs, global.verbose)?;
            totals.merge(&counts);
        }
    }

    if !args.songs_only {
        for dir in &log_dirs {
            let counts = process_dir(&db, dir, FileKind::Events, global.verbose)?;
            totals.merge(&counts);
        }
    }

    println!();
    println!(
        "Loaded {} rows into {} ({} songs, {} artists, {} time, {} users, {} songplays)",
        totals.total(),
        db_path,
        totals.songs,
        totals.artists,
        totals.time,
        totals.users,
        totals.songplays,
    );

    Ok(())
}

/// Resolve the directories for one data category: CLI override wins over
/// the configured paths.
fn data_dirs(cli_override: &Option<String>, configured: &[PathBuf], root: &Path) -> Vec<PathBuf> {
    match cli_override {
        Some(dir) => vec![root.join(dir)],
        None => configured.to_vec(),
    }
}

/// Process every JSON file under one directory, one transaction per
/// file. The first failure aborts the run; prior files stay committed.
fn process_dir(db: &StoreDb, dir: &Path, kind: FileKind, verbose: bool) -> Result<FileCounts> {
    let files = discover_files(dir, "json");
    println!("{} files found in {}", files.len(), dir.display());

    if files.is_empty() {
        return Ok(FileCounts::default());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  [{bar:40.cyan/blue}] {pos}/{len} files processed")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut totals = FileCounts::default();
    for file in &files {
        if verbose {
            eprintln!("[verbose] processing {}", file.display());
        }

        let counts = match kind {
            FileKind::Songs => load_song_file(db, file),
            FileKind::Events => load_event_file(db, file),
        }
        .with_context(|| format!("Failed to load {}", file.display()))?;

        totals.merge(&counts);
        pb.inc(1);
    }
    pb.finish();

    println!(
        "  {} {} processed ({} rows)",
        files.len(),
        kind.label(),
        totals.total()
    );

    Ok(totals)
}
