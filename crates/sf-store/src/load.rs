//! Per-file load functions: parse, transform, insert, commit once.
//!
//! Each function handles exactly one input file inside one transaction,
//! so a mid-file failure rolls back that file's rows while earlier
//! files' commits stand. Nothing is retried.

use crate::connection::StoreDb;
use crate::error::StoreResult;
use crate::insert;
use crate::lookup::resolve_song;
use sf_core::record::{parse_event_file, parse_song_file};
use sf_core::transform::{event_rows, song_rows};
use std::path::Path;

/// Row counts inserted from one or more input files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileCounts {
    pub songs: usize,
    pub artists: usize,
    pub time: usize,
    pub users: usize,
    pub songplays: usize,
}

impl FileCounts {
    /// Total rows across all five tables.
    pub fn total(&self) -> usize {
        self.songs + self.artists + self.time + self.users + self.songplays
    }

    /// Accumulate another file's counts into this one.
    pub fn merge(&mut self, other: &FileCounts) {
        self.songs += other.songs;
        self.artists += other.artists;
        self.time += other.time;
        self.users += other.users;
        self.songplays += other.songplays;
    }
}

/// Load one song-metadata file: one Song row and one Artist row,
/// committed together.
pub fn load_song_file(db: &StoreDb, path: &Path) -> StoreResult<FileCounts> {
    let record = parse_song_file(path)?;
    let (song, artist) = song_rows(&record);

    db.transaction(|conn| {
        insert::insert_song(conn, &song)?;
        insert::insert_artist(conn, &artist)?;
        Ok(())
    })?;

    log::debug!("Loaded song file {}", path.display());
    Ok(FileCounts {
        songs: 1,
        artists: 1,
        ..FileCounts::default()
    })
}

/// Load one event-log file: all derived TimeBucket, User, and SongPlay
/// rows, committed together.
///
/// The song/artist lookup runs inside the same transaction, against
/// whatever song metadata earlier files have already committed. An
/// unresolved lookup stores null foreign keys.
pub fn load_event_file(db: &StoreDb, path: &Path) -> StoreResult<FileCounts> {
    let records = parse_event_file(path)?;
    let rows = event_rows(&records)?;

    let counts = FileCounts {
        time: rows.time.len(),
        users: rows.users.len(),
        songplays: rows.plays.len(),
        ..FileCounts::default()
    };

    db.transaction(|conn| {
        for bucket in &rows.time {
            insert::insert_time_bucket(conn, bucket)?;
        }
        for user in &rows.users {
            insert::insert_user(conn, user)?;
        }
        for (index, play) in rows.plays.into_iter().enumerate() {
            let resolved = match (&play.song, &play.artist, play.length) {
                (Some(song), Some(artist), Some(length)) => {
                    resolve_song(conn, song, artist, length)?
                }
                _ => None,
            };
            let (song_id, artist_id) = match resolved {
                Some((song_id, artist_id)) => (Some(song_id), Some(artist_id)),
                None => (None, None),
            };
            let row = play.into_song_play(index as i64, song_id, artist_id);
            insert::insert_song_play(conn, &row)?;
        }
        Ok(())
    })?;

    log::debug!(
        "Loaded event file {} ({} plays)",
        path.display(),
        counts.songplays
    );
    Ok(counts)
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;
