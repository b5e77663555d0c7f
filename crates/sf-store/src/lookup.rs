//! Song/artist foreign-key resolution.
//!
//! The only read path in the pipeline: match a play event to a
//! previously loaded song/artist pair by exact equality on title,
//! artist name, and track duration. No fuzzy or partial matching.

use crate::error::{StoreError, StoreResult};
use duckdb::Connection;

const SONG_SELECT: &str = "SELECT songs.song_id, artists.artist_id
     FROM songs
     JOIN artists ON songs.artist_id = artists.artist_id
     WHERE songs.title = ? AND artists.name = ? AND songs.duration = ?";

/// Resolve a play event to its `(song_id, artist_id)` pair.
///
/// Returns `Ok(None)` when no exact match exists — an expected outcome,
/// not an error; the caller stores null foreign keys.
pub fn resolve_song(
    conn: &Connection,
    title: &str,
    artist_name: &str,
    duration: f64,
) -> StoreResult<Option<(String, String)>> {
    let result = conn.query_row(
        SONG_SELECT,
        duckdb::params![title, artist_name, duration],
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
            ))
        },
    );

    match result {
        Ok(pair) => Ok(Some(pair)),
        Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StoreError::QueryError(format!("song lookup: {e}"))),
    }
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
