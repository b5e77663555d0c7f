//! Parameterized insert statements for the star-schema tables.
//!
//! The SQL lives in named module constants; all functions take a
//! `&Connection` so callers can wrap one file's rows in a single
//! transaction via [`crate::StoreDb::transaction`]. Inserts are plain
//! appends — duplicates are never rejected or merged.

use crate::error::{StoreError, StoreResult};
use duckdb::Connection;
use sf_core::rows::{Artist, Song, SongPlay, TimeBucket, User};

const SONG_INSERT: &str =
    "INSERT INTO songs (song_id, title, artist_id, year, duration) VALUES (?, ?, ?, ?, ?)";

const ARTIST_INSERT: &str =
    "INSERT INTO artists (artist_id, name, location, latitude, longitude) VALUES (?, ?, ?, ?, ?)";

const TIME_INSERT: &str =
    "INSERT INTO time (start_time, hour, day, week, month, year, weekday)
     VALUES (?, ?, ?, ?, ?, ?, ?)";

const USER_INSERT: &str =
    "INSERT INTO users (user_id, first_name, last_name, gender, level) VALUES (?, ?, ?, ?, ?)";

const SONGPLAY_INSERT: &str =
    "INSERT INTO songplays (songplay_id, start_time_ms, user_id, level, song_id, artist_id,
                            session_id, location, user_agent)
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// Insert one row into the `songs` dimension table.
pub fn insert_song(conn: &Connection, song: &Song) -> StoreResult<()> {
    conn.execute(
        SONG_INSERT,
        duckdb::params![
            song.song_id,
            song.title,
            song.artist_id,
            song.year,
            song.duration,
        ],
    )
    .map_err(|e| StoreError::InsertError(format!("insert songs ({}): {e}", song.song_id)))?;
    Ok(())
}

/// Insert one row into the `artists` dimension table.
pub fn insert_artist(conn: &Connection, artist: &Artist) -> StoreResult<()> {
    conn.execute(
        ARTIST_INSERT,
        duckdb::params![
            artist.artist_id,
            artist.name,
            artist.location,
            artist.latitude,
            artist.longitude,
        ],
    )
    .map_err(|e| StoreError::InsertError(format!("insert artists ({}): {e}", artist.artist_id)))?;
    Ok(())
}

/// Insert one row into the `time` dimension table.
pub fn insert_time_bucket(conn: &Connection, bucket: &TimeBucket) -> StoreResult<()> {
    // DuckDB casts the formatted string to TIME on insert.
    let start_time = bucket.timestamp.format("%H:%M:%S%.6f").to_string();
    conn.execute(
        TIME_INSERT,
        duckdb::params![
            start_time,
            bucket.hour,
            bucket.day,
            bucket.week,
            bucket.month,
            bucket.year,
            bucket.weekday,
        ],
    )
    .map_err(|e| StoreError::InsertError(format!("insert time ({start_time}): {e}")))?;
    Ok(())
}

/// Insert one row into the `users` dimension table.
pub fn insert_user(conn: &Connection, user: &User) -> StoreResult<()> {
    conn.execute(
        USER_INSERT,
        duckdb::params![
            user.user_id,
            user.first_name,
            user.last_name,
            user.gender,
            user.level,
        ],
    )
    .map_err(|e| StoreError::InsertError(format!("insert users ({}): {e}", user.user_id)))?;
    Ok(())
}

/// Insert one row into the `songplays` fact table.
pub fn insert_song_play(conn: &Connection, play: &SongPlay) -> StoreResult<()> {
    conn.execute(
        SONGPLAY_INSERT,
        duckdb::params![
            play.songplay_id,
            play.start_time_ms,
            play.user_id,
            play.level,
            play.song_id,
            play.artist_id,
            play.session_id,
            play.location,
            play.user_agent,
        ],
    )
    .map_err(|e| StoreError::InsertError(format!("insert songplays ({}): {e}", play.songplay_id)))?;
    Ok(())
}

#[cfg(test)]
#[path = "insert_test.rs"]
mod tests;
