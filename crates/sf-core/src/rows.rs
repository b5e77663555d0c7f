//! Star-schema row types produced by the transformers.
//!
//! Every row is constructed from exactly one input record and written
//! once to storage; no update or delete path exists. Nothing is
//! deduplicated — a returning user or repeated timestamp produces one
//! row per event.

use chrono::NaiveTime;

/// Row for the `songs` dimension table.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i64,
    pub duration: f64,
}

/// Row for the `artists` dimension table.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub artist_id: String,
    pub name: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Row for the `time` dimension table, derived from one epoch-ms
/// timestamp under UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBucket {
    /// Time of day
    pub timestamp: NaiveTime,
    pub hour: u32,
    /// Day of month (1-31)
    pub day: u32,
    /// ISO week of year (1-53)
    pub week: u32,
    pub month: u32,
    pub year: i32,
    /// Days from Monday (0 = Monday, 6 = Sunday)
    pub weekday: u32,
}

/// Row for the `users` dimension table.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// True iff the event's gender field is exactly "F"
    pub gender: bool,
    /// True iff the event's subscription level is exactly "free"
    pub level: bool,
}

/// One song-play awaiting foreign-key resolution against the store.
///
/// Carries the raw song title, artist name, and track length the lookup
/// matches on; [`Play::into_song_play`] finalizes the fact row once the
/// store has resolved (or failed to resolve) the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Play {
    pub start_time_ms: i64,
    pub user_id: i64,
    pub level: bool,
    pub song: Option<String>,
    pub artist: Option<String>,
    pub length: Option<f64>,
    pub session_id: i64,
    pub location: String,
    pub user_agent: String,
}

/// Row for the `songplays` fact table.
#[derive(Debug, Clone, PartialEq)]
pub struct SongPlay {
    /// Record index within the file batch; no cross-run uniqueness
    pub songplay_id: i64,
    pub start_time_ms: i64,
    pub user_id: i64,
    pub level: bool,
    /// Resolved foreign key, or None when no exact match exists
    pub song_id: Option<String>,
    /// Resolved foreign key, or None when no exact match exists
    pub artist_id: Option<String>,
    pub session_id: i64,
    pub location: String,
    pub user_agent: String,
}

impl Play {
    /// Finalize into a fact row once the song/artist lookup has run.
    pub fn into_song_play(
        self,
        songplay_id: i64,
        song_id: Option<String>,
        artist_id: Option<String>,
    ) -> SongPlay {
        SongPlay {
            songplay_id,
            start_time_ms: self.start_time_ms,
            user_id: self.user_id,
            level: self.level,
            song_id,
            artist_id,
            session_id: self.session_id,
            location: self.location,
            user_agent: self.user_agent,
        }
    }
}
