//! Record-to-row transforms for song metadata and event logs.

use crate::error::{CoreError, CoreResult};
use crate::record::{EventRecord, SongRecord};
use crate::rows::{Artist, Play, Song, TimeBucket, User};
use chrono::{Datelike, TimeZone, Timelike, Utc};

/// Gender value mapped to a true `gender` flag.
const GENDER_FLAG_VALUE: &str = "F";

/// Subscription level mapped to a true `level` flag.
const LEVEL_FLAG_VALUE: &str = "free";

/// All rows derived from one event-log file, in input order.
///
/// The three vectors are index-aligned: entry `i` of each was derived
/// from the same surviving event record.
#[derive(Debug, Default)]
pub struct EventRows {
    pub time: Vec<TimeBucket>,
    pub users: Vec<User>,
    pub plays: Vec<Play>,
}

/// Transform one song-metadata record into its Song and Artist rows.
///
/// Values are copied verbatim; the artist row is not deduplicated
/// against other files carrying the same artist.
pub fn song_rows(record: &SongRecord) -> (Song, Artist) {
    let song = Song {
        song_id: record.song_id.clone(),
        title: record.title.clone(),
        artist_id: record.artist_id.clone(),
        year: record.year,
        duration: record.duration,
    };
    let artist = Artist {
        artist_id: record.artist_id.clone(),
        name: record.artist_name.clone(),
        location: record.artist_location.clone(),
        latitude: record.artist_latitude,
        longitude: record.artist_longitude,
    };
    (song, artist)
}

/// Decompose an epoch-millisecond timestamp into a [`TimeBucket`].
///
/// All calendar fields are derived under UTC; the source data carries no
/// timezone adjustment.
pub fn time_bucket(ts_ms: i64) -> CoreResult<TimeBucket> {
    let dt = Utc
        .timestamp_millis_opt(ts_ms)
        .single()
        .ok_or(CoreError::TimestampOutOfRange { ts: ts_ms })?;

    Ok(TimeBucket {
        timestamp: dt.time(),
        hour: dt.hour(),
        day: dt.day(),
        week: dt.iso_week().week(),
        month: dt.month(),
        year: dt.year(),
        weekday: dt.weekday().num_days_from_monday(),
    })
}

/// Derive a user-dimension row from one qualifying event record.
pub fn user_row(record: &EventRecord) -> User {
    User {
        user_id: record.user_id,
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        gender: record.gender.as_deref() == Some(GENDER_FLAG_VALUE),
        level: record.level.as_deref() == Some(LEVEL_FLAG_VALUE),
    }
}

/// Transform a batch of qualifying event records into their derived
/// rows: one TimeBucket, one User, and one pending [`Play`] per record.
pub fn event_rows(records: &[EventRecord]) -> CoreResult<EventRows> {
    let mut rows = EventRows::default();

    for record in records {
        rows.time.push(time_bucket(record.ts)?);
        rows.users.push(user_row(record));
        rows.plays.push(Play {
            start_time_ms: record.ts,
            user_id: record.user_id,
            level: record.level.as_deref() == Some(LEVEL_FLAG_VALUE),
            song: record.song.clone(),
            artist: record.artist.clone(),
            length: record.length,
            session_id: record.session_id,
            location: record.location.clone(),
            user_agent: record.user_agent.clone(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
