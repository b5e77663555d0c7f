//! Input record types and JSON parsing for song and event-log files.
//!
//! Song-metadata files carry one JSON object each; event-log files are
//! newline-delimited JSON with one application event per line. Event
//! lines are filtered on their `page` field before typed
//! deserialization, so only qualifying records need the full field set.

use crate::error::{CoreError, CoreResult};
use serde::Deserialize;
use std::path::Path;

/// Sentinel `page` value marking an in-scope song-play event.
pub const NEXT_SONG_PAGE: &str = "NextSong";

/// One song-metadata record (one per file).
#[derive(Debug, Clone, Deserialize)]
pub struct SongRecord {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i64,
    pub duration: f64,
    pub artist_name: String,
    pub artist_location: String,
    pub artist_latitude: Option<f64>,
    pub artist_longitude: Option<f64>,
}

/// One qualifying event-log record (`page == "NextSong"`).
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    /// Event timestamp, epoch milliseconds
    pub ts: i64,

    #[serde(rename = "userId")]
    pub user_id: i64,

    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    #[serde(default)]
    pub gender: Option<String>,

    /// Subscription level ("free" or "paid")
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub song: Option<String>,

    #[serde(default)]
    pub artist: Option<String>,

    /// Track length in seconds
    #[serde(default)]
    pub length: Option<f64>,

    #[serde(rename = "sessionId")]
    pub session_id: i64,

    pub location: String,

    #[serde(rename = "userAgent")]
    pub user_agent: String,
}

fn read_file(path: &Path) -> CoreResult<String> {
    std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse one song-metadata file into a [`SongRecord`].
///
/// Only the first JSON object is used; anything after it is ignored.
pub fn parse_song_file(path: &Path) -> CoreResult<SongRecord> {
    let content = read_file(path)?;

    let mut stream = serde_json::Deserializer::from_str(&content).into_iter::<SongRecord>();
    match stream.next() {
        Some(Ok(record)) => Ok(record),
        Some(Err(e)) => Err(CoreError::RecordParse {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
        None => Err(CoreError::EmptySongFile {
            path: path.display().to_string(),
        }),
    }
}

/// Parse one event-log file into the qualifying [`EventRecord`]s, in
/// file order.
///
/// Records whose `page` field is not the [`NEXT_SONG_PAGE`] sentinel are
/// discarded silently; this is a design filter, not an error. A
/// malformed line, or a qualifying line missing a required field, aborts
/// the whole file.
pub fn parse_event_file(path: &Path) -> CoreResult<Vec<EventRecord>> {
    let content = read_file(path)?;

    let mut records = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: serde_json::Value =
            serde_json::from_str(line).map_err(|e| CoreError::RecordParse {
                path: path.display().to_string(),
                message: format!("line {}: {}", line_no + 1, e),
            })?;

        if value.get("page").and_then(|v| v.as_str()) != Some(NEXT_SONG_PAGE) {
            continue;
        }

        let record: EventRecord =
            serde_json::from_value(value).map_err(|e| CoreError::RecordParse {
                path: path.display().to_string(),
                message: format!("line {}: {}", line_no + 1, e),
            })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
