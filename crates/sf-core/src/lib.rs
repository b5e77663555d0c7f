//! sf-core - Core library for Songflow
//!
//! This crate provides shared types, configuration parsing, data file
//! discovery, and the record-to-row transforms used across all Songflow
//! components.

pub mod config;
pub mod error;
pub mod locate;
pub mod record;
pub mod rows;
pub mod transform;

pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use locate::discover_files;
pub use record::{parse_event_file, parse_song_file, EventRecord, SongRecord, NEXT_SONG_PAGE};
pub use rows::{Artist, Play, Song, SongPlay, TimeBucket, User};
pub use transform::{event_rows, song_rows, time_bucket, user_row, EventRows};
