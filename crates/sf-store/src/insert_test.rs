use super::*;
use crate::StoreDb;
use chrono::NaiveTime;
use sf_core::rows::{Artist, Song, SongPlay, TimeBucket, User};

fn sample_song() -> Song {
    Song {
        song_id: "SOUPIRU12A6D4FA1E1".to_string(),
        title: "Der Kleine Dompfaff".to_string(),
        artist_id: "ARJIE2Y1187B994AB7".to_string(),
        year: 1961,
        duration: 152.92036,
    }
}

fn sample_artist() -> Artist {
    Artist {
        artist_id: "ARJIE2Y1187B994AB7".to_string(),
        name: "Line Renaud".to_string(),
        location: "Paris, France".to_string(),
        latitude: None,
        longitude: None,
    }
}

#[test]
fn test_insert_song_round_trip() {
    let db = StoreDb::open_memory().unwrap();
    insert_song(db.conn(), &sample_song()).unwrap();

    let (title, year, duration) = db
        .conn()
        .query_row(
            "SELECT title, year, duration FROM songs WHERE song_id = 'SOUPIRU12A6D4FA1E1'",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, f64>(2)?,
                ))
            },
        )
        .unwrap();
    assert_eq!(title, "Der Kleine Dompfaff");
    assert_eq!(year, 1961);
    assert_eq!(duration, 152.92036);
}

#[test]
fn test_insert_artist_null_coordinates() {
    let db = StoreDb::open_memory().unwrap();
    insert_artist(db.conn(), &sample_artist()).unwrap();

    let (name, latitude) = db
        .conn()
        .query_row(
            "SELECT name, latitude FROM artists WHERE artist_id = 'ARJIE2Y1187B994AB7'",
            [],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, Option<f64>>(1)?)),
        )
        .unwrap();
    assert_eq!(name, "Line Renaud");
    assert!(latitude.is_none());
}

#[test]
fn test_insert_time_bucket() {
    let db = StoreDb::open_memory().unwrap();
    let bucket = TimeBucket {
        timestamp: NaiveTime::from_hms_milli_opt(21, 1, 46, 796).unwrap(),
        hour: 21,
        day: 1,
        week: 44,
        month: 11,
        year: 2018,
        weekday: 3,
    };
    insert_time_bucket(db.conn(), &bucket).unwrap();

    let (start_time, hour, weekday) = db
        .conn()
        .query_row(
            "SELECT CAST(start_time AS VARCHAR), hour, weekday FROM time",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            },
        )
        .unwrap();
    assert!(start_time.starts_with("21:01:46.796"));
    assert_eq!(hour, 21);
    assert_eq!(weekday, 3);
}

#[test]
fn test_insert_user_flags() {
    let db = StoreDb::open_memory().unwrap();
    insert_user(
        db.conn(),
        &User {
            user_id: 30,
            first_name: "Kaylee".to_string(),
            last_name: "Summers".to_string(),
            gender: true,
            level: true,
        },
    )
    .unwrap();

    let (gender, level) = db
        .conn()
        .query_row(
            "SELECT gender, level FROM users WHERE user_id = 30",
            [],
            |row| Ok((row.get::<_, bool>(0)?, row.get::<_, bool>(1)?)),
        )
        .unwrap();
    assert!(gender);
    assert!(level);
}

#[test]
fn test_insert_song_play_null_foreign_keys() {
    let db = StoreDb::open_memory().unwrap();
    insert_song_play(
        db.conn(),
        &SongPlay {
            songplay_id: 0,
            start_time_ms: 1541106106796,
            user_id: 30,
            level: true,
            song_id: None,
            artist_id: None,
            session_id: 139,
            location: "Phoenix-Mesa-Scottsdale, AZ".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
        },
    )
    .unwrap();

    let (start_time_ms, song_id) = db
        .conn()
        .query_row(
            "SELECT start_time_ms, song_id FROM songplays WHERE songplay_id = 0",
            [],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?)),
        )
        .unwrap();
    assert_eq!(start_time_ms, 1541106106796);
    assert!(song_id.is_none());
}

#[test]
fn test_duplicate_inserts_are_appended() {
    // No uniqueness constraints: the same row twice yields two rows.
    let db = StoreDb::open_memory().unwrap();
    insert_song(db.conn(), &sample_song()).unwrap();
    insert_song(db.conn(), &sample_song()).unwrap();

    let count: i64 = db
        .conn()
        .query_row("SELECT COUNT(*) FROM songs", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);
}
