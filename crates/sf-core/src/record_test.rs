use super::*;
use tempfile::TempDir;

const SONG_JSON: &str = r#"{"num_songs": 1, "artist_id": "ARJIE2Y1187B994AB7", "artist_latitude": null, "artist_longitude": null, "artist_location": "", "artist_name": "Line Renaud", "song_id": "SOUPIRU12A6D4FA1E1", "title": "Der Kleine Dompfaff", "duration": 152.92036, "year": 0}"#;

fn next_song_line(song: &str, user_id: i64) -> String {
    format!(
        r#"{{"artist":"Des'ree","auth":"Logged In","firstName":"Kaylee","gender":"F","itemInSession":1,"lastName":"Summers","length":246.30812,"level":"free","location":"Phoenix-Mesa-Scottsdale, AZ","method":"PUT","page":"NextSong","registration":1540344794796.0,"sessionId":139,"song":"{song}","status":200,"ts":1541106106796,"userId":{user_id},"userAgent":"Mozilla/5.0"}}"#
    )
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_parse_song_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "song.json", SONG_JSON);

    let record = parse_song_file(&path).unwrap();
    assert_eq!(record.song_id, "SOUPIRU12A6D4FA1E1");
    assert_eq!(record.title, "Der Kleine Dompfaff");
    assert_eq!(record.artist_id, "ARJIE2Y1187B994AB7");
    assert_eq!(record.year, 0);
    assert_eq!(record.duration, 152.92036);
    assert_eq!(record.artist_name, "Line Renaud");
    assert_eq!(record.artist_location, "");
    assert!(record.artist_latitude.is_none());
    assert!(record.artist_longitude.is_none());
}

#[test]
fn test_parse_song_file_uses_first_record_only() {
    let dir = TempDir::new().unwrap();
    let two = format!("{SONG_JSON}\n{}", SONG_JSON.replace("SOUPIRU12A6D4FA1E1", "SOOTHER"));
    let path = write_file(&dir, "songs.json", &two);

    let record = parse_song_file(&path).unwrap();
    assert_eq!(record.song_id, "SOUPIRU12A6D4FA1E1");
}

#[test]
fn test_parse_song_file_missing_field() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.json", r#"{"song_id": "S1", "title": "No Artist"}"#);

    let err = parse_song_file(&path).unwrap_err();
    assert!(matches!(err, CoreError::RecordParse { .. }));
}

#[test]
fn test_parse_song_file_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.json", "not json at all");

    let err = parse_song_file(&path).unwrap_err();
    assert!(matches!(err, CoreError::RecordParse { .. }));
}

#[test]
fn test_parse_song_file_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.json", "  \n");

    let err = parse_song_file(&path).unwrap_err();
    assert!(matches!(err, CoreError::EmptySongFile { .. }));
}

#[test]
fn test_parse_event_file_filters_on_page() {
    let dir = TempDir::new().unwrap();
    let content = format!(
        "{}\n{}\n{}\n",
        next_song_line("You Gotta Be", 30),
        r#"{"page":"Home","ts":1541106106796,"userId":30}"#,
        next_song_line("Kissing You", 30),
    );
    let path = write_file(&dir, "events.json", &content);

    let records = parse_event_file(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].song.as_deref(), Some("You Gotta Be"));
    assert_eq!(records[1].song.as_deref(), Some("Kissing You"));
    assert_eq!(records[0].user_id, 30);
    assert_eq!(records[0].session_id, 139);
}

#[test]
fn test_parse_event_file_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let content = format!("\n{}\n\n", next_song_line("You Gotta Be", 30));
    let path = write_file(&dir, "events.json", &content);

    assert_eq!(parse_event_file(&path).unwrap().len(), 1);
}

#[test]
fn test_parse_event_file_empty_yields_no_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "events.json", "");

    assert!(parse_event_file(&path).unwrap().is_empty());
}

#[test]
fn test_parse_event_file_non_qualifying_missing_fields_ok() {
    // Non-NextSong lines legitimately lack song fields; only the page
    // field matters before they are discarded.
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "events.json", r#"{"page":"Login"}"#);

    assert!(parse_event_file(&path).unwrap().is_empty());
}

#[test]
fn test_parse_event_file_qualifying_missing_field_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "events.json", r#"{"page":"NextSong","ts":1541106106796}"#);

    let err = parse_event_file(&path).unwrap_err();
    assert!(matches!(err, CoreError::RecordParse { .. }));
}

#[test]
fn test_parse_event_file_malformed_line_fails() {
    let dir = TempDir::new().unwrap();
    let content = format!("{}\n{{broken\n", next_song_line("You Gotta Be", 30));
    let path = write_file(&dir, "events.json", &content);

    let err = parse_event_file(&path).unwrap_err();
    assert!(matches!(err, CoreError::RecordParse { .. }));
}
