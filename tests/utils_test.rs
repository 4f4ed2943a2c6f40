use tracksheet::types::{OutputRecord, Track, TrackAlbum, TrackArtist};
use tracksheet::utils::*;

// Helper function to create a test track
fn create_test_track(title: &str, artist: &str, duration_ms: Option<u64>) -> Track {
    Track {
        id: format!("{}_id", title),
        title: title.to_string(),
        tempo: None,
        duration_ms,
        artist: TrackArtist {
            id: format!("{}_artist_id", artist),
            name: artist.to_string(),
        },
        album: TrackAlbum {
            id: format!("{}_album_id", title),
            title: format!("{} Album", title),
        },
    }
}

// Helper function to create a test output record
fn create_test_record(title: &str, artist: &str, genre: &str) -> OutputRecord {
    OutputRecord {
        title: title.to_string(),
        artist: artist.to_string(),
        album: "Album".to_string(),
        genre: genre.to_string(),
        duration: "3:00".to_string(),
        duration_secs: Some(180),
    }
}

#[test]
fn test_format_duration_basic() {
    assert_eq!(format_duration(Some(65000.0)), "1:05");
    assert_eq!(format_duration(Some(0.0)), "0:00");
    assert_eq!(format_duration(Some(59999.0)), "0:59");
    assert_eq!(format_duration(Some(600000.0)), "10:00");
}

#[test]
fn test_format_duration_same_whole_seconds() {
    // All ms values with the same whole-second count format identically
    assert_eq!(format_duration(Some(65000.0)), format_duration(Some(65001.0)));
    assert_eq!(format_duration(Some(65000.0)), format_duration(Some(65999.0)));
    assert_ne!(format_duration(Some(65999.0)), format_duration(Some(66000.0)));
}

#[test]
fn test_format_duration_unknown() {
    assert_eq!(format_duration(None), "Unknown");
    assert_eq!(format_duration(Some(f64::NAN)), "Unknown");
    assert_eq!(format_duration(Some(f64::INFINITY)), "Unknown");
    assert_eq!(format_duration(Some(f64::NEG_INFINITY)), "Unknown");
    assert_eq!(format_duration(Some(-1.0)), "Unknown");
}

#[test]
fn test_duration_secs() {
    assert_eq!(duration_secs(Some(65000.0)), Some(65));
    assert_eq!(duration_secs(Some(65999.0)), Some(65));
    assert_eq!(duration_secs(Some(0.0)), Some(0));
    assert_eq!(duration_secs(None), None);
    assert_eq!(duration_secs(Some(f64::NAN)), None);
    assert_eq!(duration_secs(Some(f64::INFINITY)), None);
}

#[test]
fn test_sort_records_case_insensitive_genre() {
    let mut records = vec![
        create_test_record("Song A", "Artist", "rock"),
        create_test_record("Song B", "Artist", "Pop"),
        create_test_record("Song C", "Artist", "pop"),
    ];

    sort_records(&mut records);

    // "Pop" and "pop" sort adjacent, before "rock"
    assert_eq!(records[0].genre, "Pop");
    assert_eq!(records[1].genre, "pop");
    assert_eq!(records[2].genre, "rock");
}

#[test]
fn test_sort_records_secondary_keys() {
    let mut records = vec![
        create_test_record("B Song", "zeta", "rock"),
        create_test_record("A Song", "Alpha", "rock"),
        create_test_record("a song", "alpha", "rock"),
        create_test_record("Other", "Alpha", "Pop"),
    ];

    sort_records(&mut records);

    assert_eq!(records[0].genre, "Pop");
    // Within "rock": artists ascending, then titles ascending
    assert_eq!(records[1].artist, "Alpha");
    assert_eq!(records[1].title, "A Song");
    assert_eq!(records[2].title, "a song");
    assert_eq!(records[3].artist, "zeta");
}

#[test]
fn test_sort_records_stable_on_full_tie() {
    let mut records = vec![
        create_test_record("Song", "Artist", "rock"),
        create_test_record("Song", "Artist", "rock"),
        create_test_record("Song", "Artist", "rock"),
    ];
    records[0].album = "first".to_string();
    records[1].album = "second".to_string();
    records[2].album = "third".to_string();

    sort_records(&mut records);

    // Original relative order preserved when all three keys tie
    assert_eq!(records[0].album, "first");
    assert_eq!(records[1].album, "second");
    assert_eq!(records[2].album, "third");
}

#[test]
fn test_build_record() {
    let track = create_test_track("Song", "Artist", Some(65000));
    let record = build_record(&track, "rock".to_string());

    assert_eq!(record.title, "Song");
    assert_eq!(record.artist, "Artist");
    assert_eq!(record.album, "Song Album");
    assert_eq!(record.genre, "rock");
    assert_eq!(record.duration, "1:05");
    assert_eq!(record.duration_secs, Some(65));
}

#[test]
fn test_build_record_unknown_duration() {
    let track = create_test_track("Song", "Artist", None);
    let record = build_record(&track, "rock".to_string());

    assert_eq!(record.duration, "Unknown");
    assert_eq!(record.duration_secs, None);
}

#[test]
fn test_build_record_empty_genre_gets_sentinel() {
    let track = create_test_track("Song", "Artist", Some(1000));
    let record = build_record(&track, String::new());

    assert_eq!(record.genre, "Unknown");
}

#[test]
fn test_build_record_deezer_normalized_seconds() {
    // A 65 s Deezer track is normalized to 65000 ms by its adapter and
    // formats exactly like the Spotify equivalent
    let track = create_test_track("Song", "Artist", Some(65 * 1000));
    let record = build_record(&track, "rap".to_string());

    assert_eq!(record.duration, "1:05");
    assert_eq!(record.duration_secs, Some(65));
}
