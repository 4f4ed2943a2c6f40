use tracksheet::deezer::playlist::normalize_tracks;
use tracksheet::metadata::choose_genre;
use tracksheet::spotify::playlist::normalize_items;
use tracksheet::types::{
    DeezerAlbumResponse, DeezerPlaylistTracksResponse, SpotifyPlaylistTracksResponse,
};

#[test]
fn test_spotify_normalize_skips_null_track_items() {
    let payload = r#"{
        "items": [
            { "track": null },
            { "track": { "id": "t1", "name": "Song", "duration_ms": 65000,
                         "artists": [{ "id": "a1", "name": "Artist" }],
                         "album": { "id": "al1", "name": "Album" } } },
            { "track": null }
        ],
        "next": null
    }"#;

    let page: SpotifyPlaylistTracksResponse = serde_json::from_str(payload).unwrap();
    let tracks = normalize_items(page.items);

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, "t1");
    assert_eq!(tracks[0].title, "Song");
    assert_eq!(tracks[0].duration_ms, Some(65000));
    assert_eq!(tracks[0].artist.name, "Artist");
    assert_eq!(tracks[0].album.title, "Album");
}

#[test]
fn test_spotify_normalize_missing_artist_and_album() {
    // No artists array and no album object still produce a valid track with
    // "Unknown" placeholders
    let payload = r#"{
        "items": [
            { "track": { "id": null, "name": "Orphan", "duration_ms": null,
                         "album": null } }
        ],
        "next": ""
    }"#;

    let page: SpotifyPlaylistTracksResponse = serde_json::from_str(payload).unwrap();
    let tracks = normalize_items(page.items);

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, "unknown");
    assert_eq!(tracks[0].artist.id, "unknown");
    assert_eq!(tracks[0].artist.name, "Unknown");
    assert_eq!(tracks[0].album.id, "unknown");
    assert_eq!(tracks[0].album.title, "Unknown");
    assert_eq!(tracks[0].duration_ms, None);
}

#[test]
fn test_spotify_pagination_termination_conditions() {
    // The fetch loop stops on a null next...
    let last: SpotifyPlaylistTracksResponse =
        serde_json::from_str(r#"{ "items": [], "next": null }"#).unwrap();
    assert!(!matches!(last.next, Some(ref n) if !n.is_empty()));

    // ...and on an empty-string next
    let empty: SpotifyPlaylistTracksResponse =
        serde_json::from_str(r#"{ "items": [], "next": "" }"#).unwrap();
    assert!(!matches!(empty.next, Some(ref n) if !n.is_empty()));

    // ...but follows a populated next URL
    let more: SpotifyPlaylistTracksResponse = serde_json::from_str(
        r#"{ "items": [], "next": "https://api.spotify.com/v1/playlists/p/tracks?offset=100" }"#,
    )
    .unwrap();
    assert!(matches!(more.next, Some(ref n) if !n.is_empty()));
}

#[test]
fn test_deezer_normalize_converts_seconds_to_ms() {
    let payload = r#"{
        "data": [
            { "id": 1, "title": "Song", "duration": 65,
              "artist": { "id": 7, "name": "Artist" },
              "album": { "id": 9, "title": "Album" } }
        ]
    }"#;

    let page: DeezerPlaylistTracksResponse = serde_json::from_str(payload).unwrap();
    let tracks = normalize_tracks(page.data);

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, "1");
    assert_eq!(tracks[0].duration_ms, Some(65000));
    assert_eq!(tracks[0].artist.id, "7");
    assert_eq!(tracks[0].album.id, "9");
}

#[test]
fn test_deezer_normalize_missing_artist_and_album() {
    let payload = r#"{
        "data": [
            { "id": 2, "title": "Orphan", "duration": null }
        ]
    }"#;

    let page: DeezerPlaylistTracksResponse = serde_json::from_str(payload).unwrap();
    let tracks = normalize_tracks(page.data);

    assert_eq!(tracks[0].artist.id, "unknown");
    assert_eq!(tracks[0].artist.name, "Unknown");
    assert_eq!(tracks[0].album.title, "Unknown");
    assert_eq!(tracks[0].duration_ms, None);
}

#[test]
fn test_deezer_album_genre_extraction() {
    let payload = r#"{
        "genres": { "data": [ { "name": "Rock" }, { "name": "Indie" } ] }
    }"#;
    let album: DeezerAlbumResponse = serde_json::from_str(payload).unwrap();
    let genres: Vec<String> = album
        .genres
        .map(|g| g.data.into_iter().map(|genre| genre.name).collect())
        .unwrap_or_default();
    assert_eq!(genres, vec!["Rock", "Indie"]);

    // Album without a genre list yields an empty vector
    let bare: DeezerAlbumResponse = serde_json::from_str("{}").unwrap();
    assert!(bare.genres.is_none());
}

#[test]
fn test_choose_genre_primary_wins() {
    let genre = choose_genre(Some("rock".to_string()), &["pop".to_string()]);
    assert_eq!(genre, "rock");
}

#[test]
fn test_choose_genre_falls_back_to_tags() {
    // Empty or sentinel primary values are not usable
    let tags = vec!["pop".to_string(), "dance".to_string()];
    assert_eq!(choose_genre(None, &tags), "pop");
    assert_eq!(choose_genre(Some(String::new()), &tags), "pop");
    assert_eq!(choose_genre(Some("Unknown".to_string()), &tags), "pop");
}

#[test]
fn test_choose_genre_sentinel_when_nothing_usable() {
    assert_eq!(choose_genre(None, &[]), "Unknown");
    assert_eq!(choose_genre(Some(String::new()), &[String::new()]), "Unknown");
}
