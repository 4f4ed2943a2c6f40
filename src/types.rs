use serde::Deserialize;
use tabled::Tabled;

/// Placeholder substituted whenever a value cannot be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder id for missing artist/album references.
pub const UNKNOWN_ID: &str = "unknown";

/// Normalized track shape shared by both provider adapters.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub tempo: Option<f64>,
    pub duration_ms: Option<u64>,
    pub artist: TrackArtist,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct TrackAlbum {
    pub id: String,
    pub title: String,
}

impl TrackArtist {
    pub fn unknown() -> Self {
        Self {
            id: UNKNOWN_ID.to_string(),
            name: UNKNOWN.to_string(),
        }
    }
}

impl TrackAlbum {
    pub fn unknown() -> Self {
        Self {
            id: UNKNOWN_ID.to_string(),
            title: UNKNOWN.to_string(),
        }
    }
}

// --- Spotify payloads ---

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPlaylistTracksResponse {
    pub items: Vec<SpotifyPlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPlaylistItem {
    pub track: Option<SpotifyTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub id: Option<String>,
    pub name: String,
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub artists: Vec<SpotifyArtistRef>,
    pub album: Option<SpotifyAlbumRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtistRef {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbumRef {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtistResponse {
    #[serde(default)]
    pub genres: Vec<String>,
}

// --- Deezer payloads ---

#[derive(Debug, Clone, Deserialize)]
pub struct DeezerPlaylistTracksResponse {
    pub data: Vec<DeezerTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeezerTrack {
    pub id: u64,
    pub title: String,
    /// Track length in seconds; normalized to milliseconds by the adapter.
    pub duration: Option<u64>,
    pub artist: Option<DeezerArtistRef>,
    pub album: Option<DeezerAlbumRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeezerArtistRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeezerAlbumRef {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeezerAlbumResponse {
    #[serde(default)]
    pub genres: Option<DeezerGenreList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeezerGenreList {
    #[serde(default)]
    pub data: Vec<DeezerGenre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeezerGenre {
    pub name: String,
}

// --- Last.fm payloads ---

#[derive(Debug, Clone, Deserialize)]
pub struct LastfmTopTagsResponse {
    pub toptags: Option<LastfmTopTags>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastfmTopTags {
    #[serde(default)]
    pub tag: Vec<LastfmTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastfmTag {
    pub name: String,
}

// --- GetSongBPM payloads ---

#[derive(Debug, Clone, Deserialize)]
pub struct SongBpmSearchResponse {
    #[serde(default)]
    pub search: Vec<SongBpmEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongBpmEntry {
    pub tempo: Option<String>,
}

/// Terminal artifact of the pipeline; one CSV row per track.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub duration: String,
    pub duration_secs: Option<u64>,
}

/// Row shape for the optional `--table` console preview.
#[derive(Tabled)]
pub struct TrackTableRow {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub duration: String,
    pub tempo: String,
}
