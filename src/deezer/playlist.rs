use reqwest::Client;

use crate::{
    config,
    types::{DeezerPlaylistTracksResponse, DeezerTrack, Track, TrackAlbum, TrackArtist},
};

/// Limit passed to the bulk fetch; large enough to cover one playlist in a
/// single request.
const BULK_LIMIT: u32 = 1000;

/// Retrieves the complete track listing of a playlist from the Deezer API.
///
/// Issues one unauthenticated request with a large limit and normalizes the
/// provider's native list into the common [`Track`] shape.
///
/// # Arguments
///
/// * `playlist_id` - Deezer ID of the playlist to export
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - All normalized tracks of the playlist, in playlist order
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Error Handling
///
/// A failed fetch aborts the whole run; there is no retry and no partial
/// result.
pub async fn get_playlist_tracks(playlist_id: &str) -> Result<Vec<Track>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/playlist/{id}/tracks?limit={limit}",
        uri = &config::deezer_api_url(),
        id = playlist_id,
        limit = BULK_LIMIT
    );

    let response = client.get(&api_url).send().await?.error_for_status()?;
    let page = response.json::<DeezerPlaylistTracksResponse>().await?;

    Ok(normalize_tracks(page.data))
}

/// Normalizes raw Deezer tracks into the common [`Track`] shape.
///
/// Durations arrive in seconds and are converted to milliseconds. A missing
/// artist or album collapses to the "unknown"/"Unknown" placeholders.
pub fn normalize_tracks(raw: Vec<DeezerTrack>) -> Vec<Track> {
    raw.into_iter()
        .map(|track| {
            let artist = track
                .artist
                .map(|a| TrackArtist {
                    id: a.id.to_string(),
                    name: a.name,
                })
                .unwrap_or_else(TrackArtist::unknown);

            let album = track
                .album
                .map(|a| TrackAlbum {
                    id: a.id.to_string(),
                    title: a.title,
                })
                .unwrap_or_else(TrackAlbum::unknown);

            Track {
                id: track.id.to_string(),
                title: track.title,
                tempo: None,
                duration_ms: track.duration.map(|secs| secs * 1000),
                artist,
                album,
            }
        })
        .collect()
}
