use reqwest::Client;

use crate::{
    config,
    types::{SpotifyPlaylistItem, SpotifyPlaylistTracksResponse, Track, TrackAlbum, TrackArtist, UNKNOWN_ID},
};

/// Page size requested from the playlist-tracks endpoint (Spotify maximum).
const PAGE_LIMIT: u32 = 100;

/// Retrieves the complete track listing of a playlist from the Spotify Web API.
///
/// Starts at `/playlists/{id}/tracks` with a fixed page size and repeatedly
/// requests the server-supplied `next` URL until it is absent or empty,
/// accumulating all items. The raw items are normalized into the common
/// [`Track`] shape before returning.
///
/// # Arguments
///
/// * `playlist_id` - Spotify ID of the playlist to export
/// * `token` - Valid bearer credential for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - All normalized tracks of the playlist, in playlist order
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Error Handling
///
/// Any failure during pagination aborts the whole fetch; there is no retry
/// and no partial result. The caller reports the error and terminates the run.
pub async fn get_playlist_tracks(
    playlist_id: &str,
    token: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let client = Client::new();
    let mut url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = &config::spotify_api_url(),
        id = playlist_id,
        limit = PAGE_LIMIT
    );

    let mut items: Vec<SpotifyPlaylistItem> = Vec::new();

    loop {
        let response = client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let page = response.json::<SpotifyPlaylistTracksResponse>().await?;
        items.extend(page.items);

        match page.next {
            Some(next) if !next.is_empty() => url = next,
            _ => break,
        }
    }

    Ok(normalize_items(items))
}

/// Normalizes raw playlist items into the common [`Track`] shape.
///
/// Items without an underlying track object are skipped silently. A missing
/// artist or album collapses to the "unknown"/"Unknown" placeholders so the
/// rest of the pipeline never has to defend against absent fields.
pub fn normalize_items(items: Vec<SpotifyPlaylistItem>) -> Vec<Track> {
    items
        .into_iter()
        .filter_map(|item| item.track)
        .map(|track| {
            let artist = track
                .artists
                .first()
                .map(|a| TrackArtist {
                    id: a.id.clone().unwrap_or_else(|| UNKNOWN_ID.to_string()),
                    name: a.name.clone(),
                })
                .unwrap_or_else(TrackArtist::unknown);

            let album = track
                .album
                .map(|a| TrackAlbum {
                    id: a.id.unwrap_or_else(|| UNKNOWN_ID.to_string()),
                    title: a.name,
                })
                .unwrap_or_else(TrackAlbum::unknown);

            Track {
                id: track.id.unwrap_or_else(|| UNKNOWN_ID.to_string()),
                title: track.name,
                tempo: None,
                duration_ms: track.duration_ms,
                artist,
                album,
            }
        })
        .collect()
}
