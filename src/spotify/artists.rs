use reqwest::Client;

use crate::{config, types::SpotifyArtistResponse};

/// Retrieves the genre tags of an artist from the Spotify Web API.
///
/// Used as the fallback step of genre resolution when the primary metadata
/// provider returns nothing usable for an artist name.
///
/// # Arguments
///
/// * `artist_id` - Spotify ID of the artist
/// * `token` - Valid bearer credential for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<String>)` - The artist's genre tags, possibly empty
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Error Handling
///
/// This is an enrichment call; the caller catches the error, logs it and
/// degrades to the "Unknown" sentinel instead of aborting the run.
pub async fn get_artist_genres(
    artist_id: &str,
    token: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/artists/{id}",
        uri = &config::spotify_api_url(),
        id = artist_id
    );

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let artist = response.json::<SpotifyArtistResponse>().await?;
    Ok(artist.genres)
}
