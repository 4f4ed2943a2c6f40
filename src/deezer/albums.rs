use reqwest::Client;

use crate::{config, types::DeezerAlbumResponse};

/// Retrieves the genre names attached to an album from the Deezer API.
///
/// Fetches the album resource and extracts all genre names. An album without
/// a genre list yields an empty vector.
///
/// # Arguments
///
/// * `album_id` - Deezer ID of the album
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<String>)` - The album's genre names, possibly empty
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Error Handling
///
/// This is an enrichment call; the caller converts the error into an empty
/// list (which is then cached) instead of aborting the run.
pub async fn get_album_genres(album_id: &str) -> Result<Vec<String>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/album/{id}",
        uri = &config::deezer_api_url(),
        id = album_id
    );

    let response = client.get(&api_url).send().await?.error_for_status()?;
    let album = response.json::<DeezerAlbumResponse>().await?;

    Ok(album
        .genres
        .map(|g| g.data.into_iter().map(|genre| genre.name).collect())
        .unwrap_or_default())
}
