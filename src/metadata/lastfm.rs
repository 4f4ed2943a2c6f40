use reqwest::Client;

use crate::{config, types::LastfmTopTagsResponse};

/// Retrieves the top tag of an artist from the Last.fm API.
///
/// Queries `artist.gettoptags` with the exact artist name and returns the
/// first tag name, `None` when the artist is unknown to Last.fm or carries
/// no tags.
///
/// # Arguments
///
/// * `artist_name` - Artist name, matched exactly by Last.fm
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Option<String>)` - The first tag name, if any
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
pub async fn top_artist_tag(artist_name: &str) -> Result<Option<String>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/?method=artist.gettoptags&artist={artist}&api_key={key}&format=json",
        uri = &config::lastfm_api_url(),
        artist = urlencoding::encode(artist_name),
        key = &config::lastfm_api_key()
    );

    let response = client.get(&api_url).send().await?.error_for_status()?;
    let tags = response.json::<LastfmTopTagsResponse>().await?;

    Ok(tags
        .toptags
        .and_then(|t| t.tag.into_iter().next())
        .map(|tag| tag.name))
}
