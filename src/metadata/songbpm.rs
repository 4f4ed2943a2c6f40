use reqwest::Client;

use crate::{config, types::SongBpmSearchResponse};

/// Searches GetSongBPM for a track and returns its tempo.
///
/// Matches on song title + artist name via the combined search endpoint and
/// parses the first tempo field found.
///
/// # Arguments
///
/// * `artist_name` - Artist name used in the lookup expression
/// * `track_title` - Track title used in the lookup expression
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Option<f64>)` - The parsed tempo, `None` on no match or parse failure
/// - `Err(reqwest::Error)` - Network error, API error, or malformed payload
pub async fn search_tempo(
    artist_name: &str,
    track_title: &str,
) -> Result<Option<f64>, reqwest::Error> {
    let client = Client::new();
    let lookup = format!("song:{} artist:{}", track_title, artist_name);
    let api_url = format!(
        "{uri}/search/?type=both&lookup={lookup}&api_key={key}",
        uri = &config::songbpm_api_url(),
        lookup = urlencoding::encode(&lookup),
        key = &config::songbpm_api_key()
    );

    let response = client.get(&api_url).send().await?.error_for_status()?;
    let results = response.json::<SongBpmSearchResponse>().await?;

    Ok(results
        .search
        .into_iter()
        .filter_map(|entry| entry.tempo)
        .find_map(|tempo| tempo.parse::<f64>().ok()))
}
