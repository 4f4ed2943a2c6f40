//! # Secondary Metadata Module
//!
//! Genre and tempo enrichment from third-party metadata services. These
//! lookups sit in the recoverable error tier: every call is independently
//! fault-tolerant, a network or parse failure is logged and converted into
//! the "Unknown" sentinel (or `None` for tempo) and the run continues.
//!
//! ## Core Modules
//!
//! - [`lastfm`] - Last.fm top-tag lookup by artist name, the primary genre
//!   source for both providers.
//! - [`songbpm`] - GetSongBPM track search matched on artist + title, the
//!   tempo source for the Spotify path.
//!
//! The fallback order for the Spotify path is fixed: Last.fm first, then the
//! Spotify artist endpoint's own genre tags, then the sentinel.

pub mod lastfm;
pub mod songbpm;

use crate::{spotify, types::UNKNOWN, warning};

/// Picks the final genre string out of a primary result and fallback tags.
///
/// The primary value wins when it is usable (non-empty and not the
/// sentinel); otherwise the first fallback tag is taken; otherwise the
/// "Unknown" sentinel.
pub fn choose_genre(primary: Option<String>, fallback_tags: &[String]) -> String {
    match primary {
        Some(genre) if !genre.is_empty() && genre != UNKNOWN => genre,
        _ => fallback_tags
            .iter()
            .find(|tag| !tag.is_empty())
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string()),
    }
}

/// Resolves the genre for one track of the Spotify pipeline.
///
/// Queries Last.fm by exact artist name first; when that yields nothing
/// usable and an artist id is available, falls back to the Spotify artist
/// endpoint's genre tags. Returns the "Unknown" sentinel when neither source
/// provides a value.
///
/// Every underlying call is fault-tolerant: failures are logged via
/// `warning!` and treated as an absent result.
pub async fn resolve_genre(artist_name: &str, artist_id: Option<&str>, token: &str) -> String {
    let primary = match lastfm::top_artist_tag(artist_name).await {
        Ok(tag) => tag,
        Err(e) => {
            warning!("Genre lookup failed for {}: {}", artist_name, e);
            None
        }
    };

    let usable = matches!(&primary, Some(g) if !g.is_empty() && g != UNKNOWN);
    let fallback = match (usable, artist_id) {
        (false, Some(id)) => match spotify::artists::get_artist_genres(id, token).await {
            Ok(genres) => genres,
            Err(e) => {
                warning!("Artist genre fallback failed for {}: {}", artist_name, e);
                Vec::new()
            }
        },
        _ => Vec::new(),
    };

    choose_genre(primary, &fallback)
}

/// Resolves the tempo for one track of the Spotify pipeline.
///
/// Searches GetSongBPM by artist + title and parses the first tempo field
/// found. Returns `None` on no match, parse failure or any transport error.
pub async fn resolve_tempo(artist_name: &str, track_title: &str) -> Option<f64> {
    match songbpm::search_tempo(artist_name, track_title).await {
        Ok(tempo) => tempo,
        Err(e) => {
            warning!("Tempo lookup failed for {} - {}: {}", artist_name, track_title, e);
            None
        }
    }
}

/// Resolves the Last.fm fallback genre for one track of the Deezer pipeline.
///
/// Used only when the album-genre cache/API yielded no genres for the
/// track's album.
pub async fn resolve_fallback_genre(artist_name: &str) -> String {
    let primary = match lastfm::top_artist_tag(artist_name).await {
        Ok(tag) => tag,
        Err(e) => {
            warning!("Genre lookup failed for {}: {}", artist_name, e);
            None
        }
    };

    choose_genre(primary, &[])
}
