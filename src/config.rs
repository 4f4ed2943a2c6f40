//! Configuration management for the playlist CSV exporter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Required values (playlist ids,
//! the Spotify bearer token) are surfaced as `Result`s so the CLI layer can
//! abort with a clear message before any network call is made; optional
//! values fall back to public defaults.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Public shared Last.fm API key used when `LASTFM_API_KEY` is not set.
const DEFAULT_LASTFM_API_KEY: &str = "b25b959554ed76058ac220b7b2e0a026";

/// Public shared GetSongBPM API key used when `SONGBPM_API_KEY` is not set.
const DEFAULT_SONGBPM_API_KEY: &str = "1a8bea7d8b3f8e5c4a46";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for the `.env` file in:
/// - Linux: `~/.local/share/tracksheet/.env`
/// - macOS: `~/Library/Application Support/tracksheet/.env`
/// - Windows: `%LOCALAPPDATA%/tracksheet/.env`
///
/// Falls back to a `.env` file in the current working directory. A missing
/// file is not an error; variables already present in the environment always
/// take precedence.
pub async fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tracksheet/.env");
    if let Some(parent) = path.parent() {
        let _ = async_fs::create_dir_all(parent).await;
    }

    if dotenv::from_path(path).is_err() {
        let _ = dotenv::dotenv();
    }
}

fn required(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("Missing required environment variable: {}", name))
}

/// Returns the Spotify playlist id to export.
///
/// Retrieves the `SPOTIFY_PLAYLIST_ID` environment variable. Required for
/// the `spotify` subcommand; the run aborts before any network call when it
/// is absent.
pub fn spotify_playlist_id() -> Result<String, String> {
    required("SPOTIFY_PLAYLIST_ID")
}

/// Returns the bearer credential for Spotify Web API access.
///
/// Retrieves the `SPOTIFY_API_TOKEN` environment variable. Required for the
/// `spotify` subcommand.
///
/// # Security Note
///
/// The token should be kept confidential and never exposed in logs or
/// version control.
pub fn spotify_api_token() -> Result<String, String> {
    required("SPOTIFY_API_TOKEN")
}

/// Returns the Deezer playlist id to export.
///
/// Retrieves the `DEEZER_PLAYLIST_ID` environment variable. Required for the
/// `deezer` subcommand.
pub fn deezer_playlist_id() -> Result<String, String> {
    required("DEEZER_PLAYLIST_ID")
}

/// Returns the Last.fm API key.
///
/// Retrieves the `LASTFM_API_KEY` environment variable, falling back to a
/// public shared key when unset.
pub fn lastfm_api_key() -> String {
    env::var("LASTFM_API_KEY").unwrap_or_else(|_| DEFAULT_LASTFM_API_KEY.to_string())
}

/// Returns the GetSongBPM API key.
///
/// Retrieves the `SONGBPM_API_KEY` environment variable, falling back to a
/// public shared key when unset.
pub fn songbpm_api_key() -> String {
    env::var("SONGBPM_API_KEY").unwrap_or_else(|_| DEFAULT_SONGBPM_API_KEY.to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to the
/// production endpoint.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Deezer API base URL.
///
/// Retrieves the `DEEZER_API_URL` environment variable, falling back to the
/// production endpoint.
pub fn deezer_api_url() -> String {
    env::var("DEEZER_API_URL").unwrap_or_else(|_| "https://api.deezer.com".to_string())
}

/// Returns the Last.fm API base URL.
///
/// Retrieves the `LASTFM_API_URL` environment variable, falling back to the
/// production endpoint.
pub fn lastfm_api_url() -> String {
    env::var("LASTFM_API_URL").unwrap_or_else(|_| "https://ws.audioscrobbler.com/2.0".to_string())
}

/// Returns the GetSongBPM API base URL.
///
/// Retrieves the `SONGBPM_API_URL` environment variable, falling back to the
/// production endpoint.
pub fn songbpm_api_url() -> String {
    env::var("SONGBPM_API_URL").unwrap_or_else(|_| "https://api.getsongbpm.com".to_string())
}
