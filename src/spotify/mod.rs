//! # Spotify Integration Module
//!
//! Read-only client for the Spotify Web API endpoints used by the exporter.
//! It handles the HTTP communication, bearer authentication and payload
//! normalization for the provider-A pipeline.
//!
//! ## Core Modules
//!
//! - [`playlist`] - Cursor-paginated retrieval of a playlist's track listing.
//!   Spotify pages carry a server-supplied `next` URL; the fetch loop follows
//!   it until it is absent or empty, accumulating all items, then normalizes
//!   the raw payload into the common [`crate::types::Track`] shape.
//! - [`artists`] - Artist endpoint lookup used as the genre fallback when the
//!   primary metadata provider yields nothing usable.
//!
//! ## Error Handling
//!
//! Playlist fetching sits in the fatal tier: any transport or HTTP failure is
//! propagated as `reqwest::Error` and aborts the whole run at the CLI layer.
//! The artist-genre lookup is an enrichment call and therefore recoverable;
//! its errors are handled (logged and degraded) by the caller in
//! [`crate::metadata`].
//!
//! ## API Coverage
//!
//! - `GET /playlists/{id}/tracks` - playlist track listing with pagination
//! - `GET /artists/{id}` - artist metadata including genre tags

pub mod artists;
pub mod playlist;
