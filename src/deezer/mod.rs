//! # Deezer Integration Module
//!
//! Read-only client for the Deezer API endpoints used by the exporter. All
//! endpoints are unauthenticated.
//!
//! ## Core Modules
//!
//! - [`playlist`] - Single bulk fetch of a playlist's track listing (one
//!   request with a large limit, no pagination), normalized into the common
//!   [`crate::types::Track`] shape. Deezer reports durations in seconds;
//!   normalization converts them to milliseconds.
//! - [`albums`] - Album resource lookup for its genre list. Results are
//!   memoized per album id by [`crate::management::AlbumGenreManager`] so
//!   tracks sharing an album trigger exactly one network call.
//!
//! ## Error Handling
//!
//! The playlist fetch is fatal on failure and aborts the run at the CLI
//! layer. The album-genre lookup is recoverable; a failure degrades to an
//! empty genre list and never propagates past its own boundary.

pub mod albums;
pub mod playlist;
