//! # CLI Module
//!
//! User-facing command implementations. Each subcommand runs the full batch
//! pipeline for one provider:
//!
//! - [`spotify_report`] - Cursor-paginated Spotify fetch, per-track genre
//!   (Last.fm with Spotify artist-tag fallback) and tempo (GetSongBPM)
//!   enrichment with a fixed one-second pause after every processed track.
//! - [`deezer_report`] - Single bulk Deezer fetch, album-genre enrichment
//!   through the memoization cache with a Last.fm fallback; the pause is
//!   only inserted when the fallback call was actually made.
//!
//! Both commands end by sorting the records case-insensitively by
//! (genre, artist, title) and writing the CSV report in one pass.
//!
//! ## Error Handling Philosophy
//!
//! Missing configuration and playlist fetch failures are fatal and terminate
//! the run via `error!` before or instead of producing output. Every
//! per-track enrichment failure is recoverable: it is logged via `warning!`
//! and degrades to the "Unknown" sentinel, and the run continues.

mod deezer;
mod spotify;

pub use deezer::deezer_report;
pub use spotify::spotify_report;

use std::time::Duration;

/// Fixed pause between throttled enrichment steps.
pub(crate) const ENRICH_DELAY: Duration = Duration::from_secs(1);
