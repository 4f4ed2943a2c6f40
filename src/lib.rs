//! Playlist CSV Exporter Library
//!
//! This library fetches the track listing of a music-streaming playlist
//! (Spotify or Deezer), enriches each track with genre and tempo metadata
//! from secondary sources, and writes a sorted CSV report. It is a
//! single-shot batch tool: one invocation, one output file, no state kept
//! between runs.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `deezer` - Deezer API client (playlist and album endpoints)
//! - `management` - In-memory album-genre memoization
//! - `metadata` - Secondary metadata providers (Last.fm, GetSongBPM)
//! - `report` - Output records and CSV serialization
//! - `spotify` - Spotify Web API client (playlist and artist endpoints)
//! - `types` - Data structures and type definitions
//! - `utils` - Duration formatting and sorting helpers
//!
//! # Example
//!
//! ```
//! use tracksheet::{cli, config};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await;
//!     // Dispatch to cli::spotify_report / cli::deezer_report...
//! }
//! ```

pub mod cli;
pub mod config;
pub mod deezer;
pub mod management;
pub mod metadata;
pub mod report;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}...", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully.
///
/// # Example
///
/// ```
/// success!("Report written to {}", path);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 immediately after printing.
/// Reserved for the fatal tier: missing required configuration and playlist
/// fetch failures.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues: a failed enrichment call degrades to a
/// placeholder value and the run continues.
///
/// # Example
///
/// ```
/// warning!("Genre lookup failed for {}: {}", artist, e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
