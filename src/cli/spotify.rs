use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::time::sleep;

use crate::{
    config, error, info, metadata,
    report::{self, CsvLayout},
    spotify, success,
    types::{TrackTableRow, UNKNOWN_ID},
    utils,
};

use super::ENRICH_DELAY;

/// Exports a Spotify playlist as a genre- and tempo-enriched CSV report.
///
/// Fetches the full track listing with cursor pagination, enriches every
/// track sequentially (one-second pause between tracks), sorts the records
/// and writes the CSV in one pass at the end.
pub async fn spotify_report(output: PathBuf, table: bool) {
    let playlist_id = match config::spotify_playlist_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };
    let token = match config::spotify_api_token() {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut tracks = match spotify::playlist::get_playlist_tracks(&playlist_id, &token).await {
        Ok(tracks) => tracks,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlist {}: {}", playlist_id, e);
        }
    };

    pb.finish_and_clear();
    info!("Fetched {} tracks from playlist {}", tracks.len(), playlist_id);

    let total = tracks.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut records = Vec::with_capacity(total);
    let mut table_rows: Vec<TrackTableRow> = Vec::new();

    for (i, track) in tracks.iter_mut().enumerate() {
        pb.set_message(track.title.clone());

        let artist_id = match track.artist.id.as_str() {
            UNKNOWN_ID => None,
            id => Some(id),
        };

        let genre = metadata::resolve_genre(&track.artist.name, artist_id, &token).await;
        track.tempo = metadata::resolve_tempo(&track.artist.name, &track.title).await;

        let record = utils::build_record(track, genre);
        if table {
            table_rows.push(TrackTableRow {
                title: record.title.clone(),
                artist: record.artist.clone(),
                genre: record.genre.clone(),
                duration: record.duration.clone(),
                tempo: track
                    .tempo
                    .map(|t| format!("{:.0}", t))
                    .unwrap_or_else(|| "-".to_string()),
            });
        }
        records.push(record);
        pb.inc(1);

        if i + 1 < total {
            sleep(ENRICH_DELAY).await;
        }
    }

    pb.finish_and_clear();

    utils::sort_records(&mut records);

    match report::write_report(&output, &records, CsvLayout::DurationThenSeconds) {
        Ok(()) => success!(
            "Report written to {} ({} tracks)",
            output.display(),
            records.len()
        ),
        Err(e) => error!("Failed to write report: {}", e),
    }

    if table {
        println!("{}", Table::new(table_rows));
    }
}
