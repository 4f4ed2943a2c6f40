use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::time::sleep;

use crate::{
    config, deezer, error, info,
    management::AlbumGenreManager,
    metadata,
    report::{self, CsvLayout},
    success,
    types::TrackTableRow,
    utils, warning,
};

use super::ENRICH_DELAY;

/// Exports a Deezer playlist as a genre-enriched CSV report.
///
/// Fetches the track listing in one bulk request, resolves album-level
/// genres through the per-run memoization cache with a Last.fm fallback,
/// sorts the records and writes the CSV in one pass at the end. The
/// one-second pause is only inserted after tracks whose genre actually
/// required the fallback network call.
pub async fn deezer_report(output: PathBuf, table: bool) {
    let playlist_id = match config::deezer_playlist_id() {
        Ok(id) => id,
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

    let tracks = match deezer::playlist::get_playlist_tracks(&playlist_id).await {
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

    let mut cache = AlbumGenreManager::new();
    let mut records = Vec::with_capacity(total);
    let mut table_rows: Vec<TrackTableRow> = Vec::new();

    for (i, track) in tracks.iter().enumerate() {
        pb.set_message(track.title.clone());

        let album_id = track.album.id.clone();
        let album_title = track.album.title.clone();
        let (genres, _cached) = cache
            .get_or_fetch(&track.album.id, || async move {
                match deezer::albums::get_album_genres(&album_id).await {
                    Ok(genres) => genres,
                    Err(e) => {
                        warning!("Album genre lookup failed for {}: {}", album_title, e);
                        Vec::new()
                    }
                }
            })
            .await;

        let mut throttle = false;
        let genre = if genres.is_empty() {
            throttle = true;
            metadata::resolve_fallback_genre(&track.artist.name).await
        } else {
            genres.join(", ")
        };

        let record = utils::build_record(track, genre);
        if table {
            table_rows.push(TrackTableRow {
                title: record.title.clone(),
                artist: record.artist.clone(),
                genre: record.genre.clone(),
                duration: record.duration.clone(),
                tempo: "-".to_string(),
            });
        }
        records.push(record);
        pb.inc(1);

        if throttle && i + 1 < total {
            sleep(ENRICH_DELAY).await;
        }
    }

    pb.finish_and_clear();

    utils::sort_records(&mut records);

    match report::write_report(&output, &records, CsvLayout::SecondsThenDuration) {
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
