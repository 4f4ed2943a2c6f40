//! CSV report serialization.
//!
//! Records are written once, after the whole playlist has been enriched and
//! sorted; there is no streaming or incremental write. The two run variants
//! share the first four columns but differ in the order of the duration
//! columns, a divergence carried over intentionally from the per-provider
//! report formats.

use std::path::Path;

use crate::{Res, types::OutputRecord};

/// Column layout of the report, one variant per provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CsvLayout {
    /// Spotify order: formatted duration before whole seconds.
    DurationThenSeconds,
    /// Deezer order: whole seconds before formatted duration.
    SecondsThenDuration,
}

impl CsvLayout {
    fn header(&self) -> [&'static str; 6] {
        match self {
            CsvLayout::DurationThenSeconds => {
                ["Title", "Artist", "Album", "Genre", "Duration", "Duration (s)"]
            }
            CsvLayout::SecondsThenDuration => {
                ["Title", "Artist", "Album", "Genre", "Duration (s)", "Duration"]
            }
        }
    }

    fn row(&self, record: &OutputRecord) -> [String; 6] {
        let secs = record
            .duration_secs
            .map(|s| s.to_string())
            .unwrap_or_default();

        match self {
            CsvLayout::DurationThenSeconds => [
                record.title.clone(),
                record.artist.clone(),
                record.album.clone(),
                record.genre.clone(),
                record.duration.clone(),
                secs,
            ],
            CsvLayout::SecondsThenDuration => [
                record.title.clone(),
                record.artist.clone(),
                record.album.clone(),
                record.genre.clone(),
                secs,
                record.duration.clone(),
            ],
        }
    }
}

/// Writes the sorted records as a UTF-8, comma-delimited CSV file with a
/// header row, one data row per track.
pub fn write_report(path: &Path, records: &[OutputRecord], layout: CsvLayout) -> Res<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(layout.header())?;
    for record in records {
        writer.write_record(layout.row(record))?;
    }
    writer.flush()?;
    Ok(())
}
