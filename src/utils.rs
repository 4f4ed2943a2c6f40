use std::cmp::Ordering;

use crate::types::{OutputRecord, Track, UNKNOWN};

/// Formats a millisecond duration as `minutes:seconds`, seconds zero-padded
/// to two digits. Absent or non-finite input yields the "Unknown" sentinel.
pub fn format_duration(ms: Option<f64>) -> String {
    match ms {
        Some(v) if v.is_finite() && v >= 0.0 => {
            let total_secs = (v / 1000.0) as u64;
            format!("{}:{:02}", total_secs / 60, total_secs % 60)
        }
        _ => UNKNOWN.to_string(),
    }
}

/// Whole seconds of a millisecond duration, `None` when unknown.
pub fn duration_secs(ms: Option<f64>) -> Option<u64> {
    match ms {
        Some(v) if v.is_finite() && v >= 0.0 => Some((v / 1000.0) as u64),
        _ => None,
    }
}

/// Orders records by (genre, artist, title), each compared case-insensitively,
/// ascending. The sort is stable: records tying on all three keys keep their
/// original relative order.
pub fn sort_records(records: &mut Vec<OutputRecord>) {
    records.sort_by(|a, b| {
        match a.genre.to_lowercase().cmp(&b.genre.to_lowercase()) {
            Ordering::Equal => {}
            other => return other,
        }
        match a.artist.to_lowercase().cmp(&b.artist.to_lowercase()) {
            Ordering::Equal => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            other => other,
        }
    });
}

/// Builds the terminal record for one enriched track.
pub fn build_record(track: &Track, genre: String) -> OutputRecord {
    let ms = track.duration_ms.map(|v| v as f64);
    OutputRecord {
        title: track.title.clone(),
        artist: track.artist.name.clone(),
        album: track.album.title.clone(),
        genre: if genre.is_empty() {
            UNKNOWN.to_string()
        } else {
            genre
        },
        duration: format_duration(ms),
        duration_secs: duration_secs(ms),
    }
}
