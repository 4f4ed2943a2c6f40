use std::{collections::HashMap, future::Future};

/// In-memory memoization of album-level genre lookups.
///
/// Keyed by album identifier, unbounded, scoped to one run. Tracks sharing
/// an album trigger exactly one population call; the stored value (including
/// the empty-list result of a failed lookup) is returned unchanged for every
/// later hit. Single-threaded sequential use only.
pub struct AlbumGenreManager {
    cache: HashMap<String, Vec<String>>,
}

impl AlbumGenreManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Returns the cached genre list for `album_id`, populating it on first
    /// lookup. The second tuple element reports whether the value came from
    /// the cache, so the caller can skip throttling on hits.
    pub async fn get_or_fetch<F, Fut>(&mut self, album_id: &str, populate: F) -> (Vec<String>, bool)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<String>>,
    {
        if let Some(genres) = self.cache.get(album_id) {
            return (genres.clone(), true);
        }

        let genres = populate().await;
        self.cache.insert(album_id.to_string(), genres.clone());
        (genres, false)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for AlbumGenreManager {
    fn default() -> Self {
        Self::new()
    }
}
