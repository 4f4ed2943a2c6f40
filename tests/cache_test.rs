use std::cell::Cell;

use tracksheet::management::AlbumGenreManager;

#[tokio::test]
async fn test_cache_populates_once_per_album() {
    let mut cache = AlbumGenreManager::new();
    let calls = Cell::new(0);

    let populate = || async {
        calls.set(calls.get() + 1);
        vec!["Rock".to_string()]
    };

    // Two tracks sharing the same album id trigger exactly one population call
    let (first, cached) = cache.get_or_fetch("album-1", populate).await;
    assert_eq!(first, vec!["Rock"]);
    assert!(!cached);

    let (second, cached) = cache
        .get_or_fetch("album-1", || async {
            calls.set(calls.get() + 1);
            vec!["Something else".to_string()]
        })
        .await;
    assert_eq!(second, vec!["Rock"]);
    assert!(cached);
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn test_cache_stores_empty_results() {
    let mut cache = AlbumGenreManager::new();
    let calls = Cell::new(0);

    // A failed lookup degrades to an empty list, which is cached too
    let (first, _) = cache
        .get_or_fetch("album-2", || async {
            calls.set(calls.get() + 1);
            Vec::new()
        })
        .await;
    assert!(first.is_empty());

    let (second, cached) = cache
        .get_or_fetch("album-2", || async {
            calls.set(calls.get() + 1);
            vec!["Late".to_string()]
        })
        .await;
    assert!(second.is_empty());
    assert!(cached);
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn test_cache_keys_are_independent() {
    let mut cache = AlbumGenreManager::new();

    let (a, _) = cache
        .get_or_fetch("album-a", || async { vec!["Rock".to_string()] })
        .await;
    let (b, cached) = cache
        .get_or_fetch("album-b", || async { vec!["Pop".to_string()] })
        .await;

    assert_eq!(a, vec!["Rock"]);
    assert_eq!(b, vec!["Pop"]);
    assert!(!cached);
    assert_eq!(cache.len(), 2);
    assert!(!cache.is_empty());
}
