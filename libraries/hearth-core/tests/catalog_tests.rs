//! In-memory catalog behaviour

use hearth_core::{Catalog, Episode, EpisodeId, HearthError, InMemoryCatalog};
use std::io::Write;

fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        Episode::new("a", "A", "https://cdn/a.mp3", "science").with_theme("space"),
        Episode::new("b", "B", "https://cdn/b.mp3", "history"),
        Episode::new("c", "C", "https://cdn/c.mp3", "science").with_theme("biology"),
        Episode::new("d", "D", "https://cdn/d.mp3", "science").with_theme("space"),
    ])
}

#[tokio::test]
async fn fetch_by_id_finds_episode() {
    let catalog = sample_catalog();

    let found = catalog.fetch_episode_by_id(&EpisodeId::new("c")).await.unwrap();
    assert_eq!(found.map(|e| e.title), Some("C".to_string()));

    let missing = catalog.fetch_episode_by_id(&EpisodeId::new("zz")).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn fetch_by_area_keeps_catalog_order() {
    let catalog = sample_catalog();

    let science = catalog.fetch_episodes_by_area("science").await.unwrap();
    let ids: Vec<&str> = science.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
}

#[tokio::test]
async fn fetch_by_theme_requires_matching_area() {
    let catalog = sample_catalog();

    let space = catalog.fetch_episodes_by_theme("space", "science").await.unwrap();
    assert_eq!(space.len(), 2);

    let wrong_area = catalog.fetch_episodes_by_theme("space", "history").await.unwrap();
    assert!(wrong_area.is_empty());
}

#[tokio::test]
async fn loads_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id":"x","title":"X","audioUrl":"https://cdn/x.mp3","area":"music","durationSeconds":90.0}}]"#
    )
    .unwrap();

    let catalog = InMemoryCatalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.episodes().len(), 1);
    assert_eq!(catalog.episodes()[0].duration_seconds, Some(90.0));

    let by_area = catalog.fetch_episodes_by_area("music").await.unwrap();
    assert_eq!(by_area[0].id, EpisodeId::new("x"));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = InMemoryCatalog::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, HearthError::Serialization(_)));
}

#[test]
fn empty_episode_id_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id":"","title":"X","audioUrl":"https://cdn/x.mp3","area":"music"}}]"#
    )
    .unwrap();

    let err = InMemoryCatalog::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, HearthError::Catalog(ref msg) if msg.starts_with("entry 0")));
}
