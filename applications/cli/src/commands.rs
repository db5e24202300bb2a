//! Catalog and listening-log queries behind the subcommands

use crate::error::{CliError, Result};
use hearth_core::{Catalog, Episode, EpisodeId};
use hearth_storage::{EpisodeView, ListeningLog};

/// Look up one episode or fail with `EpisodeNotFound`
pub async fn resolve_episode(catalog: &dyn Catalog, id: &str) -> Result<Episode> {
    catalog
        .fetch_episode_by_id(&EpisodeId::new(id))
        .await?
        .ok_or_else(|| CliError::EpisodeNotFound(id.to_string()))
}

/// Episodes for a focused session: by theme within the area when given
pub async fn focus_selection(
    catalog: &dyn Catalog,
    area: &str,
    theme: Option<&str>,
) -> Result<Vec<Episode>> {
    let episodes = match theme {
        Some(theme) => catalog.fetch_episodes_by_theme(theme, area).await?,
        None => catalog.fetch_episodes_by_area(area).await?,
    };

    if episodes.is_empty() {
        let selection = theme.map_or_else(|| area.to_string(), |t| format!("{area}/{t}"));
        return Err(CliError::EmptySelection(selection));
    }
    Ok(episodes)
}

/// Area listing decorated with progress and favorites
pub async fn list_area(
    catalog: &dyn Catalog,
    log: &ListeningLog,
    area: &str,
) -> Result<Vec<EpisodeView>> {
    let episodes = catalog.fetch_episodes_by_area(area).await?;
    Ok(log.decorate(&episodes))
}

/// One line per episode: favorite marker, id, title, percent played
pub fn format_view(view: &EpisodeView) -> String {
    let marker = if view.is_favorite { '*' } else { ' ' };
    let id = view.episode.id.as_str();
    let percent = view.progress_percent();
    if percent > 0.0 {
        format!("{} {:<16} {} [{:.0}%]", marker, id, view.episode.title, percent)
    } else {
        format!("{} {:<16} {}", marker, id, view.episode.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{InMemoryCatalog, ProgressRecord};
    use hearth_storage::MemoryBackend;
    use std::sync::Arc;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            Episode::new("sci-1", "Stars", "https://cdn/1.mp3", "science").with_theme("space"),
            Episode::new("sci-2", "Cells", "https://cdn/2.mp3", "science").with_theme("biology"),
            Episode::new("his-1", "Rome", "https://cdn/3.mp3", "history"),
        ])
    }

    #[tokio::test]
    async fn resolves_known_episode() {
        let episode = resolve_episode(&catalog(), "his-1").await.unwrap();
        assert_eq!(episode.title, "Rome");

        let err = resolve_episode(&catalog(), "nope").await.unwrap_err();
        assert!(matches!(err, CliError::EpisodeNotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn focus_selection_filters_by_theme() {
        let all = focus_selection(&catalog(), "science", None).await.unwrap();
        assert_eq!(all.len(), 2);

        let space = focus_selection(&catalog(), "science", Some("space")).await.unwrap();
        assert_eq!(space.len(), 1);
        assert_eq!(space[0].id.as_str(), "sci-1");

        let err = focus_selection(&catalog(), "history", Some("space")).await.unwrap_err();
        assert!(matches!(err, CliError::EmptySelection(s) if s == "history/space"));
    }

    #[tokio::test]
    async fn list_area_decorates_from_log() {
        let log = ListeningLog::new(Arc::new(MemoryBackend::new()));
        let id = EpisodeId::new("sci-2");
        log.progress().set(&id, ProgressRecord::from_position(id.clone(), 15.0, 60.0));
        log.toggle_favorite(&id);

        let views = list_area(&catalog(), &log, "science").await.unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(format_view(&views[0]), "  sci-1            Stars");
        assert_eq!(format_view(&views[1]), "* sci-2            Cells [25%]");
    }
}
