use super::EpisodeId;
use serde::{Deserialize, Serialize};

/// A podcast episode as served by the remote catalog
///
/// Read-only to the playback core, which only looks at `id` and `audio_url`.
/// Field names follow the catalog's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Catalog identity
    pub id: EpisodeId,

    /// Display title
    pub title: String,

    /// Stream location handed to the audio device
    pub audio_url: String,

    /// Artwork location
    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// Area (top-level taxonomy bucket)
    pub area: String,

    /// Theme within the area
    #[serde(default)]
    pub theme: Option<String>,

    /// Duration advertised by the catalog, when known
    ///
    /// Playback never trusts this; the device reports the real duration.
    #[serde(default)]
    pub duration_seconds: Option<f64>,
}

impl Episode {
    /// Create an episode with the required catalog fields
    pub fn new(
        id: impl Into<EpisodeId>,
        title: impl Into<String>,
        audio_url: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            audio_url: audio_url.into(),
            thumbnail_url: None,
            area: area.into(),
            theme: None,
            duration_seconds: None,
        }
    }

    /// Set the theme
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set the thumbnail location
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Set the advertised duration
    #[must_use]
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }
}
