use super::EpisodeId;
use serde::{Deserialize, Serialize};

/// Persisted listening progress for one episode
///
/// One record per episode with upsert semantics. `progress_percent` is always
/// derived from the position and duration at the time of the write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Episode this record belongs to
    pub episode_id: EpisodeId,

    /// 0..=100
    pub progress_percent: f64,

    /// Last known playback position, never negative
    pub last_position_seconds: f64,
}

impl ProgressRecord {
    /// Derive a record from a playback position
    ///
    /// The percentage is `position / duration * 100` clamped to `[0, 100]`.
    /// An unknown (zero or non-finite) duration yields 0%.
    pub fn from_position(
        episode_id: EpisodeId,
        position_seconds: f64,
        duration_seconds: f64,
    ) -> Self {
        let position = if position_seconds.is_finite() {
            position_seconds.max(0.0)
        } else {
            0.0
        };

        let progress_percent = if duration_seconds.is_finite() && duration_seconds > 0.0 {
            (position / duration_seconds * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            episode_id,
            progress_percent,
            last_position_seconds: position,
        }
    }

    /// Whether the episode has been started but not finished
    pub fn is_in_progress(&self) -> bool {
        self.progress_percent > 0.0 && self.progress_percent < 100.0
    }
}

/// Favorite flag for one episode
///
/// Absence of a record means "not favorite".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    /// Episode this record belongs to
    pub episode_id: EpisodeId,
    /// Latest toggle value
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_derived_and_clamped() {
        let id = EpisodeId::new("ep-1");

        let halfway = ProgressRecord::from_position(id.clone(), 60.0, 120.0);
        assert_eq!(halfway.progress_percent, 50.0);
        assert_eq!(halfway.last_position_seconds, 60.0);

        // Devices occasionally report a position slightly past the end
        let past_end = ProgressRecord::from_position(id.clone(), 121.5, 120.0);
        assert_eq!(past_end.progress_percent, 100.0);

        let negative = ProgressRecord::from_position(id, -3.0, 120.0);
        assert_eq!(negative.progress_percent, 0.0);
        assert_eq!(negative.last_position_seconds, 0.0);
    }

    #[test]
    fn unknown_duration_is_zero_percent() {
        let id = EpisodeId::new("ep-1");
        assert_eq!(ProgressRecord::from_position(id.clone(), 10.0, 0.0).progress_percent, 0.0);
        assert_eq!(
            ProgressRecord::from_position(id, 10.0, f64::NAN).progress_percent,
            0.0
        );
    }

    #[test]
    fn in_progress_excludes_untouched_and_finished() {
        let id = EpisodeId::new("ep-1");
        assert!(!ProgressRecord::from_position(id.clone(), 0.0, 100.0).is_in_progress());
        assert!(ProgressRecord::from_position(id.clone(), 1.0, 100.0).is_in_progress());
        assert!(!ProgressRecord::from_position(id, 100.0, 100.0).is_in_progress());
    }

    #[test]
    fn record_json_shape() {
        let record = ProgressRecord::from_position(EpisodeId::new("ep-1"), 30.0, 120.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["episodeId"], "ep-1");
        assert_eq!(json["progressPercent"], 25.0);
        assert_eq!(json["lastPositionSeconds"], 30.0);
    }
}
