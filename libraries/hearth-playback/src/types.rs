//! Core types for playback management

use hearth_core::{Episode, EpisodeId};
use serde::{Deserialize, Serialize};

/// Playback rates offered by the UI
///
/// The engine accepts any positive rate; this is the set the transport
/// controls cycle through.
pub const PLAYBACK_RATES: [f32; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Default skip forward/backward interval
pub const DEFAULT_SKIP_INTERVAL_SECONDS: f64 = 15.0;

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f32,

    /// Initial playback rate (default: 1.0)
    pub playback_rate: f32,

    /// Seconds moved by `skip_forward` / `skip_backward` (default: 15)
    pub skip_interval_seconds: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            playback_rate: 1.0,
            skip_interval_seconds: DEFAULT_SKIP_INTERVAL_SECONDS,
        }
    }
}

/// Read-only view of the engine state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStateSnapshot {
    pub current_episode: Option<Episode>,
    pub is_playing: bool,
    pub volume: f32,
    pub is_muted: bool,
    pub current_time_seconds: f64,
    /// 0 until the device reports a duration
    pub duration_seconds: f64,
    pub playback_rate: f32,
    pub sleep_timer_remaining_seconds: Option<u32>,
}

impl PlaybackStateSnapshot {
    /// Percent of the current episode already played (0 when duration unknown)
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_time_seconds, self.duration_seconds)
    }
}

/// One elapsed-time report for the current episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTick {
    pub episode_id: EpisodeId,
    pub current_time_seconds: f64,
    pub duration_seconds: f64,
    pub progress_percent: f64,
}

impl TimeTick {
    /// Whether the device knows how long the episode is
    pub fn has_duration(&self) -> bool {
        self.duration_seconds.is_finite() && self.duration_seconds > 0.0
    }
}

/// Read-only view of the focused-mode playlist
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnapshot {
    pub episodes: Vec<Episode>,
    /// `None` exactly when `episodes` is empty
    pub cursor: Option<usize>,
    pub is_active: bool,
    pub auto_advance: bool,
}

impl PlaylistSnapshot {
    /// Episode under the cursor
    pub fn current(&self) -> Option<&Episode> {
        self.cursor.and_then(|index| self.episodes.get(index))
    }
}

pub(crate) fn progress_percent(current: f64, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        (current / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.playback_rate, 1.0);
        assert_eq!(config.skip_interval_seconds, 15.0);
    }

    #[test]
    fn snapshot_progress_percent() {
        let snapshot = PlaybackStateSnapshot {
            current_episode: None,
            is_playing: false,
            volume: 1.0,
            is_muted: false,
            current_time_seconds: 45.0,
            duration_seconds: 180.0,
            playback_rate: 1.0,
            sleep_timer_remaining_seconds: None,
        };
        assert_eq!(snapshot.progress_percent(), 25.0);

        let unknown = PlaybackStateSnapshot {
            duration_seconds: 0.0,
            ..snapshot
        };
        assert_eq!(unknown.progress_percent(), 0.0);
    }

    #[test]
    fn rates_include_normal_speed() {
        assert!(PLAYBACK_RATES.contains(&1.0));
        assert!(PLAYBACK_RATES.windows(2).all(|w| w[0] < w[1]));
    }
}
