//! Simulated audio device
//!
//! Stands in for a real media element. Time only moves when the host calls
//! [`SimulatedDevice::tick`], which returns the notifications a real element
//! would have delivered over that interval.

use hearth_core::Episode;
use hearth_playback::{AudioDevice, DeviceEvent, LoadToken, PlaybackError, Result};
use std::collections::HashMap;

#[derive(Debug)]
struct LoadedSource {
    token: LoadToken,
    duration: f64,
}

#[derive(Debug)]
pub struct SimulatedDevice {
    durations: HashMap<String, f64>,
    default_duration: f64,

    source: Option<LoadedSource>,
    position: f64,
    playing: bool,

    volume: f32,
    muted: bool,
    rate: f32,
}

impl SimulatedDevice {
    pub fn new(default_duration: f64) -> Self {
        Self {
            durations: HashMap::new(),
            default_duration,
            source: None,
            position: 0.0,
            playing: false,
            volume: 1.0,
            muted: false,
            rate: 1.0,
        }
    }

    /// Use catalog durations where known
    pub fn with_episodes<'a>(mut self, episodes: impl IntoIterator<Item = &'a Episode>) -> Self {
        for episode in episodes {
            if let Some(duration) = episode.duration_seconds.filter(|d| d.is_finite() && *d > 0.0) {
                self.durations.insert(episode.audio_url.clone(), duration);
            }
        }
        self
    }

    /// Advance the clock by `elapsed_seconds` of wall time
    ///
    /// Elapsed time is scaled by the playback rate. Reaching the end yields a
    /// final time update followed by `Ended`.
    pub fn tick(&mut self, elapsed_seconds: f64) -> Vec<DeviceEvent> {
        let Some(source) = &self.source else {
            return Vec::new();
        };
        if !self.playing {
            return Vec::new();
        }

        self.position += elapsed_seconds * f64::from(self.rate);
        if self.position >= source.duration {
            self.position = source.duration;
            self.playing = false;
            return vec![
                DeviceEvent::time_update(source.token, self.position, source.duration),
                DeviceEvent::ended(source.token),
            ];
        }

        vec![DeviceEvent::time_update(source.token, self.position, source.duration)]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Effective output gain
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }
}

impl AudioDevice for SimulatedDevice {
    fn load(&mut self, url: &str, token: LoadToken) -> Result<()> {
        self.playing = false;
        self.position = 0.0;

        let supported = ["http://", "https://", "file://"]
            .iter()
            .any(|scheme| url.starts_with(scheme));
        if !supported {
            self.source = None;
            return Err(PlaybackError::device(format!("unsupported source: {url}")));
        }

        let duration = self
            .durations
            .get(url)
            .copied()
            .unwrap_or(self.default_duration);
        tracing::debug!("Simulated device loaded {} ({}s)", url, duration);
        self.source = Some(LoadedSource { token, duration });
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(PlaybackError::device("no source loaded"));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, position_seconds: f64) {
        let duration = self.source.as_ref().map_or(0.0, |s| s.duration);
        self.position = position_seconds.clamp(0.0, duration);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_playback_rate(&mut self, rate: f32) {
        self.rate = rate;
    }
}
