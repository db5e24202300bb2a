//! Shared test helpers for hearth-playback integration tests

#![allow(dead_code)]

use hearth_core::Episode;
use hearth_playback::{AudioDevice, DeviceEvent, LoadToken, PlaybackError, Result};

/// Mock media element with a manual clock
///
/// Sources whose URL contains `"broken"` are rejected at load time.
#[derive(Debug, Default)]
pub struct MockDevice {
    pub loads: Vec<String>,
    pub token: Option<LoadToken>,
    pub playing: bool,
    pub position: f64,
    pub pause_calls: usize,
    pub volume: f32,
    pub muted: bool,
    pub rate: f32,
}

impl MockDevice {
    /// Advance the clock and produce the time update a real element would
    pub fn advance(&mut self, seconds: f64, duration: f64) -> DeviceEvent {
        if self.playing {
            self.position = (self.position + seconds).min(duration);
        }
        DeviceEvent::time_update(self.current_token(), self.position, duration)
    }

    pub fn ended(&mut self) -> DeviceEvent {
        self.playing = false;
        DeviceEvent::ended(self.current_token())
    }

    pub fn current_token(&self) -> LoadToken {
        self.token.expect("no source loaded")
    }
}

impl AudioDevice for MockDevice {
    fn load(&mut self, url: &str, token: LoadToken) -> Result<()> {
        if url.contains("broken") {
            return Err(PlaybackError::device("unsupported source"));
        }
        self.loads.push(url.to_string());
        self.token = Some(token);
        self.position = 0.0;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pause_calls += 1;
    }

    fn seek(&mut self, position_seconds: f64) {
        self.position = position_seconds;
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

pub fn episode(id: &str) -> Episode {
    Episode::new(id, format!("Episode {id}"), format!("https://cdn.example/{id}.mp3"), "science")
}

pub fn episodes(ids: &[&str]) -> Vec<Episode> {
    ids.iter().map(|id| episode(id)).collect()
}
