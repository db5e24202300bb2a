//! Platform-agnostic audio device trait
//!
//! Abstracts the single media element that actually produces sound
//! (an HTML audio element, a native player, a simulated clock in tests).

use crate::error::Result;

/// Identifies one `load` on the device
///
/// Every `PlaybackEngine::play` issues a new token. Device notifications
/// carry the token of the load they belong to, so reports from a source that
/// has since been replaced can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(pub u64);

/// Notification from the device back to the engine
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceEvent {
    /// Load this notification belongs to
    pub token: LoadToken,
    pub kind: DeviceEventKind,
}

impl DeviceEvent {
    pub fn time_update(token: LoadToken, current_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            token,
            kind: DeviceEventKind::TimeUpdate {
                current_seconds,
                duration_seconds,
            },
        }
    }

    pub fn ended(token: LoadToken) -> Self {
        Self {
            token,
            kind: DeviceEventKind::Ended,
        }
    }

    pub fn failed(token: LoadToken, reason: impl Into<String>) -> Self {
        Self {
            token,
            kind: DeviceEventKind::Failed {
                reason: reason.into(),
            },
        }
    }
}

/// What the device is reporting
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEventKind {
    /// Periodic elapsed-time report
    ///
    /// `duration_seconds` may be 0 or NaN while metadata is still loading.
    TimeUpdate {
        current_seconds: f64,
        duration_seconds: f64,
    },

    /// Natural end of stream
    Ended,

    /// Playback could not start or broke mid-stream
    Failed { reason: String },
}

/// The underlying audio device
///
/// Requests return immediately; the device confirms (or fails) later through
/// `DeviceEvent`s delivered on the same event loop. Only `load` and `play`
/// can be rejected synchronously.
pub trait AudioDevice {
    /// Replace the current source
    fn load(&mut self, url: &str, token: LoadToken) -> Result<()>;

    /// Start or resume the loaded source
    fn play(&mut self) -> Result<()>;

    /// Pause without unloading
    fn pause(&mut self);

    /// Move the play head
    fn seek(&mut self, position_seconds: f64);

    /// Linear volume 0.0-1.0
    fn set_volume(&mut self, volume: f32);

    /// Mute without touching the volume
    fn set_muted(&mut self, muted: bool);

    fn set_playback_rate(&mut self, rate: f32);
}

impl<T: AudioDevice + ?Sized> AudioDevice for Box<T> {
    fn load(&mut self, url: &str, token: LoadToken) -> Result<()> {
        (**self).load(url, token)
    }

    fn play(&mut self) -> Result<()> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn seek(&mut self, position_seconds: f64) {
        (**self).seek(position_seconds);
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted);
    }

    fn set_playback_rate(&mut self, rate: f32) {
        (**self).set_playback_rate(rate);
    }
}

/// Device that records every request, for unit tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingDevice {
    pub loaded: Vec<(String, LoadToken)>,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub seeks: Vec<f64>,
    pub volume: Option<f32>,
    pub muted: Option<bool>,
    pub rate: Option<f32>,
    /// When set, `load` rejects URLs containing this substring
    pub reject_urls_containing: Option<String>,
}

#[cfg(test)]
impl RecordingDevice {
    pub fn last_token(&self) -> LoadToken {
        self.loaded.last().map(|(_, token)| *token).expect("nothing loaded")
    }
}

#[cfg(test)]
impl AudioDevice for RecordingDevice {
    fn load(&mut self, url: &str, token: LoadToken) -> Result<()> {
        if let Some(ref needle) = self.reject_urls_containing {
            if url.contains(needle.as_str()) {
                return Err(crate::error::PlaybackError::device("unsupported source"));
            }
        }
        self.loaded.push((url.to_string(), token));
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.play_calls += 1;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
    }

    fn seek(&mut self, position_seconds: f64) {
        self.seeks.push(position_seconds);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = Some(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = Some(muted);
    }

    fn set_playback_rate(&mut self, rate: f32) {
        self.rate = Some(rate);
    }
}
