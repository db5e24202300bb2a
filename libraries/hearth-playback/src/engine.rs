//! Playback engine - single source of audio truth
//!
//! Owns the one audio device, the transport state and the sleep timer.
//! Everything runs on the caller's thread: each method completes, emits its
//! events, and returns before any device notification is processed.

use crate::{
    device::{AudioDevice, DeviceEvent, DeviceEventKind, LoadToken},
    error::{PlaybackError, Result},
    events::{Listener, Listeners, PlaybackEvent, SubscriptionId},
    sleep_timer::{SleepTick, SleepTimer, SleepTimerState},
    types::{progress_percent, PlaybackConfig, PlaybackStateSnapshot, TimeTick},
    volume::Volume,
};
use hearth_core::{Episode, EpisodeId};

/// What a device notification turned into
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceOutcome {
    /// Token belonged to a replaced source
    Stale,

    /// Time state updated
    TimeUpdated(TimeTick),

    /// Current episode ended naturally
    Ended(EpisodeId),

    /// Current episode failed
    Failed(EpisodeId),
}

/// Central playback state machine
///
/// One instance per process is the rule, but nothing here is global: hosts
/// construct it and pass it where it is needed, tests build one per case.
pub struct PlaybackEngine<D: AudioDevice> {
    device: D,

    // State
    current_episode: Option<Episode>,
    is_playing: bool,
    current_time: f64,
    duration: f64,

    // Settings
    volume: Volume,
    playback_rate: f32,
    skip_interval: f64,

    sleep_timer: SleepTimer,

    // Token of the load `current_episode` was started with
    load_token: Option<LoadToken>,
    next_token: u64,

    listeners: Listeners<PlaybackEvent>,
}

impl<D: AudioDevice> PlaybackEngine<D> {
    /// Create an engine driving `device`
    ///
    /// The initial volume and rate are pushed to the device immediately.
    pub fn new(mut device: D, config: PlaybackConfig) -> Self {
        let volume = Volume::new(config.volume);
        let playback_rate = if config.playback_rate.is_finite() && config.playback_rate > 0.0 {
            config.playback_rate
        } else {
            tracing::warn!(
                "Ignoring configured playback rate {}, using 1.0",
                config.playback_rate
            );
            1.0
        };

        device.set_volume(volume.level());
        device.set_muted(volume.is_muted());
        device.set_playback_rate(playback_rate);

        Self {
            device,
            current_episode: None,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume,
            playback_rate,
            skip_interval: config.skip_interval_seconds.abs(),
            sleep_timer: SleepTimer::new(),
            load_token: None,
            next_token: 0,
            listeners: Listeners::new(),
        }
    }

    // ===== Subscriptions =====

    /// Register for every `PlaybackEvent`
    pub fn subscribe(
        &mut self,
        listener: impl Listener<PlaybackEvent> + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Returns whether the subscription existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // ===== Playback Control =====

    /// Play `episode` from the beginning
    ///
    /// Always restarts, even when `episode` is already current and playing.
    /// Any pending start of the previous source is abandoned: its device
    /// notifications will be ignored from here on.
    pub fn play(&mut self, episode: Episode) {
        self.next_token += 1;
        let token = LoadToken(self.next_token);
        self.load_token = Some(token);

        let same_episode = self
            .current_episode
            .as_ref()
            .is_some_and(|current| current.id == episode.id);
        if !same_episode {
            self.duration = 0.0;
        }
        self.current_time = 0.0;

        let episode_id = episode.id.clone();
        let url = episode.audio_url.clone();
        self.current_episode = Some(episode);

        if !same_episode {
            tracing::debug!("Episode changed to {}", episode_id);
            self.emit(PlaybackEvent::EpisodeChanged {
                episode_id: episode_id.clone(),
            });
        }

        let started = self.device.load(&url, token).and_then(|()| self.device.play());
        match started {
            Ok(()) => self.set_playing(true),
            Err(e) => self.fail(episode_id, e.to_string()),
        }
    }

    /// Pause without changing source or position
    pub fn pause(&mut self) -> Result<()> {
        if self.current_episode.is_none() {
            tracing::debug!("pause() with no episode loaded");
            return Err(PlaybackError::NoEpisodeLoaded);
        }

        if self.is_playing {
            self.device.pause();
            self.set_playing(false);
        }
        Ok(())
    }

    /// Resume the current episode where it was paused
    ///
    /// A finished episode resumes from the beginning.
    pub fn resume(&mut self) -> Result<()> {
        let Some(episode_id) = self.current_episode.as_ref().map(|e| e.id.clone()) else {
            tracing::debug!("resume() with no episode loaded");
            return Err(PlaybackError::NoEpisodeLoaded);
        };

        if self.is_playing {
            return Ok(());
        }

        if self.duration > 0.0 && self.current_time >= self.duration {
            self.current_time = 0.0;
            self.device.seek(0.0);
        }

        match self.device.play() {
            Ok(()) => self.set_playing(true),
            Err(e) => self.fail(episode_id, e.to_string()),
        }
        Ok(())
    }

    /// Toggle between `pause` and `resume`
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.is_playing {
            self.pause()
        } else {
            self.resume()
        }
    }

    // ===== Seek =====

    /// Seek to `time_seconds`, clamped to `[0, duration]`
    ///
    /// The new position is visible immediately, before the device confirms.
    pub fn seek(&mut self, time_seconds: f64) -> Result<()> {
        if self.current_episode.is_none() {
            return Err(PlaybackError::NoEpisodeLoaded);
        }

        // f64::max/min discard NaN, so a NaN target lands on 0
        let target = time_seconds.max(0.0).min(self.duration);
        self.current_time = target;
        self.device.seek(target);
        Ok(())
    }

    /// Skip forward by the configured interval
    pub fn skip_forward(&mut self) -> Result<()> {
        self.skip_forward_by(self.skip_interval)
    }

    /// Skip backward by the configured interval
    pub fn skip_backward(&mut self) -> Result<()> {
        self.skip_backward_by(self.skip_interval)
    }

    pub fn skip_forward_by(&mut self, delta_seconds: f64) -> Result<()> {
        self.seek(self.current_time + delta_seconds)
    }

    pub fn skip_backward_by(&mut self, delta_seconds: f64) -> Result<()> {
        self.seek(self.current_time - delta_seconds)
    }

    // ===== Volume & Rate =====

    /// Set volume, clamped to 0.0-1.0; mute state is unaffected
    pub fn set_volume(&mut self, volume: f32) {
        self.volume.set_level(volume);
        self.device.set_volume(self.volume.level());
        self.emit_volume_changed();
    }

    /// Mute or unmute; the volume level is preserved
    pub fn set_muted(&mut self, muted: bool) {
        self.volume.set_muted(muted);
        self.device.set_muted(muted);
        self.emit_volume_changed();
    }

    pub fn toggle_mute(&mut self) {
        self.set_muted(!self.volume.is_muted());
    }

    /// Set playback rate
    ///
    /// Any finite positive rate is passed through; `PLAYBACK_RATES` is what
    /// the UI offers.
    pub fn set_playback_rate(&mut self, rate: f32) -> Result<()> {
        if !(rate.is_finite() && rate > 0.0) {
            tracing::warn!("Rejected playback rate {}", rate);
            return Err(PlaybackError::InvalidPlaybackRate(rate));
        }

        self.playback_rate = rate;
        self.device.set_playback_rate(rate);
        self.emit(PlaybackEvent::RateChanged { rate });
        Ok(())
    }

    // ===== Sleep Timer =====

    /// Arm the sleep timer for `minutes`, or cancel it with `None`
    ///
    /// Re-arming replaces the remaining time. `Some(0)` cancels. Cancelling
    /// never touches playback.
    pub fn set_sleep_timer(&mut self, minutes: Option<u32>) {
        let changed = match minutes {
            Some(minutes) if minutes > 0 => {
                self.sleep_timer.arm(minutes.saturating_mul(60));
                tracing::debug!("Sleep timer armed for {} min", minutes);
                true
            }
            _ => self.sleep_timer.cancel(),
        };

        if changed {
            self.emit(PlaybackEvent::SleepTimerChanged {
                remaining_seconds: self.sleep_timer.remaining_seconds(),
            });
        }
    }

    /// Advance the sleep timer by one second
    ///
    /// Called by the host's one-second repeating task. At expiry playback is
    /// paused exactly once and the timer returns to idle. The countdown runs
    /// whether or not audio is playing.
    pub fn tick_sleep_timer(&mut self) -> SleepTick {
        let tick = self.sleep_timer.tick();
        match tick {
            SleepTick::Idle => {}
            SleepTick::Running { remaining_seconds } => {
                self.emit(PlaybackEvent::SleepTimerChanged {
                    remaining_seconds: Some(remaining_seconds),
                });
            }
            SleepTick::Expired => {
                tracing::info!("Sleep timer expired, pausing playback");
                if self.is_playing {
                    self.device.pause();
                    self.set_playing(false);
                }
                self.emit(PlaybackEvent::SleepTimerChanged {
                    remaining_seconds: None,
                });
                self.emit(PlaybackEvent::SleepTimerExpired);
            }
        }
        tick
    }

    pub fn sleep_timer_state(&self) -> SleepTimerState {
        self.sleep_timer.state()
    }

    // ===== Device Notifications =====

    /// Apply a notification from the device
    ///
    /// Notifications for a replaced source are dropped.
    pub fn handle_device_event(&mut self, event: DeviceEvent) -> DeviceOutcome {
        if self.load_token != Some(event.token) {
            tracing::trace!("Dropping stale device event for {:?}", event.token);
            return DeviceOutcome::Stale;
        }
        let Some(episode_id) = self.current_episode.as_ref().map(|e| e.id.clone()) else {
            return DeviceOutcome::Stale;
        };

        match event.kind {
            DeviceEventKind::TimeUpdate {
                current_seconds,
                duration_seconds,
            } => {
                if duration_seconds.is_finite() && duration_seconds > 0.0 {
                    self.duration = duration_seconds;
                }
                if current_seconds.is_finite() {
                    self.current_time = if self.duration > 0.0 {
                        current_seconds.max(0.0).min(self.duration)
                    } else {
                        current_seconds.max(0.0)
                    };
                }

                let tick = TimeTick {
                    episode_id,
                    current_time_seconds: self.current_time,
                    duration_seconds: self.duration,
                    progress_percent: progress_percent(self.current_time, self.duration),
                };
                self.emit(PlaybackEvent::TimeUpdate(tick.clone()));
                DeviceOutcome::TimeUpdated(tick)
            }
            DeviceEventKind::Ended => {
                if self.duration > 0.0 {
                    self.current_time = self.duration;
                }
                self.set_playing(false);
                tracing::debug!("Episode {} ended", episode_id);
                self.emit(PlaybackEvent::Ended {
                    episode_id: episode_id.clone(),
                });
                DeviceOutcome::Ended(episode_id)
            }
            DeviceEventKind::Failed { reason } => {
                self.fail(episode_id.clone(), reason);
                DeviceOutcome::Failed(episode_id)
            }
        }
    }

    // ===== State Queries =====

    pub fn snapshot(&self) -> PlaybackStateSnapshot {
        PlaybackStateSnapshot {
            current_episode: self.current_episode.clone(),
            is_playing: self.is_playing,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            current_time_seconds: self.current_time,
            duration_seconds: self.duration,
            playback_rate: self.playback_rate,
            sleep_timer_remaining_seconds: self.sleep_timer.remaining_seconds(),
        }
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_episode.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// 0 until the device reports it
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_time, self.duration)
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn playback_rate(&self) -> f32 {
        self.playback_rate
    }

    /// Token the device should stamp on notifications for the current source
    pub fn load_token(&self) -> Option<LoadToken> {
        self.load_token
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Direct device access for hosts that pump the device clock
    ///
    /// Transport changes must still go through the engine.
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    // ===== Teardown =====

    /// Cancel the sleep timer and pause; used when the owner goes away
    pub fn shutdown(&mut self) {
        self.set_sleep_timer(None);
        if self.is_playing {
            self.device.pause();
            self.set_playing(false);
        }
    }

    // ===== Event Emission =====

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing != is_playing {
            self.is_playing = is_playing;
            self.emit(PlaybackEvent::StateChanged { is_playing });
        }
    }

    fn fail(&mut self, episode_id: EpisodeId, reason: String) {
        tracing::warn!("Playback failed for {}: {}", episode_id, reason);
        self.set_playing(false);
        self.emit(PlaybackEvent::PlaybackFailed { episode_id, reason });
    }

    fn emit_volume_changed(&mut self) {
        self.emit(PlaybackEvent::VolumeChanged {
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.listeners.emit(&event);
    }
}

impl<D: AudioDevice + Default> Default for PlaybackEngine<D> {
    fn default() -> Self {
        Self::new(D::default(), PlaybackConfig::default())
    }
}

impl<D: AudioDevice> std::fmt::Debug for PlaybackEngine<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackEngine")
            .field("current_episode", &self.current_episode.as_ref().map(|e| &e.id))
            .field("is_playing", &self.is_playing)
            .field("current_time", &self.current_time)
            .field("duration", &self.duration)
            .field("sleep_timer", &self.sleep_timer.state())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
