//! Cooperative host loop
//!
//! One task owns the session. The device clock, the one-second sleep tick and
//! Ctrl-C are multiplexed with `tokio::select!`, so every engine call runs to
//! completion before the next notification is looked at.

use crate::config::AppConfig;
use crate::device::SimulatedDevice;
use crate::error::Result;
use hearth_core::Episode;
use hearth_playback::{FocusedSession, PlaybackEngine, PlaybackEvent, ProgressRecorder};
use hearth_storage::ListeningLog;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Whether the loop has anything left to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Idle,
}

pub struct Host {
    session: FocusedSession<SimulatedDevice>,
    clock_period: Duration,
    speed: f64,
}

impl Host {
    /// Build the session with progress recording and event logging attached
    ///
    /// `known_episodes` supplies catalog durations to the simulated device.
    pub fn new(config: &AppConfig, log: &ListeningLog, known_episodes: &[Episode]) -> Self {
        let device = SimulatedDevice::new(config.simulation.default_episode_seconds)
            .with_episodes(known_episodes);
        let mut engine = PlaybackEngine::new(device, config.playback_config());

        engine.subscribe(ProgressRecorder::new(log.progress().clone()));
        engine.subscribe(log_event);

        if config.playback.sleep_minutes.is_some() {
            engine.set_sleep_timer(config.playback.sleep_minutes);
        }

        Self {
            session: FocusedSession::new(engine),
            clock_period: Duration::from_millis(config.simulation.tick_ms),
            speed: config.simulation.speed,
        }
    }

    pub fn session(&self) -> &FocusedSession<SimulatedDevice> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FocusedSession<SimulatedDevice> {
        &mut self.session
    }

    /// Play a single episode outside focused mode
    pub fn play(&mut self, episode: Episode) {
        self.session.engine_mut().play(episode);
    }

    /// Start a focused session
    pub fn focus(&mut self, episodes: Vec<Episode>, start_index: usize, shuffle: bool) {
        self.session.start(episodes, start_index, shuffle);
    }

    /// Advance the simulated clock by `wall` and deliver the device's reports
    pub fn advance_clock(&mut self, wall: Duration) -> Status {
        let simulated = wall.as_secs_f64() * self.speed;
        let events = self.session.engine_mut().device_mut().tick(simulated);
        for event in events {
            self.session.handle_device_event(event);
        }
        self.status()
    }

    /// One second of the sleep timer
    pub fn tick_sleep_timer(&mut self) -> Status {
        self.session.tick_sleep_timer();
        self.status()
    }

    pub fn status(&self) -> Status {
        if self.session.engine().is_playing() {
            Status::Playing
        } else {
            Status::Idle
        }
    }

    /// Drive the session until nothing is playing or the user interrupts
    pub async fn run(&mut self) -> Result<()> {
        let mut clock = tokio::time::interval(self.clock_period);
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut sleep_tick = tokio::time::interval(Duration::from_secs(1));
        sleep_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Both intervals fire immediately on the first tick
        clock.tick().await;
        sleep_tick.tick().await;

        while self.status() == Status::Playing {
            tokio::select! {
                _ = clock.tick() => {
                    self.advance_clock(self.clock_period);
                }
                _ = sleep_tick.tick() => {
                    self.tick_sleep_timer();
                }
                result = tokio::signal::ctrl_c() => {
                    result?;
                    tracing::info!("Interrupted");
                    break;
                }
            }
        }

        self.session.shutdown();
        Ok(())
    }
}

fn log_event(event: &PlaybackEvent) {
    match event {
        PlaybackEvent::EpisodeChanged { episode_id } => {
            tracing::info!("Now playing {}", episode_id);
        }
        PlaybackEvent::Ended { episode_id } => {
            tracing::info!("Finished {}", episode_id);
        }
        PlaybackEvent::PlaybackFailed { episode_id, reason } => {
            tracing::warn!("Could not play {}: {}", episode_id, reason);
        }
        PlaybackEvent::SleepTimerExpired => {
            tracing::info!("Sleep timer expired");
        }
        PlaybackEvent::TimeUpdate(tick) => {
            tracing::debug!(
                "{} at {:.0}s / {:.0}s ({:.1}%)",
                tick.episode_id,
                tick.current_time_seconds,
                tick.duration_seconds,
                tick.progress_percent
            );
        }
        _ => {}
    }
}
