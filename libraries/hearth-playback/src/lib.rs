//! Hearth Playback
//!
//! Platform-agnostic playback and focused-mode sequencing for the Hearth
//! podcast client.
//!
//! This crate provides:
//! - A single-source playback engine (play, pause, seek, skip, volume, rate)
//! - A sleep timer that pauses playback exactly once at expiry
//! - A focused-mode playlist with cursor-safe append, remove and reorder
//! - One-shot shuffle before a playlist is enabled
//! - Progress recording through the `ProgressSink` seam
//!
//! # Architecture
//!
//! `hearth-playback` never touches real audio or storage:
//! - The media element is supplied through the [`AudioDevice`] trait
//! - Progress goes to any [`hearth_core::ProgressSink`]
//! - No dependency on hearth-storage
//!
//! Everything is single-threaded and run-to-completion. Device notifications
//! are fed back in with `handle_device_event` on the same loop that issues
//! commands.
//!
//! # Example: Focused Session
//!
//! ```rust
//! use hearth_core::Episode;
//! use hearth_playback::{
//!     AudioDevice, DeviceEvent, FocusedSession, LoadToken, PlaybackConfig, PlaybackEngine, Result,
//! };
//!
//! #[derive(Default)]
//! struct SilentDevice {
//!     token: Option<LoadToken>,
//! }
//!
//! impl AudioDevice for SilentDevice {
//!     fn load(&mut self, _url: &str, token: LoadToken) -> Result<()> {
//!         self.token = Some(token);
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position_seconds: f64) {}
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn set_muted(&mut self, _muted: bool) {}
//!     fn set_playback_rate(&mut self, _rate: f32) {}
//! }
//!
//! let engine = PlaybackEngine::new(SilentDevice::default(), PlaybackConfig::default());
//! let mut session = FocusedSession::new(engine);
//!
//! let episodes = vec![
//!     Episode::new("ep-1", "First", "https://cdn.example/1.mp3", "science"),
//!     Episode::new("ep-2", "Second", "https://cdn.example/2.mp3", "science"),
//! ];
//! session.start(episodes, 0, false);
//!
//! // The device reports end of stream; the session moves on
//! let token = session.engine().device().token.unwrap();
//! session.handle_device_event(DeviceEvent::ended(token));
//! assert_eq!(session.engine().current_episode().unwrap().title, "Second");
//! ```

mod device;
mod engine;
mod error;
mod events;
mod playlist;
mod recorder;
pub mod shuffle;
mod session;
pub mod sleep_timer;
pub mod types;
mod volume;

// Public exports
pub use device::{AudioDevice, DeviceEvent, DeviceEventKind, LoadToken};
pub use engine::{DeviceOutcome, PlaybackEngine};
pub use error::{PlaybackError, Result};
pub use events::{Listener, PlaybackEvent, PlaylistEvent, SubscriptionId};
pub use playlist::PlaylistEngine;
pub use recorder::ProgressRecorder;
pub use session::FocusedSession;
pub use sleep_timer::{SleepTick, SleepTimer, SleepTimerState};
pub use types::{PlaybackConfig, PlaybackStateSnapshot, PlaylistSnapshot, TimeTick, PLAYBACK_RATES};
pub use volume::Volume;
