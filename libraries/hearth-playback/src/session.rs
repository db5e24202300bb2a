//! Focused listening session
//!
//! Sequences `PlaylistEngine` and `PlaybackEngine` on the caller's side.
//! The two engines never talk to each other; every cursor move here is
//! followed explicitly by the matching `play`.

use crate::{
    device::{AudioDevice, DeviceEvent},
    engine::{DeviceOutcome, PlaybackEngine},
    playlist::PlaylistEngine,
    shuffle,
    sleep_timer::SleepTick,
};
use hearth_core::{Episode, EpisodeId};

/// Playback engine plus focused-mode playlist
#[derive(Debug)]
pub struct FocusedSession<D: AudioDevice> {
    engine: PlaybackEngine<D>,
    playlist: PlaylistEngine,
}

impl<D: AudioDevice> FocusedSession<D> {
    pub fn new(engine: PlaybackEngine<D>) -> Self {
        Self {
            engine,
            playlist: PlaylistEngine::new(),
        }
    }

    pub fn engine(&self) -> &PlaybackEngine<D> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PlaybackEngine<D> {
        &mut self.engine
    }

    pub fn playlist(&self) -> &PlaylistEngine {
        &self.playlist
    }

    pub fn playlist_mut(&mut self) -> &mut PlaylistEngine {
        &mut self.playlist
    }

    /// Enter focused mode and play the episode under the cursor
    ///
    /// With `shuffle`, the list is permuted once before it is enabled and
    /// `start_index` refers to the shuffled order.
    ///
    /// Returns the episode that started, or `None` for an empty list.
    pub fn start(
        &mut self,
        episodes: Vec<Episode>,
        start_index: usize,
        shuffle: bool,
    ) -> Option<&Episode> {
        let episodes = if shuffle {
            shuffle::shuffled(episodes)
        } else {
            episodes
        };

        self.playlist.enable(episodes, start_index);
        tracing::info!("Focused session started with {} episodes", self.playlist.len());
        self.play_current();
        self.engine.current_episode()
    }

    /// Play the next playlist entry; `false` at the end
    pub fn skip_next(&mut self) -> bool {
        if self.playlist.next() {
            self.play_current();
            true
        } else {
            false
        }
    }

    /// Play the previous playlist entry; `false` at the start
    pub fn skip_previous(&mut self) -> bool {
        if self.playlist.previous() {
            self.play_current();
            true
        } else {
            false
        }
    }

    /// Remove an entry from the playlist
    ///
    /// If the removed entry was playing, playback moves on to the entry that
    /// followed it, or pauses when it was the last one.
    pub fn remove(&mut self, episode_id: &EpisodeId) -> Option<Episode> {
        // Duplicates are allowed; the first match is removed, which may be
        // an earlier copy of the playing entry
        let removed_index = self.playlist.index_of(episode_id)?;
        let was_playing =
            self.engine.is_playing() && self.playlist.cursor() == Some(removed_index);

        let removed = self.playlist.remove(episode_id)?;
        if !was_playing {
            return Some(removed);
        }

        // Index 0 under cursor 0 leaves the cursor on the follower already
        let has_follower = if removed_index == 0 {
            !self.playlist.is_empty()
        } else {
            self.playlist.next()
        };

        if has_follower {
            self.play_current();
        } else if let Err(e) = self.engine.pause() {
            tracing::debug!("Pause after removing last entry: {}", e);
        }
        Some(removed)
    }

    /// Forward a device notification and auto-advance on end of stream
    ///
    /// Advances only while focused mode is active, auto-advance is on and the
    /// episode that ended is the one under the cursor. A failed episode is
    /// never skipped automatically.
    pub fn handle_device_event(&mut self, event: DeviceEvent) -> DeviceOutcome {
        let outcome = self.engine.handle_device_event(event);

        if let DeviceOutcome::Ended(ref episode_id) = outcome {
            let ended_current = self
                .playlist
                .current()
                .is_some_and(|e| &e.id == episode_id);

            if self.playlist.is_active() && self.playlist.auto_advance() && ended_current {
                if self.playlist.next() {
                    tracing::debug!("Auto-advancing after {}", episode_id);
                    self.play_current();
                } else {
                    tracing::info!("Focused playlist finished");
                }
            }
        }

        outcome
    }

    /// One-second sleep timer tick
    pub fn tick_sleep_timer(&mut self) -> SleepTick {
        self.engine.tick_sleep_timer()
    }

    /// Leave focused mode
    ///
    /// Clears the playlist and cancels the sleep timer. The current episode
    /// keeps its transport state.
    pub fn exit(&mut self) {
        self.playlist.disable();
        self.engine.set_sleep_timer(None);
        tracing::info!("Focused session exited");
    }

    /// Tear down: leave focused mode and pause
    pub fn shutdown(&mut self) {
        self.playlist.disable();
        self.engine.shutdown();
    }

    fn play_current(&mut self) {
        if let Some(episode) = self.playlist.current().cloned() {
            self.engine.play(episode);
        }
    }
}
