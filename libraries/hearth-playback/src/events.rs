//! Playback Events
//!
//! Observer-based communication for UI synchronization and progress
//! persistence. Events are emitted synchronously, in order, at the end of
//! the engine operation that caused them:
//! - State changes (playing/not playing)
//! - Episode changes
//! - Time updates (every device tick)
//! - End of stream and playback failures
//! - Volume, rate and sleep timer changes

use crate::types::{PlaylistSnapshot, TimeTick};
use hearth_core::EpisodeId;
use serde::{Deserialize, Serialize};

/// Events emitted by `PlaybackEngine`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// `is_playing` flipped
    StateChanged { is_playing: bool },

    /// A different episode became current
    EpisodeChanged { episode_id: EpisodeId },

    /// Elapsed time reported for the current episode
    TimeUpdate(TimeTick),

    /// Current episode reached its natural end
    Ended { episode_id: EpisodeId },

    /// The device rejected the current source; not retried
    PlaybackFailed {
        episode_id: EpisodeId,
        reason: String,
    },

    /// Volume or mute changed
    VolumeChanged { volume: f32, is_muted: bool },

    /// Playback rate changed
    RateChanged { rate: f32 },

    /// Sleep timer armed, cancelled or counted down (`None` = idle)
    SleepTimerChanged { remaining_seconds: Option<u32> },

    /// Sleep timer reached zero and paused playback
    SleepTimerExpired,
}

/// Events emitted by `PlaylistEngine`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlaylistEvent {
    /// Any change to the sequence, cursor or flags
    Changed(PlaylistSnapshot),
}

/// Receiver of engine events
///
/// Any `FnMut(&E)` closure is a listener.
pub trait Listener<E> {
    fn on_event(&mut self, event: &E);
}

impl<E, F: FnMut(&E)> Listener<E> for F {
    fn on_event(&mut self, event: &E) {
        self(event);
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered set of listeners for one event type
pub(crate) struct Listeners<E> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Listener<E>>)>,
}

impl<E> Listeners<E> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, listener: Box<dyn Listener<E>>) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver to every listener in subscription order
    pub(crate) fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.entries {
            listener.on_event(event);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
