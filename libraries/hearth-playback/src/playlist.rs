//! Focused-mode playlist
//!
//! An ordered sequence of episodes with a live cursor. Structural changes
//! (append, remove, reorder) correct the cursor in the same call, so the
//! cursor is valid after every operation:
//!
//! ```text
//! episodes: [A] [B] [C] [D]
//!                    ^
//!                  cursor = 2
//!
//! reorder(0, 3)  ->  [B] [C] [D] [A]
//!                         ^
//!                       cursor = 1 (still C)
//! ```
//!
//! The playlist never touches the audio device. After moving the cursor the
//! caller decides whether to play the new current episode.

use crate::{
    error::{PlaybackError, Result},
    events::{Listener, Listeners, PlaylistEvent, SubscriptionId},
    types::PlaylistSnapshot,
};
use hearth_core::{Episode, EpisodeId};

/// Ordered multi-episode sequence with a cursor
///
/// Invariant: `cursor` is `Some(i)` with `i < episodes.len()` whenever the
/// playlist is non-empty, and `None` when it is empty.
#[derive(Debug)]
pub struct PlaylistEngine {
    episodes: Vec<Episode>,
    cursor: Option<usize>,

    /// Focused mode on/off
    active: bool,

    /// Consulted by the orchestration loop, never enforced here
    auto_advance: bool,

    listeners: Listeners<PlaylistEvent>,
}

impl PlaylistEngine {
    /// Create an inactive, empty playlist with auto-advance on
    pub fn new() -> Self {
        Self {
            episodes: Vec::new(),
            cursor: None,
            active: false,
            auto_advance: true,
            listeners: Listeners::new(),
        }
    }

    // ===== Subscriptions =====

    pub fn subscribe(
        &mut self,
        listener: impl Listener<PlaylistEvent> + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // ===== Focused Mode =====

    /// Replace the playlist wholesale and enter focused mode
    ///
    /// `start_index` is clamped into range. Shuffling, if wanted, is done by
    /// the caller beforehand.
    pub fn enable(&mut self, episodes: Vec<Episode>, start_index: usize) {
        self.cursor = if episodes.is_empty() {
            None
        } else {
            Some(start_index.min(episodes.len() - 1))
        };
        self.episodes = episodes;
        self.active = true;
        tracing::debug!(
            "Focused mode enabled with {} episodes, cursor {:?}",
            self.episodes.len(),
            self.cursor
        );
        self.emit_changed();
    }

    /// Clear the playlist and leave focused mode
    ///
    /// Does not stop playback.
    pub fn disable(&mut self) {
        self.episodes.clear();
        self.cursor = None;
        self.active = false;
        tracing::debug!("Focused mode disabled");
        self.emit_changed();
    }

    // ===== Cursor Motion =====

    /// Move to the next episode; `false` at the end (no wraparound)
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.episodes.len() => {
                self.cursor = Some(cursor + 1);
                self.emit_changed();
                true
            }
            _ => false,
        }
    }

    /// Move to the previous episode; `false` at the start
    pub fn previous(&mut self) -> bool {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.emit_changed();
                true
            }
            _ => false,
        }
    }

    // ===== Mutation =====

    /// Append to the end; the cursor is unaffected unless the playlist was empty
    pub fn append(&mut self, episode: Episode) {
        self.episodes.push(episode);
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
        self.emit_changed();
    }

    /// Remove the first entry with `episode_id`
    ///
    /// If the removed index is at or before the cursor and the cursor is past
    /// the start, the cursor steps back one so that `next()` lands on the
    /// entry that followed the removed one. Removing index 0 under cursor 0
    /// leaves the cursor on whatever now occupies index 0.
    ///
    /// Returns the removed episode, or `None` if no entry matched.
    pub fn remove(&mut self, episode_id: &EpisodeId) -> Option<Episode> {
        let index = self.index_of(episode_id)?;
        let removed = self.episodes.remove(index);

        self.cursor = match self.cursor {
            _ if self.episodes.is_empty() => None,
            Some(cursor) if index <= cursor && cursor > 0 => Some(cursor - 1),
            other => other,
        };

        tracing::debug!("Removed {} at {}, cursor {:?}", episode_id, index, self.cursor);
        self.emit_changed();
        Some(removed)
    }

    /// Move the entry at `from_index` to `to_index`
    ///
    /// Relative order of all other entries is preserved and the cursor keeps
    /// pointing at the same episode.
    pub fn reorder(&mut self, from_index: usize, to_index: usize) -> Result<()> {
        let len = self.episodes.len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(PlaybackError::IndexOutOfBounds { index, len });
            }
        }

        if from_index == to_index {
            return Ok(());
        }

        let episode = self.episodes.remove(from_index);
        self.episodes.insert(to_index, episode);

        self.cursor = self.cursor.map(|cursor| {
            if from_index == cursor {
                to_index
            } else if from_index < cursor && cursor <= to_index {
                cursor - 1
            } else if to_index <= cursor && cursor < from_index {
                cursor + 1
            } else {
                cursor
            }
        });

        self.emit_changed();
        Ok(())
    }

    pub fn set_auto_advance(&mut self, auto_advance: bool) {
        if self.auto_advance != auto_advance {
            self.auto_advance = auto_advance;
            self.emit_changed();
        }
    }

    // ===== State Queries =====

    pub fn current(&self) -> Option<&Episode> {
        self.cursor.and_then(|index| self.episodes.get(index))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn index_of(&self, episode_id: &EpisodeId) -> Option<usize> {
        self.episodes.iter().position(|e| &e.id == episode_id)
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Whether focused mode is on
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn has_next(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.episodes.len())
    }

    pub fn has_previous(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn snapshot(&self) -> PlaylistSnapshot {
        PlaylistSnapshot {
            episodes: self.episodes.clone(),
            cursor: self.cursor,
            is_active: self.active,
            auto_advance: self.auto_advance,
        }
    }

    fn emit_changed(&mut self) {
        if !self.listeners.is_empty() {
            let event = PlaylistEvent::Changed(self.snapshot());
            self.listeners.emit(&event);
        }
    }
}

impl Default for PlaylistEngine {
    fn default() -> Self {
        Self::new()
    }
}
