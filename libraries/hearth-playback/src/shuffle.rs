//! Shuffle for focused-mode playlists
//!
//! A one-time, stateless permutation applied before `PlaylistEngine::enable`.
//! The playlist itself has no shuffle mode; once enabled, order only changes
//! through `reorder`.

use hearth_core::Episode;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly random permutation (Fisher-Yates via `SliceRandom`)
pub fn shuffled(episodes: Vec<Episode>) -> Vec<Episode> {
    shuffled_with(episodes, &mut rand::thread_rng())
}

/// Same as [`shuffled`], with a caller-supplied RNG
pub fn shuffled_with<R: Rng + ?Sized>(mut episodes: Vec<Episode>, rng: &mut R) -> Vec<Episode> {
    episodes.shuffle(rng);
    episodes
}
