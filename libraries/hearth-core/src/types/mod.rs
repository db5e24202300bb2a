//! Domain types shared across Hearth crates

mod episode;
mod ids;
mod progress;

pub use episode::Episode;
pub use ids::{EpisodeId, ListenerId};
pub use progress::{FavoriteRecord, ProgressRecord};
