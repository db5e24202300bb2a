//! Hearth command-line host
//!
//! Wires the playback core to a local catalog file, a redb listening log and
//! a simulated audio device, and drives it from a single tokio task.

pub mod commands;
pub mod config;
pub mod device;
pub mod error;
pub mod host;
pub mod storage;

pub use config::AppConfig;
pub use error::{CliError, Result};
pub use host::{Host, Status};
