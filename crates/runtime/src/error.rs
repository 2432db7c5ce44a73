//! Unified error types surfaced by the session API.
//!
//! The simulation core is total, so the only failures live at the session
//! boundary: configuration that cannot produce a playable game.

use thiserror::Error;

use crate::config::SessionConfig;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(
        "map {width}x{height} is below the playable minimum of {}x{}",
        SessionConfig::MIN_WIDTH,
        SessionConfig::MIN_HEIGHT
    )]
    MapTooSmall { width: u32, height: u32 },
}
