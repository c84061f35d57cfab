//! Errors raised at the script bridge.

use thiserror::Error;

/// Reasons a bridge call cannot run the detection pipeline.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    /// The script passed a `None` object for a marker.
    #[error("missing {0} marker")]
    MissingMarker(&'static str),

    /// The game has no player right now.
    #[error("no player")]
    NoPlayer,
}

impl BridgeError {
    /// Level the bridge reports this error at.
    ///
    /// A missing player is normal during loading screens and repeats every update, so
    /// it stays at debug. A missing marker means the calling script is wired wrong.
    pub fn log_level(&self) -> log::Level {
        match self {
            BridgeError::MissingMarker(_) => log::Level::Warn,
            BridgeError::NoPlayer => log::Level::Debug,
        }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
