//! Tween configuration errors

use thiserror::Error;

use crate::scheduler::TweenId;

/// Errors from the tween configuration surface
///
/// The tick, clear and query paths never fail; only creating or re-opening a
/// tween can be refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenError {
    /// The scheduler has not been started, or was shut down
    #[error("Tween scheduler is not running")]
    NotRunning,

    /// The handle no longer refers to a live tween
    #[error("Tween {0:?} was retired or cancelled")]
    StaleHandle(TweenId),

    /// The tween has been promoted into the active set and can no longer be configured
    #[error("Tween {0:?} is already active")]
    AlreadyActive(TweenId),
}

/// Result type for tween operations
pub type Result<T> = std::result::Result<T, TweenError>;
