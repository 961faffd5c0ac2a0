//! Error types for the game controller.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while setting up a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// The world could not be assembled.
    #[error("world error: {0}")]
    World(#[from] od_core::WorldError),

    /// The configured goal room does not exist in the world.
    #[error("goal room not found: {0}")]
    GoalRoomNotFound(String),
}
