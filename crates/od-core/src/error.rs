use crate::world::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur while assembling a world graph.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested room ID does not belong to this world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateName(String),
}
