use crate::combatant::{Archetype, Combatant};
use crate::world::RoomId;

/// The player character: a hero combatant plus its current position.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// The player's fighting stats.
    pub combatant: Combatant,
    /// The room the player is standing in.
    pub current_room: RoomId,
}

impl Player {
    /// Create a hero standing in `start`.
    pub fn new(start: RoomId) -> Self {
        Self {
            combatant: Combatant::from_archetype(&Archetype::HERO),
            current_room: start,
        }
    }

    /// Move the player to another room.
    pub fn move_to(&mut self, room: RoomId) {
        self.current_room = room;
    }

    /// Returns true while the player's hit points are above zero.
    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }
}
