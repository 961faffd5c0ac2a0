//! Core types for the Orientus dungeon: combatants, rooms, and the world graph.
//!
//! Everything here is plain data plus the few rules that act on it. The
//! interactive loop lives in `od-game`; this crate can be used on its own to
//! build a [`World`] and resolve attacks between [`Combatant`]s.

/// Stat templates and the combatant type that fights with them.
pub mod combatant;
/// Error types used throughout the crate.
pub mod error;
/// The player character and its position in the world.
pub mod player;
/// Sources of hit rolls for attack resolution.
pub mod roll;
/// Rooms and the arena-backed world graph.
pub mod world;

/// Re-export combatant types.
pub use combatant::{Archetype, AttackReport, Combatant};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export the player type.
pub use player::Player;
/// Re-export roll sources.
pub use roll::{ForcedRoll, HitRoll};
/// Re-export world graph types.
pub use world::{GOAL_ROOM, Room, RoomId, World};
