use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combatant::{Archetype, Combatant};
use crate::error::{WorldError, WorldResult};

/// Name of the room that ends the game in victory.
pub const GOAL_ROOM: &str = "Portal";

/// Stable identifier for a room: its index in the world's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the world graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Display name, unique within a world.
    pub name: String,
    /// Flavour text shown when looking around.
    pub description: String,
    /// Outgoing exits in the order they were added.
    pub exits: Vec<RoomId>,
    /// Resident enemies. Dead ones stay in the list.
    pub enemies: Vec<Combatant>,
}

impl Room {
    /// Create an empty room with no exits or enemies.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            enemies: Vec::new(),
        }
    }

    /// Indices into [`Room::enemies`] of the enemies still alive.
    pub fn living_enemies(&self) -> Vec<usize> {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
            .collect()
    }
}

/// The world graph. Owns every room; rooms refer to each other by [`RoomId`].
///
/// Exits are directed. A two-way passage is two calls to [`World::add_exit`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Build the fixed four-room dungeon and return it with the starting room.
    ///
    /// The passage from the Chamber to the Portal is one-way.
    pub fn dungeon() -> WorldResult<(Self, RoomId)> {
        let mut world = Self::new();

        let entrance = world.add_room(Room::new(
            "Dungeon Entrance",
            "A dark and damp entrance to the dungeon",
        ))?;
        let hallway = world.add_room(Room::new(
            "Hallway",
            "A long, narrow hallway with strange markings on the walls",
        ))?;
        let chamber = world.add_room(Room::new(
            "Chamber",
            "A large chamber filled with treasure and danger",
        ))?;
        let portal = world.add_room(Room::new(
            GOAL_ROOM,
            "A glowing portal that leads to freedom",
        ))?;

        world.add_exit(entrance, hallway)?;
        world.add_exit(hallway, entrance)?;
        world.add_exit(hallway, chamber)?;
        world.add_exit(chamber, hallway)?;
        world.add_exit(chamber, portal)?;

        world.add_enemy(hallway, Combatant::from_archetype(&Archetype::SEWER_RAT))?;
        world.add_enemy(chamber, Combatant::from_archetype(&Archetype::GIANT_DRAGON))?;

        Ok((world, entrance))
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add a room to the world. Returns its ID.
    pub fn add_room(&mut self, room: Room) -> WorldResult<RoomId> {
        if self.find_by_name(&room.name).is_some() {
            return Err(WorldError::DuplicateName(room.name));
        }
        let id = RoomId(self.rooms.len());
        self.rooms.push(room);
        Ok(id)
    }

    /// Append a directed exit from `from` to `to`.
    pub fn add_exit(&mut self, from: RoomId, to: RoomId) -> WorldResult<()> {
        if self.room(to).is_none() {
            return Err(WorldError::RoomNotFound(to));
        }
        self.room_mut(from)
            .ok_or(WorldError::RoomNotFound(from))?
            .exits
            .push(to);
        Ok(())
    }

    /// Place an enemy in a room.
    pub fn add_enemy(&mut self, room: RoomId, enemy: Combatant) -> WorldResult<()> {
        self.room_mut(room)
            .ok_or(WorldError::RoomNotFound(room))?
            .enemies
            .push(enemy);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Get a mutable room by ID.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Find a room ID by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|r| r.name.eq_ignore_ascii_case(name))
            .map(RoomId)
    }

    /// The name of a room, or an empty string for an unknown ID.
    pub fn room_name(&self, id: RoomId) -> &str {
        self.room(id).map(|r| r.name.as_str()).unwrap_or("")
    }

    /// Iterate over every room with its ID.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of rooms in the world.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(world: &World, name: &str) -> RoomId {
        world.find_by_name(name).unwrap()
    }

    #[test]
    fn dungeon_layout() {
        let (world, start) = World::dungeon().unwrap();
        assert_eq!(world.room_count(), 4);
        assert_eq!(world.room_name(start), "Dungeon Entrance");

        let hallway = id(&world, "Hallway");
        let chamber = id(&world, "Chamber");
        let portal = id(&world, "Portal");

        assert_eq!(world.room(start).unwrap().exits, vec![hallway]);
        assert_eq!(world.room(hallway).unwrap().exits, vec![start, chamber]);
        assert_eq!(world.room(chamber).unwrap().exits, vec![hallway, portal]);
        assert!(world.room(portal).unwrap().exits.is_empty());

        let names: Vec<_> = world.rooms().map(|(id, r)| (id, r.name.as_str())).collect();
        assert_eq!(
            names,
            vec![
                (start, "Dungeon Entrance"),
                (hallway, "Hallway"),
                (chamber, "Chamber"),
                (portal, "Portal"),
            ]
        );
    }

    #[test]
    fn dungeon_enemies() {
        let (world, start) = World::dungeon().unwrap();
        assert!(world.room(start).unwrap().enemies.is_empty());

        let hallway = world.room(id(&world, "Hallway")).unwrap();
        assert_eq!(hallway.enemies.len(), 1);
        assert_eq!(hallway.enemies[0].name, "Sewer Rat");

        let chamber = world.room(id(&world, "Chamber")).unwrap();
        assert_eq!(chamber.enemies[0].name, "Giant Dragon");
    }

    #[test]
    fn duplicate_room_rejected() {
        let mut world = World::new();
        world.add_room(Room::new("Cell", "")).unwrap();
        let err = world.add_room(Room::new("cell", "")).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateName(_)));
    }

    #[test]
    fn exit_to_unknown_room_rejected() {
        let mut world = World::new();
        let cell = world.add_room(Room::new("Cell", "")).unwrap();

        assert!(matches!(
            world.add_exit(cell, RoomId(9)),
            Err(WorldError::RoomNotFound(RoomId(9)))
        ));
        assert!(matches!(
            world.add_exit(RoomId(9), cell),
            Err(WorldError::RoomNotFound(RoomId(9)))
        ));
        assert!(world.room(cell).unwrap().exits.is_empty());
    }

    #[test]
    fn enemy_in_unknown_room_rejected() {
        let mut world = World::new();
        let rat = Combatant::from_archetype(&Archetype::SEWER_RAT);
        assert!(world.add_enemy(RoomId(0), rat).is_err());
    }

    #[test]
    fn living_enemies_skips_dead() {
        let mut room = Room::new("Pit", "");
        room.enemies.push(Combatant::from_archetype(&Archetype::SEWER_RAT));
        room.enemies.push(Combatant::from_archetype(&Archetype::SEWER_RAT));
        room.enemies[0].take_damage(2);

        assert_eq!(room.living_enemies(), vec![1]);
        assert_eq!(room.enemies.len(), 2);
    }

    #[test]
    fn exits_serialize_as_ids() {
        let (world, _) = World::dungeon().unwrap();
        let json = serde_json::to_value(&world).unwrap();
        assert_eq!(json["rooms"][1]["exits"], serde_json::json!([0, 2]));

        let back: World = serde_json::from_value(json).unwrap();
        assert_eq!(back.find_by_name("Portal"), Some(RoomId(3)));
        assert_eq!(back.room(RoomId(2)).unwrap().exits, vec![RoomId(1), RoomId(3)]);
    }
}
