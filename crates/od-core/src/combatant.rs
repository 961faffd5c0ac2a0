//! Stat templates and the combatant type that fights with them.
//!
//! Every fighter, hero or monster, is a [`Combatant`] built from an
//! [`Archetype`]. Nothing overrides attack or alive behaviour per kind.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::roll::HitRoll;

/// A fixed stat template instantiated for the player or an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    /// Display name given to every combatant built from this template.
    pub name: &'static str,
    /// Starting hit points.
    pub hit_points: i32,
    /// Flat damage dealt by a landed attack.
    pub attack_damage: u32,
    /// Probability in `[0, 1]` that an attack lands.
    pub attack_chance: f64,
}

impl Archetype {
    /// The player character.
    pub const HERO: Self = Self {
        name: "Hero",
        hit_points: 10,
        attack_damage: 2,
        attack_chance: 0.75,
    };

    /// A weak enemy lurking in the hallway.
    pub const SEWER_RAT: Self = Self {
        name: "Sewer Rat",
        hit_points: 2,
        attack_damage: 1,
        attack_chance: 0.5,
    };

    /// The chamber's guardian.
    pub const GIANT_DRAGON: Self = Self {
        name: "Giant Dragon",
        hit_points: 4,
        attack_damage: 8,
        attack_chance: 0.9,
    };
}

/// Anything with hit points that can take part in an attack exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name.
    pub name: String,
    /// Current hit points. May drop below zero; see [`Combatant::is_alive`].
    pub hit_points: i32,
    /// Flat damage dealt by a landed attack.
    pub attack_damage: u32,
    /// Probability in `[0, 1]` that an attack lands.
    pub attack_chance: f64,
}

impl Combatant {
    /// Create a combatant at full health from a stat template.
    pub fn from_archetype(archetype: &Archetype) -> Self {
        Self {
            name: archetype.name.to_string(),
            hit_points: archetype.hit_points,
            attack_damage: archetype.attack_damage,
            attack_chance: archetype.attack_chance,
        }
    }

    /// Make a single attack against `target`.
    ///
    /// One draw from `roll` decides the outcome: the attack lands only when the
    /// draw is strictly below `attack_chance`, and then removes exactly
    /// `attack_damage` hit points from the target.
    pub fn attack(&self, target: &mut Combatant, roll: &mut impl HitRoll) -> AttackReport {
        let draw = roll.draw();
        trace!(attacker = %self.name, target = %target.name, draw, chance = self.attack_chance, "hit roll");

        if draw < self.attack_chance {
            target.take_damage(self.attack_damage);
            AttackReport::Hit {
                attacker: self.name.clone(),
                target: target.name.clone(),
                damage: self.attack_damage,
            }
        } else {
            AttackReport::Miss {
                attacker: self.name.clone(),
                target: target.name.clone(),
            }
        }
    }

    /// Remove `amount` hit points. There is no floor at zero.
    pub fn take_damage(&mut self, amount: u32) {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.hit_points = self.hit_points.saturating_sub(amount);
    }

    /// Returns true while hit points are above zero.
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }
}

/// The outcome of a single attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackReport {
    /// The attack landed.
    Hit {
        /// Name of the attacker.
        attacker: String,
        /// Name of the target.
        target: String,
        /// Hit points removed from the target.
        damage: u32,
    },
    /// The attack missed and nothing changed.
    Miss {
        /// Name of the attacker.
        attacker: String,
        /// Name of the target.
        target: String,
    },
}

impl AttackReport {
    /// Returns true if the attack landed.
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

impl fmt::Display for AttackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit {
                attacker,
                target,
                damage,
            } => write!(f, "{attacker} hits {target} for {damage} damage!"),
            Self::Miss { attacker, target } => write!(f, "{attacker} misses {target}!"),
        }
    }
}
