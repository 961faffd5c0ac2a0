//! Configuration for a game session.

use od_core::GOAL_ROOM;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible combat. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Name of the room that wins the game when entered.
    pub goal_room: String,
    /// Consecutive empty menu selections tolerated before the session quits.
    pub max_idle_prompts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            goal_room: GOAL_ROOM.to_string(),
            max_idle_prompts: 3,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the goal room by name.
    pub fn with_goal_room(mut self, name: impl Into<String>) -> Self {
        self.goal_room = name.into();
        self
    }

    /// Set the idle prompt limit (at least 1).
    pub fn with_max_idle_prompts(mut self, limit: u32) -> Self {
        self.max_idle_prompts = limit.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.goal_room, "Portal");
        assert_eq!(cfg.max_idle_prompts, 3);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(123)
            .with_goal_room("Chamber")
            .with_max_idle_prompts(5);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.goal_room, "Chamber");
        assert_eq!(cfg.max_idle_prompts, 5);
    }

    #[test]
    fn idle_limit_clamped() {
        let cfg = GameConfig::default().with_max_idle_prompts(0);
        assert_eq!(cfg.max_idle_prompts, 1);
    }
}
