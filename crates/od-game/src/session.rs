//! The game session and its turn loop.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use od_core::{HitRoll, Player, RoomId, World};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::narration;
use crate::prompt::{Prompt, select};

/// One of the actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Describe the current room.
    Look,
    /// Walk through one of the current room's exits.
    Move,
    /// Attack a living enemy in the current room.
    Attack,
    /// Leave the game.
    Quit,
}

impl Action {
    /// Every action, in menu order.
    pub const ALL: [Self; 4] = [Self::Look, Self::Move, Self::Attack, Self::Quit];

    /// The menu label for this action.
    pub fn label(self) -> &'static str {
        match self {
            Self::Look => "Look around",
            Self::Move => "Move to another room",
            Self::Attack => "Attack an enemy",
            Self::Quit => "Quit game",
        }
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player reached the goal room alive.
    Victory,
    /// The player's hit points dropped to zero or below.
    Defeat,
    /// The player quit.
    Quit,
}

/// Whether the session still accepts actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next action.
    Running,
    /// Terminal. No further actions are processed.
    GameOver(Ending),
}

impl SessionState {
    /// Returns true once the session has ended.
    pub fn is_over(self) -> bool {
        matches!(self, Self::GameOver(_))
    }
}

/// The result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// The action taken, or `None` if the menu got no selection.
    pub action: Option<Action>,
    /// Narration produced by the turn.
    pub lines: Vec<String>,
    /// Session state after the turn.
    pub state: SessionState,
}

/// A single-player game: the world, the hero, and the dice.
pub struct GameSession<R = StdRng> {
    world: World,
    player: Player,
    goal: RoomId,
    max_idle_prompts: u32,
    state: SessionState,
    roll: R,
}

impl GameSession<StdRng> {
    /// Create a session seeded from `config`, or from the OS when unseeded.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_roll(config, rng)
    }
}

impl<R: HitRoll> GameSession<R> {
    /// Create a session that draws hit rolls from `roll`.
    pub fn with_roll(config: GameConfig, roll: R) -> GameResult<Self> {
        let (world, start) = World::dungeon()?;
        let goal = world
            .find_by_name(&config.goal_room)
            .ok_or(GameError::GoalRoomNotFound(config.goal_room))?;

        Ok(Self {
            world,
            player: Player::new(start),
            goal,
            max_idle_prompts: config.max_idle_prompts.max(1),
            state: SessionState::Running,
            roll,
        })
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Get a mutable reference to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Get the current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run until the session ends, sending every narration line to `sink`.
    ///
    /// Too many empty menu selections in a row are treated as quitting, so a
    /// closed input stream cannot keep the loop spinning.
    pub fn run(&mut self, prompt: &mut impl Prompt, mut sink: impl FnMut(&str)) -> Ending {
        sink(narration::WELCOME);
        let mut idle = 0;

        loop {
            if let SessionState::GameOver(ending) = self.state {
                return ending;
            }

            let turn = self.step(prompt);
            for line in &turn.lines {
                sink(line.as_str());
            }

            if turn.action.is_some() {
                idle = 0;
                continue;
            }

            idle += 1;
            if idle >= self.max_idle_prompts {
                info!(idle, "no input, ending session");
                self.finish(Ending::Quit);
                sink(narration::FAREWELL);
            }
        }
    }

    /// Ask for the next action and resolve it.
    pub fn step(&mut self, prompt: &mut impl Prompt) -> Turn {
        if self.state.is_over() {
            return self.turn(None, Vec::new());
        }

        let labels: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
        let Some(action) = select(prompt, narration::ACTION_PROMPT, &labels).map(|i| Action::ALL[i])
        else {
            return self.turn(None, Vec::new());
        };

        let lines = self.perform(action, prompt);
        self.turn(Some(action), lines)
    }

    /// Resolve `action`, asking `prompt` for any follow-up choice.
    ///
    /// Does nothing once the session has ended.
    pub fn perform(&mut self, action: Action, prompt: &mut impl Prompt) -> Vec<String> {
        if self.state.is_over() {
            return Vec::new();
        }

        debug!(?action, room = self.world.room_name(self.player.current_room), "dispatching action");
        match action {
            Action::Look => self.look(),
            Action::Move => self.move_player(prompt),
            Action::Attack => self.attack_enemy(prompt),
            Action::Quit => {
                self.finish(Ending::Quit);
                vec![narration::FAREWELL.to_string()]
            }
        }
    }

    fn turn(&self, action: Option<Action>, lines: Vec<String>) -> Turn {
        Turn {
            action,
            lines,
            state: self.state,
        }
    }

    fn look(&self) -> Vec<String> {
        let Some(room) = self.world.room(self.player.current_room) else {
            return Vec::new();
        };

        let mut lines = vec![narration::you_are_in(&room.name), room.description.clone()];

        // Dead enemies are listed too.
        if !room.enemies.is_empty() {
            lines.push(narration::ENEMIES_HEADER.to_string());
            for enemy in &room.enemies {
                lines.push(narration::bullet(&narration::with_hp(
                    &enemy.name,
                    enemy.hit_points,
                )));
            }
        }

        lines.push(narration::EXITS_HEADER.to_string());
        for &exit in &room.exits {
            lines.push(narration::bullet(self.world.room_name(exit)));
        }

        lines
    }

    fn move_player(&mut self, prompt: &mut impl Prompt) -> Vec<String> {
        let exits = self
            .world
            .room(self.player.current_room)
            .map(|r| r.exits.clone())
            .unwrap_or_default();
        if exits.is_empty() {
            return vec![narration::NO_EXITS.to_string()];
        }

        let labels: Vec<String> = exits
            .iter()
            .map(|&id| self.world.room_name(id).to_string())
            .collect();
        let Some(destination) = select(prompt, narration::MOVE_PROMPT, &labels).map(|i| exits[i])
        else {
            return Vec::new();
        };

        self.player.move_to(destination);

        let Some(room) = self.world.room(destination) else {
            return Vec::new();
        };
        let mut lines = vec![narration::you_move_to(&room.name)];

        for enemy in room.enemies.iter().filter(|e| e.is_alive()) {
            lines.push(narration::ambush(&enemy.name));
            let report = enemy.attack(&mut self.player.combatant, &mut self.roll);
            lines.push(report.to_string());
        }

        lines.extend(self.check_game_over());
        lines
    }

    fn attack_enemy(&mut self, prompt: &mut impl Prompt) -> Vec<String> {
        let here = self.player.current_room;
        let (living, labels): (Vec<usize>, Vec<String>) = match self.world.room(here) {
            Some(room) => room
                .living_enemies()
                .into_iter()
                .map(|i| {
                    let enemy = &room.enemies[i];
                    (i, narration::with_hp(&enemy.name, enemy.hit_points))
                })
                .unzip(),
            None => (Vec::new(), Vec::new()),
        };
        if living.is_empty() {
            return vec![narration::NO_ENEMIES.to_string()];
        }

        let Some(target) = select(prompt, narration::ATTACK_PROMPT, &labels).map(|i| living[i])
        else {
            return Vec::new();
        };
        let Some(enemy) = self
            .world
            .room_mut(here)
            .and_then(|r| r.enemies.get_mut(target))
        else {
            return Vec::new();
        };

        let mut lines = vec![narration::you_attack(&enemy.name)];
        let report = self.player.combatant.attack(enemy, &mut self.roll);
        lines.push(report.to_string());

        if enemy.is_alive() {
            lines.push(narration::counterattack(&enemy.name));
            let report = enemy.attack(&mut self.player.combatant, &mut self.roll);
            lines.push(report.to_string());
        } else {
            lines.push(narration::defeated(&enemy.name));
        }

        lines.extend(self.check_game_over());
        lines
    }

    /// Defeat takes priority over reaching the goal.
    fn check_game_over(&mut self) -> Option<String> {
        if !self.player.is_alive() {
            self.finish(Ending::Defeat);
            return Some(narration::DEFEAT.to_string());
        }

        if self.player.current_room == self.goal {
            self.finish(Ending::Victory);
            return Some(narration::VICTORY.to_string());
        }

        None
    }

    fn finish(&mut self, ending: Ending) {
        info!(?ending, hit_points = self.player.combatant.hit_points, "game over");
        self.state = SessionState::GameOver(ending);
    }
}
