//! Turn-based game controller for the Orientus dungeon.
//!
//! A [`GameSession`] owns the world and the player, asks a [`Prompt`] for the
//! next action, resolves it, and reports what happened as narration lines.
//! How choices are rendered is up to the [`Prompt`] implementation.

/// Session configuration.
pub mod config;
/// Error types for the game controller.
pub mod error;
/// Narration text produced by the game.
pub mod narration;
/// The interaction boundary used to ask the player for choices.
pub mod prompt;
/// The game session and its turn loop.
pub mod session;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use prompt::{Prompt, ScriptedPrompt};
pub use session::{Action, Ending, GameSession, SessionState, Turn};
