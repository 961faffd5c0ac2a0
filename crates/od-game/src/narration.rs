//! Narration text produced by the game.
//!
//! Fixed lines are constants; lines that name things are small helpers.

/// Printed once when the game starts.
pub const WELCOME: &str = "Welcome to the DUNGEONS OF LORD OBJECT ORIENTUS!";
/// Main menu question.
pub const ACTION_PROMPT: &str = "What would you like to do?";
/// Move destination question.
pub const MOVE_PROMPT: &str = "Where would you like to go?";
/// Attack target question.
pub const ATTACK_PROMPT: &str = "Which enemy would you like to attack?";
/// Shown when the current room has no exits.
pub const NO_EXITS: &str = "There is nowhere to go from here.";
/// Shown when there is nothing alive to attack.
pub const NO_ENEMIES: &str = "There are no enemies to attack!";
/// Header before the enemy list when looking around.
pub const ENEMIES_HEADER: &str = "Enemies present:";
/// Header before the exit list when looking around.
pub const EXITS_HEADER: &str = "Exits:";
/// Printed on quit.
pub const FAREWELL: &str = "Thanks for playing!";
/// Printed when the player dies.
pub const DEFEAT: &str = "You have been defeated! Game over.";
/// Printed when the player reaches the goal room.
pub const VICTORY: &str = "You reached the portal and escaped the dungeon! You win!";

/// "You are in the <room>".
pub fn you_are_in(room: &str) -> String {
    format!("You are in the {room}")
}

/// A bulleted list entry.
pub fn bullet(text: &str) -> String {
    format!("- {text}")
}

/// "<name> (<hp> HP)", used for enemy listings and attack targets.
pub fn with_hp(name: &str, hit_points: i32) -> String {
    format!("{name} ({hit_points} HP)")
}

/// "You move to the <room>".
pub fn you_move_to(room: &str) -> String {
    format!("You move to the {room}")
}

/// "<enemy> attacks you!".
pub fn ambush(enemy: &str) -> String {
    format!("{enemy} attacks you!")
}

/// "You attack the <enemy>!".
pub fn you_attack(enemy: &str) -> String {
    format!("You attack the {enemy}!")
}

/// "<enemy> counterattacks!".
pub fn counterattack(enemy: &str) -> String {
    format!("{enemy} counterattacks!")
}

/// "You defeated the <enemy>!".
pub fn defeated(enemy: &str) -> String {
    format!("You defeated the {enemy}!")
}
