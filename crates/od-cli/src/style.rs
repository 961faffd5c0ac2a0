//! Colours for narration lines.

use colored::{ColoredString, Colorize};

use od_game::narration;

/// Colour a narration line by what it reports.
pub fn paint(line: &str) -> ColoredString {
    match line {
        narration::WELCOME => line.bold().magenta(),
        narration::VICTORY => line.bold().green(),
        narration::DEFEAT => line.bold().red(),
        narration::FAREWELL => line.bold(),
        narration::ENEMIES_HEADER | narration::EXITS_HEADER => line.underline(),
        _ if line.ends_with(" attacks you!") || line.ends_with(" counterattacks!") => {
            line.red()
        }
        _ if line.contains(" damage!") => line.yellow(),
        _ if line.starts_with("You are in the ") || line.starts_with("You move to the ") => {
            line.cyan().bold()
        }
        _ => line.normal(),
    }
}

/// Dimmed aside text.
pub fn hint(text: &str) -> ColoredString {
    text.dimmed()
}
