//! End-to-end CLI tests for the `orientus` binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn orientus() -> Command {
    let mut cmd = Command::cargo_bin("orientus").unwrap();
    cmd.args(["--no-color", "--seed", "42"]);
    cmd
}

// ---------------------------------------------------------------------------
// menu
// ---------------------------------------------------------------------------

#[test]
fn quit_immediately() {
    orientus()
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to the DUNGEONS OF LORD OBJECT ORIENTUS!")
                .and(predicate::str::contains("What would you like to do?"))
                .and(predicate::str::contains("[4] Quit game"))
                .and(predicate::str::contains("Thanks for playing!")),
        );
}

#[test]
fn look_around_at_start() {
    orientus()
        .write_stdin("1\n4\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are in the Dungeon Entrance")
                .and(predicate::str::contains("A dark and damp entrance to the dungeon"))
                .and(predicate::str::contains("- Hallway"))
                .and(predicate::str::contains("Enemies present:").not()),
        );
}

#[test]
fn invalid_choice_reprompts() {
    orientus()
        .write_stdin("9\nrun\n4\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Please enter a number between 1 and 4.")
                .and(predicate::str::contains("Thanks for playing!")),
        );
}

#[test]
fn closed_input_ends_the_game() {
    orientus()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for playing!"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn nothing_to_attack_at_entrance() {
    orientus()
        .write_stdin("3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no enemies to attack!"));
}

#[test]
fn moving_into_the_hallway_wakes_the_rat() {
    orientus()
        .write_stdin("2\n1\n1\n4\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Where would you like to go?")
                .and(predicate::str::contains("You move to the Hallway"))
                .and(predicate::str::contains("Sewer Rat attacks you!"))
                .and(predicate::str::contains("- Sewer Rat (")),
        );
}

#[test]
fn running_for_the_portal_always_wins() {
    // The rat and the dragon together deal at most 9 of the hero's 10 HP.
    for seed in ["1", "2", "3", "42"] {
        Command::cargo_bin("orientus")
            .unwrap()
            .args(["--no-color", "--seed", seed])
            .write_stdin("2\n1\n2\n2\n2\n2\n")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("You move to the Chamber")
                    .and(predicate::str::contains("Giant Dragon attacks you!"))
                    .and(predicate::str::contains(
                        "You reached the portal and escaped the dungeon! You win!",
                    )),
            );
    }
}

#[test]
fn same_seed_same_story() {
    let play = || {
        orientus()
            .write_stdin("2\n1\n3\n1\n3\n1\n3\n1\n4\n")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(play(), play());
}

// ---------------------------------------------------------------------------
// flags
// ---------------------------------------------------------------------------

#[test]
fn help_lists_flags() {
    Command::cargo_bin("orientus")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--seed")
                .and(predicate::str::contains("--no-color"))
                .and(predicate::str::contains("--verbose")),
        );
}

#[test]
fn logs_go_to_stderr() {
    orientus()
        .arg("-vv")
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("dispatching action").not())
        .stderr(predicate::str::contains("dispatching action"));
}
