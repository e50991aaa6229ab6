//! Player trait and the two implementations: the computer strategy and the
//! interactive prompt-driven player.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::ai::{self, ShotReport};
use crate::board::{Board, PlacementError};
use crate::ship::{Direction, Ship, ShipClass};
use crate::ui::{parse_coord, parse_direction, render_board};

/// A participant that can set up a fleet and fire on the enemy board.
pub trait Player {
    /// Place every ship of `fleet` onto `board`.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipClass],
    ) -> Result<(), PlacementError>;

    /// Fire one shot at the enemy board and report what happened.
    fn take_turn(&mut self, rng: &mut SmallRng, enemy: &mut Board) -> ShotReport;
}

/// Computer player: random placement, hunt-and-target firing.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipClass],
    ) -> Result<(), PlacementError> {
        ai::place_fleet(rng, board, fleet)
    }

    fn take_turn(&mut self, rng: &mut SmallRng, enemy: &mut Board) -> ShotReport {
        ai::take_turn(rng, enemy)
    }
}

/// Interactive player reading coordinates from stdin, re-prompting until the
/// board accepts the input.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    io::stdout().flush().unwrap();
    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap();
    line.trim().to_string()
}

impl Player for CliPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[ShipClass],
    ) -> Result<(), PlacementError> {
        println!("\nPlace your fleet. A position is a column number and a row letter,");
        println!("optionally followed by a direction: '5 C h' or '5C v'. Horizontal");
        println!("is the default. Press ENTER alone for a random position.");
        for class in fleet {
            loop {
                println!("\n{}", render_board(board, true));
                println!("Placing your {} (length {}).", class.name(), class.length());
                let line = prompt("Position: ");

                if line.is_empty() {
                    let ship = ai::place_randomly(rng, board, class.length())?;
                    println!("✓ {} placed at {}.", class.name(), ship.origin());
                    break;
                }

                let mut parts: Vec<&str> = line.split_whitespace().collect();
                // a trailing h/v token is a direction, unless the whole line
                // already reads as a coordinate ("5 h" is row H, not a flag)
                let direction = if parse_coord(&parts.join(" ")).is_ok() {
                    Direction::Horizontal
                } else {
                    match parts.last().and_then(|tail| parse_direction(tail).ok()) {
                        Some(direction) => {
                            parts.pop();
                            direction
                        }
                        None => Direction::Horizontal,
                    }
                };
                let origin = match parse_coord(&parts.join(" ")) {
                    Ok(coord) => coord,
                    Err(e) => {
                        println!("✗ {}", e);
                        continue;
                    }
                };

                match board.add_ship(Ship::new(origin, direction, class.length())) {
                    Ok(()) => {
                        println!("✓ {} placed at {}.", class.name(), origin);
                        break;
                    }
                    Err(e) => println!("✗ Cannot place it there: {}", e),
                }
            }
        }
        println!("\n✓ Fleet in position.");
        Ok(())
    }

    fn take_turn(&mut self, _rng: &mut SmallRng, enemy: &mut Board) -> ShotReport {
        loop {
            let line = prompt("\nFire at (e.g. 5 C): ");
            let target = match parse_coord(&line) {
                Ok(coord) => coord,
                Err(e) => {
                    println!("✗ {}", e);
                    continue;
                }
            };
            match enemy.fire(target) {
                Ok(outcome) => {
                    return ShotReport {
                        target,
                        outcome,
                        sunk: enemy.sunk_ship_at(target),
                    };
                }
                Err(e) => println!("✗ {}", e),
            }
        }
    }
}
