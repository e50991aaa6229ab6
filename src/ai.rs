//! The computer's firing strategy and random fleet placement.
//!
//! The strategy keeps no memory of its own: every turn it recomputes the
//! current lead from the board's shot log via `last_unresolved_hit`.

use log::debug;
use rand::Rng;

use crate::board::{Board, FireOutcome, PlacementError};
use crate::coord::Coordinate;
use crate::ship::{Direction, Ship, ShipClass};

/// Random placement attempts per ship before giving up.
const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// What one strategy turn did, for narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub target: Coordinate,
    pub outcome: FireOutcome,
    /// Whether this shot finished off the ship it struck.
    pub sunk: bool,
}

/// Place one ship of the given length at a random legal position. On a
/// board too congested to accept the ship, the last rejection is reported
/// after `MAX_PLACEMENT_ATTEMPTS` tries.
pub fn place_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    length: u32,
) -> Result<Ship, PlacementError> {
    let mut last = PlacementError::Collision;
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let origin = Coordinate::new(
            rng.random_range(1..=board.width()),
            rng.random_range(1..=board.height()),
        );
        let direction = if rng.random() {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let ship = Ship::new(origin, direction, length);
        match board.add_ship(ship) {
            Ok(()) => return Ok(ship),
            Err(err) => last = err,
        }
    }
    Err(last)
}

/// Place a whole fleet at random legal positions.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    fleet: &[ShipClass],
) -> Result<(), PlacementError> {
    for class in fleet {
        let ship = place_randomly(rng, board, class.length())?;
        debug!("{} placed at {}", class.name(), ship.origin());
    }
    Ok(())
}

/// Fire one strategy shot at `board` and report what happened.
///
/// With a live lead (a recorded hit on a ship still afloat) the strategy
/// probes the lead's orthogonal neighbors; without one it hunts at random.
/// Candidates commit only by `Board::fire` accepting them, so the strategy
/// can never report a shot the board rejected.
pub fn take_turn<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> ShotReport {
    let (target, outcome) = match board.last_unresolved_hit() {
        Some(lead) => {
            debug!("targeting around live lead at {}", lead);
            follow_up(board, lead).unwrap_or_else(|| hunt(rng, board))
        }
        None => hunt(rng, board),
    };
    ShotReport {
        target,
        outcome,
        sunk: board.sunk_ship_at(target),
    }
}

/// True when `target` is a recorded hit on a ship that is still afloat.
fn live_hit(board: &Board, target: Coordinate) -> bool {
    board.has_been_shot(target) && board.has_ship(target) && !board.sunk_ship_at(target)
}

/// Target mode: probe the lead's neighbors in priority order down, right,
/// up, left. Each probe first checks whether its opposite neighbor is
/// already a live hit, in which case the ship's line runs through the lead
/// and the probe continues it; plain probing runs only after no line
/// continuation fired. Returns `None` when all four neighbors are
/// ineligible.
fn follow_up(board: &mut Board, lead: Coordinate) -> Option<(Coordinate, FireOutcome)> {
    let probes = [
        (lead.down(), lead.up()),
        (lead.right(), lead.left()),
        (lead.up(), lead.down()),
        (lead.left(), lead.right()),
    ];
    for (probe, opposite) in probes {
        if live_hit(board, opposite) {
            if let Ok(outcome) = board.fire(probe) {
                return Some((probe, outcome));
            }
        }
    }
    for (probe, _) in probes {
        if let Ok(outcome) = board.fire(probe) {
            return Some((probe, outcome));
        }
    }
    None
}

/// Hunt mode: uniformly random in-bounds coordinates until one is accepted.
/// The unshot space shrinks with every recorded shot, so the loop
/// terminates on any board that still has an unshot cell.
fn hunt<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> (Coordinate, FireOutcome) {
    loop {
        let target = Coordinate::new(
            rng.random_range(1..=board.width()),
            rng.random_range(1..=board.height()),
        );
        if let Ok(outcome) = board.fire(target) {
            return (target, outcome);
        }
    }
}
