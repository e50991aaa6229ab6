//! Core library for the console battleship game: coordinate geometry, ship
//! placement, shot tracking, and the computer's hunt-and-target strategy.

pub mod ai;
mod board;
mod config;
mod coord;
mod game;
mod logging;
mod player;
mod ship;
mod ui;

pub use ai::ShotReport;
pub use board::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
pub use ui::*;
