//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - One call to `tick` per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod environment;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Rect, check_collision};
pub use environment::{Cloud, Environment, GroundDot, Tree};
pub use obstacle::{
    JUMP_COLORS, Obstacle, ObstacleField, ObstacleKind, next_spawn_delay, spawn_interval_bounds,
};
pub use player::Player;
pub use state::GameState;
pub use tick::{TickInput, TickOutcome, tick};
