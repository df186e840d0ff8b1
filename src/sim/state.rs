//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in `GameState`, owned by the
//! session and passed into `tick`.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::environment::Environment;
use super::obstacle::ObstacleField;
use super::player::Player;
use crate::consts::BOOT_SPAWN_DELAY;
use crate::settings::Tuning;

/// Complete simulation context for one device session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub player: Player,
    pub obstacles: ObstacleField,
    pub environment: Environment,
    /// Global scroll speed shared by fences and ground
    pub speed: f32,
    /// Unfloored score
    pub score: f64,
    /// Frames simulated since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let environment = Environment::new(&mut rng, &tuning);
        Self {
            seed,
            rng,
            player: Player::new(&tuning),
            obstacles: ObstacleField::new(BOOT_SPAWN_DELAY),
            environment,
            speed: tuning.initial_speed,
            score: 0.0,
            time_ticks: 0,
            tuning,
        }
    }

    /// Reset everything a new run starts from. Scenery keeps scrolling
    /// from where it was.
    pub fn reset_run(&mut self) {
        self.player.reset(&self.tuning);
        self.obstacles.clear(self.tuning.first_spawn_delay);
        self.score = 0.0;
        self.speed = self.tuning.initial_speed;
        self.time_ticks = 0;
    }

    /// Score as shown to the player
    pub fn floored_score(&self) -> u32 {
        self.score.max(0.0).floor() as u32
    }
}
