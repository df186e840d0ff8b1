//! Show jumping fences: generation, spawn pacing and scrolling

use rand::Rng;

use crate::consts::*;
use crate::color::Color;
use crate::settings::Tuning;

/// Competition colour schemes; each fence pairs white with one accent
pub const JUMP_COLORS: [Color; 4] = [
    Color::hex(0xdc2626),
    Color::hex(0x2563eb),
    Color::hex(0x16a34a),
    Color::hex(0xd97706),
];

/// Fence rendering styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Wing standards with striped horizontal poles
    VerticalRail,
    /// Wing standards with alternating solid planks
    StripedPlank,
    /// Brick wall with a coloured cap
    SolidWall,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::VerticalRail,
        ObstacleKind::StripedPlank,
        ObstacleKind::SolidWall,
    ];

    pub fn width(&self) -> f32 {
        match self {
            ObstacleKind::SolidWall => WALL_WIDTH,
            ObstacleKind::VerticalRail | ObstacleKind::StripedPlank => FENCE_WIDTH,
        }
    }
}

/// A single fence resting on the ground line
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub color: Color,
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Build a fence of the given shape with its base on the ground
    pub fn new(kind: ObstacleKind, color: Color, height: f32, x: f32, tuning: &Tuning) -> Self {
        Self {
            color,
            kind,
            x,
            y: tuning.ground_y - height,
            width: kind.width(),
            height,
        }
    }

    /// Random fence just past the right edge of the viewport
    pub fn spawn(rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let color = JUMP_COLORS[rng.random_range(0..JUMP_COLORS.len())];
        let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
        let height = OBSTACLE_HEIGHTS[rng.random_range(0..OBSTACLE_HEIGHTS.len())];
        Self::new(kind, color, height, tuning.viewport_width, tuning)
    }

    /// Scroll left by the global speed
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Right edge has passed the left edge of the viewport
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Range (in frames) the next spawn countdown is drawn from.
///
/// Both bounds shrink as the game speeds up and bottom out at 40 and 80.
pub fn spawn_interval_bounds(speed: f32) -> (f32, f32) {
    let min = (100.0 - speed * 5.0).max(40.0);
    let max = (150.0 - speed * 4.0).max(80.0);
    (min, max)
}

/// Uniform countdown within `spawn_interval_bounds(speed)`
pub fn next_spawn_delay(rng: &mut impl Rng, speed: f32) -> f32 {
    let (min, max) = spawn_interval_bounds(speed);
    rng.random::<f32>() * (max - min) + min
}

/// Live fences in spawn order plus the countdown to the next one
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    /// Frames until the next spawn
    pub spawn_timer: f32,
}

impl ObstacleField {
    pub fn new(spawn_timer: f32) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer,
        }
    }

    pub fn clear(&mut self, spawn_timer: f32) {
        self.obstacles.clear();
        self.spawn_timer = spawn_timer;
    }

    /// Count down and spawn when due. Returns true if a fence was added.
    pub fn tick_spawner(&mut self, rng: &mut impl Rng, speed: f32, tuning: &Tuning) -> bool {
        self.spawn_timer -= 1.0;
        if self.spawn_timer > 0.0 {
            return false;
        }

        let obstacle = Obstacle::spawn(rng, tuning);
        log::debug!(
            "Spawned {:?} h={} at speed {:.3}",
            obstacle.kind,
            obstacle.height,
            speed
        );
        self.obstacles.push(obstacle);
        self.spawn_timer = next_spawn_delay(rng, speed);
        true
    }

    /// Scroll every fence by the same speed
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed);
        }
    }

    /// Drop fences that left the screen, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        before - self.obstacles.len()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}
