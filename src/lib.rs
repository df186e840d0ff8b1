//! Fence Rider - a side-scrolling show jumping arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, obstacles, collisions, scoring)
//! - `session`: Idle/Playing/GameOver state machine and loop handle
//! - `renderer`: Rectangle-only drawing of the scene onto a `Surface`
//! - `platform`: Storage and scheduling seams (in-memory doubles included)
//! - `color`: Shared colour type
//! - `highscores`: Best score persistence
//! - `settings`: Data-driven tuning and preferences

pub mod color;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use session::{GamePhase, Hud, HudField, LoopHandle, Panel, Session};
pub use settings::{Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_FORCE: f32 = -10.0;
    /// Scroll speed at session start
    pub const INITIAL_SPEED: f32 = 6.0;
    /// Speed gained every frame while playing
    pub const GAME_SPEED_ACCELERATION: f32 = 0.001;
    /// Score gained every frame while playing
    pub const SCORE_PER_FRAME: f64 = 0.1;

    /// Running surface; every resting entity's bottom edge sits here
    pub const GROUND_Y: f32 = 250.0;
    /// Logical canvas size
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 300.0;

    /// Player sprite bounds
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Hitbox shrink applied to every side of the player box
    pub const PLAYER_HITBOX_INSET: f32 = 10.0;

    /// Fly mode hovers this far above the resting pose
    pub const HOVER_OFFSET: f32 = 60.0;
    /// Per-frame easing factor toward the hover height
    pub const HOVER_EASE: f32 = 0.15;

    /// Countdown used for the first obstacle of a session (frames)
    pub const FIRST_SPAWN_DELAY: f32 = 50.0;
    /// Countdown before `start` is ever called
    pub const BOOT_SPAWN_DELAY: f32 = 100.0;

    /// Obstacle geometry
    pub const WALL_WIDTH: f32 = 28.0;
    pub const FENCE_WIDTH: f32 = 34.0;
    pub const OBSTACLE_HEIGHTS: [f32; 2] = [40.0, 55.0];

    /// Persistence keys
    pub const HIGH_SCORE_KEY: &str = "equestrian_high_score";
    pub const SETTINGS_KEY: &str = "equestrian_settings";
}

/// Floor a score and zero pad it to five digits, as shown on the HUD
pub fn format_score(score: f64) -> String {
    format!("{:05}", score.max(0.0).floor() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_pads_and_floors() {
        assert_eq!(format_score(0.0), "00000");
        assert_eq!(format_score(123.7), "00123");
        assert_eq!(format_score(99999.9), "99999");
        assert_eq!(format_score(123456.0), "123456");
    }
}
