//! Game tuning and preferences
//!
//! Persisted in the key-value store as JSON, separately from the high score.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::KeyValueStore;

/// Physics and pacing constants for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Velocity set by a jump (negative is up)
    pub jump_force: f32,
    /// Scroll speed at session start
    pub initial_speed: f32,
    /// Speed added every frame
    pub speed_acceleration: f32,
    /// Score added every frame
    pub score_per_frame: f64,
    /// Running surface
    pub ground_y: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Spawn countdown for the first obstacle of a session
    pub first_spawn_delay: f32,
    /// Fly mode hover height above the resting pose
    pub hover_offset: f32,
    /// Fly mode easing factor per frame
    pub hover_ease: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            initial_speed: INITIAL_SPEED,
            speed_acceleration: GAME_SPEED_ACCELERATION,
            score_per_frame: SCORE_PER_FRAME,
            ground_y: GROUND_Y,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            first_spawn_delay: FIRST_SPAWN_DELAY,
            hover_offset: HOVER_OFFSET,
            hover_ease: HOVER_EASE,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay constants
    pub tuning: Tuning,
    /// Draw trees, arena fence, ground specks and clouds
    pub decorations: bool,
    /// Honour the hold-F hover easter egg
    pub fly_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            decorations: true,
            fly_mode: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the store, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get_item(SETTINGS_KEY) {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from storage");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable settings: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to the store
    pub fn save(&self, store: &mut impl KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set_item(SETTINGS_KEY, &json);
            log::info!("Settings saved");
        }
    }
}
