//! The horse and rider

use glam::Vec2;

use crate::consts::*;
use crate::settings::Tuning;

/// Gallop frame toggles once this many frames have passed
const GALLOP_FRAME_TICKS: u32 = 5;

/// The player entity. `pos` is the top-left of the sprite bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub vy: f32,
    pub jumping: bool,
    /// Gallop leg pose (0 or 1)
    pub frame: u8,
    pub frame_count: u32,
}

impl Player {
    /// Create a player resting on the ground
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, tuning.ground_y - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vy: 0.0,
            jumping: false,
            frame: 0,
            frame_count: 0,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Y coordinate of the resting pose
    pub fn rest_y(&self, tuning: &Tuning) -> f32 {
        tuning.ground_y - self.size.y
    }

    /// Back to the resting ground pose (session start)
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos.y = self.rest_y(tuning);
        self.vy = 0.0;
        self.jumping = false;
    }

    /// Start a jump. Ignored while airborne.
    pub fn jump(&mut self, tuning: &Tuning) {
        if !self.jumping {
            self.vy = tuning.jump_force;
            self.jumping = true;
        }
    }

    /// Advance one frame of physics and the gallop animation
    pub fn integrate(&mut self, tuning: &Tuning, fly_mode: bool) {
        if fly_mode {
            let hover_y = self.rest_y(tuning) - tuning.hover_offset;
            self.pos.y += (hover_y - self.pos.y) * tuning.hover_ease;
            self.vy = 0.0;
            self.jumping = true;
            return;
        }

        self.vy += tuning.gravity;
        self.pos.y += self.vy;

        if self.pos.y + self.size.y >= tuning.ground_y {
            self.pos.y = self.rest_y(tuning);
            self.vy = 0.0;
            self.jumping = false;
        }

        if !self.jumping {
            self.frame_count += 1;
            if self.frame_count > GALLOP_FRAME_TICKS {
                self.frame = 1 - self.frame;
                self.frame_count = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn airborne(tuning: &Tuning, lift: f32) -> Player {
        let mut player = Player::new(tuning);
        player.pos.y -= lift;
        player.jumping = true;
        player
    }

    #[test]
    fn test_gravity_accelerates_until_landing() {
        let tuning = Tuning::default();
        let mut player = airborne(&tuning, 100.0);

        let mut last_vy = player.vy;
        loop {
            player.integrate(&tuning, false);
            if !player.jumping {
                break;
            }
            assert!(player.vy > last_vy);
            last_vy = player.vy;
        }
        assert_eq!(player.vy, 0.0);
        assert_eq!(player.pos.y + player.height(), tuning.ground_y);
    }

    #[test]
    fn test_jump_is_idempotent_in_air() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        player.jump(&tuning);
        assert!(player.jumping);
        assert_eq!(player.vy, -10.0);

        player.integrate(&tuning, false);
        let vy = player.vy;
        player.jump(&tuning);
        assert_eq!(player.vy, vy);
        assert!(player.jumping);
    }

    #[test]
    fn test_full_jump_lands_again() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.jump(&tuning);

        let mut frames = 0;
        while player.jumping {
            player.integrate(&tuning, false);
            frames += 1;
            assert!(frames < 100, "jump never landed");
        }
        assert_eq!(player.pos.y, player.rest_y(&tuning));
    }

    #[test]
    fn test_fly_mode_eases_to_hover() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let target = player.rest_y(&tuning) - tuning.hover_offset;

        player.integrate(&tuning, true);
        assert!(player.jumping);
        assert_eq!(player.vy, 0.0);
        let first_gap = player.pos.y - target;
        assert!((first_gap - tuning.hover_offset * 0.85).abs() < 1e-3);

        for _ in 0..200 {
            player.integrate(&tuning, true);
        }
        assert!((player.pos.y - target).abs() < 0.01);

        // Releasing fly mode drops the player back to the ground
        while player.jumping {
            player.integrate(&tuning, false);
        }
        assert_eq!(player.pos.y, player.rest_y(&tuning));
    }

    #[test]
    fn test_gallop_toggles_on_ground_only() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        for _ in 0..GALLOP_FRAME_TICKS {
            player.integrate(&tuning, false);
        }
        assert_eq!(player.frame, 0);
        player.integrate(&tuning, false);
        assert_eq!(player.frame, 1);

        player.jump(&tuning);
        let count = player.frame_count;
        player.integrate(&tuning, false);
        assert_eq!(player.frame_count, count);
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(jumps in proptest::collection::vec(any::<bool>(), 1..300)) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);
            for jump in jumps {
                if jump {
                    player.jump(&tuning);
                }
                player.integrate(&tuning, false);
                prop_assert!(player.pos.y + player.height() <= tuning.ground_y);
                if !player.jumping {
                    prop_assert_eq!(player.vy, 0.0);
                    prop_assert_eq!(player.pos.y, player.rest_y(&tuning));
                }
            }
        }
    }
}
