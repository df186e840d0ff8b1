//! Axis-aligned collision between the rider and the fences
//!
//! The rider's box is shrunk on every side so that grazing a fence with a
//! hoof or the tail does not end the run. Fences use their full bounds.

use glam::Vec2;

use super::obstacle::Obstacle;
use super::player::Player;
use crate::consts::PLAYER_HITBOX_INSET;

/// Axis-aligned box, `min` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Shrink by `amount` on all four sides
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(amount),
            size: self.size - Vec2::splat(amount * 2.0),
        }
    }

    /// Strict overlap on both axes; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min, self.max());
        let (b_min, b_max) = (other.min, other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

impl Player {
    /// Full sprite bounds
    pub fn bounds(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    /// Bounds used for collisions
    pub fn hitbox(&self) -> Rect {
        self.bounds().inset(PLAYER_HITBOX_INSET)
    }
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// True if the rider's hitbox overlaps the fence
pub fn check_collision(player: &Player, obstacle: &Obstacle) -> bool {
    player.hitbox().intersects(&obstacle.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::obstacle::{JUMP_COLORS, ObstacleKind};
    use proptest::prelude::*;

    fn fence_at(x: f32, height: f32, tuning: &Tuning) -> Obstacle {
        Obstacle::new(ObstacleKind::VerticalRail, JUMP_COLORS[0], height, x, tuning)
    }

    #[test]
    fn test_rect_intersects_strictly() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(20.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_hitbox_is_inset() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let hb = player.hitbox();
        assert_eq!(hb.min, player.pos + Vec2::splat(10.0));
        assert_eq!(hb.size, Vec2::new(40.0, 30.0));
    }

    #[test]
    fn test_horizontal_overlap_boundary() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let right = player.pos.x + player.width();

        // Fence left edge reaches `overlap` units into the sprite bounds
        let hit = |overlap: f32| check_collision(&player, &fence_at(right - overlap, 55.0, &tuning));
        assert!(!hit(5.0));
        assert!(!hit(9.0));
        assert!(!hit(10.0));
        assert!(hit(11.0));
    }

    #[test]
    fn test_vertical_overlap_boundary() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let fence = fence_at(player.pos.x, 40.0, &tuning);

        // Rider bottom sits `overlap` units below the fence top
        let mut hit = |overlap: f32| {
            player.pos.y = fence.y + overlap - player.height();
            check_collision(&player, &fence)
        };
        assert!(!hit(9.0));
        assert!(!hit(10.0));
        assert!(hit(11.0));
    }

    #[test]
    fn test_resting_rider_hits_fence_in_lane() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        assert!(check_collision(&player, &fence_at(70.0, 40.0, &tuning)));
        assert!(!check_collision(&player, &fence_at(400.0, 40.0, &tuning)));
        assert!(!check_collision(&player, &fence_at(0.0, 40.0, &tuning)));
    }

    proptest! {
        #[test]
        fn prop_hitbox_never_exceeds_sprite(x in -500.0f32..500.0, y in -200.0f32..300.0) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);
            player.pos = Vec2::new(x, y);
            let fence = fence_at(150.0, 55.0, &tuning);
            if check_collision(&player, &fence) {
                prop_assert!(player.bounds().intersects(&fence.bounds()));
            }
        }
    }
}
