//! Background scenery: ground specks, clouds, trees and the arena fence.
//!
//! Purely cosmetic. The only shared quantity is `fence_offset`, which
//! advances by the same global speed as the fences so the ground and the
//! obstacles scroll together.

use rand::Rng;

use crate::settings::Tuning;

const GROUND_DOT_COUNT: usize = 50;
const CLOUD_COUNT: usize = 3;
const TREE_COUNT: usize = 5;
/// Horizontal spacing between tree slots
const TREE_SPACING: f32 = 200.0;

/// A speck of dirt on the sand
#[derive(Debug, Clone, PartialEq)]
pub struct GroundDot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// A drifting pixel cloud with its own speed
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub speed: f32,
}

/// A background tree; drawn at half the fence scroll
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub x: f32,
    pub height: f32,
    pub crown_width: f32,
}

#[derive(Debug, Clone)]
pub struct Environment {
    pub ground_dots: Vec<GroundDot>,
    pub clouds: Vec<Cloud>,
    pub trees: Vec<Tree>,
    /// Total distance scrolled at game speed
    pub fence_offset: f32,
}

fn cloud_height(rng: &mut impl Rng) -> f32 {
    rng.random::<f32>() * 100.0 + 20.0
}

impl Environment {
    pub fn new(rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let ground_dots = (0..GROUND_DOT_COUNT)
            .map(|_| GroundDot {
                x: rng.random::<f32>() * tuning.viewport_width,
                y: tuning.ground_y
                    + rng.random::<f32>() * (tuning.viewport_height - tuning.ground_y),
                size: rng.random::<f32>() * 2.0 + 1.0,
            })
            .collect();

        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud {
                x: rng.random::<f32>() * tuning.viewport_width,
                y: cloud_height(rng),
                width: 40.0 + rng.random::<f32>() * 40.0,
                speed: 0.5 + rng.random::<f32>(),
            })
            .collect();

        let trees = (0..TREE_COUNT)
            .map(|i| Tree {
                x: i as f32 * TREE_SPACING + rng.random::<f32>() * 80.0,
                height: 40.0 + rng.random_range(0..25) as f32,
                crown_width: 20.0 + rng.random_range(0..12) as f32,
            })
            .collect();

        Self {
            ground_dots,
            clouds,
            trees,
            fence_offset: 0.0,
        }
    }

    /// Scroll one frame. Specks and clouds wrap back to the right edge.
    pub fn advance(&mut self, speed: f32, rng: &mut impl Rng, tuning: &Tuning) {
        for dot in &mut self.ground_dots {
            dot.x -= speed;
            if dot.x < 0.0 {
                dot.x = tuning.viewport_width;
            }
        }

        for cloud in &mut self.clouds {
            cloud.x -= cloud.speed;
            if cloud.x + cloud.width < 0.0 {
                cloud.x = tuning.viewport_width;
                cloud.y = cloud_height(rng);
            }
        }

        self.fence_offset += speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_initial_layout() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let env = Environment::new(&mut rng, &tuning);

        assert_eq!(env.ground_dots.len(), 50);
        assert_eq!(env.clouds.len(), 3);
        assert_eq!(env.trees.len(), 5);
        for dot in &env.ground_dots {
            assert!(dot.y >= tuning.ground_y && dot.y <= tuning.viewport_height);
            assert!(dot.size >= 1.0 && dot.size <= 3.0);
        }
        for cloud in &env.clouds {
            assert!(cloud.y >= 20.0 && cloud.y <= 120.0);
            assert!(cloud.speed >= 0.5 && cloud.speed <= 1.5);
        }
    }

    #[test]
    fn test_dots_wrap_and_offset_tracks_speed() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut env = Environment::new(&mut rng, &tuning);
        env.ground_dots[0].x = 4.0;

        env.advance(6.0, &mut rng, &tuning);
        assert_eq!(env.ground_dots[0].x, tuning.viewport_width);
        assert_eq!(env.fence_offset, 6.0);

        for _ in 0..1000 {
            env.advance(6.0, &mut rng, &tuning);
        }
        for dot in &env.ground_dots {
            assert!(dot.x >= 0.0 && dot.x <= tuning.viewport_width);
        }
        for cloud in &env.clouds {
            assert!(cloud.x + cloud.width >= 0.0);
            assert!(cloud.x <= tuning.viewport_width);
        }
    }
}
