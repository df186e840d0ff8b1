//! Fixed per-frame simulation step
//!
//! Progression is counted in frames, not seconds: a faster display runs the
//! game faster.

use super::collision::check_collision;
use super::state::GameState;

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Hover easter egg held down
    pub fly: bool,
}

/// What happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Run continues; schedule another frame
    Running,
    /// Rider hit the fence at this index; the run is over
    Collision { obstacle: usize },
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let GameState {
        rng,
        tuning,
        player,
        obstacles,
        environment,
        speed,
        ..
    } = state;

    environment.advance(*speed, rng, tuning);
    player.integrate(tuning, input.fly);

    obstacles.tick_spawner(rng, *speed, tuning);
    obstacles.advance(*speed);
    obstacles.prune();

    if let Some(index) = obstacles.iter().position(|o| check_collision(player, o)) {
        return TickOutcome::Collision { obstacle: index };
    }

    state.score += state.tuning.score_per_frame;
    state.speed += state.tuning.speed_acceleration;
    state.time_ticks += 1;

    TickOutcome::Running
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::obstacle::{JUMP_COLORS, Obstacle, ObstacleKind};

    fn fresh_state() -> GameState {
        let mut state = GameState::new(12345, Tuning::default());
        state.reset_run();
        state
    }

    #[test]
    fn test_score_and_speed_ramp() {
        let mut state = fresh_state();
        state.obstacles.spawn_timer = 10_000.0;

        for _ in 0..100 {
            assert_eq!(tick(&mut state, &TickInput::default()), TickOutcome::Running);
        }
        assert!((state.score - 10.0).abs() < 1e-9);
        assert!((state.speed - 6.1).abs() < 1e-4);
        assert_eq!(state.time_ticks, 100);
    }

    #[test]
    fn test_first_obstacle_spawns_after_delay() {
        let mut state = fresh_state();
        for _ in 0..49 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.obstacles.is_empty());

        tick(&mut state, &TickInput::default());
        assert_eq!(state.obstacles.len(), 1);
        let first = &state.obstacles.obstacles[0];
        // Spawned at the right edge and already scrolled once
        assert!((first.x - (state.tuning.viewport_width - 6.049)).abs() < 1e-3);
    }

    #[test]
    fn test_collision_ends_frame_without_scoring() {
        let mut state = fresh_state();
        let tuning = state.tuning.clone();
        state.obstacles.spawn_timer = 10_000.0;
        state.obstacles.obstacles.push(Obstacle::new(
            ObstacleKind::SolidWall,
            JUMP_COLORS[1],
            55.0,
            80.0,
            &tuning,
        ));

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome, TickOutcome::Collision { obstacle: 0 });
        assert_eq!(state.score, 0.0);
        assert_eq!(state.speed, tuning.initial_speed);
    }

    #[test]
    fn test_jump_clears_low_fence() {
        let mut state = fresh_state();
        let tuning = state.tuning.clone();
        state.obstacles.spawn_timer = 10_000.0;
        state.obstacles.obstacles.push(Obstacle::new(
            ObstacleKind::VerticalRail,
            JUMP_COLORS[2],
            40.0,
            200.0,
            &tuning,
        ));

        for _ in 0..200 {
            let fence_x = state.obstacles.iter().next().map(|o| o.x);
            if let Some(x) = fence_x {
                if x < 150.0 {
                    state.player.jump(&tuning);
                }
            }
            assert_eq!(tick(&mut state, &TickInput::default()), TickOutcome::Running);
        }
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = fresh_state();
        let mut b = fresh_state();
        let input = TickInput::default();

        for i in 0..500 {
            if i % 37 == 0 {
                a.player.jump(&a.tuning);
                b.player.jump(&b.tuning);
            }
            let oa = tick(&mut a, &input);
            let ob = tick(&mut b, &input);
            assert_eq!(oa, ob);
            if oa != TickOutcome::Running {
                break;
            }
        }
        assert_eq!(a.obstacles.obstacles, b.obstacles.obstacles);
        assert_eq!(a.player, b.player);
    }
}
