//! Rendering module
//!
//! Every visual in the game is a solid rectangle. The scene is drawn onto
//! anything implementing `Surface`: the browser canvas on web, or a
//! `RecordingSurface` for tests and headless runs.

pub mod scenery;
pub mod sprites;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

pub use crate::color::{Color, WHITE};
use crate::settings::Settings;
use crate::sim::GameState;

/// A 2D drawing target with a fixed logical coordinate space
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Clear {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

/// Surface that stores every call instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_log(&mut self) {
        self.commands.clear();
    }

    /// Number of fills using `color`
    pub fn fills_with(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { color: fill, .. } if *fill == color))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Fill { x, y, w, h, color });
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }
}

/// Draw a full frame: background, rider, then fences
pub fn render_scene(surface: &mut impl Surface, state: &GameState, settings: &Settings) {
    let tuning = &state.tuning;
    surface.clear_rect(0.0, 0.0, tuning.viewport_width, tuning.viewport_height);

    scenery::draw_environment(surface, &state.environment, tuning, settings.decorations);
    sprites::draw_player(surface, &state.player);
    for obstacle in state.obstacles.iter() {
        sprites::draw_obstacle(surface, obstacle, tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scene_starts_with_clear() {
        let state = GameState::new(1, Default::default());
        let mut surface = RecordingSurface::new();
        render_scene(&mut surface, &state, &Settings::default());

        assert_eq!(
            surface.commands.first(),
            Some(&DrawCommand::Clear {
                x: 0.0,
                y: 0.0,
                w: 800.0,
                h: 300.0
            })
        );
        assert!(surface.commands.len() > 100);
    }
}
