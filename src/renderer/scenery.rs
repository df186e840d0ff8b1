//! Background layers: trees, arena fence, sand, ground specks and clouds

use super::{Color, Surface};
use crate::settings::Tuning;
use crate::sim::Environment;

const TRUNK: Color = Color::hex(0x8b6f4e);
const CROWN_DARK: Color = Color::hex(0x4a7c3f);
const CROWN_LIGHT: Color = Color::hex(0x5a9a4a);
const FENCE_POST: Color = Color::hex(0xa18262);
const FENCE_CAP: Color = Color::hex(0x8b6f4e);
const FENCE_RAIL: Color = Color::hex(0xb8956a);
const RAIL_HIGHLIGHT: Color = Color::hex(0xc9a87c);
const SAND: Color = Color::hex(0xfce7c0);
const GROUND_LINE: Color = Color::hex(0x292524);
const DIRT: Color = Color::hex(0x78716c);
const CLOUD: Color = Color::rgba(255, 255, 255, 0.5);

/// Trees scroll at this fraction of the fence speed
const TREE_PARALLAX: f32 = 0.5;
/// Virtual strip the trees wrap around
const TREE_WRAP: f32 = 1000.0;
const POST_SPACING: f32 = 60.0;

/// Draw the background. With `decorations` off only the sand and the
/// ground line are drawn.
pub fn draw_environment(
    surface: &mut impl Surface,
    env: &Environment,
    tuning: &Tuning,
    decorations: bool,
) {
    if decorations {
        draw_trees(surface, env, tuning);
        draw_arena_fence(surface, env, tuning);
    }

    let ground = tuning.ground_y;
    surface.fill_rect(0.0, ground, tuning.viewport_width, tuning.viewport_height - ground, SAND);
    surface.fill_rect(0.0, ground, tuning.viewport_width, 2.0, GROUND_LINE);

    if decorations {
        for dot in &env.ground_dots {
            surface.fill_rect(dot.x, dot.y, dot.size, dot.size, DIRT);
        }
        for cloud in &env.clouds {
            surface.fill_rect(cloud.x, cloud.y, cloud.width, 15.0, CLOUD);
            surface.fill_rect(cloud.x + 10.0, cloud.y - 10.0, cloud.width - 20.0, 10.0, CLOUD);
        }
    }
}

/// Screen x of a tree after parallax scrolling
pub fn tree_screen_x(tree_x: f32, fence_offset: f32) -> f32 {
    (tree_x - fence_offset * TREE_PARALLAX).rem_euclid(TREE_WRAP) - 100.0
}

fn draw_trees(surface: &mut impl Surface, env: &Environment, tuning: &Tuning) {
    let base = tuning.ground_y;
    for tree in &env.trees {
        let tx = tree_screen_x(tree.x, env.fence_offset);
        let crown = tree.crown_width;
        let top = base - tree.height;

        surface.fill_rect(tx + crown / 2.0 - 3.0, top + crown, 6.0, tree.height - crown, TRUNK);
        surface.fill_rect(tx, top, crown, crown, CROWN_DARK);
        surface.fill_rect(tx + 3.0, top - 4.0, crown - 6.0, 6.0, CROWN_LIGHT);
        surface.fill_rect(tx + 2.0, top + 2.0, crown - 4.0, crown - 4.0, CROWN_LIGHT);
    }
}

fn draw_arena_fence(surface: &mut impl Surface, env: &Environment, tuning: &Tuning) {
    let fence_y = tuning.ground_y - 18.0;
    let offset = env.fence_offset % POST_SPACING;

    let mut i = -POST_SPACING;
    while i < tuning.viewport_width + POST_SPACING {
        let px = i - offset;
        surface.fill_rect(px, fence_y, 4.0, 20.0, FENCE_POST);
        surface.fill_rect(px - 1.0, fence_y - 2.0, 6.0, 3.0, FENCE_CAP);
        i += POST_SPACING;
    }

    for rail_y in [fence_y + 4.0, fence_y + 12.0] {
        surface.fill_rect(0.0, rail_y, tuning.viewport_width, 3.0, FENCE_RAIL);
        surface.fill_rect(0.0, rail_y, tuning.viewport_width, 1.0, RAIL_HIGHLIGHT);
    }
}
