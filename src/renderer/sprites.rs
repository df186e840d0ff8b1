//! Rider and fence sprites built from rectangles

use super::{Color, Surface, WHITE};
use crate::settings::Tuning;
use crate::sim::{Obstacle, ObstacleKind, Player};

// Fleabitten grey horse
const HORSE_COAT: Color = Color::hex(0xeaecef);
const HORSE_MUZZLE: Color = Color::hex(0xf2f3f5);
const HORSE_FLECKS: Color = Color::hex(0xa0a7b0);
const HORSE_MANE: Color = Color::hex(0xb0b5be);
const HORSE_LEGS: Color = Color::hex(0xdcdfe3);

// Rider
const JACKET: Color = Color::hex(0x111827);
const FACE: Color = Color::hex(0xe8bfa8);
const HELMET: Color = Color::hex(0x374151);
const BREECHES: Color = WHITE;
const BOOTS: Color = Color::hex(0x111827);

// Fences
const STANDARD_FEET: Color = Color::hex(0xe5e7eb);
const POLE_SHADOW: Color = Color::rgba(0, 0, 0, 0.08);
const WALL_STONE: Color = Color::hex(0xf5f5f4);
const WALL_MORTAR: Color = Color::hex(0xd6d3d1);

/// Offsets of the dark flecks on the coat
const FLECKS: [(f32, f32); 8] = [
    (15.0, 23.0),
    (25.0, 25.0),
    (35.0, 23.0),
    (21.0, 31.0),
    (41.0, 29.0),
    (30.0, 22.0),
    (44.0, 10.0),
    (48.0, 16.0),
];

/// Width of a wing standard post
const POST_WIDTH: f32 = 4.0;

pub fn draw_player(surface: &mut impl Surface, player: &Player) {
    let (x, y) = (player.pos.x, player.pos.y);

    // Horse
    surface.fill_rect(x + 10.0, y + 20.0, 40.0, 20.0, HORSE_COAT);
    surface.fill_rect(x + 40.0, y + 5.0, 15.0, 20.0, HORSE_COAT);
    surface.fill_rect(x + 50.0, y + 10.0, 10.0, 10.0, HORSE_MUZZLE);
    for (dx, dy) in FLECKS {
        surface.fill_rect(x + dx, y + dy, 2.0, 2.0, HORSE_FLECKS);
    }
    surface.fill_rect(x + 35.0, y + 5.0, 5.0, 15.0, HORSE_MANE);
    surface.fill_rect(x + 5.0, y + 20.0, 5.0, 15.0, HORSE_MANE);

    // Legs: tucked in the air, two alternating gallop poses on the ground
    let legs: &[(f32, f32)] = match (player.jumping, player.frame) {
        (true, _) => &[(15.0, 8.0), (40.0, 8.0)],
        (false, 0) => &[(10.0, 10.0), (20.0, 8.0), (35.0, 10.0), (45.0, 8.0)],
        (false, _) => &[(15.0, 8.0), (25.0, 10.0), (30.0, 8.0), (40.0, 10.0)],
    };
    for &(dx, h) in legs {
        surface.fill_rect(x + dx, y + 40.0, 8.0, h, HORSE_LEGS);
    }

    // Rider
    surface.fill_rect(x + 20.0, y, 15.0, 25.0, JACKET);
    surface.fill_rect(x + 22.0, y - 4.0, 12.0, 6.0, FACE);
    surface.fill_rect(x + 22.0, y - 10.0, 12.0, 7.0, HELMET);
    surface.fill_rect(x + 20.0, y + 18.0, 10.0, 12.0, BREECHES);
    surface.fill_rect(x + 23.0, y + 25.0, 6.0, 12.0, BOOTS);
}

pub fn draw_obstacle(surface: &mut impl Surface, obstacle: &Obstacle, tuning: &Tuning) {
    match obstacle.kind {
        ObstacleKind::VerticalRail => draw_rails(surface, obstacle, tuning),
        ObstacleKind::StripedPlank => draw_planks(surface, obstacle, tuning),
        ObstacleKind::SolidWall => draw_wall(surface, obstacle),
    }
}

/// White wing standards with coloured caps and wide feet
fn draw_standards(surface: &mut impl Surface, obstacle: &Obstacle, tuning: &Tuning) {
    let ground = tuning.ground_y;
    let height = obstacle.height;
    let left = obstacle.x;
    let right = obstacle.x + obstacle.width - POST_WIDTH;

    for post_x in [left, right] {
        surface.fill_rect(post_x, ground - height, POST_WIDTH, height, WHITE);
        surface.fill_rect(
            post_x - 1.0,
            ground - height - 3.0,
            POST_WIDTH + 2.0,
            4.0,
            obstacle.color,
        );
        surface.fill_rect(post_x - 2.0, ground - 5.0, POST_WIDTH + 4.0, 5.0, STANDARD_FEET);
    }
}

/// Horizontal pole in alternating white and accent stripes
fn draw_striped_pole(surface: &mut impl Surface, x: f32, y: f32, width: f32, h: f32, accent: Color) {
    const STRIPE: f32 = 5.0;
    let mut cx = x;
    let mut white = true;
    while cx < x + width {
        let w = STRIPE.min(x + width - cx);
        surface.fill_rect(cx, y, w, h, if white { WHITE } else { accent });
        cx += w;
        white = !white;
    }
    surface.fill_rect(x, y + h - 1.0, width, 1.0, POLE_SHADOW);
}

fn draw_rails(surface: &mut impl Surface, obstacle: &Obstacle, tuning: &Tuning) {
    draw_standards(surface, obstacle, tuning);

    let pole_x = obstacle.x + POST_WIDTH;
    let pole_w = obstacle.width - POST_WIDTH * 2.0;
    draw_striped_pole(surface, pole_x, obstacle.y + 4.0, pole_w, 6.0, obstacle.color);
    if obstacle.height >= 45.0 {
        draw_striped_pole(surface, pole_x, obstacle.y + 18.0, pole_w, 6.0, obstacle.color);
    }
}

fn draw_planks(surface: &mut impl Surface, obstacle: &Obstacle, tuning: &Tuning) {
    const PLANK_H: f32 = 8.0;
    const GAP: f32 = 3.0;

    draw_standards(surface, obstacle, tuning);

    let plank_x = obstacle.x + POST_WIDTH;
    let plank_w = obstacle.width - POST_WIDTH * 2.0;
    let mut py = obstacle.y + 3.0;
    let mut accent = true;
    while py + PLANK_H <= obstacle.y + obstacle.height - 2.0 {
        let color = if accent { obstacle.color } else { WHITE };
        surface.fill_rect(plank_x, py, plank_w, PLANK_H, color);
        surface.fill_rect(plank_x, py + PLANK_H - 1.0, plank_w, 1.0, POLE_SHADOW);
        py += PLANK_H + GAP;
        accent = !accent;
    }
}

fn draw_wall(surface: &mut impl Surface, obstacle: &Obstacle) {
    const COURSE: f32 = 8.0;
    const BRICK: f32 = 16.0;
    let (x, y, w, h) = (obstacle.x, obstacle.y, obstacle.width, obstacle.height);

    surface.fill_rect(x, y, w, h, WALL_STONE);

    // Running bond: every other course is offset by half a brick
    let mut row = 0.0;
    let mut course = 0u32;
    while row < h {
        let mut col = if course % 2 == 1 { COURSE } else { 0.0 };
        while col < w {
            surface.fill_rect(x + col, y + row, 1.0, COURSE, WALL_MORTAR);
            col += BRICK;
        }
        if course > 0 {
            surface.fill_rect(x, y + row, w, 1.0, WALL_MORTAR);
        }
        row += COURSE;
        course += 1;
    }

    surface.fill_rect(x - 2.0, y - 3.0, w + 4.0, 4.0, obstacle.color);
    surface.fill_rect(x - 1.0, y - 1.0, w + 2.0, 2.0, WHITE);
}
