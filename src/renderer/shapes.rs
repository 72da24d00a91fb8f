//! Shape generation for 2D primitives
//!
//! Builds the whole frame as a flat vertex list in screen coordinates
//! (pixels, y-down). The pipeline maps these to NDC at upload time.

use super::vertex::Vertex;
use crate::assets::{SpriteCatalog, SpriteKind};
use crate::consts::{PARALLAX_FACTOR, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::settings::Settings;
use crate::sim::{GameState, Rect};

/// Generate two triangles covering an axis-aligned quad
pub fn quad(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(x, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y + h, color),
    ]
}

fn push_rect(out: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    out.extend_from_slice(&quad(rect.left(), rect.top(), rect.size.x, rect.size.y, color));
}

/// Decorative far clouds, tiled so the band repeats seamlessly as it scrolls
fn push_background(out: &mut Vec<Vertex>, bg_scroll: f32, parallax: bool, sky: [f32; 4]) {
    // Slightly lighter than the sky so the bands read as depth
    let haze = [
        (sky[0] + 0.12).min(1.0),
        (sky[1] + 0.12).min(1.0),
        (sky[2] + 0.12).min(1.0),
        1.0,
    ];

    let tile = SCREEN_WIDTH;
    let offset = if parallax {
        (bg_scroll * PARALLAX_FACTOR).rem_euclid(tile)
    } else {
        0.0
    };
    for i in 0..2 {
        let base = i as f32 * tile - offset;
        out.extend_from_slice(&quad(base + 60.0, 80.0, 180.0, 40.0, haze));
        out.extend_from_slice(&quad(base + 340.0, 150.0, 220.0, 50.0, haze));
        out.extend_from_slice(&quad(base + 620.0, 60.0, 140.0, 35.0, haze));
    }
}

/// Build the full frame's vertex list from the current game state
pub fn frame_vertices(
    state: &GameState,
    catalog: &SpriteCatalog,
    settings: &Settings,
) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(256);

    push_background(
        &mut out,
        state.bg_scroll,
        settings.effective_parallax(),
        catalog.placeholder(SpriteKind::Sky).color,
    );

    let cloud = catalog.placeholder(SpriteKind::Cloud).color;
    for platform in &state.platforms {
        push_rect(&mut out, &platform.rect, cloud);
    }

    let yarn = catalog.placeholder(SpriteKind::Yarn).color;
    for ball in &state.yarn_balls {
        push_rect(&mut out, &ball.rect, yarn);
    }

    push_rect(
        &mut out,
        &state.goal.rect,
        catalog.placeholder(SpriteKind::TreatBowl).color,
    );

    let player = &state.player;
    push_rect(&mut out, &player.rect, catalog.placeholder(SpriteKind::Cat).color);

    // A darker strip on the facing side so the sprite reads a direction
    if player.direction != 0 {
        let w = player.rect.size.x * 0.2;
        let x = if player.direction > 0 {
            player.rect.right() - w
        } else {
            player.rect.left()
        };
        let c = catalog.placeholder(SpriteKind::Cat).color;
        let dark = [c[0] * 0.6, c[1] * 0.6, c[2] * 0.6, c[3]];
        out.extend_from_slice(&quad(x, player.rect.top() + 8.0, w, 12.0, dark));
    }

    debug_assert!(out.iter().all(|v| {
        v.position[1] >= -SCREEN_HEIGHT && v.position[1] <= 2.0 * SCREEN_HEIGHT
    }));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_covers_corners() {
        let c = [1.0, 0.0, 0.0, 1.0];
        let q = quad(10.0, 20.0, 30.0, 40.0, c);
        assert_eq!(q.len(), 6);
        assert_eq!(q[0].position, [10.0, 20.0]);
        assert_eq!(q[5].position, [40.0, 60.0]);
        assert!(q.iter().all(|v| v.color == c));
    }

    #[test]
    fn frame_draws_every_entity() {
        let state = GameState::new(4);
        let catalog = SpriteCatalog::default();
        let settings = Settings::default();
        let verts = frame_vertices(&state, &catalog, &settings);

        // Background bands + platforms + yarn + goal + player
        let expected_min =
            6 * (6 + state.platforms.len() + state.yarn_balls.len() + 1 + 1);
        assert!(verts.len() >= expected_min);

        let cat = catalog.placeholder(SpriteKind::Cat).color;
        assert!(verts.iter().any(|v| v.color == cat));
    }

    #[test]
    fn reduced_motion_pins_background() {
        let state = {
            let mut s = GameState::new(4);
            s.bg_scroll = 700.0;
            s
        };
        let catalog = SpriteCatalog::default();
        let mut settings = Settings::default();
        settings.reduced_motion = true;

        let moving = frame_vertices(&state, &catalog, &Settings::default());
        let pinned = frame_vertices(&state, &catalog, &settings);
        // With reduced motion the haze bands stay put regardless of scroll
        assert_ne!(moving[0].position, pinned[0].position);
        assert_eq!(pinned[0].position[0], 60.0);
    }
}
