/*
 * Renderer Module
 *
 * This module draws the simulation through the orbit camera: the boundary
 * cube as a wireframe, each boid as a triangle pointing along its projected
 * heading, the debug overlay and finally the egui panel. Boids are sorted
 * far-to-near so nearer ones are painted on top.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::camera::{Camera, Projected};
use crate::ui;
use crate::vector::Vector3;
use crate::BOID_SIZE;

// Smallest on-screen boid length in pixels
const MIN_BOID_PIXELS: f32 = 3.0;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(rgb(0.02, 0.02, 0.05));

    let window_rect = app.window_rect();
    let params = model.simulation.params();

    if model.view.show_boundary {
        draw_boundary(&draw, &model.camera, window_rect, params.half_size());
    }

    // Project every boid, dropping those behind the camera
    let mut visible: Vec<(&Boid, Projected)> = model
        .simulation
        .boids()
        .iter()
        .filter_map(|boid| {
            model
                .camera
                .project(boid.position, window_rect)
                .map(|projected| (boid, projected))
        })
        .collect();
    visible.sort_by(|a, b| b.1.depth.total_cmp(&a.1.depth));

    for (boid, projected) in &visible {
        draw_boid(&draw, &model.camera, window_rect, boid, projected, params.max_speed);
    }

    if model.view.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.simulation.len());
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

// Hue runs from cyan for slow boids toward blue for boids at max speed
pub fn speed_hue(speed: f64, max_speed: f64) -> f32 {
    let fraction = if max_speed > 0.0 {
        (speed / max_speed).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (0.5 - fraction * 0.3) as f32
}

fn draw_boid(
    draw: &Draw,
    camera: &Camera,
    window_rect: Rect,
    boid: &Boid,
    projected: &Projected,
    max_speed: f64,
) {
    let length = (BOID_SIZE * projected.scale).max(MIN_BOID_PIXELS);

    // Screen-space direction of travel; a boid flying straight at the camera keeps pointing up
    let angle = boid
        .heading()
        .and_then(|heading| camera.project(boid.position + heading, window_rect))
        .map(|ahead| ahead.screen - projected.screen)
        .filter(|direction| direction.length_squared() > f32::EPSILON)
        .map(|direction| direction.y.atan2(direction.x))
        .unwrap_or(PI / 2.0);

    let points = [
        pt2(length, 0.0),
        pt2(-length * 0.5, length * 0.4),
        pt2(-length * 0.5, -length * 0.4),
    ];

    draw.polygon()
        .points(points)
        .xy(projected.screen)
        .rotate(angle)
        .color(hsl(speed_hue(boid.speed(), max_speed), 1.0, 0.5));
}

// Corners of the cube, indexed by the sign bit of each axis
fn cube_corners(half: f64) -> [Vector3; 8] {
    let mut corners = [Vector3::ZERO; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        let sign = |bit: usize| if i & bit == 0 { -half } else { half };
        *corner = Vector3::new(sign(1), sign(2), sign(4));
    }
    corners
}

// Pairs of corner indices that differ along exactly one axis
fn cube_edges() -> impl Iterator<Item = (usize, usize)> {
    (0..8usize).flat_map(|a| {
        [1usize, 2, 4]
            .into_iter()
            .filter(move |bit| a & bit == 0)
            .map(move |bit| (a, a | bit))
    })
}

fn draw_boundary(draw: &Draw, camera: &Camera, window_rect: Rect, half: f64) {
    let corners = cube_corners(half);

    for (a, b) in cube_edges() {
        if let (Some(start), Some(end)) = (
            camera.project(corners[a], window_rect),
            camera.project(corners[b], window_rect),
        ) {
            draw.line()
                .start(start.screen)
                .end(end.screen)
                .weight(1.0)
                .color(rgba(0.4, 0.4, 0.5, 0.6));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_twelve_unit_edges() {
        let corners = cube_corners(1.0);
        let edges: Vec<_> = cube_edges().collect();
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            assert!((corners[a].distance(corners[b]) - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn hue_shifts_with_speed() {
        assert_eq!(speed_hue(0.0, 2.0), 0.5);
        assert!((speed_hue(2.0, 2.0) - 0.2).abs() < 1e-6);
        assert!((speed_hue(5.0, 2.0) - 0.2).abs() < 1e-6);
        assert_eq!(speed_hue(1.0, 0.0), 0.5);
    }
}
