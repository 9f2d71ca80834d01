/*
 * Camera Module
 *
 * This module defines an orbit camera looking at the center of the
 * simulation cube. Dragging rotates around the cube, the mouse wheel moves
 * closer or further away. It provides the perspective projection from
 * world space to screen space used by the renderer.
 */

use std::f64::consts::FRAC_PI_2;

use nannou::prelude::*;

use crate::vector::Vector3;

// Keep the camera off the poles so the view basis stays well defined
const MAX_PITCH: f64 = FRAC_PI_2 - 0.01;
const NEAR_PLANE: f64 = 0.1;

// A world point projected onto the window
#[derive(Clone, Copy, Debug)]
pub struct Projected {
    pub screen: Vec2,
    // Distance along the view direction
    pub depth: f64,
    // Screen pixels per world unit at this depth
    pub scale: f32,
}

pub struct Camera {
    pub target: Vector3,
    pub yaw: f64,
    pub pitch: f64,
    pub distance: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub fov_y: f64,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    // Start at eye (100, 50, 100) looking at the origin
    pub fn new() -> Self {
        let eye = Vector3::new(100.0, 50.0, 100.0);
        let distance = eye.length();

        Self {
            target: Vector3::ZERO,
            yaw: eye.x.atan2(eye.z),
            pitch: (eye.y / distance).asin(),
            distance,
            min_distance: 20.0,
            max_distance: 300.0,
            fov_y: 75f64.to_radians(),
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    pub fn eye(&self) -> Vector3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let direction = Vector3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw);
        self.target + self.distance * direction
    }

    // Orthonormal (right, up, forward) basis of the view
    fn basis(&self) -> (Vector3, Vector3, Vector3) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vector3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up, forward)
    }

    // Focal length in pixels for the window height
    fn focal_length(&self, window_rect: Rect) -> f64 {
        (window_rect.h() as f64 / 2.0) / (self.fov_y / 2.0).tan()
    }

    // Project a world point, or None if it is behind the camera
    pub fn project(&self, point: Vector3, window_rect: Rect) -> Option<Projected> {
        let (right, up, forward) = self.basis();
        let relative = point - self.eye();

        let depth = relative.dot(forward);
        if depth <= NEAR_PLANE {
            return None;
        }

        let focal = self.focal_length(window_rect);
        let scale = focal / depth;
        let screen = vec2(
            (relative.dot(right) * scale) as f32,
            (relative.dot(up) * scale) as f32,
        ) + window_rect.xy();

        Some(Projected {
            screen,
            depth,
            scale: scale as f32,
        })
    }

    // Handle mouse wheel events for zooming
    pub fn zoom(&mut self, scroll_delta: Vec2) {
        let zoom_factor = 1.0 - scroll_delta.y as f64 * 0.1;
        self.distance = (self.distance * zoom_factor).clamp(self.min_distance, self.max_distance);
    }

    // Start dragging the camera
    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Orbit while dragging
    pub fn drag(&mut self, position: Vec2) {
        if !self.is_dragging {
            return;
        }

        let delta = position - self.last_cursor_pos;
        if delta.length_squared() > 0.0 {
            self.yaw -= delta.x as f64 * 0.005;
            self.pitch = (self.pitch - delta.y as f64 * 0.005).clamp(-MAX_PITCH, MAX_PITCH);
            self.last_cursor_pos = position;
        }
    }

    // End dragging
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
