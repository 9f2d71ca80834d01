/*
 * Application Module
 *
 * This module defines the nannou model for the interactive viewer. The model
 * owns the simulation; each frame it runs the control panel, applies the
 * edits between ticks and advances the simulation by one tick unless paused.
 * Forces are never computed here.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::camera::Camera;
use crate::config::AppConfig;
use crate::debug::DebugInfo;
use crate::input;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui::{self, ViewSettings};

// nannou's model function cannot capture, so the configuration is handed over here
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub egui: Egui,
    pub camera: Camera,
    pub debug_info: DebugInfo,
    pub view: ViewSettings,
    pub mouse_position: Vec2,
}

// Open the viewer window and run until it is closed
pub fn run(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("viewer already configured, keeping the first configuration");
    }

    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = CONFIG.get().cloned().unwrap_or_default();

    // 80% of the primary monitor, or a fixed size when it cannot be queried
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 800.0),
    };

    let window_id = app
        .new_window()
        .title("3D Boids")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let simulation = Simulation::new(config.simulation, config.tick_options(), config.seed);
    tracing::info!(
        boids = simulation.len(),
        options = ?simulation.options(),
        seed = ?config.seed,
        "viewer started"
    );

    Model {
        simulation,
        egui,
        camera: Camera::new(),
        debug_info: DebugInfo::default(),
        view: ViewSettings::default(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.record_frame(app.fps(), update.since_last);
    model.egui.set_elapsed_time(update.since_start);

    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.simulation,
        &mut model.view,
        &model.debug_info,
    );

    if actions.reset_boids {
        model.simulation.reset();
    }
    if actions.reset_camera {
        model.camera.reset();
    }

    if !model.view.paused {
        let stats = model.simulation.tick();
        model.debug_info.record_tick(model.simulation.tick_count(), &stats);
    }
}
