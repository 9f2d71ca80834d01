/*
 * UI Module
 *
 * This module builds the control panel with nannou_egui and draws the debug
 * overlay. The panel edits a copy of the simulation parameters; the copy is
 * clamped to the slider ranges and handed back to the simulation between
 * ticks only when something actually changed.
 */

use std::ops::RangeInclusive;

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::neighbors::NeighborStrategy;
use crate::params::SimulationParameters;
use crate::simulation::{Simulation, TickOptions};

// Viewer-only toggles that never reach the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewSettings {
    pub show_boundary: bool,
    pub show_debug: bool,
    pub paused: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            show_boundary: true,
            show_debug: false,
            paused: false,
        }
    }
}

// Buttons pressed this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiActions {
    pub reset_boids: bool,
    pub reset_camera: bool,
}

// Update the UI and apply any parameter or option edits to the simulation
pub fn update_ui(
    egui: &mut Egui,
    simulation: &mut Simulation,
    view: &mut ViewSettings,
    debug_info: &DebugInfo,
) -> UiActions {
    let mut actions = UiActions::default();
    let current = *simulation.params();
    let mut params = current;
    let options = simulation.options();
    let mut parallel = options.parallel;
    let mut use_grid = options.neighbor_strategy == NeighborStrategy::Grid;

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flocking Behavior", |ui| {
                slider(
                    ui,
                    &mut params.separation_weight,
                    SimulationParameters::get_weight_range(),
                    "Separation",
                );
                slider(
                    ui,
                    &mut params.alignment_weight,
                    SimulationParameters::get_weight_range(),
                    "Alignment",
                );
                slider(
                    ui,
                    &mut params.cohesion_weight,
                    SimulationParameters::get_weight_range(),
                    "Cohesion",
                );
            });

            ui.collapsing("Physics", |ui| {
                slider(
                    ui,
                    &mut params.max_speed,
                    SimulationParameters::get_max_speed_range(),
                    "Max Speed",
                );
                slider(
                    ui,
                    &mut params.max_force,
                    SimulationParameters::get_max_force_range(),
                    "Max Force",
                );
                slider(
                    ui,
                    &mut params.visual_range,
                    SimulationParameters::get_visual_range_range(),
                    "Visual Range",
                );
                slider(
                    ui,
                    &mut params.separation_distance,
                    SimulationParameters::get_separation_distance_range(),
                    "Separation Distance",
                );
            });

            ui.collapsing("Environment", |ui| {
                slider(
                    ui,
                    &mut params.boundary_force,
                    SimulationParameters::get_boundary_force_range(),
                    "Boundary Force",
                );
                slider(
                    ui,
                    &mut params.boundary_buffer_zone,
                    SimulationParameters::get_buffer_zone_range(),
                    "Buffer Zone",
                );
                slider(
                    ui,
                    &mut params.boundary_min_speed,
                    SimulationParameters::get_min_speed_range(),
                    "Min Speed at Edge",
                );
                slider(
                    ui,
                    &mut params.boundary_curve,
                    SimulationParameters::get_curve_range(),
                    "Turn Sharpness",
                );
                ui.checkbox(&mut view.show_boundary, "Show Boundary");
            });

            ui.collapsing("General", |ui| {
                slider(
                    ui,
                    &mut params.num_boids,
                    SimulationParameters::get_num_boids_range(),
                    "Number of Boids",
                );

                if ui.button("Reset Boids").clicked() {
                    actions.reset_boids = true;
                }
                if ui.button("Reset Camera").clicked() {
                    actions.reset_camera = true;
                }
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut parallel, "Parallel Processing");
                ui.checkbox(&mut use_grid, "Spatial Grid");

                ui.separator();

                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Tick time: {:.2} ms",
                    debug_info.last_tick.as_secs_f64() * 1000.0
                ));
                ui.label(format!("Boids: {}", simulation.len()));
            });

            ui.checkbox(&mut view.paused, "Pause Simulation");
            ui.checkbox(&mut view.show_debug, "Show Debug Info");
        });

    // Values loaded from a config file may lie outside the slider ranges;
    // only clamp once the user has touched something
    if params != current {
        params.clamp_to_ui_ranges();
        apply_params(simulation, params);
    }

    let neighbor_strategy = if use_grid {
        NeighborStrategy::Grid
    } else {
        NeighborStrategy::BruteForce
    };
    let new_options = TickOptions {
        parallel,
        neighbor_strategy,
    };
    if new_options != options {
        tracing::info!(options = ?new_options, "tick options changed");
        simulation.set_options(new_options);
    }

    actions
}

// Labelled slider over one parameter's control-panel range
fn slider<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    value: &mut N,
    range: RangeInclusive<N>,
    text: &str,
) {
    ui.add(egui::Slider::new(value, range).text(text));
}

// Hand edited parameters to the simulation if they differ from the current ones
pub fn apply_params(simulation: &mut Simulation, params: SimulationParameters) -> bool {
    if params.changes_from(simulation.params()).any() {
        simulation.set_params(params);
        true
    } else {
        false
    }
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boids_len: usize,
) {
    let lines = debug_info.lines(boids_len);

    // Background panel in the bottom-left corner, clear of the control window
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 80.0, y)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
