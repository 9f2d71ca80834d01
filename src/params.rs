/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParameters struct that contains all the
 * tunable values for the flocking simulation. The simulation reads one copy
 * per tick; the control panel (or a config file) replaces it between ticks.
 * It also provides the slider ranges used by the UI, validation of the
 * documented numeric ranges, and change detection.
 */

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

// Parameters for the simulation that can be adjusted via UI or config file
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Radius within which alignment and cohesion neighbors are considered.
    pub visual_range: f64,
    /// Radius within which separation neighbors are considered.
    pub separation_distance: f64,
    pub max_speed: f64,
    /// Upper bound on the magnitude of each individual steering force.
    pub max_force: f64,
    pub separation_weight: f64,
    pub alignment_weight: f64,
    pub cohesion_weight: f64,
    /// Peak push-back applied to velocity at a wall.
    pub boundary_force: f64,
    /// Width of the near-wall band as a fraction of the half-size, in `[0, 1]`.
    pub boundary_buffer_zone: f64,
    /// Velocity multiplier right at a wall, in `[0, 1]`.
    pub boundary_min_speed: f64,
    /// Exponent shaping how sharply the wall push grows, `>= 1`.
    pub boundary_curve: f64,
    /// Side length of the cube centered at the origin.
    pub boundary_size: f64,
    pub num_boids: usize,
}

// Which parts of the parameters changed between two snapshots
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub num_boids_changed: bool,
    pub tuning_changed: bool,
}

impl ParamChanges {
    pub fn any(&self) -> bool {
        self.num_boids_changed || self.tuning_changed
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            visual_range: 20.0,
            separation_distance: 10.0,
            max_speed: 2.0,
            max_force: 0.05,
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            boundary_force: 0.5,
            boundary_buffer_zone: 0.15,
            boundary_min_speed: 0.7,
            boundary_curve: 3.0,
            boundary_size: 100.0,
            num_boids: 200,
        }
    }
}

impl SimulationParameters {
    pub const MAX_BOIDS: usize = 100_000;

    // Radius a neighbor query must cover so every steering rule sees its candidates
    pub fn neighbor_radius(&self) -> f64 {
        self.visual_range.max(self.separation_distance)
    }

    // Half the side length of the bounding cube
    pub fn half_size(&self) -> f64 {
        self.boundary_size / 2.0
    }

    // Compare against a previous snapshot
    pub fn changes_from(&self, previous: &SimulationParameters) -> ParamChanges {
        let num_boids_changed = self.num_boids != previous.num_boids;
        let tuning_changed = {
            let mut current = *self;
            current.num_boids = previous.num_boids;
            current != *previous
        };

        ParamChanges {
            num_boids_changed,
            tuning_changed,
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        let non_negative = [
            ("visual_range", self.visual_range),
            ("separation_distance", self.separation_distance),
            ("max_force", self.max_force),
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("boundary_force", self.boundary_force),
        ];
        for (field, value) in non_negative {
            check_finite(field, value)?;
            if value < 0.0 {
                return Err(ParamsError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("boundary_buffer_zone", self.boundary_buffer_zone),
            ("boundary_min_speed", self.boundary_min_speed),
        ] {
            check_finite(field, value)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::OutOfUnitRange { field, value });
            }
        }

        check_finite("max_speed", self.max_speed)?;
        if self.max_speed <= 0.0 {
            return Err(ParamsError::NonPositiveMaxSpeed(self.max_speed));
        }

        check_finite("boundary_curve", self.boundary_curve)?;
        if self.boundary_curve < 1.0 {
            return Err(ParamsError::CurveTooFlat(self.boundary_curve));
        }

        check_finite("boundary_size", self.boundary_size)?;
        if self.boundary_size <= 0.0 {
            return Err(ParamsError::NonPositiveBoundarySize(self.boundary_size));
        }

        if self.num_boids > Self::MAX_BOIDS {
            return Err(ParamsError::TooManyBoids {
                max: Self::MAX_BOIDS,
                actual: self.num_boids,
            });
        }

        Ok(())
    }

    // Clamp every field into its control-panel range
    pub fn clamp_to_ui_ranges(&mut self) {
        fn clamp(value: &mut f64, range: RangeInclusive<f64>) {
            *value = value.clamp(*range.start(), *range.end());
        }

        clamp(&mut self.separation_weight, Self::get_weight_range());
        clamp(&mut self.alignment_weight, Self::get_weight_range());
        clamp(&mut self.cohesion_weight, Self::get_weight_range());
        clamp(&mut self.max_speed, Self::get_max_speed_range());
        clamp(&mut self.max_force, Self::get_max_force_range());
        clamp(&mut self.visual_range, Self::get_visual_range_range());
        clamp(&mut self.separation_distance, Self::get_separation_distance_range());
        clamp(&mut self.boundary_force, Self::get_boundary_force_range());
        clamp(&mut self.boundary_buffer_zone, Self::get_buffer_zone_range());
        clamp(&mut self.boundary_min_speed, Self::get_min_speed_range());
        clamp(&mut self.boundary_curve, Self::get_curve_range());

        let boids = Self::get_num_boids_range();
        self.num_boids = self.num_boids.clamp(*boids.start(), *boids.end());
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> RangeInclusive<usize> {
        10..=500
    }

    pub fn get_weight_range() -> RangeInclusive<f64> {
        0.0..=5.0
    }

    pub fn get_max_speed_range() -> RangeInclusive<f64> {
        0.5..=10.0
    }

    pub fn get_max_force_range() -> RangeInclusive<f64> {
        0.01..=0.5
    }

    pub fn get_visual_range_range() -> RangeInclusive<f64> {
        5.0..=50.0
    }

    pub fn get_separation_distance_range() -> RangeInclusive<f64> {
        2.0..=30.0
    }

    pub fn get_boundary_force_range() -> RangeInclusive<f64> {
        0.0..=2.0
    }

    pub fn get_buffer_zone_range() -> RangeInclusive<f64> {
        0.05..=0.5
    }

    pub fn get_min_speed_range() -> RangeInclusive<f64> {
        0.1..=1.0
    }

    pub fn get_curve_range() -> RangeInclusive<f64> {
        1.0..=5.0
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NonFinite { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn negative_max_speed_is_rejected() {
        let params = SimulationParameters {
            max_speed: -1.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::NonPositiveMaxSpeed(-1.0)));
    }

    #[test]
    fn buffer_zone_outside_unit_range_is_rejected() {
        let params = SimulationParameters {
            boundary_buffer_zone: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::OutOfUnitRange {
                field: "boundary_buffer_zone",
                ..
            })
        ));
    }

    #[test]
    fn flat_curve_and_empty_cube_are_rejected() {
        let flat = SimulationParameters {
            boundary_curve: 0.5,
            ..Default::default()
        };
        assert_eq!(flat.validate(), Err(ParamsError::CurveTooFlat(0.5)));

        let empty = SimulationParameters {
            boundary_size: 0.0,
            ..Default::default()
        };
        assert_eq!(
            empty.validate(),
            Err(ParamsError::NonPositiveBoundarySize(0.0))
        );
    }

    #[test]
    fn zero_max_speed_is_rejected() {
        let frozen = SimulationParameters {
            max_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(frozen.validate(), Err(ParamsError::NonPositiveMaxSpeed(0.0)));

        let slowest = SimulationParameters {
            max_speed: f64::MIN_POSITIVE,
            ..Default::default()
        };
        assert!(slowest.validate().is_ok());
    }

    #[test]
    fn nan_is_rejected() {
        let params = SimulationParameters {
            visual_range: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamsError::NonFinite {
                field: "visual_range"
            })
        );
    }

    #[test]
    fn change_detection_separates_membership_from_tuning() {
        let before = SimulationParameters::default();

        let resized = SimulationParameters {
            num_boids: 300,
            ..before
        };
        let changes = resized.changes_from(&before);
        assert!(changes.num_boids_changed);
        assert!(!changes.tuning_changed);

        let retuned = SimulationParameters {
            cohesion_weight: 2.0,
            ..before
        };
        let changes = retuned.changes_from(&before);
        assert!(!changes.num_boids_changed);
        assert!(changes.tuning_changed);

        assert!(!before.changes_from(&before).any());
    }

    #[test]
    fn clamping_pulls_values_into_slider_ranges() {
        let mut params = SimulationParameters {
            max_speed: 50.0,
            boundary_curve: 0.0,
            num_boids: 1,
            ..Default::default()
        };
        params.clamp_to_ui_ranges();
        assert_eq!(params.max_speed, 10.0);
        assert_eq!(params.boundary_curve, 1.0);
        assert_eq!(params.num_boids, 10);
    }

    #[test]
    fn neighbor_radius_covers_both_rules() {
        let params = SimulationParameters {
            visual_range: 5.0,
            separation_distance: 12.0,
            ..Default::default()
        };
        assert_eq!(params.neighbor_radius(), 12.0);
    }
}
