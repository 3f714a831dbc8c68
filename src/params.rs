/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that bundles every tuning
 * constant of the simulation into one value passed to the constructor, plus
 * the toggles edited through the UI. It also provides setup-time validation
 * and methods for parameter change detection used by the control panel.
 */

use thiserror::Error;

/// Rejected parameter values, reported before the simulation starts.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{name} must be a positive finite value (got {value})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must be a non-negative finite value (got {value})")]
    NonNegative { name: &'static str, value: f64 },
    #[error("population must be at least 1")]
    EmptyPopulation,
}

// Parameters for the simulation; the rates and thresholds are fixed after
// validation, the toggles can be flipped via the UI at any time.
#[derive(Clone)]
pub struct SimulationParams {
    pub num_boids: usize,
    /// Euclidean distance (inclusive) within which boids influence each other.
    pub nearby_dist: f64,
    /// Blend rate toward the group heading.
    pub align_rate: f64,
    /// Repulsion rate away from the group heading in crowded neighborhoods.
    pub change_rate: f64,
    /// Minimum velocity magnitude after renormalization.
    pub speed_floor: f64,
    /// Velocity magnitude assigned at spawn.
    pub initial_speed: f64,
    /// Immunity assigned at spawn; fresh boids ignore the flock until it
    /// decays below the thresholds.
    pub spawn_immunity: f64,
    /// Per-tick multiplicative immunity decay.
    pub immunity_decay: f64,
    /// Immunity multiplier applied per bounced axis.
    pub bounce_immunity_gain: f64,
    /// Alignment is suppressed at or above this immunity.
    pub align_immunity_max: f64,
    /// Separation is suppressed at or above this immunity.
    pub separation_immunity_max: f64,
    /// Neighborhoods larger than this switch from alignment to separation.
    pub align_group_limit: usize,
    pub show_debug: bool,
    pub pause_simulation: bool,
    pub enable_parallel: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of the UI-editable values used for change detection
#[derive(Clone)]
struct ParamSnapshot {
    num_boids: usize,
    show_debug: bool,
    pause_simulation: bool,
    enable_parallel: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 200,
            nearby_dist: 0.1,
            align_rate: 0.05,
            change_rate: 0.1,
            speed_floor: 0.002,
            initial_speed: 0.005,
            spawn_immunity: 1.0,
            immunity_decay: 0.9875,
            bounce_immunity_gain: 1.2,
            align_immunity_max: 0.4,
            separation_immunity_max: 0.1,
            align_group_limit: 5,
            show_debug: false,
            pause_simulation: false,
            enable_parallel: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    /// Checks the tuning constants are finite and in range. Called once by
    /// `Simulation::new`; the per-tick code relies on this having passed.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.num_boids == 0 {
            return Err(ParamsError::EmptyPopulation);
        }
        for (name, value) in [
            ("nearby_dist", self.nearby_dist),
            ("align_rate", self.align_rate),
            ("change_rate", self.change_rate),
            ("speed_floor", self.speed_floor),
            ("initial_speed", self.initial_speed),
            ("immunity_decay", self.immunity_decay),
            ("bounce_immunity_gain", self.bounce_immunity_gain),
            ("align_immunity_max", self.align_immunity_max),
            ("separation_immunity_max", self.separation_immunity_max),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParamsError::NonPositive { name, value });
            }
        }
        if !self.spawn_immunity.is_finite() || self.spawn_immunity < 0.0 {
            return Err(ParamsError::NonNegative {
                name: "spawn_immunity",
                value: self.spawn_immunity,
            });
        }
        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_boids: self.num_boids,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
            enable_parallel: self.enable_parallel,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns (num_boids_changed, any_ui_changed).
    pub fn detect_changes(&self) -> (bool, bool) {
        let Some(prev) = &self.previous_values else {
            return (false, false);
        };

        let num_boids_changed = self.num_boids != prev.num_boids;
        let ui_changed = num_boids_changed
            || self.show_debug != prev.show_debug
            || self.pause_simulation != prev.pause_simulation
            || self.enable_parallel != prev.enable_parallel;

        (num_boids_changed, ui_changed)
    }

    // Parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        10..=2000
    }
}
