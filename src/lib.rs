/*
 * Dartflock - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The simulation core (params, geometry, boid, physics) is free of any
 * graphics types; the nannou front end lives in app/renderer/ui.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use debug::DebugInfo;
pub use geometry::{tail_points, Triangle};
pub use params::{ParamsError, SimulationParams};
pub use physics::{neighbor_indices, Simulation};
pub use renderer::BoidRenderer;

// Define modules
pub mod app;
pub mod boid;
pub mod debug;
pub mod geometry;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod ui;

// Constants
pub const WORLD_BOUND: f64 = 1.0;
pub const DEFAULT_SEED: u64 = 1;
