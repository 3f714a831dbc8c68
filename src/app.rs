/*
 * Application Module
 *
 * This module defines the main application model and logic: window and UI
 * setup, the per-frame update that advances the simulation unless paused,
 * and the view that hands every boid's silhouette to the renderer. Paused
 * boids still redraw in place every frame.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::env;
use tracing::info;

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::physics::Simulation;
use crate::renderer::BoidRenderer;
use crate::ui;
use crate::DEFAULT_SEED;

// Main model for the application
pub struct Model {
    pub sim: Simulation,
    pub renderer: BoidRenderer,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

/// RNG seed for the run, taken from FLOCK_SEED when set.
pub fn rng_seed() -> u64 {
    env::var("FLOCK_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED)
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Dartflock")
        .size(1280, 800)
        .view(view)
        .resized(window_resized)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let rect = window.rect();
    let aspect_ratio = (rect.h() / rect.w()) as f64;

    let params = SimulationParams::default();
    let seed = rng_seed();
    // Parameters were validated in main before the app started.
    let sim = Simulation::new(params, seed).expect("simulation parameters are valid");
    info!(seed, boids = sim.boids().len(), aspect_ratio, "simulation ready");

    let mut renderer = BoidRenderer::new(aspect_ratio);
    renderer.upload(sim.boids());

    Model {
        sim,
        renderer,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.ticks = model.sim.ticks();

    let (should_reset_boids, num_boids_changed, _ui_changed) =
        ui::update_ui(&mut model.egui, model.sim.params_mut(), &model.debug_info);

    if should_reset_boids || num_boids_changed {
        let count = model.sim.params().num_boids;
        model.sim.reset(count);
        info!(count, "flock reset");
    }

    // The pause flag gates the physics step only; the renderer table is
    // rebuilt every frame regardless.
    if !model.sim.params().pause_simulation {
        model.sim.tick();
    }

    model.renderer.upload(model.sim.boids());
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    model.renderer.draw(&draw, window_rect);

    if model.sim.params().show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.sim.boids().len(),
            model.renderer.aspect_ratio(),
        );
    }

    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// Window resized: recompute the aspect ratio the renderer applies
pub fn window_resized(_app: &App, model: &mut Model, dim: Vec2) {
    if dim.x > 0.0 {
        let aspect_ratio = (dim.y / dim.x) as f64;
        model.renderer.set_aspect_ratio(aspect_ratio);
        info!(aspect_ratio, "window resized");
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
