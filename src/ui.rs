/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui: the pause toggle, population controls and
 * the debug overlay text. Parameter change detection is handled by the
 * SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether boids should be reset, whether the
// population size changed, and whether any UI value changed.
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset_boids = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Flock Controls")
        .default_pos([12.0, 12.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range())
                        .text("Number of Boids"),
                );

                if ui.button("Reset Flock").clicked() {
                    should_reset_boids = true;
                }
            });

            ui.checkbox(&mut params.enable_parallel, "Parallel Update");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));
            ui.label(format!("Ticks: {}", debug_info.ticks));
        });

    let (num_boids_changed, ui_changed) = params.detect_changes();

    (should_reset_boids, num_boids_changed, ui_changed)
}

// Draw the debug overlay in the top-left corner
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boids_len: usize,
    aspect_ratio: f64,
) {
    let lines = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Ticks: {}", debug_info.ticks),
        format!("Boids: {}", boids_len),
        format!("Aspect: {:.3}", aspect_ratio),
    ];

    let line_height = 18.0;
    let pad = 12.0;
    let panel_w = 180.0;
    let panel_h = line_height * lines.len() as f32 + pad * 2.0;

    draw.rect()
        .x_y(
            window_rect.left() + panel_w / 2.0,
            window_rect.top() - panel_h / 2.0,
        )
        .w_h(panel_w, panel_h)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    for (i, line) in lines.iter().enumerate() {
        draw.text(line)
            .x_y(
                window_rect.left() + panel_w / 2.0,
                window_rect.top() - pad - line_height * (i as f32 + 0.5),
            )
            .color(nannou::color::WHITE)
            .font_size(13);
    }
}
