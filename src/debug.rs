/*
 * Debug Information Module
 *
 * Performance metrics shown in the UI overlay.
 */

use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks: 0,
        }
    }
}
