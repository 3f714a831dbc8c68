/*
 * Tail Geometry Module
 *
 * This module derives the two tail points of a boid's arrowhead silhouette
 * from its head position and facing angle. The functions are pure; aspect
 * ratio correction is the caller's responsibility so the derivation stays
 * resolution-independent.
 */

use glam::DVec2;
use std::f64::consts::PI;

/// Distance from the head to each tail point.
pub const TAIL_RATIO: f64 = 0.05;
/// Angular offset from the facing direction to the first tail point.
pub const TAIL_OFFSET: f64 = 165.0 * PI / 180.0;
/// Angular spread between the two tail points.
pub const TAIL_SPREAD: f64 = PI / 6.0;

/// A boid's visual representation: head plus two tail points, in
/// aspect-free simulation coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub head: DVec2,
    pub tail1: DVec2,
    pub tail2: DVec2,
}

/// Computes the two tail points behind a head facing along `angle`,
/// producing a narrow arrowhead pointing in the facing direction.
pub fn tail_points(head: DVec2, angle: f64) -> (DVec2, DVec2) {
    let tail1 = head + TAIL_RATIO * DVec2::new((angle + TAIL_OFFSET).cos(), (angle + TAIL_OFFSET).sin());
    let tail2 = head
        + TAIL_RATIO
            * DVec2::new(
                (angle + TAIL_OFFSET + TAIL_SPREAD).cos(),
                (angle + TAIL_OFFSET + TAIL_SPREAD).sin(),
            );
    (tail1, tail2)
}
