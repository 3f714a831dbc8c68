/*
 * Boid Module
 *
 * This module defines the Boid struct and its per-tick behavior.
 * Each tick a boid, in order:
 * 1. Blends its velocity toward the group heading (alignment)
 * 2. Renormalizes its speed up to the floor
 * 3. Steers away from the group heading in crowded neighborhoods (separation)
 * 4. Integrates its position and reflects off the world boundary
 * 5. Decays its bounce immunity
 */

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

use crate::geometry::{self, Triangle};
use crate::params::SimulationParams;
use crate::WORLD_BOUND;

#[derive(Clone, Debug)]
pub struct Boid {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Decaying scalar that suppresses steering right after a wall bounce.
    pub immunity: f64,
}

impl Boid {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self {
            position,
            velocity,
            immunity: 0.0,
        }
    }

    /// Creates a boid with uniformly random position and heading. Speed is
    /// fixed at `params.initial_speed`.
    pub fn spawn(rng: &mut impl Rng, params: &SimulationParams) -> Self {
        let heading = rng.gen_range(0.0..TAU);
        let position = DVec2::new(
            rng.gen_range(-WORLD_BOUND..WORLD_BOUND),
            rng.gen_range(-WORLD_BOUND..WORLD_BOUND),
        );
        let velocity = params.initial_speed * DVec2::new(heading.cos(), heading.sin());
        let mut boid = Self::new(position, velocity);
        boid.immunity = params.spawn_immunity;
        boid
    }

    /// Advances this boid by one tick. `boids` is the pre-tick snapshot of
    /// the whole population and `neighbor_indices` selects this boid's
    /// neighbors within it (never including the boid itself). Only this
    /// boid is mutated.
    pub fn update(&mut self, boids: &[Boid], neighbor_indices: &[usize], params: &SimulationParams) {
        // Alignment: small neighborhoods pull the velocity toward the
        // group heading. A lone boid has no group to agree with.
        if !neighbor_indices.is_empty()
            && neighbor_indices.len() <= params.align_group_limit
            && self.immunity < params.align_immunity_max
        {
            let avg = self.group_heading(boids, neighbor_indices);
            self.velocity += params.align_rate * (avg - self.velocity);
        }

        // Speed floor: rescale up to the minimum magnitude, preserving
        // direction. The scale factor comes from the pre-rescale magnitude
        // and is applied to both components at once.
        let speed = self.velocity.length();
        if speed > 0.0 && speed < params.speed_floor {
            self.velocity *= params.speed_floor / speed;
        }

        // Separation: crowded neighborhoods push the velocity away from the
        // group heading, the exact mirror of the alignment blend.
        if neighbor_indices.len() > params.align_group_limit
            && self.immunity < params.separation_immunity_max
        {
            let avg = self.group_heading(boids, neighbor_indices);
            self.velocity += params.change_rate * (self.velocity - avg);
        }

        // Integrate position; one tick is one unit step.
        self.position += self.velocity;

        // Reflect off the boundary, each axis independently. Position is
        // not clamped; the flipped velocity walks the overshoot back.
        if self.position.x.abs() > WORLD_BOUND {
            self.velocity.x = -self.velocity.x;
            self.immunity *= params.bounce_immunity_gain;
        }
        if self.position.y.abs() > WORLD_BOUND {
            self.velocity.y = -self.velocity.y;
            self.immunity *= params.bounce_immunity_gain;
        }

        // Immunity decays every tick, bounce or not.
        self.immunity *= params.immunity_decay;
    }

    // Mean velocity of this boid together with its neighbors. The neighbor
    // set never contains the boid, so its own velocity is added here.
    fn group_heading(&self, boids: &[Boid], neighbor_indices: &[usize]) -> DVec2 {
        let mut sum = self.velocity;
        for &i in neighbor_indices {
            sum += boids[i].velocity;
        }
        sum / (neighbor_indices.len() + 1) as f64
    }

    /// Facing angle of the post-update velocity.
    pub fn facing_angle(&self) -> f64 {
        self.velocity.y.atan2(self.velocity.x)
    }

    /// Derives the arrowhead silhouette from the current position and
    /// velocity, in aspect-free simulation coordinates.
    pub fn silhouette(&self) -> Triangle {
        let (tail1, tail2) = geometry::tail_points(self.position, self.facing_angle());
        Triangle {
            head: self.position,
            tail1,
            tail2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lone_update(boid: &mut Boid, params: &SimulationParams) {
        let snapshot = [boid.clone()];
        boid.update(&snapshot, &[], params);
    }

    #[test]
    fn speed_floor_rescales_to_exact_magnitude() {
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::ZERO, DVec2::new(0.001, 0.0));
        lone_update(&mut boid, &params);
        assert_eq!(boid.velocity, DVec2::new(0.002, 0.0));
        assert_eq!(boid.position, DVec2::new(0.002, 0.0));
    }

    #[test]
    fn speed_floor_preserves_direction() {
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::ZERO, DVec2::new(-0.0006, 0.0008));
        let heading_before = boid.facing_angle();
        lone_update(&mut boid, &params);
        assert!((boid.velocity.length() - params.speed_floor).abs() < 1e-15);
        assert!((boid.facing_angle() - heading_before).abs() < 1e-12);
    }

    #[test]
    fn speed_above_floor_is_untouched() {
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::ZERO, DVec2::new(0.005, 0.0));
        lone_update(&mut boid, &params);
        assert_eq!(boid.velocity, DVec2::new(0.005, 0.0));
    }

    #[test]
    fn zero_velocity_is_left_alone_by_the_floor() {
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::ZERO, DVec2::ZERO);
        lone_update(&mut boid, &params);
        assert_eq!(boid.velocity, DVec2::ZERO);
    }

    #[test]
    fn immunity_decays_exactly_without_a_bounce() {
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::ZERO, DVec2::new(0.005, 0.0));
        boid.immunity = 0.5;
        lone_update(&mut boid, &params);
        assert_eq!(boid.immunity, 0.5 * 0.9875);
    }

    #[test]
    fn wall_bounce_flips_velocity_and_boosts_immunity() {
        // Start just inside the wall with non-zero immunity.
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::new(0.999, 0.2), DVec2::new(0.01, 0.0));
        boid.immunity = 0.2;
        lone_update(&mut boid, &params);
        assert!((boid.position.x - 1.009).abs() < 1e-12);
        assert_eq!(boid.velocity, DVec2::new(-0.01, 0.0));
        assert_eq!(boid.immunity, (0.2 * 1.2) * 0.9875);
    }

    #[test]
    fn corner_bounce_compounds_immunity_per_axis() {
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::new(0.999, -0.999), DVec2::new(0.01, -0.01));
        boid.immunity = 0.5;
        lone_update(&mut boid, &params);
        assert_eq!(boid.velocity, DVec2::new(-0.01, 0.01));
        assert_eq!(boid.immunity, ((0.5 * 1.2) * 1.2) * 0.9875);
    }

    #[test]
    fn position_is_not_clamped_on_overshoot() {
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::new(0.999, 0.0), DVec2::new(0.05, 0.0));
        lone_update(&mut boid, &params);
        assert!(boid.position.x > WORLD_BOUND);
        // The flipped velocity walks it back on the next tick.
        lone_update(&mut boid, &params);
        assert!(boid.position.x < WORLD_BOUND);
    }

    #[test]
    fn alignment_blends_toward_group_heading() {
        // Two boids head-on: the group heading is zero, so each keeps
        // 95% of its own velocity after the blend.
        let params = SimulationParams::default();
        let a = Boid::new(DVec2::new(0.0, 0.0), DVec2::new(0.005, 0.0));
        let b = Boid::new(DVec2::new(0.05, 0.0), DVec2::new(-0.005, 0.0));
        let snapshot = [a.clone(), b.clone()];

        let mut a = a;
        a.update(&snapshot, &[1], &params);
        assert_eq!(a.velocity.x, 0.005 + 0.05 * (0.0 - 0.005));
        assert_eq!(a.velocity.y, 0.0);

        let mut b = b;
        b.update(&snapshot, &[0], &params);
        assert_eq!(b.velocity.x, -0.005 + 0.05 * (0.0 - -0.005));
    }

    #[test]
    fn alignment_reads_the_snapshot_not_updated_neighbors() {
        let params = SimulationParams::default();
        let a = Boid::new(DVec2::new(0.0, 0.0), DVec2::new(0.005, 0.0));
        let b = Boid::new(DVec2::new(0.05, 0.0), DVec2::new(-0.005, 0.0));
        let snapshot = [a.clone(), b.clone()];

        let mut a_first = a.clone();
        a_first.update(&snapshot, &[1], &params);

        // Updating b first must not change what a sees.
        let mut b = b;
        b.update(&snapshot, &[0], &params);
        let mut a_second = a;
        a_second.update(&snapshot, &[1], &params);
        assert_eq!(a_first.velocity, a_second.velocity);
    }

    #[test]
    fn high_immunity_suppresses_alignment() {
        let params = SimulationParams::default();
        let mut a = Boid::new(DVec2::new(0.0, 0.0), DVec2::new(0.005, 0.0));
        a.immunity = 0.4; // at the threshold, not below it
        let b = Boid::new(DVec2::new(0.05, 0.0), DVec2::new(-0.005, 0.0));
        let snapshot = [a.clone(), b];
        a.update(&snapshot, &[1], &params);
        assert_eq!(a.velocity, DVec2::new(0.005, 0.0));
    }

    #[test]
    fn crowded_neighborhood_steers_away_from_group_heading() {
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::ZERO, DVec2::new(0.0, 0.005));
        let neighbor = Boid::new(DVec2::new(0.01, 0.0), DVec2::new(0.005, 0.0));
        let snapshot: Vec<Boid> = std::iter::once(boid.clone())
            .chain(std::iter::repeat(neighbor).take(params.align_group_limit + 1))
            .collect();
        let indices: Vec<usize> = (1..snapshot.len()).collect();

        let before = boid.velocity;
        let avg = {
            let mut sum = before;
            for &i in &indices {
                sum += snapshot[i].velocity;
            }
            sum / (indices.len() + 1) as f64
        };
        boid.update(&snapshot, &indices, &params);
        // The nudge points from the group heading toward the boid's own
        // velocity, scaled by the change rate.
        let expected = before + params.change_rate * (before - avg);
        assert_eq!(boid.velocity, expected);
        assert!((boid.velocity - before).dot(before - avg) > 0.0);
    }

    #[test]
    fn immunity_suppresses_separation() {
        let params = SimulationParams::default();
        let mut boid = Boid::new(DVec2::ZERO, DVec2::new(0.0, 0.005));
        boid.immunity = 0.1; // at the threshold, not below it
        let neighbor = Boid::new(DVec2::new(0.01, 0.0), DVec2::new(0.005, 0.0));
        let snapshot: Vec<Boid> = std::iter::once(boid.clone())
            .chain(std::iter::repeat(neighbor).take(params.align_group_limit + 1))
            .collect();
        let indices: Vec<usize> = (1..snapshot.len()).collect();
        boid.update(&snapshot, &indices, &params);
        assert_eq!(boid.velocity, DVec2::new(0.0, 0.005));
    }

    #[test]
    fn facing_angle_covers_the_axes() {
        let mut boid = Boid::new(DVec2::ZERO, DVec2::new(0.0, -0.005));
        assert!((boid.facing_angle() - -std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        boid.velocity = DVec2::new(-0.005, 0.0);
        assert!((boid.facing_angle() - std::f64::consts::PI).abs() < 1e-15);
        boid.velocity = DVec2::new(0.005, 0.0);
        assert_eq!(boid.facing_angle(), 0.0);
    }

    #[test]
    fn silhouette_follows_position_and_heading() {
        let boid = Boid::new(DVec2::new(0.3, -0.1), DVec2::new(0.005, 0.0));
        let tri = boid.silhouette();
        assert_eq!(tri.head, boid.position);
        let (tail1, tail2) = geometry::tail_points(boid.position, boid.facing_angle());
        assert_eq!(tri.tail1, tail1);
        assert_eq!(tri.tail2, tail2);
    }
}
