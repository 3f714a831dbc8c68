/*
 * Physics Module
 *
 * This module owns the Simulation: the boid population, the validated
 * parameters, and the seeded RNG. Each tick it snapshots positions,
 * computes every boid's neighbor set from that snapshot, and updates each
 * boid against the pre-tick state, so update order can never matter.
 *
 * Neighbor lookup is a naive O(n^2) pairwise scan, which is fine at the
 * target scale of a few hundred boids. A spatial grid could replace it
 * behind the same contract if the population grows by an order of
 * magnitude.
 */

use glam::DVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::boid::Boid;
use crate::params::{ParamsError, SimulationParams};

/// Indices of the boids within `radius` (inclusive) of `positions[index]`.
/// The queried boid is explicitly excluded from its own neighbor set.
pub fn neighbor_indices(index: usize, positions: &[DVec2], radius: f64) -> Vec<usize> {
    let origin = positions[index];
    positions
        .iter()
        .enumerate()
        .filter(|&(i, pos)| i != index && origin.distance(*pos) <= radius)
        .map(|(i, _)| i)
        .collect()
}

pub struct Simulation {
    boids: Vec<Boid>,
    params: SimulationParams,
    rng: SmallRng,
    ticks: u64,
}

impl Simulation {
    /// Validates `params` and spawns the initial population from `seed`.
    /// The same seed and parameters always produce the same run.
    pub fn new(params: SimulationParams, seed: u64) -> Result<Self, ParamsError> {
        params.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let boids = (0..params.num_boids)
            .map(|_| Boid::spawn(&mut rng, &params))
            .collect();
        Ok(Self {
            boids,
            params,
            rng,
            ticks: 0,
        })
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Mutable access for the UI-owned toggles and population slider.
    pub fn params_mut(&mut self) -> &mut SimulationParams {
        &mut self.params
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Rebuilds the population of `count` boids from the RNG stream.
    pub fn reset(&mut self, count: usize) {
        self.params.num_boids = count;
        self.boids = (0..count)
            .map(|_| Boid::spawn(&mut self.rng, &self.params))
            .collect();
    }

    /// Advances the whole flock by one tick: snapshot positions, compute
    /// neighbor sets from the snapshot, update every boid. The parallel
    /// path partitions boids by identity and is behaviorally identical to
    /// the sequential one.
    pub fn tick(&mut self) {
        let params = self.params.clone();
        let snapshot = self.boids.clone();
        let positions: Vec<DVec2> = snapshot.iter().map(|boid| boid.position).collect();

        if params.enable_parallel {
            let neighbor_sets: Vec<Vec<usize>> = (0..snapshot.len())
                .into_par_iter()
                .map(|i| neighbor_indices(i, &positions, params.nearby_dist))
                .collect();
            self.boids
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, boid)| boid.update(&snapshot, &neighbor_sets[i], &params));
        } else {
            for (i, boid) in self.boids.iter_mut().enumerate() {
                let neighbors = neighbor_indices(i, &positions, params.nearby_dist);
                boid.update(&snapshot, &neighbors, &params);
            }
        }

        self.ticks += 1;
    }
}
