/*
 * Renderer Module
 *
 * This module turns boid silhouettes into drawn triangles. It owns the
 * per-boid vertex table (six floats per boid: head, tail1, tail2) and the
 * aspect ratio, keyed by boid index and kept out of the physics entities.
 * Aspect correction happens here, at upload: x components are scaled by
 * height/width so the triangles stay undistorted on wide windows.
 */

use nannou::prelude::*;

use crate::boid::Boid;

pub struct BoidRenderer {
    aspect_ratio: f64,
    // One entry per boid: [head.x, head.y, tail1.x, tail1.y, tail2.x, tail2.y]
    vertices: Vec<[f32; 6]>,
}

impl BoidRenderer {
    /// The aspect ratio (window height / width) is required up front;
    /// there is no unset state.
    pub fn new(aspect_ratio: f64) -> Self {
        Self {
            aspect_ratio,
            vertices: Vec::new(),
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Called on window resize.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Rebuilds the vertex table from the current boid state. Runs every
    /// frame whether or not the simulation advanced, so paused boids keep
    /// redrawing in place.
    pub fn upload(&mut self, boids: &[Boid]) {
        self.vertices.clear();
        for boid in boids {
            let tri = boid.silhouette();
            self.vertices.push([
                (tri.head.x * self.aspect_ratio) as f32,
                tri.head.y as f32,
                (tri.tail1.x * self.aspect_ratio) as f32,
                tri.tail1.y as f32,
                (tri.tail2.x * self.aspect_ratio) as f32,
                tri.tail2.y as f32,
            ]);
        }
    }

    pub fn boid_count(&self) -> usize {
        self.vertices.len()
    }

    /// Draws every triangle in the table. Normalized device coordinates
    /// map onto the window rectangle here.
    pub fn draw(&self, draw: &Draw, window_rect: Rect) {
        let half_w = window_rect.w() / 2.0;
        let half_h = window_rect.h() / 2.0;
        for v in &self.vertices {
            draw.polygon()
                .color(rgb(220u8, 60, 60))
                .points([
                    pt2(v[0] * half_w, v[1] * half_h),
                    pt2(v[2] * half_w, v[3] * half_h),
                    pt2(v[4] * half_w, v[5] * half_h),
                ]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn upload_scales_x_by_the_aspect_ratio() {
        let mut renderer = BoidRenderer::new(0.5);
        let boid = Boid::new(DVec2::new(0.8, 0.6), DVec2::new(0.005, 0.0));
        renderer.upload(std::slice::from_ref(&boid));
        assert_eq!(renderer.boid_count(), 1);

        let tri = boid.silhouette();
        let v = renderer.vertices[0];
        assert_eq!(v[0], (tri.head.x * 0.5) as f32);
        assert_eq!(v[1], tri.head.y as f32);
        assert_eq!(v[2], (tri.tail1.x * 0.5) as f32);
        assert_eq!(v[5], tri.tail2.y as f32);
    }

    #[test]
    fn upload_replaces_the_previous_table() {
        let mut renderer = BoidRenderer::new(1.0);
        let boids: Vec<Boid> = (0..4)
            .map(|i| Boid::new(DVec2::new(i as f64 * 0.1, 0.0), DVec2::new(0.005, 0.0)))
            .collect();
        renderer.upload(&boids);
        assert_eq!(renderer.boid_count(), 4);
        renderer.upload(&boids[..2]);
        assert_eq!(renderer.boid_count(), 2);
    }
}
