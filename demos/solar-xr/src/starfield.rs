//! Starfield backdrop: deterministic point scatter on a spherical shell.
//!
//! The renderer turns these into a point cloud once at startup; the points
//! never move, so they are generated eagerly and handed over flat.

use glam::Vec3;
use orrery_core::Rng;

const SHELL_MIN: f32 = 180.0;
const SHELL_MAX: f32 = 220.0;

/// Scatter `count` stars uniformly over a spherical shell.
pub fn generate(count: usize, rng: &mut Rng) -> Vec<Vec3> {
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        // Uniform direction: z in [-1, 1], azimuth in [0, 2π)
        let z = rng.next_f32() * 2.0 - 1.0;
        let azimuth = rng.next_angle() as f32;
        let planar = (1.0 - z * z).sqrt();
        let dir = Vec3::new(planar * azimuth.cos(), z, planar * azimuth.sin());
        let radius = SHELL_MIN + rng.next_f32() * (SHELL_MAX - SHELL_MIN);
        stars.push(dir * radius);
    }
    stars
}

/// Flat xyz triples for the Float32Array crossing the WASM boundary.
pub fn generate_flat(count: usize, seed: u64) -> Vec<f32> {
    let mut rng = Rng::new(seed);
    let mut flat = Vec::with_capacity(count * 3);
    for star in generate(count, &mut rng) {
        flat.extend_from_slice(&[star.x, star.y, star.z]);
    }
    flat
}
