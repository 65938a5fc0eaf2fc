//! Orbit kinematics: pure math over body state, no I/O.
//!
//! Angles and periods stay f64 throughout; positions drop to f32 only when
//! written into the body's Vec3 fields for the renderer.

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::BodyId;
use crate::core::body::Body;
use crate::core::scene::Scene;

const TAU: f64 = std::f64::consts::TAU;

/// Global pacing constants shared by every body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitTuning {
    /// Converts body periods (arbitrary units) into angular speed.
    pub time_scale: f64,
    /// Decouples visual orbital speed from the literal period ratio.
    /// Without this, outer-planet orbits are too slow to watch.
    pub orbital_speed_divisor: f64,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            time_scale: 5.0,
            orbital_speed_divisor: 0.01,
        }
    }
}

/// Orbital radius from the ellipse-with-focus-at-origin formula:
/// `r = a(1 - e²) / (1 + e·cos(θ))`.
///
/// Construction-time validation guarantees `e < 1`, so the denominator
/// never reaches zero.
pub fn orbital_radius(semi_major_axis: f64, eccentricity: f64, orbit_angle: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * orbit_angle.cos())
}

/// Advance one body by `dt` simulated seconds.
///
/// Self-rotation accumulates linearly; trig periodicity makes explicit
/// wraparound unnecessary. Bodies with a zero semi-major axis (the sun)
/// only self-rotate. Orbits are coplanar in the XZ plane: y is untouched.
pub fn advance(body: &mut Body, dt: f64, tuning: &OrbitTuning) {
    body.rotation_angle += TAU / (body.rotation_period * tuning.time_scale) * dt;

    if body.orbits() {
        body.orbit_angle += TAU
            / (body.orbital_period * tuning.time_scale * tuning.orbital_speed_divisor)
            * dt;
        let r = orbital_radius(body.semi_major_axis, body.eccentricity, body.orbit_angle);
        body.local_pos.x = (r * body.orbit_angle.cos()) as f32;
        body.local_pos.z = (r * body.orbit_angle.sin()) as f32;
    }
}

/// Advance every active body in the scene.
pub fn advance_scene(scene: &mut Scene, dt: f64, tuning: &OrbitTuning) {
    for body in scene.iter_mut() {
        if body.active {
            advance(body, dt, tuning);
        }
    }
}

/// Resolve world positions from the parent chain, front to back.
///
/// A satellite's kinematics are identical to a planet's but relative to
/// its parent, so the world position is just the parent's world position
/// plus the local offset. Relies on parents being spawned before their
/// satellites; an unresolved parent falls back to the system origin.
pub fn resolve_world_positions(scene: &mut Scene) {
    let mut resolved: HashMap<BodyId, Vec3> = HashMap::with_capacity(scene.len());
    for body in scene.iter_mut() {
        let origin = body
            .parent
            .and_then(|p| resolved.get(&p).copied())
            .unwrap_or(Vec3::ZERO);
        body.world_pos = origin + body.local_pos;
        resolved.insert(body.id, body.world_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::BodySpec;
    use crate::core::rng::Rng;

    fn body(spec: BodySpec, angle: f64) -> Body {
        let mut rng = Rng::new(1);
        Body::from_spec(BodyId(1), "test", &spec, &mut rng)
            .unwrap()
            .with_orbit_angle(angle)
    }

    fn earth_like() -> BodySpec {
        BodySpec {
            radius: 1.0,
            semi_major_axis: 20.0,
            eccentricity: 0.017,
            rotation_period: 1.0,
            orbital_period: 365.0,
            axial_tilt: 0.41,
            color: [0.3, 0.5, 0.8],
        }
    }

    #[test]
    fn circular_orbit_radius_equals_semi_major_axis() {
        // e = 0 means r == a at every angle
        for i in 0..64 {
            let angle = i as f64 / 64.0 * TAU;
            let r = orbital_radius(20.0, 0.0, angle);
            assert!((r - 20.0).abs() < 1e-12, "r = {r} at angle {angle}");
        }
    }

    #[test]
    fn eccentric_radius_spans_perihelion_to_aphelion() {
        let a = 10.0;
        let e = 0.5;
        let perihelion = orbital_radius(a, e, 0.0);
        let aphelion = orbital_radius(a, e, std::f64::consts::PI);
        assert!((perihelion - a * (1.0 - e)).abs() < 1e-12);
        assert!((aphelion - a * (1.0 + e)).abs() < 1e-12);
    }

    #[test]
    fn one_divisor_adjusted_period_advances_a_full_turn() {
        // After dt summing to one divisor-adjusted period the orbit angle
        // advances exactly 2π.
        let tuning = OrbitTuning {
            time_scale: 5.0,
            orbital_speed_divisor: 0.01,
        };
        let mut b = body(earth_like(), 1.25);
        let start = b.orbit_angle;
        let full_period = b.orbital_period * tuning.time_scale * tuning.orbital_speed_divisor;
        advance(&mut b, full_period, &tuning);
        assert!(
            (b.orbit_angle - start - TAU).abs() < 1e-9,
            "advanced by {}",
            b.orbit_angle - start
        );
    }

    #[test]
    fn periodicity_over_many_small_steps() {
        let tuning = OrbitTuning::default();
        let mut b = body(earth_like(), 0.5);
        let start = b.orbit_angle;
        let full_period = b.orbital_period * tuning.time_scale * tuning.orbital_speed_divisor;
        let steps = 1000;
        for _ in 0..steps {
            advance(&mut b, full_period / steps as f64, &tuning);
        }
        let wrapped = (b.orbit_angle - start).rem_euclid(TAU);
        assert!(
            wrapped < 1e-6 || (TAU - wrapped) < 1e-6,
            "residual angle {wrapped}"
        );
    }

    #[test]
    fn sun_only_self_rotates() {
        let spec = BodySpec {
            semi_major_axis: 0.0,
            orbital_period: 1.0,
            ..earth_like()
        };
        let mut b = body(spec, 0.0);
        let angle_before = b.orbit_angle;
        advance(&mut b, 10.0, &OrbitTuning::default());
        assert_eq!(b.orbit_angle, angle_before);
        assert_eq!(b.local_pos, Vec3::ZERO);
        assert!(b.rotation_angle > 0.0);
    }

    #[test]
    fn orbit_stays_coplanar() {
        let mut b = body(earth_like(), 0.0);
        b.local_pos.y = 0.75;
        for _ in 0..100 {
            advance(&mut b, 0.016, &OrbitTuning::default());
        }
        assert_eq!(b.local_pos.y, 0.75);
    }

    #[test]
    fn satellite_resolves_relative_to_parent() {
        let mut scene = Scene::new();
        let mut rng = Rng::new(3);

        let planet = Body::from_spec(BodyId(1), "earth", &earth_like(), &mut rng)
            .unwrap()
            .with_orbit_angle(0.0);
        let moon_spec = BodySpec {
            radius: 0.3,
            semi_major_axis: 2.0,
            eccentricity: 0.0,
            orbital_period: 27.0,
            ..earth_like()
        };
        let moon = Body::from_spec(BodyId(2), "moon", &moon_spec, &mut rng)
            .unwrap()
            .with_orbit_angle(0.0)
            .with_parent(BodyId(1));

        scene.spawn(planet);
        scene.spawn(moon);

        // dt = 0 leaves angles alone but still fills in local positions
        advance_scene(&mut scene, 0.0, &OrbitTuning::default());
        resolve_world_positions(&mut scene);

        let planet_pos = scene.get(BodyId(1)).unwrap().world_pos;
        let moon_pos = scene.get(BodyId(2)).unwrap().world_pos;
        let offset = moon_pos - planet_pos;
        assert!((offset.length() - 2.0).abs() < 1e-4, "offset {offset:?}");
    }

    #[test]
    fn inactive_bodies_are_skipped() {
        let mut scene = Scene::new();
        let mut rng = Rng::new(4);
        let mut b = Body::from_spec(BodyId(1), "frozen", &earth_like(), &mut rng).unwrap();
        b.active = false;
        let angle = b.orbit_angle;
        scene.spawn(b);

        advance_scene(&mut scene, 1.0, &OrbitTuning::default());
        assert_eq!(scene.get(BodyId(1)).unwrap().orbit_angle, angle);
    }
}
