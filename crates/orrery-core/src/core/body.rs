use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::types::BodyId;
use crate::core::rng::Rng;

/// Errors rejected eagerly when a body is constructed.
/// Nothing in the per-frame path can fail once a body exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("semi-major axis must be non-negative, got {0}")]
    NegativeSemiMajorAxis(f64),

    #[error("eccentricity must be in [0, 1), got {0}")]
    EccentricityOutOfRange(f64),

    #[error("rotation period must be positive, got {0}")]
    NonPositiveRotationPeriod(f64),

    #[error("orbital period must be positive, got {0}")]
    NonPositiveOrbitalPeriod(f64),
}

/// Static description of a body: the validated configuration a `Body`
/// is created from. All orbital parameters use arbitrary visual units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodySpec {
    /// Visual radius, must be positive.
    pub radius: f32,
    /// Orbit distance scale. Zero means the body does not orbit (the sun).
    pub semi_major_axis: f64,
    /// Cosmetic ellipse shape, [0, 1). Zero is a circle.
    pub eccentricity: f64,
    /// Self-rotation period in arbitrary time units.
    pub rotation_period: f64,
    /// Orbital period in arbitrary time units.
    pub orbital_period: f64,
    /// Axial tilt in radians, applied once at creation.
    pub axial_tilt: f32,
    /// RGB color handed to the renderer.
    pub color: [f32; 3],
}

impl BodySpec {
    /// Check every configuration constraint. Called by `Body::from_spec`.
    pub fn validate(&self) -> Result<(), BodyError> {
        if self.radius <= 0.0 {
            return Err(BodyError::NonPositiveRadius(self.radius));
        }
        if self.semi_major_axis < 0.0 {
            return Err(BodyError::NegativeSemiMajorAxis(self.semi_major_axis));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(BodyError::EccentricityOutOfRange(self.eccentricity));
        }
        if self.rotation_period <= 0.0 {
            return Err(BodyError::NonPositiveRotationPeriod(self.rotation_period));
        }
        if self.semi_major_axis > 0.0 && self.orbital_period <= 0.0 {
            return Err(BodyError::NonPositiveOrbitalPeriod(self.orbital_period));
        }
        Ok(())
    }
}

/// Fat body struct: static orbital parameters plus the mutable per-frame
/// state the kinematics pass advances. Simplicity over ECS purity.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier.
    pub id: BodyId,
    /// Name for lookups and UI display.
    pub name: String,
    /// Whether this body participates in updates and rendering.
    pub active: bool,

    // Static configuration (validated at construction)
    pub radius: f32,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub rotation_period: f64,
    pub orbital_period: f64,
    pub axial_tilt: f32,
    pub color: [f32; 3],

    /// Satellites orbit this body instead of the system origin.
    /// Parents must be spawned before their satellites.
    pub parent: Option<BodyId>,

    // Mutable kinematic state
    /// Current angular position along the orbit, radians.
    pub orbit_angle: f64,
    /// Accumulated self-rotation, radians.
    pub rotation_angle: f64,
    /// Position relative to the parent (or the system origin).
    pub local_pos: Vec3,
    /// Position in system space, written by the resolution pass.
    pub world_pos: Vec3,
}

impl Body {
    /// Create a body from a validated spec. The initial orbit angle is
    /// randomized so no two runs start with the same layout.
    pub fn from_spec(
        id: BodyId,
        name: impl Into<String>,
        spec: &BodySpec,
        rng: &mut Rng,
    ) -> Result<Self, BodyError> {
        spec.validate()?;
        Ok(Self {
            id,
            name: name.into(),
            active: true,
            radius: spec.radius,
            semi_major_axis: spec.semi_major_axis,
            eccentricity: spec.eccentricity,
            rotation_period: spec.rotation_period,
            orbital_period: spec.orbital_period,
            axial_tilt: spec.axial_tilt,
            color: spec.color,
            parent: None,
            orbit_angle: rng.next_angle(),
            rotation_angle: 0.0,
            local_pos: Vec3::ZERO,
            world_pos: Vec3::ZERO,
        })
    }

    // -- Builder pattern --

    pub fn with_parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_orbit_angle(mut self, angle: f64) -> Self {
        self.orbit_angle = angle;
        self
    }

    /// Whether this body orbits anything at all.
    pub fn orbits(&self) -> bool {
        self.semi_major_axis > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn valid_spec_builds_body() {
        let mut rng = Rng::new(1);
        let body = Body::from_spec(BodyId(1), "earth", &earth_like(), &mut rng).unwrap();
        assert!(body.orbits());
        assert!(body.orbit_angle >= 0.0 && body.orbit_angle < std::f64::consts::TAU);
        assert_eq!(body.rotation_angle, 0.0);
    }

    #[test]
    fn rejects_eccentricity_of_one_and_above() {
        let mut spec = earth_like();
        spec.eccentricity = 1.0;
        assert_eq!(
            spec.validate(),
            Err(BodyError::EccentricityOutOfRange(1.0))
        );
        spec.eccentricity = 1.4;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn rejects_negative_radius() {
        let mut spec = earth_like();
        spec.radius = -1.0;
        assert_eq!(spec.validate(), Err(BodyError::NonPositiveRadius(-1.0)));
    }

    #[test]
    fn rejects_negative_semi_major_axis() {
        let mut spec = earth_like();
        spec.semi_major_axis = -5.0;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_periods() {
        let mut spec = earth_like();
        spec.rotation_period = 0.0;
        assert!(spec.validate().is_err());

        let mut spec = earth_like();
        spec.orbital_period = -3.0;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn non_orbiting_body_ignores_orbital_period() {
        // The sun: semi-major axis 0, orbital period irrelevant
        let mut spec = earth_like();
        spec.semi_major_axis = 0.0;
        spec.orbital_period = 0.0;
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn initial_orbit_angles_are_scattered() {
        let mut rng = Rng::new(42);
        let a = Body::from_spec(BodyId(1), "a", &earth_like(), &mut rng).unwrap();
        let b = Body::from_spec(BodyId(2), "b", &earth_like(), &mut rng).unwrap();
        assert_ne!(a.orbit_angle, b.orbit_angle);
    }
}
