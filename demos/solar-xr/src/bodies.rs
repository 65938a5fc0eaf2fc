//! Planetary configuration, visually tuned.
//!
//! Distances and radii are demo units picked for readability, not AU
//! (real proportions would leave the inner planets sub-pixel). Periods are
//! Earth days; eccentricities and axial tilts are the real values, the
//! former purely cosmetic.

use orrery_core::BodySpec;

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

/// Names for lookups and UI display (indexed by planet constant).
pub const PLANET_NAMES: [&str; PLANET_COUNT] = [
    "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune",
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_NAME: &str = "sun";

pub fn sun_spec() -> BodySpec {
    BodySpec {
        radius: 5.0,
        semi_major_axis: 0.0,
        eccentricity: 0.0,
        rotation_period: 27.0,
        orbital_period: 0.0,
        axial_tilt: 0.0,
        color: [1.0, 0.9, 0.5],
    }
}

// ── Planets ──────────────────────────────────────────────────────────

pub fn planet_specs() -> [BodySpec; PLANET_COUNT] {
    [
        // Mercury
        BodySpec {
            radius: 0.38,
            semi_major_axis: 8.0,
            eccentricity: 0.2056,
            rotation_period: 58.6,
            orbital_period: 87.97,
            axial_tilt: 0.001,
            color: [0.6, 0.5, 0.4],
        },
        // Venus
        BodySpec {
            radius: 0.95,
            semi_major_axis: 11.0,
            eccentricity: 0.0068,
            rotation_period: 243.0,
            orbital_period: 224.70,
            axial_tilt: 0.046,
            color: [0.8, 0.7, 0.4],
        },
        // Earth
        BodySpec {
            radius: 1.0,
            semi_major_axis: 14.0,
            eccentricity: 0.0167,
            rotation_period: 1.0,
            orbital_period: 365.26,
            axial_tilt: 0.41,
            color: [0.3, 0.5, 0.8],
        },
        // Mars
        BodySpec {
            radius: 0.53,
            semi_major_axis: 17.0,
            eccentricity: 0.0934,
            rotation_period: 1.03,
            orbital_period: 686.98,
            axial_tilt: 0.44,
            color: [0.7, 0.3, 0.2],
        },
        // Jupiter
        BodySpec {
            radius: 3.5,
            semi_major_axis: 24.0,
            eccentricity: 0.0485,
            rotation_period: 0.41,
            orbital_period: 4332.59,
            axial_tilt: 0.055,
            color: [0.7, 0.6, 0.4],
        },
        // Saturn
        BodySpec {
            radius: 3.0,
            semi_major_axis: 30.0,
            eccentricity: 0.0555,
            rotation_period: 0.45,
            orbital_period: 10759.22,
            axial_tilt: 0.47,
            color: [0.7, 0.65, 0.4],
        },
        // Uranus
        BodySpec {
            radius: 1.8,
            semi_major_axis: 36.0,
            eccentricity: 0.0463,
            rotation_period: 0.72,
            orbital_period: 30688.5,
            axial_tilt: 1.71,
            color: [0.4, 0.6, 0.7],
        },
        // Neptune
        BodySpec {
            radius: 1.7,
            semi_major_axis: 42.0,
            eccentricity: 0.0086,
            rotation_period: 0.67,
            orbital_period: 60182.0,
            axial_tilt: 0.49,
            color: [0.3, 0.4, 0.7],
        },
    ]
}

// ── Earth's moon ─────────────────────────────────────────────────────

pub const MOON_NAME: &str = "moon";

pub fn moon_spec() -> BodySpec {
    BodySpec {
        radius: 0.27,
        semi_major_axis: 2.0,
        eccentricity: 0.0549,
        rotation_period: 27.3,
        orbital_period: 27.3,
        axial_tilt: 0.12,
        color: [0.7, 0.7, 0.7],
    }
}

// ── Saturn ring ──────────────────────────────────────────────────────

/// Static ring geometry parameters the renderer consumes once at startup.
#[derive(Debug, Clone, Copy)]
pub struct RingDef {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Same tilt as the planet's spin axis, radians.
    pub tilt: f32,
}

pub const SATURN_RING: RingDef = RingDef {
    inner_radius: 3.8,
    outer_radius: 6.0,
    tilt: 0.47,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_planet_spec_is_valid() {
        for (i, spec) in planet_specs().iter().enumerate() {
            assert!(spec.validate().is_ok(), "planet {} invalid", PLANET_NAMES[i]);
        }
        assert!(sun_spec().validate().is_ok());
        assert!(moon_spec().validate().is_ok());
    }

    #[test]
    fn orbits_are_ordered_outward() {
        let specs = planet_specs();
        for w in specs.windows(2) {
            assert!(w[0].semi_major_axis < w[1].semi_major_axis);
        }
    }

    #[test]
    fn ring_sits_outside_saturn() {
        let saturn = planet_specs()[SATURN];
        assert!(SATURN_RING.inner_radius > saturn.radius);
        assert!(SATURN_RING.outer_radius > SATURN_RING.inner_radius);
    }
}
