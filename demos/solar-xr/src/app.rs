//! Solar system orrery: sun, eight planets, Earth's moon, Saturn's ring.
//!
//! Composes the core kinematics and mode controller; the renderer on the
//! JS side owns meshes, materials, and the WebXR session itself.

use orrery_core::*;

use crate::bodies;

// ── Custom event kinds from the UI ───────────────────────────────────

const CUSTOM_SET_SPEED: u32 = 1;
const CUSTOM_TOGGLE_PAUSE: u32 = 2;

/// Spacebar, mapped to pause like the UI button.
const KEY_SPACE: u32 = 32;

// ── Sim event kinds to the UI ────────────────────────────────────────

const EVENT_MODE_CHANGED: f32 = 1.0;
const EVENT_SCALE_INFO: f32 = 2.0;
const EVENT_RING_INFO: f32 = 3.0;

pub struct SolarXr {
    /// Simulation speed multiplier applied on top of the orbit tuning.
    speed: f64,
    paused: bool,
    /// Last mode reported to the UI, to emit changes only on transition.
    reported_mode: Option<PresentationMode>,
}

impl SolarXr {
    pub fn new() -> Self {
        Self {
            speed: 1.0,
            paused: false,
            reported_mode: None,
        }
    }
}

impl Default for SolarXr {
    fn default() -> Self {
        Self::new()
    }
}

impl Sim for SolarXr {
    fn config(&self) -> SimConfig {
        SimConfig {
            max_bodies: 16,
            max_events: 16,
            ..SimConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SimContext) {
        let sun_id = ctx.next_id();
        match Body::from_spec(sun_id, bodies::SUN_NAME, &bodies::sun_spec(), &mut ctx.rng) {
            Ok(sun) => ctx.scene.spawn(sun),
            Err(err) => log::error!("sun rejected: {err}"),
        }

        let mut earth_id = None;
        for (i, spec) in bodies::planet_specs().iter().enumerate() {
            let id = ctx.next_id();
            match Body::from_spec(id, bodies::PLANET_NAMES[i], spec, &mut ctx.rng) {
                Ok(planet) => {
                    if i == bodies::EARTH {
                        earth_id = Some(id);
                    }
                    ctx.scene.spawn(planet);
                }
                Err(err) => log::error!("{} rejected: {err}", bodies::PLANET_NAMES[i]),
            }
        }

        // The moon orbits Earth with the same kinematics, parent-relative.
        if let Some(parent) = earth_id {
            let id = ctx.next_id();
            match Body::from_spec(id, bodies::MOON_NAME, &bodies::moon_spec(), &mut ctx.rng) {
                Ok(moon) => ctx.scene.spawn(moon.with_parent(parent)),
                Err(err) => log::error!("moon rejected: {err}"),
            }
        }

        ctx.light = SunLight::new().with_color(bodies::sun_spec().color);
        ctx.light.sync(&ctx.mode);

        // Static ring geometry, reported once for the renderer to build.
        let ring = bodies::SATURN_RING;
        ctx.emit_event(SimEvent {
            kind: EVENT_RING_INFO,
            a: ring.inner_radius,
            b: ring.outer_radius,
            c: ring.tilt,
        });
    }

    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind, a, .. } => match kind {
                    CUSTOM_SET_SPEED => {
                        if a.is_finite() && a > 0.0 {
                            self.speed = a as f64;
                        }
                    }
                    CUSTOM_TOGGLE_PAUSE => self.paused = !self.paused,
                    _ => {}
                },
                InputEvent::KeyDown { key_code } if key_code == KEY_SPACE => {
                    self.paused = !self.paused;
                }
                _ => {}
            }
        }

        if !self.paused {
            let tuning = ctx.tuning;
            let dt = ctx.fixed_dt as f64 * self.speed;
            advance_scene(&mut ctx.scene, dt, &tuning);
        }

        let mode = ctx.mode.mode();
        if self.reported_mode != Some(mode) {
            self.reported_mode = Some(mode);
            ctx.emit_event(SimEvent {
                kind: EVENT_MODE_CHANGED,
                a: mode.wire_tag(),
                ..Default::default()
            });
        }

        ctx.emit_event(SimEvent {
            kind: EVENT_SCALE_INFO,
            a: ctx.mode.root().scale,
            b: if self.paused { 1.0 } else { 0.0 },
            c: self.speed as f32,
        });
    }
}
