use serde::{Deserialize, Serialize};

use crate::api::types::{BodyId, SimEvent};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::axes::DEFAULT_AXIS_PRIORITY;
use crate::input::queue::InputQueue;
use crate::kinematics::OrbitTuning;
use crate::mode::controller::ModeController;
use crate::mode::profile::{ModeProfiles, PresentationMode, ScaleTuning};
use crate::systems::lighting::SunLight;

/// Engine configuration, provided by the sim. Static after construction;
/// every field can also arrive as JSON over the bridge before init.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of body instances on the wire.
    pub max_bodies: usize,
    /// Maximum number of sim events per frame.
    pub max_events: usize,
    /// Orbit pacing constants shared by every body.
    pub tuning: OrbitTuning,
    /// Scale clamping and input shaping.
    pub scale: ScaleTuning,
    /// Modes in which drag repositioning is allowed.
    pub drag_modes: Vec<PresentationMode>,
    /// Candidate thumbstick axis indices, tried in order.
    pub axis_priority: Vec<usize>,
    /// Root transform profiles per presentation mode.
    pub profiles: ModeProfiles,
    /// Seed for the deterministic RNG (initial orbit angles, starfields).
    pub rng_seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_bodies: 32,
            max_events: 32,
            tuning: OrbitTuning::default(),
            scale: ScaleTuning::default(),
            drag_modes: vec![PresentationMode::Ar],
            axis_priority: DEFAULT_AXIS_PRIORITY.to_vec(),
            profiles: ModeProfiles::default(),
            rng_seed: 42,
        }
    }
}

impl SimConfig {
    /// Parse a configuration from a JSON string. Missing fields keep their
    /// defaults, so the UI only sends what it overrides.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The core contract every sim must fulfill.
pub trait Sim {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Setup initial state: spawn bodies, emit static scene info.
    fn init(&mut self, ctx: &mut SimContext);

    /// The per-tick update. Interpret pointer/key/custom input and advance
    /// the kinematics. Root-transform input has already been applied to
    /// `ctx.mode` by the runner when this is called.
    fn update(&mut self, ctx: &mut SimContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to `Sim::init` and `Sim::update`.
pub struct SimContext {
    pub scene: Scene,
    pub mode: ModeController,
    pub light: SunLight,
    pub events: Vec<SimEvent>,
    pub rng: Rng,
    pub tuning: OrbitTuning,
    /// The configured fixed timestep, for sims that advance kinematics.
    pub fixed_dt: f32,
    max_events: usize,
    next_id: u32,
}

impl SimContext {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_bodies),
            mode: ModeController::new(
                config.profiles,
                config.scale,
                config.drag_modes.clone(),
            ),
            light: SunLight::new(),
            events: Vec::new(),
            rng: Rng::new(config.rng_seed),
            tuning: config.tuning,
            fixed_dt: config.fixed_dt,
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique body ID.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a sim event to be forwarded to the UI layer. Events past the
    /// configured per-frame capacity are dropped; the renderer was only
    /// promised `max_events` slots.
    pub fn emit_event(&mut self, event: SimEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("sim event dropped: frame capacity {} reached", self.max_events);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}
