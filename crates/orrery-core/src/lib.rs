pub mod api;
pub mod bridge;
pub mod core;
pub mod input;
pub mod kinematics;
pub mod mode;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::sim::{Sim, SimConfig, SimContext};
pub use api::types::{BodyId, SimEvent};
pub use bridge::frame::{build_frame, FrameBuffer};
pub use bridge::protocol::{BodyInstance, FrameLayout};
pub use crate::core::body::{Body, BodyError, BodySpec};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use input::axes::{pick_scale_axis, DEFAULT_AXIS_PRIORITY};
pub use input::queue::{InputEvent, InputQueue};
pub use kinematics::{advance, advance_scene, orbital_radius, resolve_world_positions, OrbitTuning};
pub use mode::controller::{ModeController, RootState, SessionEvent};
pub use mode::detect::{classify, SessionDescriptor, SessionKind};
pub use mode::profile::{ModeProfiles, PresentationMode, PresentationProfile, ScaleTuning};
pub use systems::lighting::SunLight;
