use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How the viewer is looking at the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationMode {
    Desktop,
    Vr,
    Ar,
}

impl PresentationMode {
    /// Numeric tag written into the frame header for the renderer.
    pub fn wire_tag(self) -> f32 {
        match self {
            PresentationMode::Desktop => 0.0,
            PresentationMode::Vr => 1.0,
            PresentationMode::Ar => 2.0,
        }
    }

    pub fn is_xr(self) -> bool {
        self != PresentationMode::Desktop
    }
}

/// Baseline sun-light intensity at root scale 1.0.
pub const BASE_LIGHT_INTENSITY: f32 = 2.0;
/// Baseline sun-light falloff range at root scale 1.0.
pub const BASE_LIGHT_RANGE: f32 = 120.0;

/// A named (scale, position, lighting) configuration applied wholesale to
/// the system root on entering its mode. Static, read-only at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PresentationProfile {
    /// Uniform scale factor for the whole system root.
    pub scale: f32,
    /// Translation of the system root.
    pub position: Vec3,
    /// Explicit sun-light intensity. None derives it from scale.
    #[serde(default)]
    pub light_intensity: Option<f32>,
    /// Explicit sun-light range. None derives it from scale.
    #[serde(default)]
    pub light_range: Option<f32>,
}

impl PresentationProfile {
    pub fn new(scale: f32, position: Vec3) -> Self {
        Self {
            scale,
            position,
            light_intensity: None,
            light_range: None,
        }
    }

    pub fn with_light(mut self, intensity: f32, range: f32) -> Self {
        self.light_intensity = Some(intensity);
        self.light_range = Some(range);
        self
    }

    /// Light values for a given current root scale: explicit overrides win,
    /// otherwise both are derived proportionally so apparent brightness
    /// stays consistent when the whole system shrinks into a tabletop.
    pub fn light_for_scale(&self, scale: f32) -> (f32, f32) {
        (
            self.light_intensity
                .unwrap_or(BASE_LIGHT_INTENSITY * scale),
            self.light_range.unwrap_or(BASE_LIGHT_RANGE * scale),
        )
    }
}

/// One profile per presentation mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModeProfiles {
    pub desktop: PresentationProfile,
    pub vr: PresentationProfile,
    pub ar: PresentationProfile,
}

impl ModeProfiles {
    pub fn get(&self, mode: PresentationMode) -> &PresentationProfile {
        match mode {
            PresentationMode::Desktop => &self.desktop,
            PresentationMode::Vr => &self.vr,
            PresentationMode::Ar => &self.ar,
        }
    }
}

impl Default for ModeProfiles {
    fn default() -> Self {
        Self {
            desktop: PresentationProfile::new(1.0, Vec3::ZERO),
            vr: PresentationProfile::new(0.5, Vec3::new(0.0, 1.2, -3.0)),
            ar: PresentationProfile::new(0.02, Vec3::new(0.0, -0.15, -0.5)),
        }
    }
}

/// Clamping and input-shaping constants for continuous scale adjustment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleTuning {
    pub min_scale: f32,
    pub max_scale: f32,
    /// Multiplicative zoom speed per unit of axis deflection per sample.
    pub scale_rate: f32,
    /// Axis magnitude below which input is ignored (controller drift).
    pub deadzone: f32,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        Self {
            min_scale: 0.01,
            max_scale: 10.0,
            scale_rate: 0.01,
            deadzone: 0.15,
        }
    }
}
