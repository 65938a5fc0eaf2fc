//! Sun point-light state serialized into the frame header.
//!
//! The renderer owns the actual light node; this struct only tracks the
//! intensity/range pair the active presentation profile dictates, so the
//! sun looks equally bright whether the system fills a room or a tabletop.

use crate::mode::controller::ModeController;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
}

impl SunLight {
    pub fn new() -> Self {
        Self {
            color: [1.0, 0.9, 0.5],
            intensity: 0.0,
            range: 0.0,
        }
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Pull intensity and range from the controller's current mode/scale.
    /// Called once per frame after input is applied.
    pub fn sync(&mut self, controller: &ModeController) {
        let (intensity, range) = controller.light_values();
        self.intensity = intensity;
        self.range = range;
    }
}

impl Default for SunLight {
    fn default() -> Self {
        Self::new()
    }
}
