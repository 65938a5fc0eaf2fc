//! Thumbstick axis resolution.
//!
//! Different controllers report the vertical thumbstick on different gamepad
//! axis indices, so the bridge hands over the raw axes array and we try a
//! prioritized list of candidate indices until one shows deliberate
//! deflection. The core scale logic never learns about controller models.

/// Default candidate order: standard WebXR thumbstick Y first, then the
/// positions older runtimes report it on.
pub const DEFAULT_AXIS_PRIORITY: [usize; 3] = [3, 1, 5];

/// Pick the first candidate axis with a finite value at or above the
/// deadzone. Returns None when every candidate is resting, missing, or
/// malformed; a frame without a sample, not an error.
pub fn pick_scale_axis(axes: &[f32], priority: &[usize], deadzone: f32) -> Option<f32> {
    priority
        .iter()
        .filter_map(|&idx| axes.get(idx).copied())
        .find(|v| v.is_finite() && v.abs() >= deadzone)
}
