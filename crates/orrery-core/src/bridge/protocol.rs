//! SharedArrayBuffer layout.
//! Must stay in sync with the TypeScript `protocol.ts` on the renderer side.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Bodies: max_bodies × 9 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init; the renderer reads
//! them back to compute section offsets. The root scale is written as three
//! identical components because scene-graph roots take a per-axis scale;
//! the simulation only ever produces isotropic values.

use bytemuck::{Pod, Zeroable};

use crate::api::sim::SimConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_BODY_COUNT: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_ROOT_SCALE_X: usize = 3;
pub const HEADER_ROOT_SCALE_Y: usize = 4;
pub const HEADER_ROOT_SCALE_Z: usize = 5;
pub const HEADER_ROOT_POS_X: usize = 6;
pub const HEADER_ROOT_POS_Y: usize = 7;
pub const HEADER_ROOT_POS_Z: usize = 8;
pub const HEADER_LIGHT_INTENSITY: usize = 9;
pub const HEADER_LIGHT_RANGE: usize = 10;
pub const HEADER_MODE: usize = 11;
pub const HEADER_MAX_EVENTS: usize = 12;
pub const HEADER_EVENT_COUNT: usize = 13;
pub const HEADER_PROTOCOL_VERSION: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body instance (wire format, never changes).
pub const BODY_FLOATS: usize = 9;

/// Floats per sim event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = 4;

/// Per-body render data written to the SharedArrayBuffer each frame.
/// Positions are in system-local space; the renderer applies the root
/// transform it reads from the header.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Accumulated self-rotation about the (tilted) spin axis, radians.
    pub rotation: f32,
    /// Axial tilt in radians; the renderer applies it to the mesh once.
    pub tilt: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = BODY_FLOATS;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Runtime-computed buffer layout derived from the sim configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    /// Maximum body instances.
    pub max_bodies: usize,
    /// Maximum sim events per frame.
    pub max_events: usize,

    /// Size of the body data section in floats.
    pub body_data_floats: usize,
    /// Size of the event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    pub fn new(max_bodies: usize, max_events: usize) -> Self {
        let body_data_floats = max_bodies * BODY_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let body_data_offset = HEADER_FLOATS;
        let event_data_offset = body_data_offset + body_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_bodies,
            max_events,
            body_data_floats,
            event_data_floats,
            body_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SimConfig.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.max_bodies, config.max_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_9_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 36);
        assert_eq!(BodyInstance::FLOATS, 9);
    }

    #[test]
    fn layout_sections_are_contiguous() {
        let layout = FrameLayout::new(16, 32);
        assert_eq!(layout.body_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, HEADER_FLOATS + 16 * BODY_FLOATS);
        assert_eq!(
            layout.buffer_total_floats,
            HEADER_FLOATS + 16 * BODY_FLOATS + 32 * EVENT_FLOATS
        );
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn layout_from_default_config() {
        let layout = FrameLayout::from_config(&SimConfig::default());
        assert!(layout.max_bodies > 0);
        assert!(layout.buffer_total_floats > HEADER_FLOATS);
    }
}
