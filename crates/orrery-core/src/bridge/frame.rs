use crate::bridge::protocol::{
    BodyInstance, HEADER_BODY_COUNT, HEADER_EVENT_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER,
    HEADER_LIGHT_INTENSITY, HEADER_LIGHT_RANGE, HEADER_MAX_BODIES, HEADER_MAX_EVENTS, HEADER_MODE,
    HEADER_PROTOCOL_VERSION, HEADER_ROOT_POS_X, HEADER_ROOT_POS_Y, HEADER_ROOT_POS_Z,
    HEADER_ROOT_SCALE_X, HEADER_ROOT_SCALE_Y, HEADER_ROOT_SCALE_Z, PROTOCOL_VERSION,
};
use crate::bridge::protocol::FrameLayout;
use crate::core::body::Body;
use crate::mode::controller::ModeController;
use crate::systems::lighting::SunLight;

/// Frame buffer the renderer reads over the WASM boundary: a fixed header
/// plus one instance per active body.
pub struct FrameBuffer {
    header: [f32; HEADER_FLOATS],
    instances: Vec<BodyInstance>,
}

impl FrameBuffer {
    pub fn with_layout(layout: &FrameLayout) -> Self {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_MAX_BODIES] = layout.max_bodies as f32;
        header[HEADER_MAX_EVENTS] = layout.max_events as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        Self {
            header,
            instances: Vec::with_capacity(layout.max_bodies),
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    /// Raw pointer to the header for SharedArrayBuffer reads.
    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

/// Serialize the frame: root transform and light into the header, one
/// instance per active body in system-local space.
///
/// Runs after input interpretation and the kinematics pass, so everything
/// the renderer sees within one frame is mutually consistent.
pub fn build_frame<'a>(
    bodies: impl Iterator<Item = &'a Body>,
    controller: &ModeController,
    light: &SunLight,
    frame_counter: u32,
    event_count: u32,
    buffer: &mut FrameBuffer,
) {
    buffer.instances.clear();

    for body in bodies {
        if !body.active {
            continue;
        }
        buffer.instances.push(BodyInstance {
            x: body.world_pos.x,
            y: body.world_pos.y,
            z: body.world_pos.z,
            rotation: body.rotation_angle as f32,
            tilt: body.axial_tilt,
            radius: body.radius,
            r: body.color[0],
            g: body.color[1],
            b: body.color[2],
        });
    }

    let root = controller.root();
    let h = &mut buffer.header;
    h[HEADER_FRAME_COUNTER] = frame_counter as f32;
    h[HEADER_BODY_COUNT] = buffer.instances.len() as f32;
    h[HEADER_ROOT_SCALE_X] = root.scale;
    h[HEADER_ROOT_SCALE_Y] = root.scale;
    h[HEADER_ROOT_SCALE_Z] = root.scale;
    h[HEADER_ROOT_POS_X] = root.position.x;
    h[HEADER_ROOT_POS_Y] = root.position.y;
    h[HEADER_ROOT_POS_Z] = root.position.z;
    h[HEADER_LIGHT_INTENSITY] = light.intensity;
    h[HEADER_LIGHT_RANGE] = light.range;
    h[HEADER_MODE] = controller.mode().wire_tag();
    h[HEADER_EVENT_COUNT] = event_count as f32;
}
