use glam::Vec3;
use orrery_core::{
    build_frame, kinematics, FixedTimestep, FrameBuffer, FrameLayout, InputEvent, InputQueue,
    SessionEvent, Sim, SimConfig, SimContext,
};

/// Generic sim runner that wires up the per-frame loop.
///
/// Each concrete sim (e.g. `solar-xr`) creates a `thread_local!` SimRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
///
/// Frame order is a contract: session events, then continuous input (all
/// root-transform mutations), then the fixed-step sim update, then world
/// position resolution, then serialization. The renderer never observes a
/// half-updated frame.
pub struct SimRunner<S: Sim> {
    sim: S,
    ctx: SimContext,
    input: InputQueue,
    sessions: Vec<SessionEvent>,
    frame: FrameBuffer,
    timestep: FixedTimestep,
    config: SimConfig,
    layout: FrameLayout,
    initialized: bool,
    frame_counter: u32,
}

impl<S: Sim> SimRunner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = FrameLayout::from_config(&config);
        let frame = FrameBuffer::with_layout(&layout);
        let ctx = SimContext::from_config(&config);

        Self {
            sim,
            ctx,
            input: InputQueue::new(),
            sessions: Vec::new(),
            frame,
            timestep,
            config,
            layout,
            initialized: false,
            frame_counter: 0,
        }
    }

    /// Replace the configuration from JSON. Only meaningful before init;
    /// a parse failure keeps the current configuration.
    pub fn load_config(&mut self, json: &str) {
        match SimConfig::from_json(json) {
            Ok(config) => {
                self.timestep = FixedTimestep::new(config.fixed_dt);
                self.layout = FrameLayout::from_config(&config);
                self.frame = FrameBuffer::with_layout(&self.layout);
                self.ctx = SimContext::from_config(&config);
                self.config = config;
            }
            Err(err) => log::error!("config rejected: {err}"),
        }
    }

    /// Initialize the sim. Call once after construction.
    pub fn init(&mut self) {
        self.sim.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Queue a session lifecycle event from the host XR runtime.
    pub fn push_session(&mut self, event: SessionEvent) {
        self.sessions.push(event);
    }

    /// Resolve a raw gamepad axes array against the configured candidate
    /// priority; a deliberate deflection becomes a scale-axis event.
    pub fn sample_axes(&mut self, axes: &[f32]) {
        if let Some(value) = orrery_core::pick_scale_axis(
            axes,
            &self.config.axis_priority,
            self.config.scale.deadzone,
        ) {
            self.input.push(InputEvent::ScaleAxis { value });
        }
    }

    /// Run one frame tick.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        // Session transitions first: a session end must clear drag state
        // before any queued drag-move is interpreted.
        for event in self.sessions.drain(..) {
            self.ctx.mode.handle_session(event);
        }

        // Continuous input next, so all root mutations precede the
        // kinematics read below.
        for event in self.input.iter() {
            match *event {
                InputEvent::ScaleAxis { value } => self.ctx.mode.apply_scale_delta(value),
                InputEvent::DragStart { x, y, z, on_target } => {
                    self.ctx.mode.begin_drag(Vec3::new(x, y, z), on_target);
                }
                InputEvent::DragMove { x, y, z } => {
                    self.ctx.mode.update_drag(Vec3::new(x, y, z));
                }
                InputEvent::DragEnd => self.ctx.mode.end_drag(),
                // Pointer/key/custom events are the sim's to interpret.
                _ => {}
            }
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.sim.update(&mut self.ctx, &self.input);
        }

        self.input.drain();

        // Light follows the current mode and scale even on frames where the
        // accumulator yields zero fixed steps; a session transition must
        // never serialize with the previous profile's light values.
        self.ctx.light.sync(&self.ctx.mode);

        kinematics::resolve_world_positions(&mut self.ctx.scene);

        self.frame_counter = self.frame_counter.wrapping_add(1);
        build_frame(
            self.ctx.scene.iter(),
            &self.ctx.mode,
            &self.ctx.light,
            self.frame_counter,
            self.ctx.events.len() as u32,
            &mut self.frame,
        );
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.frame.header_ptr()
    }

    pub fn bodies_ptr(&self) -> *const f32 {
        self.frame.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.frame.instance_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
