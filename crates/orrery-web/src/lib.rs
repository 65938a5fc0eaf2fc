pub mod runner;

pub use runner::SimRunner;

/// Generate all `#[wasm_bindgen]` exports for a sim.
///
/// Eliminates the per-sim boilerplate by generating:
/// - `thread_local!` storage for the SimRunner
/// - a `with_runner()` helper function
/// - all wasm-bindgen exports (init, tick, input/session entry points,
///   buffer pointer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_core::*;
///
/// mod app;
/// use app::SolarXr;
///
/// orrery_web::export_sim!(SolarXr, "solar-xr");
/// ```
///
/// # Arguments
///
/// - `$sim_type`: The sim struct type that implements `orrery_core::Sim`
/// - `$sim_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_sim {
    ($sim_type:ty, $sim_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SimRunner<$sim_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SimRunner<$sim_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Sim not initialized. Call sim_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn sim_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let sim = <$sim_type>::new();
            let runner = $crate::SimRunner::new(sim);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $sim_name);
        }

        #[wasm_bindgen]
        pub fn sim_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn sim_load_config(json: &str) {
            with_runner(|r| r.load_config(json));
        }

        // ---- Input entry points ----

        #[wasm_bindgen]
        pub fn sim_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn sim_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn sim_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        /// Raw gamepad axes for the frame; the runner resolves the
        /// configured candidate indices against the deadzone.
        #[wasm_bindgen]
        pub fn sim_axes(axes: &[f32]) {
            with_runner(|r| r.sample_axes(axes));
        }

        // ---- Drag gesture (controller ray-pick + squeeze-hold) ----

        #[wasm_bindgen]
        pub fn sim_drag_start(x: f32, y: f32, z: f32, on_target: bool) {
            with_runner(|r| r.push_input(InputEvent::DragStart { x, y, z, on_target }));
        }

        #[wasm_bindgen]
        pub fn sim_drag_move(x: f32, y: f32, z: f32) {
            with_runner(|r| r.push_input(InputEvent::DragMove { x, y, z }));
        }

        #[wasm_bindgen]
        pub fn sim_drag_end() {
            with_runner(|r| r.push_input(InputEvent::DragEnd));
        }

        // ---- XR session lifecycle ----

        /// Session started. Empty strings mean the host did not report that
        /// signal; feature_bits packs the AR-only capability flags.
        #[wasm_bindgen]
        pub fn sim_session_start(session_mode: &str, blend_mode: &str, feature_bits: u32) {
            let desc = SessionDescriptor::from_wire(session_mode, blend_mode, feature_bits);
            with_runner(|r| r.push_session(SessionEvent::Started(desc)));
        }

        #[wasm_bindgen]
        pub fn sim_session_end() {
            with_runner(|r| r.push_session(SessionEvent::Ended));
        }

        #[wasm_bindgen]
        pub fn sim_toggle_kind() {
            with_runner(|r| r.push_session(SessionEvent::ToggleKind));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_bodies_ptr() -> *const f32 {
            with_runner(|r| r.bodies_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_event_count() -> u32 {
            with_runner(|r| r.event_count())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_bodies() -> u32 {
            with_runner(|r| r.max_bodies())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
