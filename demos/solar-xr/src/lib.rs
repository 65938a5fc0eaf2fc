use wasm_bindgen::prelude::*;
use orrery_core::*;

mod app;
mod bodies;
mod starfield;
use app::SolarXr;

orrery_web::export_sim!(SolarXr, "solar-xr");

/// Starfield seed: fixed so the backdrop is identical across sessions.
const STARFIELD_SEED: u64 = 9001;

/// One-time backdrop geometry: flat xyz triples for a Float32Array.
#[wasm_bindgen]
pub fn starfield_points(count: u32) -> Vec<f32> {
    starfield::generate_flat(count as usize, STARFIELD_SEED)
}
