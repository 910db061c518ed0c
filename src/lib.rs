mod background;
pub mod color;
pub mod config;
pub mod cursor;
mod dom;
pub mod field;
mod overlay;
pub mod particle;
pub mod simulator;
pub mod surface;
mod utils;

use wasm_bindgen::prelude::*;

pub use background::ParticleBackground;
pub use config::FieldConfig;
pub use overlay::CursorOverlay;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
