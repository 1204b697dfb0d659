//! Virtual Typewriter WASM Module
//!
//! This is the main WASM module for the virtual typewriter. It owns the
//! typed page as a styled character stream, derives carriage position and
//! page layout from it, and archives finished pages as notes.

pub mod models;
pub mod text;
pub mod layout;
pub mod archive;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use text::buffer::TypewriterBuffer;
pub use layout::{LayoutConfig, PageView};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Virtual Typewriter WASM module initialized");
}
