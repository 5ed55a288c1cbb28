//! Pitch-Accent Bulk-Ops WASM Module
//!
//! This is the WASM module for the bulk-ops field editor. It provides the
//! engine for pitch-graph classification, field colouring and dictionary
//! unpacking on flashcard field values.

pub mod models;
pub mod accent;
pub mod colour;
pub mod unpack;
pub mod settings;
pub mod ops;
pub mod api;

// Re-export commonly used types
pub use models::{AccentNode, PitchType};
pub use accent::{find_accent_section, infer_field_pitch_type, parse_pitch_graph, GraphError};
pub use colour::apply_colour_to_field;
pub use unpack::unpack_reading;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("bulk-ops WASM module initialized");
}
