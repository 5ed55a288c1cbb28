//! WASM API for the pitch-accent engine
//!
//! This module provides the JavaScript-facing exports. Values cross the
//! boundary as plain strings or serde-converted objects; every call is
//! stateless and returns a new value.

use wasm_bindgen::prelude::*;

use serde::Serialize;

use crate::accent::infer_field_pitch_type;
use crate::colour::apply_colour_to_field;
use crate::ops::{self, ColourStatus, NoteData, UnpackStatus};
use crate::settings::{PitchSettings, UnpackSettings};
use crate::unpack;

/// Apply a colour to a field value, preserving any embedded accent section
///
/// # Parameters
/// - `text`: the field value
/// - `colour`: colour token to apply, hex or name, passed through unvalidated
/// - `colour_graph`: also retarget the accent graph's own styling
#[wasm_bindgen(js_name = applyColour)]
pub fn apply_colour(text: &str, colour: &str, colour_graph: bool) -> String {
    apply_colour_to_field(text, colour, colour_graph)
}

/// Classify the pitch graph embedded in a field value.
///
/// Returns the lowercase category label, or `undefined` when the field holds
/// no usable graph.
#[wasm_bindgen(js_name = inferPitchType)]
pub fn infer_pitch_type(field_content: &str) -> Option<String> {
    infer_field_pitch_type(field_content).map(|pitch_type| pitch_type.label().to_string())
}

#[derive(Serialize)]
struct UnpackedReading {
    reading: String,
    meaning: String,
}

/// Split a composite dictionary field into `{ reading, meaning }`.
///
/// An empty `reading` with the content echoed back as `meaning` means no
/// grammar matched.
#[wasm_bindgen(js_name = unpackReading)]
pub fn unpack_reading(content: &str) -> Result<JsValue, JsValue> {
    let (reading, meaning) = unpack::unpack_reading(content);
    serde_wasm_bindgen::to_value(&UnpackedReading { reading, meaning })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(Serialize)]
struct ColourNoteResult {
    note: NoteData,
    status: ColourStatus,
}

/// Colour one note's fields from its pitch graph.
///
/// # Parameters
/// - `note`: `{ fields: { name: value }, tags: [string] }`
/// - `settings`: the pitch section of the configuration record; missing keys
///   fall back to the defaults
///
/// # Returns
/// `{ note, status }` with the updated note and one of
/// `"edited" | "no_fields" | "no_graph"`.
#[wasm_bindgen(js_name = colourNoteFromGraph)]
pub fn colour_note_from_graph(note: JsValue, settings: JsValue) -> Result<JsValue, JsValue> {
    let mut note: NoteData = serde_wasm_bindgen::from_value(note)
        .map_err(|e| JsValue::from_str(&format!("note deserialization error: {}", e)))?;
    let settings: PitchSettings = serde_wasm_bindgen::from_value(settings)
        .map_err(|e| JsValue::from_str(&format!("settings deserialization error: {}", e)))?;

    let status = ops::colour_note_from_graph(&mut note, &settings);
    serde_wasm_bindgen::to_value(&ColourNoteResult { note, status })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(Serialize)]
struct UnpackNoteResult {
    note: NoteData,
    status: UnpackStatus,
}

/// Unpack one note's dictionary field into its reading field.
///
/// Same shapes as [`colour_note_from_graph`], with status one of
/// `"edited" | "no_fields" | "no_reading"`.
#[wasm_bindgen(js_name = unpackNoteReading)]
pub fn unpack_note_reading(note: JsValue, settings: JsValue) -> Result<JsValue, JsValue> {
    let mut note: NoteData = serde_wasm_bindgen::from_value(note)
        .map_err(|e| JsValue::from_str(&format!("note deserialization error: {}", e)))?;
    let settings: UnpackSettings = serde_wasm_bindgen::from_value(settings)
        .map_err(|e| JsValue::from_str(&format!("settings deserialization error: {}", e)))?;

    let status = ops::unpack_note_reading(&mut note, &settings);
    serde_wasm_bindgen::to_value(&UnpackNoteResult { note, status })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
