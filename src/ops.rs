//! Per-note operations
//!
//! One call processes one note. The host owns iteration, undo checkpoints
//! and progress reporting; it feeds each note through the `NoteFields` view,
//! tallies the returned status and moves on; a failed note never aborts the
//! ones after it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::accent::infer_field_pitch_type;
use crate::colour::apply_colour_to_field;
use crate::settings::{PitchSettings, UnpackSettings};
use crate::unpack::unpack_reading;

/// Read/write access to the named fields and tags of one note
pub trait NoteFields {
    /// Value of a field, `None` when the note type has no such field
    fn field(&self, name: &str) -> Option<&str>;

    /// Overwrite a field value
    fn set_field(&mut self, name: &str, value: String);

    /// Attach a tag to the note
    fn add_tag(&mut self, tag: &str);
}

/// Serde carrier for a note crossing the API boundary
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteData {
    pub fields: HashMap<String, String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NoteFields for NoteData {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|value| value.as_str())
    }

    fn set_field(&mut self, name: &str, value: String) {
        self.fields.insert(name.to_string(), value);
    }

    fn add_tag(&mut self, tag: &str) {
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }
}

/// Outcome of colouring one note from its pitch graph
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColourStatus {
    /// Colour applied to every configured non-empty field
    Edited,

    /// The reading field or an output field is missing from the note
    NoFields,

    /// The reading field holds no usable pitch graph
    NoGraph,
}

/// Outcome of unpacking one note's dictionary field
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnpackStatus {
    /// Reading and meaning written back to their fields
    Edited,

    /// The dictionary or reading field is missing from the note
    NoFields,

    /// No reading grammar matched the expression line
    NoReading,
}

/// Colour a note's output fields from the pitch graph in its reading field.
///
/// Anything short of `Edited` attaches the configured fail tag, unless the
/// tag is configured empty.
pub fn colour_note_from_graph(note: &mut impl NoteFields, settings: &PitchSettings) -> ColourStatus {
    let status = try_colour_note(note, settings);
    if status != ColourStatus::Edited {
        log::debug!("pitch colouring skipped a note: {:?}", status);
        if !settings.tag_fail.is_empty() {
            note.add_tag(&settings.tag_fail);
        }
    }
    status
}

fn try_colour_note(note: &mut impl NoteFields, settings: &PitchSettings) -> ColourStatus {
    let reading = match note.field(&settings.field_reading) {
        Some(value) => value,
        None => return ColourStatus::NoFields,
    };
    if settings
        .fields_tocolour
        .iter()
        .any(|name| note.field(name).is_none())
    {
        return ColourStatus::NoFields;
    }

    let pitch_type = match infer_field_pitch_type(reading) {
        Some(pitch_type) => pitch_type,
        None => return ColourStatus::NoGraph,
    };
    let colour = settings.colour_for(pitch_type).to_string();

    for name in &settings.fields_tocolour {
        // Skip empty fields
        let text = match note.field(name) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => continue,
        };
        note.set_field(name, apply_colour_to_field(&text, &colour, settings.colour_graph));
    }

    ColourStatus::Edited
}

/// Split a note's dictionary field into reading and meaning.
///
/// Same tagging rule as [`colour_note_from_graph`].
pub fn unpack_note_reading(note: &mut impl NoteFields, settings: &UnpackSettings) -> UnpackStatus {
    let status = try_unpack_note(note, settings);
    if status != UnpackStatus::Edited {
        log::debug!("reading unpack skipped a note: {:?}", status);
        if !settings.tag_fail.is_empty() {
            note.add_tag(&settings.tag_fail);
        }
    }
    status
}

fn try_unpack_note(note: &mut impl NoteFields, settings: &UnpackSettings) -> UnpackStatus {
    let content = match note.field(&settings.field_dictionary) {
        Some(value) => value.to_string(),
        None => return UnpackStatus::NoFields,
    };
    if note.field(&settings.field_reading).is_none() {
        return UnpackStatus::NoFields;
    }

    let (reading, meaning) = unpack_reading(&content);
    if reading.is_empty() {
        return UnpackStatus::NoReading;
    }

    note.set_field(&settings.field_reading, reading);
    note.set_field(&settings.field_dictionary, meaning);
    UnpackStatus::Edited
}

/// Status tallies for a caller-driven batch
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub total: u32,
    pub edited: u32,
    pub no_graph: u32,
    pub no_fields: u32,
    pub no_reading: u32,
}

impl OpCounts {
    pub fn record_colour(&mut self, status: ColourStatus) {
        self.total += 1;
        match status {
            ColourStatus::Edited => self.edited += 1,
            ColourStatus::NoFields => self.no_fields += 1,
            ColourStatus::NoGraph => self.no_graph += 1,
        }
    }

    pub fn record_unpack(&mut self, status: UnpackStatus) {
        self.total += 1;
        match status {
            UnpackStatus::Edited => self.edited += 1,
            UnpackStatus::NoFields => self.no_fields += 1,
            UnpackStatus::NoReading => self.no_reading += 1,
        }
    }
}
