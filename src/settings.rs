//! Add-on settings
//!
//! Plain serde data mirroring the host's key/value configuration record.
//! Every key falls back field-by-field to the shipped default when missing,
//! so a partial or empty configuration blob always loads.

use serde::{Deserialize, Serialize};

use crate::models::PitchType;

/// Settings for the reading-unpacking operation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct UnpackSettings {
    /// Field holding the composite dictionary text
    pub field_dictionary: String,

    /// Field receiving the extracted reading
    pub field_reading: String,

    /// Tag attached to notes the operation could not process; empty disables
    pub tag_fail: String,
}

impl Default for UnpackSettings {
    fn default() -> Self {
        Self {
            field_dictionary: "Meaning".to_string(),
            field_reading: "Reading".to_string(),
            tag_fail: "bulkops::failed-unpack".to_string(),
        }
    }
}

/// Settings for the pitch-colouring operation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PitchSettings {
    /// Field holding the pitch graph
    pub field_reading: String,

    /// Fields that receive the category colour
    pub fields_tocolour: Vec<String>,

    pub colour_heiban: String,
    pub colour_atamadaka: String,
    pub colour_nakadaka: String,
    pub colour_oodaka: String,

    /// Tag attached to notes the operation could not process; empty disables
    pub tag_fail: String,

    /// Recolour the graph's own styling along with the text
    pub colour_graph: bool,
}

impl Default for PitchSettings {
    fn default() -> Self {
        Self {
            field_reading: "Reading".to_string(),
            fields_tocolour: vec!["Reading".to_string()],
            colour_heiban: "#a4a4ff".to_string(),
            colour_atamadaka: "red".to_string(),
            colour_nakadaka: "green".to_string(),
            colour_oodaka: "orange".to_string(),
            tag_fail: "bulkops::failed-pitch".to_string(),
            colour_graph: false,
        }
    }
}

impl PitchSettings {
    /// Colour configured for a pitch category
    pub fn colour_for(&self, pitch_type: PitchType) -> &str {
        match pitch_type {
            PitchType::Heiban => &self.colour_heiban,
            PitchType::Atamadaka => &self.colour_atamadaka,
            PitchType::Nakadaka => &self.colour_nakadaka,
            PitchType::Oodaka => &self.colour_oodaka,
        }
    }
}

/// The whole add-on configuration record
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AddonSettings {
    pub unpack: UnpackSettings,
    pub pitch: PitchSettings,
}

impl AddonSettings {
    /// Load settings from the host's JSON configuration blob
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
