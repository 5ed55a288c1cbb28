//! Pitch-accent model types
//!
//! This module defines the geometric and linguistic types shared by the
//! accent-diagram subsystem.

use serde::{Deserialize, Serialize};

/// One point marker of a pitch diagram.
///
/// `x` is the mora position, `y` the pitch height. The SVG y-axis runs top to
/// bottom, so a *smaller* `y` is a *higher* pitch.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentNode {
    pub x: i32,
    pub y: i32,
}

impl AccentNode {
    /// Create a new node
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The four Japanese pitch-accent categories a diagram can express
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PitchType {
    /// Flat: pitch rises after the first mora and stays high to the end
    Heiban,

    /// Initial-high: pitch starts high and drops immediately
    Atamadaka,

    /// Pitch rises, then falls again before the final mora
    Nakadaka,

    /// Pitch stays high until the final mora, then drops
    Oodaka,
}

impl PitchType {
    /// Lowercase label, matching the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            PitchType::Heiban => "heiban",
            PitchType::Atamadaka => "atamadaka",
            PitchType::Nakadaka => "nakadaka",
            PitchType::Oodaka => "oodaka",
        }
    }
}
