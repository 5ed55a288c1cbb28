//! Accent-diagram subsystem
//!
//! Everything needed to get from a raw field value to a pitch category:
//! locating the sentinel-delimited diagram block, parsing its point markers
//! and classifying the resulting contour.

pub mod section;
pub mod graph;
pub mod classify;

// Re-export commonly used types
pub use section::{find_accent_section, AccentSection, SentinelKind};
pub use graph::{parse_pitch_graph, GraphError};
pub use classify::infer_pitch_type;

use crate::models::PitchType;

/// Locate, parse and classify the pitch graph of a whole field value.
///
/// Collapses the error taxonomy into `None`: a missing section, malformed
/// graph markup and a graph too small to carry a contour all mean "no usable
/// graph here". Malformed markup is logged, since it usually points at a
/// broken note rather than a plain one.
pub fn infer_field_pitch_type(field: &str) -> Option<PitchType> {
    let section = find_accent_section(field)?;
    match parse_pitch_graph(section.body()) {
        Ok(nodes) => infer_pitch_type(&nodes),
        Err(err) => {
            log::warn!("unreadable pitch graph: {}", err);
            None
        }
    }
}
