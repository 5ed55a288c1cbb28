//! Pitch-type inference
//!
//! Maps the point markers of a parsed pitch graph onto one of the four
//! accent categories.

use std::collections::BTreeMap;

use crate::models::{AccentNode, PitchType};

/// Infer the pitch-accent category from graph nodes.
///
/// Nodes are ordered on x, collapsing duplicate x values onto the later node
/// (overlapping markers are assumed to share a pitch height). Fewer than two
/// distinct positions carry no contour, giving `None`; any longer sequence
/// classifies into exactly one category. The svg y-axis runs top to bottom,
/// so the highest pitch is the minimum y.
pub fn infer_pitch_type(nodes: &[AccentNode]) -> Option<PitchType> {
    let ordered: BTreeMap<i32, i32> = nodes.iter().map(|n| (n.x, n.y)).collect();
    let y_values: Vec<i32> = ordered.into_values().collect();

    if y_values.len() < 2 {
        return None;
    }

    let y_high = y_values.iter().copied().min()?;

    // First node high: atamadaka
    if y_values[0] == y_high {
        return Some(PitchType::Atamadaka);
    }

    // First node low, every other node high: heiban
    if y_values[1..].iter().all(|&y| y == y_high) {
        return Some(PitchType::Heiban);
    }

    // High all the way except the final node: oodaka
    if y_values[1..y_values.len() - 1].iter().all(|&y| y == y_high) {
        return Some(PitchType::Oodaka);
    }

    // Falls somewhere before the end: nakadaka
    Some(PitchType::Nakadaka)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(points: &[(i32, i32)]) -> Vec<AccentNode> {
        points.iter().map(|&(x, y)| AccentNode::new(x, y)).collect()
    }

    #[test]
    fn test_first_node_high_is_atamadaka() {
        let graph = nodes(&[(16, 5), (51, 30), (86, 30)]);
        assert_eq!(infer_pitch_type(&graph), Some(PitchType::Atamadaka));
    }

    #[test]
    fn test_rise_and_mid_fall_is_nakadaka() {
        let graph = nodes(&[(16, 30), (51, 5), (86, 5), (121, 30), (156, 30)]);
        assert_eq!(infer_pitch_type(&graph), Some(PitchType::Nakadaka));
    }

    #[test]
    fn test_rise_to_the_end_is_heiban() {
        let graph = nodes(&[(16, 30), (51, 5)]);
        assert_eq!(infer_pitch_type(&graph), Some(PitchType::Heiban));
    }

    #[test]
    fn test_final_drop_is_oodaka() {
        let graph = nodes(&[(16, 30), (51, 5), (86, 5), (121, 30)]);
        assert_eq!(infer_pitch_type(&graph), Some(PitchType::Oodaka));
    }

    #[test]
    fn test_trailing_high_run_is_still_heiban() {
        // Only a differing final node makes oodaka; a flat high tail is heiban
        // no matter how long it runs.
        let graph = nodes(&[(16, 30), (51, 5), (86, 5), (121, 5)]);
        assert_eq!(infer_pitch_type(&graph), Some(PitchType::Heiban));
    }

    #[test]
    fn test_single_node_has_no_contour() {
        assert_eq!(infer_pitch_type(&nodes(&[(16, 5)])), None);
        assert_eq!(infer_pitch_type(&nodes(&[])), None);
    }

    #[test]
    fn test_document_order_does_not_matter() {
        let graph = nodes(&[(86, 30), (16, 5), (51, 30)]);
        assert_eq!(infer_pitch_type(&graph), Some(PitchType::Atamadaka));
    }

    #[test]
    fn test_duplicate_x_collapses_to_one_node() {
        // The terminal hollow marker overlays the last solid dot at the same
        // coordinates; it must not count as an extra position.
        let graph = nodes(&[(16, 30), (51, 5), (86, 5), (86, 5)]);
        assert_eq!(infer_pitch_type(&graph), Some(PitchType::Heiban));
    }
}
