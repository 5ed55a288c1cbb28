//! Pitch-graph parsing
//!
//! The accent section body mixes presentation markup (mora labels, stroke
//! paths, `<br>`/`<hr>` separators) with the structural tags that carry the
//! geometry. Parsing reduces the body to its structural tags first, then
//! reads the reduced fragment as XML with roxmltree.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::models::AccentNode;

lazy_static! {
    // Structural tags: the svg container and the circle point markers, open or close
    static ref RE_GRAPH_TAGS: Regex =
        Regex::new(r"</?(?:svg|circle)\b[^>]*>").expect("graph tag pattern");
}

/// Errors that can occur while parsing a pitch graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The reduced fragment was not well-formed XML
    #[error("malformed graph markup: {0}")]
    MalformedMarkup(String),

    /// A point marker lacked an integer coordinate attribute
    #[error("point marker has no integer '{attribute}' attribute")]
    InvalidNode { attribute: &'static str },
}

/// Parse the point markers of an accent-section body.
///
/// Label and stroke tags are discarded; the `<svg>` container and its
/// `<circle>` markers are concatenated in document order and parsed as XML.
/// Nodes come back in document order, *not* sorted by position.
pub fn parse_pitch_graph(body: &str) -> Result<Vec<AccentNode>, GraphError> {
    let mut reduced = String::new();
    for tag in RE_GRAPH_TAGS.find_iter(body) {
        reduced.push_str(tag.as_str());
    }

    let doc = roxmltree::Document::parse(&reduced)
        .map_err(|e| GraphError::MalformedMarkup(e.to_string()))?;

    let mut nodes = Vec::new();
    for marker in doc.root_element().children().filter(|n| n.is_element()) {
        let x = int_attribute(&marker, "cx")?;
        let y = int_attribute(&marker, "cy")?;
        nodes.push(AccentNode::new(x, y));
    }

    Ok(nodes)
}

fn int_attribute(node: &roxmltree::Node<'_, '_>, name: &'static str) -> Result<i32, GraphError> {
    node.attribute(name)
        .and_then(|value| value.parse::<i32>().ok())
        .ok_or(GraphError::InvalidNode { attribute: name })
}
