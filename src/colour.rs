//! Field colouring
//!
//! Applies a colour to the plain segments of a field value by wrapping them
//! in `<font>` tags, rewriting the wrapper in place when one is already
//! there. The embedded accent section is carried through verbatim, or has its
//! own styling recoloured when asked to.

use lazy_static::lazy_static;
use regex::{Captures, NoExpand, Regex};

use crate::accent::find_accent_section;

lazy_static! {
    // A colour wrapper opening a segment
    static ref RE_FONT_COLOUR_START: Regex =
        Regex::new(r#"^<font color="[^"]*">"#).expect("font wrapper pattern");

    // Graph tags whose style declarations carry colour
    static ref RE_GRAPH_STYLE_TAGS: Regex =
        Regex::new(r"<(text|path|circle)\b[^>]*>").expect("styled tag pattern");

    // Circle radius attribute
    static ref RE_CIRCLE_RADIUS: Regex =
        Regex::new(r#"\br="([0-9.]+)""#).expect("radius pattern");

    // Colour-bearing style declarations
    static ref RE_FILL_DECLARATION: Regex =
        Regex::new(r#"fill:[^;"]*"#).expect("fill pattern");
    static ref RE_STROKE_DECLARATION: Regex =
        Regex::new(r#"stroke:[^;"]*"#).expect("stroke pattern");
}

/// Apply a colour to a field value.
///
/// The field splits at the accent section boundary into at most two plain
/// segments and one diagram segment (sentinel markers included). Non-empty
/// plain segments get the colour wrapper; the diagram segment passes through
/// untouched unless `colour_graph` asks for its styling to follow the text
/// colour.
pub fn apply_colour_to_field(text: &str, colour: &str, colour_graph: bool) -> String {
    let section = match find_accent_section(text) {
        Some(section) => section,
        None => return colour_plain_segment(text, colour),
    };

    let mut result = String::new();
    result.push_str(&colour_plain_segment(section.prefix(), colour));
    if colour_graph {
        result.push_str(&recolour_graph(section.raw(), colour));
    } else {
        result.push_str(section.raw());
    }
    result.push_str(&colour_plain_segment(section.suffix(), colour));
    result
}

/// Wrap one plain segment in a colour wrapper, or retarget the wrapper it
/// already starts with.
///
/// When a wrapper is already present only its colour attribute changes;
/// everything after the opening tag, the text taken to be the wrapper's
/// closing tag included, is carried over without re-validation. A segment
/// whose wrapper was opened but never closed therefore stays unclosed, and
/// nested wrappers keep their inner tags. Empty segments are left untouched.
fn colour_plain_segment(segment: &str, colour: &str) -> String {
    if segment.is_empty() {
        return String::new();
    }

    match RE_FONT_COLOUR_START.find(segment) {
        Some(opening) => format!("<font color=\"{}\">{}", colour, &segment[opening.end()..]),
        None => format!("<font color=\"{}\">{}</font>", colour, segment),
    }
}

/// Rewrite the colour component of the diagram's style declarations.
///
/// Mora labels take the colour on `fill`, stroke paths on `stroke`, and the
/// solid point markers on `fill`. The hollow terminal marker is drawn smaller
/// than the solid dots and keeps its fill, so the terminal-position cue stays
/// visible; solid markers are the circles carrying the block's largest
/// radius. Rewritten declarations get `!important` to win over base styling.
fn recolour_graph(section: &str, colour: &str) -> String {
    let solid_radius = section
        .match_indices("<circle")
        .filter_map(|(at, _)| {
            let tag_end = section[at..].find('>')?;
            circle_radius(&section[at..at + tag_end + 1])
        })
        .fold(None::<f64>, |largest, r| match largest {
            Some(max) if max >= r => Some(max),
            _ => Some(r),
        });

    RE_GRAPH_STYLE_TAGS
        .replace_all(section, |caps: &Captures| {
            let tag = &caps[0];
            match &caps[1] {
                "text" => rewrite_declaration(tag, &RE_FILL_DECLARATION, "fill", colour),
                "path" => rewrite_declaration(tag, &RE_STROKE_DECLARATION, "stroke", colour),
                "circle" => match (circle_radius(tag), solid_radius) {
                    (Some(r), Some(solid)) if r >= solid => {
                        rewrite_declaration(tag, &RE_FILL_DECLARATION, "fill", colour)
                    }
                    _ => tag.to_string(),
                },
                _ => tag.to_string(),
            }
        })
        .into_owned()
}

fn rewrite_declaration(tag: &str, declaration: &Regex, property: &str, colour: &str) -> String {
    let replacement = format!("{}:{} !important", property, colour);
    declaration
        .replace_all(tag, NoExpand(&replacement))
        .into_owned()
}

fn circle_radius(tag: &str) -> Option<f64> {
    RE_CIRCLE_RADIUS
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .and_then(|r| r.as_str().parse::<f64>().ok())
}
